use mongodb::Client;
use mongodb::bson::doc;
use std::time::Instant;
use tracing::debug;

use crate::common::HealthStatus;

/// Run a `ping` against the `admin` database
///
/// The driver connects lazily, so this is what turns an unreachable host or bad
/// credentials into an error at connect time.
///
/// # Example
/// ```ignore
/// use database::mongodb::check_health;
///
/// check_health(&client).await?;
/// ```
pub async fn check_health(client: &Client) -> mongodb::error::Result<()> {
    debug!("Running MongoDB ping");
    client.database("admin").run_command(doc! { "ping": 1 }).await?;
    debug!("MongoDB ping succeeded");
    Ok(())
}

/// Check MongoDB health with detailed status
///
/// Returns timing information and any error messages.
///
/// # Example
/// ```ignore
/// use database::mongodb::check_health_detailed;
///
/// let status = check_health_detailed(&client).await;
/// if !status.healthy {
///     println!("MongoDB unhealthy: {:?}", status.message);
/// }
/// ```
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();

    match check_health(client).await {
        Ok(_) => HealthStatus::healthy(start.elapsed().as_millis() as u64),
        Err(e) => HealthStatus::unhealthy(e.to_string(), start.elapsed().as_millis() as u64),
    }
}
