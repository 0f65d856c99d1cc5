use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use std::time::Instant;
use tracing::debug;

use crate::common::HealthStatus;

/// Execute `SELECT 1` to verify the warehouse session is usable
///
/// # Example
/// ```ignore
/// use database::redshift::check_health;
///
/// check_health(connector.connection().unwrap()).await?;
/// ```
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DbErr> {
    check_health_with_query(db, "SELECT 1").await
}

/// Probe with a caller-supplied query
///
/// # Example
/// ```ignore
/// use database::redshift::check_health_with_query;
///
/// // Verify the loader can see its staging table
/// check_health_with_query(&db, "SELECT 1 FROM staging.events LIMIT 1").await?;
/// ```
pub async fn check_health_with_query(db: &DatabaseConnection, query: &str) -> Result<(), DbErr> {
    debug!("Running Redshift health check: {}", query);

    let stmt = Statement::from_string(DatabaseBackend::Postgres, query.to_owned());
    db.query_one_raw(stmt).await?;

    debug!("Redshift health check passed");
    Ok(())
}

/// Check warehouse health with detailed status
///
/// # Example
/// ```ignore
/// use database::redshift::check_health_detailed;
///
/// let status = check_health_detailed(&db).await;
/// println!("Redshift healthy: {}, response time: {}ms",
///     status.healthy,
///     status.response_time_ms
/// );
/// ```
pub async fn check_health_detailed(db: &DatabaseConnection) -> HealthStatus {
    let start = Instant::now();

    match check_health(db).await {
        Ok(_) => HealthStatus::healthy(start.elapsed().as_millis() as u64),
        Err(e) => HealthStatus::unhealthy(e.to_string(), start.elapsed().as_millis() as u64),
    }
}
