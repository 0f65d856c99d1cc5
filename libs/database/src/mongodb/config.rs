use mongodb::options::ClientOptions;
use std::time::Duration;

use crate::common::ConnectionConfig;

/// Build driver options from a resolved `ConnectionConfig`
///
/// The connect timeout also bounds server selection, so an unreachable host fails
/// within `connect_timeout_secs` instead of the driver's 30 second default.
///
/// # Example
/// ```ignore
/// use database::mongodb::client_options;
///
/// let options = client_options(&config).await?;
/// let client = mongodb::Client::with_options(options)?;
/// ```
pub async fn client_options(config: &ConnectionConfig) -> mongodb::error::Result<ClientOptions> {
    let url = config.connection_url();
    let mut options = ClientOptions::parse(url.as_str()).await?;

    let timeout = Duration::from_secs(config.connect_timeout_secs);
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    Ok(options)
}
