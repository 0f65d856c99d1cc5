use sea_orm::ConnectOptions;
use std::time::Duration;

use crate::common::ConnectionConfig;

/// SeaORM options for a single warehouse session
///
/// The pool is capped at one connection: the connector models one session, and
/// Redshift clusters have a low connection limit.
pub fn connect_options(config: &ConnectionConfig) -> ConnectOptions {
    let timeout = Duration::from_secs(config.connect_timeout_secs);

    let mut options = ConnectOptions::new(config.connection_url());
    options
        .max_connections(1)
        .min_connections(1)
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .sqlx_logging(false);

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::BackendKind;

    #[test]
    fn test_connect_options_single_session() {
        let config = ConnectionConfig::new(
            BackendKind::Warehouse,
            "cluster.example.com",
            5439,
            "dev",
            "admin",
            "pw",
        )
        .with_connect_timeout(4);

        let options = connect_options(&config);

        assert_eq!(
            options.get_url(),
            "postgres://admin:pw@cluster.example.com:5439/dev"
        );
        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_connect_timeout(), Some(Duration::from_secs(4)));
        assert_eq!(options.get_acquire_timeout(), Some(Duration::from_secs(4)));
    }
}
