use sqlx::mysql::MySqlConnectOptions;

use crate::common::ConnectionConfig;

/// Driver options built field by field, so credentials need no URL escaping
///
/// An empty username or database leaves the driver default in place.
pub fn connect_options(config: &ConnectionConfig) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port);

    if !config.username.is_empty() {
        options = options.username(&config.username);
    }
    if !config.password.is_empty() {
        options = options.password(config.password.expose());
    }
    if !config.database.is_empty() {
        options = options.database(&config.database);
    }

    options
}
