use core_config::{env_or_default, env_parse_or, env_required, ConfigError, FromEnv, Secret};

/// SMTP submission settings
///
/// The login username doubles as the sender address.
#[derive(Clone, Debug)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Secret,
}

impl SmtpConfig {
    pub const DEFAULT_HOST: &'static str = "smtp.gmail.com";
    pub const DEFAULT_PORT: u16 = 587;

    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<Secret>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Address placed in the `From` header
    pub fn sender(&self) -> &str {
        &self.username
    }
}

impl FromEnv for SmtpConfig {
    /// Load from `EMAIL_SMTP`, `EMAIL_PORT`, `EMAIL_USER` and `EMAIL_PASS`
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or_default("EMAIL_SMTP", Self::DEFAULT_HOST),
            port: env_parse_or("EMAIL_PORT", Self::DEFAULT_PORT)?,
            username: env_required("EMAIL_USER")?,
            password: Secret::new(env_required("EMAIL_PASS")?),
        })
    }
}
