/// Liveness probe result for status reporting
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,

    /// Probe error when unhealthy
    pub message: Option<String>,

    /// Probe round trip in milliseconds
    pub response_time_ms: u64,
}

impl HealthStatus {
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            healthy: true,
            message: None,
            response_time_ms,
        }
    }

    pub fn unhealthy(message: String, response_time_ms: u64) -> Self {
        Self {
            healthy: false,
            message: Some(message),
            response_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_healthy() {
        let status = HealthStatus::healthy(42);
        assert!(status.healthy);
        assert_eq!(status.response_time_ms, 42);
        assert!(status.message.is_none());
    }

    #[test]
    fn test_health_status_unhealthy() {
        let status = HealthStatus::unhealthy("probe timed out".to_string(), 1000);
        assert!(!status.healthy);
        assert_eq!(status.message.as_deref(), Some("probe timed out"));
    }
}
