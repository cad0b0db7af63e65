/// Backend used when no `LIFTCARE_API_BASE` is set at build time.
pub const DEFAULT_API_BASE: &str = "https://liftcare-backend-production.up.railway.app";

pub const NOTIFICATION_POLL_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub notification_poll_ms: u32,
}

impl ClientConfig {
    /// Build from an optional override; blank overrides fall back to the default backend.
    pub fn from_override(api_base: Option<&str>) -> Self {
        let base = api_base
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE);
        Self {
            api_base: base.trim_end_matches('/').to_string(),
            notification_poll_ms: NOTIFICATION_POLL_MS,
        }
    }

    /// Absolute URL for an API path such as `/api/customers`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_override(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.notification_poll_ms, 10_000);
    }

    #[test]
    fn test_override_and_join() {
        let config = ClientConfig::from_override(Some("http://localhost:3000/"));
        assert_eq!(config.url("/api/customers"), "http://localhost:3000/api/customers");
        assert_eq!(config.url("auth/login"), "http://localhost:3000/auth/login");

        let blank = ClientConfig::from_override(Some("   "));
        assert_eq!(blank.api_base, DEFAULT_API_BASE);
    }
}
