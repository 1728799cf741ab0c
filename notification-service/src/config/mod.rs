use serde::Deserialize;
use service_core::error::AppError;

/// Service settings, bound once at startup from `NOTIFICATION_`-prefixed
/// environment variables and immutable thereafter.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Settings {
    /// Load settings from the environment.
    ///
    /// `NOTIFICATION_SERVER_PORT` maps to `server.port`, so the port is
    /// required and the host falls back to `0.0.0.0`. Variable names are
    /// matched case-insensitively.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("NOTIFICATION")
                    .prefix_separator("_")
                    .separator("_"),
            )
            .build()?;

        Ok(settings.try_deserialize::<Settings>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global, so tests that touch them
    // serialize behind this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        std::env::remove_var("NOTIFICATION_SERVER_HOST");
        std::env::remove_var("NOTIFICATION_SERVER_PORT");
    }

    #[test]
    fn port_alone_yields_default_host() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("NOTIFICATION_SERVER_PORT", "9090");

        let settings = Settings::load().expect("settings should load");
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9090);

        clear_env();
    }

    #[test]
    fn host_override_is_honored() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("NOTIFICATION_SERVER_HOST", "127.0.0.1");
        std::env::set_var("NOTIFICATION_SERVER_PORT", "9090");

        let settings = Settings::load().expect("settings should load");
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.address(), "127.0.0.1:9090");

        clear_env();
    }

    #[test]
    fn missing_port_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let err = Settings::load().expect_err("load should fail without a port");
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("NOTIFICATION_SERVER_PORT", "not-a-port");

        let err = Settings::load().expect_err("load should fail on a bad port");
        assert!(matches!(err, AppError::ConfigError(_)));

        clear_env();
    }
}
