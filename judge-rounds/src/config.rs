use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

const DEFAULT_PASSWORD: &str = "admin123";

/// Settings for the publication service
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub port: u16,
    pub admin_password: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            bind: try_load("JUDGE_ROUNDS_BIND", "0.0.0.0".to_string()),
            port: try_load("JUDGE_ROUNDS_PORT", 8080),
            admin_password: admin_password(),
        }
    }

    /// A command-line port wins over the environment
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    let Some(raw) = var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

fn admin_password() -> String {
    var("ADMIN_PASSWORD").unwrap_or_else(|| {
        warn!("ADMIN_PASSWORD not set, using the built-in default; change it before going live");
        DEFAULT_PASSWORD.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_override() {
        let config = Config {
            bind: "127.0.0.1".to_string(),
            port: 8080,
            admin_password: "pw".to_string(),
        };
        assert_eq!(config.clone().with_port(None).port, 8080);
        assert_eq!(config.with_port(Some(9000)).port, 9000);
    }

    #[test]
    fn test_unset_key_falls_back() {
        let port: u16 = try_load("JUDGE_ROUNDS_TEST_UNSET_PORT", 8123);
        assert_eq!(port, 8123);
    }
}
