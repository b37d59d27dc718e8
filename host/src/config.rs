//! Host settings, read from the environment.
//!
//! | variable               | default     |
//! |------------------------|-------------|
//! | `BUILDER_HOST`         | `127.0.0.1` |
//! | `BUILDER_PORT`         | `8080`      |
//! | `BUILDER_OPEN_BROWSER` | `true`      |
//!
//! Unparseable values fall back to the default with a warning.

use log::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BUILDER_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("BUILDER_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("BUILDER_PORT={} is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let open_browser = match lookup("BUILDER_OPEN_BROWSER") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!("BUILDER_OPEN_BROWSER={} is not a boolean, using true", raw);
                true
            }),
            None => true,
        };

        Self {
            host,
            port,
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> HostConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = HostConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn overrides_are_applied() {
        let config = config(&[
            ("BUILDER_HOST", "0.0.0.0"),
            ("BUILDER_PORT", "3000"),
            ("BUILDER_OPEN_BROWSER", "off"),
        ]);
        assert_eq!(config.url(), "http://0.0.0.0:3000");
        assert!(!config.open_browser);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config(&[
            ("BUILDER_HOST", "  "),
            ("BUILDER_PORT", "70000"),
            ("BUILDER_OPEN_BROWSER", "maybe"),
        ]);
        assert_eq!(config, HostConfig::default());
    }
}
