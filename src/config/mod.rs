use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SERVER_PORT 无效: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_name: String,
    pub user_collection: String,
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: "mongodb://localhost:27017".into(),
            database_name: "userdb".into(),
            user_collection: "users".into(),
            server_host: "0.0.0.0".into(),
            server_port: 9090,
            api_base_uri: "/v1".into(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值来源构建配置，缺省项使用默认值
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.server_port,
        };

        Ok(Config {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            database_name: lookup("DATABASE_NAME").unwrap_or(defaults.database_name),
            user_collection: lookup("USER_COLLECTION").unwrap_or(defaults.user_collection),
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            api_base_uri: lookup("API_BASE_URI").unwrap_or(defaults.api_base_uri),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to 0.0.0.0");
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        });
        SocketAddr::new(ip, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database_url, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "userdb");
        assert_eq!(config.user_collection, "users");
        assert_eq!(config.server_port, 9090);
        assert_eq!(config.api_base_uri, "/v1");
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "mongodb://db:27017"),
            ("SERVER_PORT", " 8080 "),
            ("API_BASE_URI", "/api"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "mongodb://db:27017");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.api_base_uri, "/api");
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("SERVER_PORT", "ninety")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "ninety"));
    }

    #[test]
    fn invalid_host_falls_back_to_unspecified() {
        let config = Config {
            server_host: "not-an-ip".into(),
            ..Config::default()
        };
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9090");
    }
}
