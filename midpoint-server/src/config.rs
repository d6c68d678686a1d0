//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::midpoint::MidpointConfig;

/// Path of the graph file when `MIDPOINT_GRAPH_PATH` is unset.
pub const DEFAULT_GRAPH_PATH: &str = "metro_graph.json";

/// Listen address when `MIDPOINT_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Error returned when an environment variable holds an invalid value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {name}: {value:?} ({reason})")]
pub struct ConfigError {
    name: &'static str,
    value: String,
    reason: String,
}

/// Start-up configuration for the server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// JSON graph file loaded at start-up.
    pub graph_path: PathBuf,

    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Per-request engine settings.
    pub midpoint: MidpointConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// - `MIDPOINT_GRAPH_PATH`: graph file (default `metro_graph.json`)
    /// - `MIDPOINT_ADDR`: listen address (default `127.0.0.1:3000`)
    /// - `MIDPOINT_BATCH_SIZE`: parallel solver runs per batch
    /// - `MIDPOINT_DEADLINE_MS`: default request deadline, `0` disables it
    /// - `MIDPOINT_MAX_STARTS`: maximum start stations per request
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = MidpointConfig::default();

        let graph_path = lookup("MIDPOINT_GRAPH_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GRAPH_PATH));

        let bind_addr = match lookup("MIDPOINT_ADDR") {
            Some(raw) => parse_value("MIDPOINT_ADDR", &raw)?,
            None => parse_value("MIDPOINT_ADDR", DEFAULT_ADDR)?,
        };

        let batch_size: usize = parse_or(&lookup, "MIDPOINT_BATCH_SIZE", defaults.batch_size)?;
        if batch_size == 0 {
            return Err(ConfigError {
                name: "MIDPOINT_BATCH_SIZE",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let default_deadline_ms = match lookup("MIDPOINT_DEADLINE_MS") {
            Some(raw) => match parse_value::<u64>("MIDPOINT_DEADLINE_MS", &raw)? {
                0 => None,
                ms => Some(ms),
            },
            None => defaults.default_deadline_ms,
        };

        let max_starts: usize = parse_or(&lookup, "MIDPOINT_MAX_STARTS", defaults.max_starts)?;
        if max_starts < 2 {
            return Err(ConfigError {
                name: "MIDPOINT_MAX_STARTS",
                value: max_starts.to_string(),
                reason: "must be at least 2".to_string(),
            });
        }

        Ok(Self {
            graph_path,
            bind_addr,
            midpoint: MidpointConfig::new(batch_size, default_deadline_ms, max_starts),
        })
    }
}

fn parse_value<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError {
        name,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_or<T, F>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => parse_value(name, &raw),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.graph_path, PathBuf::from("metro_graph.json"));
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.midpoint, MidpointConfig::default());
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("MIDPOINT_GRAPH_PATH", "/data/graph.json"),
            ("MIDPOINT_ADDR", "0.0.0.0:8080"),
            ("MIDPOINT_BATCH_SIZE", "8"),
            ("MIDPOINT_DEADLINE_MS", "750"),
            ("MIDPOINT_MAX_STARTS", "5"),
        ])
        .unwrap();

        assert_eq!(config.graph_path, PathBuf::from("/data/graph.json"));
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.midpoint, MidpointConfig::new(8, Some(750), 5));
    }

    #[test]
    fn zero_deadline_disables_it() {
        let config = config_from(&[("MIDPOINT_DEADLINE_MS", "0")]).unwrap();
        assert_eq!(config.midpoint.default_deadline_ms, None);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = config_from(&[("MIDPOINT_ADDR", "not-an-address")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid value for MIDPOINT_ADDR"));

        assert!(config_from(&[("MIDPOINT_BATCH_SIZE", "many")]).is_err());
        assert!(config_from(&[("MIDPOINT_BATCH_SIZE", "0")]).is_err());
        assert!(config_from(&[("MIDPOINT_DEADLINE_MS", "-5")]).is_err());
        assert!(config_from(&[("MIDPOINT_MAX_STARTS", "1")]).is_err());
    }
}
