use std::{env, fmt::Display, net::IpAddr, path::PathBuf, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_DATA_PATH: &str = "/data/cats.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub address: IpAddr,
    pub port: u16,
    pub sort_by_votes: bool,
    /// Seconds in-flight requests get to finish after a termination signal.
    pub shutdown_grace: u32,
    /// Extra seconds granted to connections before the server gives up.
    pub shutdown_mercy: u32,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            data_path: try_load("CATS_DATA_PATH", DEFAULT_DATA_PATH)?,
            address: try_load("CATS_ADDRESS", "0.0.0.0")?,
            port: try_load("CATS_PORT", "8080")?,
            sort_by_votes: try_load("CATS_SORT_BY_VOTES", "false")?,
            shutdown_grace: try_load("CATS_SHUTDOWN_GRACE", "5")?,
            shutdown_mercy: try_load("CATS_SHUTDOWN_MERCY", "0")?,
        })
    }

    /// Rocket's grace and mercy windows plus a second for teardown.
    pub fn shutdown_deadline(&self) -> Duration {
        Duration::from_secs(u64::from(self.shutdown_grace) + u64::from(self.shutdown_mercy) + 1)
    }
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }
    })
}
