use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DELAY_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub delay: Duration
}

impl Config {

    pub fn from_env() -> Result<Self, ConfigError> {

        Self::from_lookup(|name| std::env::var(name).ok())

    }

    // anything unset falls back to the defaults, anything set must parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>
    {

        let host: IpAddr = parse_var(&lookup, "HOST")?
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

        let port: u16 = parse_var(&lookup, "PORT")?
            .unwrap_or(DEFAULT_PORT);

        let delay_ms: u64 = parse_var(&lookup, "JOB_DELAY_MS")?
            .unwrap_or(DEFAULT_DELAY_MS);

        Ok(Config {
            addr: SocketAddr::new(host, port),
            delay: Duration::from_millis(delay_ms)
        })

    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value })
    }
}
