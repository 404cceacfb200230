//! Process configuration (environment-provided).

use std::net::SocketAddr;

use anyhow::Context;

use itemstore_infra::StoreConfig;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDR {raw:?} is not a socket address"))?;

        let store = StoreConfig::from_lookup(&lookup).context("invalid store configuration")?;

        Ok(Self { bind_addr, store })
    }
}
