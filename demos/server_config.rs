//! Collecting startup configuration into a struct
//!
//! Run with `PORT=70000` to see startup fail with a descriptive error.

use std::net::{Ipv4Addr, SocketAddr};

use serde::Serialize;
use typenv::PortNumber;

#[derive(Debug, Serialize)]
struct ServerConfig {
    port: PortNumber,
    metrics_port: PortNumber,
    request_timeout_ms: i64,
    workers: i32,
    enable_tls: bool,
}

impl ServerConfig {
    fn from_env() -> Result<Self, typenv::EnvError> {
        Ok(Self {
            port: typenv::get_port("PORT", 8080)?,
            metrics_port: typenv::get_port("METRICS_PORT", 9090)?,
            request_timeout_ms: typenv::get_i64("REQUEST_TIMEOUT_MS", 30_000)?,
            workers: typenv::get_i32("WORKERS", 4)?,
            enable_tls: typenv::get_bool("ENABLE_TLS")?,
        })
    }

    fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port.get()))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let config = ServerConfig::from_env()?;

    println!("Binding to {}", config.bind_addr());
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
