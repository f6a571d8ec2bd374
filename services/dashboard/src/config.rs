use std::path::PathBuf;

use anyhow::{bail, Result};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let data_dir = std::env::var("ECG_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let bind_addr =
            std::env::var("DASH_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        // Tiny sanity checks (fail fast, fail loud)
        if data_dir.trim().is_empty() {
            bail!("ECG_DATA_DIR must not be empty");
        }
        if !bind_addr.contains(':') {
            bail!("DASH_BIND_ADDR must be host:port");
        }

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            bind_addr,
        })
    }
}
