use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;
use thiserror::Error as ThisError;

/// Relay settings read from the YAML document named by `CONFIG_PATH`.
///
/// Keys missing from the document load as empty values. Nothing is
/// validated here: an empty `whisperURI` only shows up once a send fails.
#[derive(Clone, Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub admins: Vec<String>,

    #[serde(rename = "token")]
    pub whisper_token: String,

    #[serde(rename = "whisperURI")]
    pub whisper_uri: String,

    #[serde(rename = "deviceID")]
    pub device_id: String,
}

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Process environment: where the config lives and which port to bind.
#[derive(Clone, Deserialize, Debug)]
pub struct Settings {
    pub config_path: PathBuf,
    pub api_port: u16,
}

impl Settings {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let settings = envy::from_env::<Self>()
            .map_err(|e| anyhow!("Invalid or missing environmental variable: {}", e))?;
        Ok(settings)
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.api_port)
    }
}
