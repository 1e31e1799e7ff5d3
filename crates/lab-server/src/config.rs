use std::{
    env,
    net::{AddrParseError, SocketAddr},
};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MODE: RunMode = RunMode::Serve;
const DEFAULT_EXPORT_OUTPUT_PATH: &str = "artifacts/simulation_log.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Serve the interactive page and API.
    Serve,
    /// Run the default scenario once and write its log to disk.
    Batch,
}

impl RunMode {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "serve" => Some(Self::Serve),
            "batch" => Some(Self::Batch),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Serve => "serve",
            Self::Batch => "batch",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub mode: RunMode,
    pub export_output_path: String,
    pub seed: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("LAB_SERVER_ADDR is not a valid socket address: {0}")]
    InvalidListenAddr(#[source] AddrParseError),
    #[error("LAB_SERVER_MODE must be one of: serve, batch")]
    InvalidMode,
    #[error("LAB_SERVER_EXPORT_OUTPUT must not be empty or whitespace")]
    InvalidExportOutputPath,
    #[error("LAB_SIM_SEED must be an unsigned 64-bit integer")]
    InvalidSeed,
    #[error("LAB_SERVER_ADDR contains non-unicode data")]
    NonUnicodeListenAddr,
    #[error("LAB_SERVER_MODE contains non-unicode data")]
    NonUnicodeMode,
    #[error("LAB_SERVER_EXPORT_OUTPUT contains non-unicode data")]
    NonUnicodeExportOutput,
    #[error("LAB_SIM_SEED contains non-unicode data")]
    NonUnicodeSeed,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match env::var("LAB_SERVER_ADDR") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            Err(env::VarError::NotPresent) => DEFAULT_LISTEN_ADDR
                .parse()
                .map_err(ConfigError::InvalidListenAddr)?,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeListenAddr);
            }
        };

        let mode = match env::var("LAB_SERVER_MODE") {
            Ok(value) => RunMode::parse(value.as_str()).ok_or(ConfigError::InvalidMode)?,
            Err(env::VarError::NotPresent) => DEFAULT_MODE,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeMode);
            }
        };

        let export_output_path = match env::var("LAB_SERVER_EXPORT_OUTPUT") {
            Ok(value) => {
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidExportOutputPath);
                }
                value
            }
            Err(env::VarError::NotPresent) => DEFAULT_EXPORT_OUTPUT_PATH.to_owned(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeExportOutput);
            }
        };

        let seed = match env::var("LAB_SIM_SEED") {
            Ok(value) => Some(
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed)?,
            ),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeSeed);
            }
        };

        Ok(Self {
            listen_addr,
            mode,
            export_output_path,
            seed,
        })
    }
}
