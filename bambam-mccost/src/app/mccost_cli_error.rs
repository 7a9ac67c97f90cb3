use crate::model::McCostError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum McCostCliError {
    #[error("failure reading cost configuration: {0}")]
    ConfigurationError(String),
    #[error("failure building cost parameters: {source}")]
    McCostError {
        #[from]
        source: McCostError,
    },
    #[error("failure reading environment configuration: {source}")]
    ConfigError {
        #[from]
        source: config::ConfigError,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure encoding TOML: {source}")]
    TomlError {
        #[from]
        source: toml::ser::Error,
    },
}
