//! Error types for Cupcake

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CupcakeError>;

#[derive(Error, Debug)]
pub enum CupcakeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Share error: {0}")]
    Share(#[from] ShareError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CupcakeError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CupcakeError::InvalidInput(_) => 3,
            CupcakeError::Config(_) => 1,
            CupcakeError::Share(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Failed to launch share command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to hand order to share command: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Share command is empty")]
    EmptyCommand,
}
