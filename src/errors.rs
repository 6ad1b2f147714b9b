use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable get data from source\nFrom: {0}")]
    Network(#[from] reqwest::Error),

    #[error("No stream found in {0}")]
    StreamNotFound(String),

    #[error("Invalid url `{0}`")]
    InvalidUrl(String),

    #[error("Invalid configuration\nFrom: {0}")]
    Config(#[from] toml_edit::TomlError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Custom(String),
}
