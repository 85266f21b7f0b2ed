use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlgoMatchError {
    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Service(#[from] algomatch_common::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AlgoMatchError>;
