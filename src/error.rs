use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScamlensError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScamlensError>;
