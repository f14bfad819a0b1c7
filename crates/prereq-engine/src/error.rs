use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrereqError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
