use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The input cannot be turned into an indicator table at all.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
