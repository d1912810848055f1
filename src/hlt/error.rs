use std::io;
use thiserror::Error;

/// Anything that makes the environment's input undecodable. None of these are
/// recoverable: once framing is lost there is no way to resynchronise.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("i/o failure on the environment pipe: {0}")]
    Io(#[from] io::Error),

    #[error("expected a non-negative integer for {what}, got '{token}'")]
    InvalidNumber { what: &'static str, token: String },

    #[error("invalid board dimensions: '{0}'")]
    InvalidDimensions(String),

    #[error("expected {expected} production values, got {got}")]
    ProductionCount { expected: usize, got: usize },

    #[error("owner runs cover {got} cells, expected exactly {expected}")]
    OwnerCount { expected: usize, got: usize },

    #[error("expected {expected} strength values, got {got}")]
    StrengthCount { expected: usize, got: usize },
}
