//! Error types for recall-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecallError {
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),
}

pub type Result<T> = std::result::Result<T, RecallError>;
