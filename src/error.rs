use thiserror::Error;

/// Errors raised by the strict, validating entry points.
///
/// Segmentation and the case formatters themselves never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid acronym: {0:?}")]
    InvalidAcronym(String),

    #[error("unknown case style: {0:?}")]
    UnknownStyle(String),
}

pub type Result<T> = std::result::Result<T, Error>;
