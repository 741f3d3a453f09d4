//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Errors only arise at the configuration boundary (parsing solid names, host
//! parameter updates, explicit validation). Point sampling itself never fails.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown parameter '{name}'")]
    UnknownParameter { name: String },

    #[error("unknown solid '{0}'")]
    UnknownSolid(String),

    #[error("unknown internal mode '{0}'")]
    UnknownMode(String),
}
