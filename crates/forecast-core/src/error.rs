// File: crates/forecast-core/src/error.rs
// Summary: Error type shared by generation, layout and input parsing.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForecastError {
    /// Base price was not a positive whole number.
    #[error("invalid base price '{0}': expected a positive whole number")]
    InvalidBasePrice(String),

    /// Layout was asked to place nothing.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("cannot extend an empty historical series")]
    EmptyHistory,

    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ForecastError>;
