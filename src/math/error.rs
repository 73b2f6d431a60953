// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Geometric calculation failed: {operation}")]
    GeometricFailure { operation: String },
}

pub type MathResult<T> = Result<T, MathError>;
