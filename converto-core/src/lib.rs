//! Converto Core - Fundamental types
//!
//! This crate provides the core types used throughout Converto:
//! - `Number`: Arbitrary precision decimal numbers
//! - `ConvertoError`: Structured errors for tool consumers

mod number;
mod error;

pub use number::{Number, NumberError};
pub use error::{ConvertoError, codes};
