//! Converto - Unit Conversion Calculator
//!
//! Converts a value between two units of a measurement category:
//!
//! ```text
//! convert("Length", 1000, "meters", "kilometers")  -> 1
//! convert("Temperature", 100, "celsius", "fahrenheit") -> 212
//! ```
//!
//! Units are offered under friendly names ("kilometers per hour"). The
//! [`UnitCatalog`] maps them to tokens for the unit engine in
//! `converto-units`. Temperature and fuel economy use closed-form formulas.

pub mod catalog;
pub mod converter;
pub mod error;
pub mod render;
mod special;

pub use catalog::{Category, UnitCatalog, CATALOG};
pub use converter::{convert, ConversionRequest, Converter};
pub use error::ConversionError;
pub use render::{echo_value, Renderer, DEFAULT_DECIMALS};

pub use converto_core::{Number, NumberError, ConvertoError};
