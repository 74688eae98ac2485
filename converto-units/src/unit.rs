//! Unit representation with conversion factors

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use converto_core::{Number, NumberError};
use crate::Dimension;

/// A unit with its dimension and its affine map onto the SI base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// The unit symbol (e.g., "m", "kg", "s")
    pub symbol: String,
    /// The unit name (e.g., "meter", "kilogram", "second")
    pub name: String,
    pub dimension: Dimension,
    /// value_si = value * to_si_factor + to_si_offset
    pub to_si_factor: Number,
    /// Non-zero only for offset scales such as Celsius and Fahrenheit
    pub to_si_offset: Number,
    /// Category for organization (e.g., "length", "data")
    pub category: String,
}

impl Unit {
    /// Create a new unit with proportional conversion (no offset)
    pub fn new(
        symbol: &str,
        name: &str,
        dimension: Dimension,
        to_si_factor: Number,
        category: &str,
    ) -> Self {
        Self::with_offset(symbol, name, dimension, to_si_factor, Number::from_i64(0), category)
    }

    /// Create a unit with offset (for temperature scales)
    pub fn with_offset(
        symbol: &str,
        name: &str,
        dimension: Dimension,
        to_si_factor: Number,
        to_si_offset: Number,
        category: &str,
    ) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            dimension,
            to_si_factor,
            to_si_offset,
            category: category.to_string(),
        }
    }

    /// The unit of a pure number
    pub fn dimensionless() -> Self {
        Unit::new("1", "dimensionless", Dimension::DIMENSIONLESS, Number::from_i64(1), "dimensionless")
    }

    pub fn has_offset(&self) -> bool {
        !self.to_si_offset.is_zero()
    }

    /// Check if two units are dimensionally compatible (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    pub fn to_si(&self, value: &Number) -> Number {
        value.mul(&self.to_si_factor).add(&self.to_si_offset)
    }

    pub fn from_si(&self, value_si: &Number) -> Result<Number, NumberError> {
        value_si.sub(&self.to_si_offset).checked_div(&self.to_si_factor)
    }

    /// Convert a value from this unit to another unit, via SI
    pub fn convert_to(&self, value: &Number, target: &Unit) -> Result<Number, ConversionError> {
        if !self.is_compatible(target) {
            return Err(ConversionError::IncompatibleDimensions {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
                from_dim: self.dimension,
                to_dim: target.dimension,
            });
        }

        // Same unit: skip the round trip through SI so the value is returned untouched
        if self == target {
            return Ok(value.clone());
        }

        let si_value = self.to_si(value);
        Ok(target.from_si(&si_value)?)
    }

    /// Multiply two units (e.g., W * h -> W·h)
    pub fn multiply(&self, other: &Unit) -> Result<Unit, ConversionError> {
        let symbol = format!("{}·{}", self.symbol, other.symbol);
        let dimension = self.dimension.multiply(&other.dimension)
            .ok_or_else(|| ConversionError::exponent_overflow(&symbol))?;

        Ok(Unit::new(
            &symbol,
            &format!("{} {}", self.name, other.name),
            dimension,
            self.to_si_factor.mul(&other.to_si_factor),
            "derived",
        ))
    }

    /// Divide two units (e.g., km / h -> km/h)
    pub fn divide(&self, other: &Unit) -> Result<Unit, ConversionError> {
        let symbol = format!("{}/{}", self.symbol, other.symbol);
        let dimension = self.dimension.divide(&other.dimension)
            .ok_or_else(|| ConversionError::exponent_overflow(&symbol))?;
        let factor = self.to_si_factor.checked_div(&other.to_si_factor)?;

        Ok(Unit::new(
            &symbol,
            &format!("{} per {}", self.name, other.name),
            dimension,
            factor,
            "derived",
        ))
    }

    /// Raise unit to a power (e.g., ft^2)
    pub fn power(&self, exp: i32) -> Result<Unit, ConversionError> {
        if exp == 1 {
            return Ok(self.clone());
        }

        let symbol = format!("{}^{}", self.symbol, exp);
        let dimension = self.dimension.power(exp)
            .ok_or_else(|| ConversionError::exponent_overflow(&symbol))?;

        Ok(Unit::new(
            &symbol,
            &format!("{} to the {}", self.name, exp),
            dimension,
            self.to_si_factor.pow(exp),
            &self.category,
        ))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("cannot convert {from} ({from_dim}) to {to} ({to_dim}): incompatible dimensions")]
    IncompatibleDimensions {
        from: String,
        to: String,
        from_dim: Dimension,
        to_dim: Dimension,
    },

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("invalid unit expression: {0}")]
    InvalidExpression(String),

    #[error("numeric error: {0}")]
    Number(#[from] NumberError),
}

impl ConversionError {
    fn exponent_overflow(symbol: &str) -> Self {
        ConversionError::InvalidExpression(format!("dimension exponent out of range in {}", symbol))
    }
}
