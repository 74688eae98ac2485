//! Quantity type - a value with an associated unit

use std::fmt;
use serde::{Serialize, Deserialize};
use converto_core::Number;
use crate::{Unit, Dimension};
use crate::unit::ConversionError;
use crate::parse::parse_unit;

/// A physical quantity: a numeric value with an associated unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quantity {
    pub value: Number,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: Number, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// Build `value * unit` from a unit expression such as "kilometer/hour"
    pub fn parse(value: Number, unit: &str) -> Result<Self, ConversionError> {
        Ok(Quantity::new(value, parse_unit(unit)?))
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension
    }

    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// Convert to another unit
    pub fn convert_to(&self, target: &Unit) -> Result<Quantity, ConversionError> {
        let new_value = self.unit.convert_to(&self.value, target)?;
        Ok(Quantity::new(new_value, target.clone()))
    }

    /// Convert to the unit named by a unit expression
    pub fn to(&self, target: &str) -> Result<Quantity, ConversionError> {
        self.convert_to(&parse_unit(target)?)
    }

    /// The numeric value, without its unit
    pub fn magnitude(&self) -> &Number {
        &self.value
    }

    /// Get the value in SI base units
    pub fn si_value(&self) -> Number {
        self.unit.to_si(&self.value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.dimension.is_dimensionless() && self.unit.symbol == "1" {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit.symbol)
        }
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.is_compatible(other) && self.si_value() == other.si_value()
    }
}
