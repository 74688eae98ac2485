//! Dimensional analysis types
//!
//! Each quantity has dimensions represented as an 8-element vector:
//! [length, mass, time, current, temperature, amount, luminosity, information]
//!
//! Information is not an SI base quantity, but giving it its own slot keeps
//! bytes from silently converting into radians.

use std::fmt;
use serde::{Serialize, Deserialize};

const BASE_COUNT: usize = 8;

/// Represents the dimensions of a quantity as exponents of the base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, amount, luminosity, information]
    pub exponents: [i32; BASE_COUNT],
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 0, 0] };

    /// Length [L]
    pub const LENGTH: Dimension = Dimension { exponents: [1, 0, 0, 0, 0, 0, 0, 0] };

    /// Mass [M]
    pub const MASS: Dimension = Dimension { exponents: [0, 1, 0, 0, 0, 0, 0, 0] };

    /// Time [T]
    pub const TIME: Dimension = Dimension { exponents: [0, 0, 1, 0, 0, 0, 0, 0] };

    /// Electric current [I]
    pub const CURRENT: Dimension = Dimension { exponents: [0, 0, 0, 1, 0, 0, 0, 0] };

    /// Temperature [Θ]
    pub const TEMPERATURE: Dimension = Dimension { exponents: [0, 0, 0, 0, 1, 0, 0, 0] };

    /// Amount of substance [N]
    pub const AMOUNT: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 1, 0, 0] };

    /// Luminous intensity [J]
    pub const LUMINOSITY: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 1, 0] };

    /// Information [B]
    pub const INFORMATION: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 0, 1] };

    /// Velocity [L T^-1]
    pub const VELOCITY: Dimension = Dimension { exponents: [1, 0, -1, 0, 0, 0, 0, 0] };

    /// Energy [M L^2 T^-2]
    pub const ENERGY: Dimension = Dimension { exponents: [2, 1, -2, 0, 0, 0, 0, 0] };

    /// Power [M L^2 T^-3]
    pub const POWER: Dimension = Dimension { exponents: [2, 1, -3, 0, 0, 0, 0, 0] };

    /// Pressure [M L^-1 T^-2]
    pub const PRESSURE: Dimension = Dimension { exponents: [-1, 1, -2, 0, 0, 0, 0, 0] };

    /// Area [L^2]
    pub const AREA: Dimension = Dimension { exponents: [2, 0, 0, 0, 0, 0, 0, 0] };

    /// Volume [L^3]
    pub const VOLUME: Dimension = Dimension { exponents: [3, 0, 0, 0, 0, 0, 0, 0] };

    /// Frequency [T^-1]
    pub const FREQUENCY: Dimension = Dimension { exponents: [0, 0, -1, 0, 0, 0, 0, 0] };

    /// Data rate [B T^-1]
    pub const DATA_RATE: Dimension = Dimension { exponents: [0, 0, -1, 0, 0, 0, 0, 1] };

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Multiply dimensions (add exponents). `None` if an exponent overflows.
    pub fn multiply(&self, other: &Dimension) -> Option<Dimension> {
        self.combine(other, i32::checked_add)
    }

    /// Divide dimensions (subtract exponents). `None` if an exponent overflows.
    pub fn divide(&self, other: &Dimension) -> Option<Dimension> {
        self.combine(other, i32::checked_sub)
    }

    /// Raise to integer power (multiply exponents). `None` if an exponent overflows.
    pub fn power(&self, exp: i32) -> Option<Dimension> {
        let mut result = [0i32; BASE_COUNT];
        for (slot, &e) in result.iter_mut().zip(&self.exponents) {
            *slot = e.checked_mul(exp)?;
        }
        Some(Dimension { exponents: result })
    }

    fn combine(&self, other: &Dimension, op: impl Fn(i32, i32) -> Option<i32>) -> Option<Dimension> {
        let mut result = [0i32; BASE_COUNT];
        for (i, slot) in result.iter_mut().enumerate() {
            *slot = op(self.exponents[i], other.exponents[i])?;
        }
        Some(Dimension { exponents: result })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = ["L", "M", "T", "I", "Θ", "N", "J", "B"];
        let mut parts = Vec::new();

        for (i, &exp) in self.exponents.iter().enumerate() {
            if exp == 1 {
                parts.push(names[i].to_string());
            } else if exp != 0 {
                parts.push(format!("{}^{}", names[i], exp));
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensionless() {
        assert!(Dimension::DIMENSIONLESS.is_dimensionless());
        assert!(!Dimension::INFORMATION.is_dimensionless());
    }

    #[test]
    fn test_divide() {
        assert_eq!(Dimension::LENGTH.divide(&Dimension::TIME), Some(Dimension::VELOCITY));
        assert_eq!(Dimension::INFORMATION.divide(&Dimension::TIME), Some(Dimension::DATA_RATE));
    }

    #[test]
    fn test_energy_from_power_and_time() {
        // Watt-hours: power times time
        assert_eq!(Dimension::POWER.multiply(&Dimension::TIME), Some(Dimension::ENERGY));
    }

    #[test]
    fn test_power() {
        assert_eq!(Dimension::LENGTH.power(2), Some(Dimension::AREA));
        assert_eq!(Dimension::TIME.power(-1), Some(Dimension::FREQUENCY));
        assert_eq!(Dimension::LENGTH.power(0), Some(Dimension::DIMENSIONLESS));
    }

    #[test]
    fn test_exponent_overflow() {
        assert_eq!(Dimension::AREA.power(2_000_000_000), None);
        assert_eq!(Dimension::TIME.power(i32::MIN), Some(Dimension { exponents: [0, 0, i32::MIN, 0, 0, 0, 0, 0] }));
        assert_eq!(Dimension::FREQUENCY.power(i32::MIN), None);

        let huge = Dimension { exponents: [i32::MAX, 0, 0, 0, 0, 0, 0, 0] };
        assert_eq!(huge.multiply(&Dimension::LENGTH), None);
        assert_eq!(huge.divide(&Dimension::LENGTH.power(-1).unwrap()), None);
        assert_eq!(huge.divide(&Dimension::LENGTH), Some(Dimension { exponents: [i32::MAX - 1, 0, 0, 0, 0, 0, 0, 0] }));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dimension::DIMENSIONLESS), "1");
        assert_eq!(format!("{}", Dimension::LENGTH), "L");
        assert_eq!(format!("{}", Dimension::VELOCITY), "L T^-1");
        assert_eq!(format!("{}", Dimension::DATA_RATE), "T^-1 B");
    }
}
