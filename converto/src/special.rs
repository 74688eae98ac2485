//! Categories converted by closed-form formulas instead of the engine.
//!
//! Temperature needs offsets that plain scaling cannot express, and fuel
//! economy in km/L and mpg are proportional to each other. Both take the
//! friendly unit names directly. Any pair the formulas do not cover,
//! including a unit converted to itself, returns the value unchanged.

use converto_core::Number;

/// km/L to mpg (US gallon): 3.785411784 / 1.609344
const KM_PER_LITER_TO_MPG: (i64, isize) = (235_215, -5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "celsius" => Some(Scale::Celsius),
            "fahrenheit" => Some(Scale::Fahrenheit),
            "kelvin" => Some(Scale::Kelvin),
            _ => None,
        }
    }
}

fn kelvin_offset() -> Number {
    Number::from_scaled(27315, -2)
}

/// Convert between "celsius", "fahrenheit" and "kelvin"
pub fn convert_temperature(value: &Number, from: &str, to: &str) -> Number {
    let thirty_two = Number::from_i64(32);
    match (Scale::from_name(from), Scale::from_name(to)) {
        (Some(Scale::Celsius), Some(Scale::Fahrenheit)) => value.mul_ratio(9, 5).add(&thirty_two),
        (Some(Scale::Fahrenheit), Some(Scale::Celsius)) => value.sub(&thirty_two).mul_ratio(5, 9),
        (Some(Scale::Celsius), Some(Scale::Kelvin)) => value.add(&kelvin_offset()),
        (Some(Scale::Kelvin), Some(Scale::Celsius)) => value.sub(&kelvin_offset()),
        (Some(Scale::Fahrenheit), Some(Scale::Kelvin)) => {
            value.sub(&thirty_two).mul_ratio(5, 9).add(&kelvin_offset())
        }
        (Some(Scale::Kelvin), Some(Scale::Fahrenheit)) => {
            value.sub(&kelvin_offset()).mul_ratio(9, 5).add(&thirty_two)
        }
        _ => value.clone(),
    }
}

/// Convert between "kilometers per liter" and "miles per gallon"
pub fn convert_fuel_economy(value: &Number, from: &str, to: &str) -> Number {
    let (significand, exponent) = KM_PER_LITER_TO_MPG;
    match (from, to) {
        ("kilometers per liter", "miles per gallon") => {
            value.mul(&Number::from_scaled(significand, exponent))
        }
        ("miles per gallon", "kilometers per liter") => value.mul_ratio(100_000, significand),
        _ => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &Number, b: f64) -> bool {
        (a.to_f64().unwrap() - b).abs() < 1e-9
    }

    #[test]
    fn test_temperature_fixed_points() {
        let c = |v: i64, to: &str| convert_temperature(&Number::from_i64(v), "celsius", to);
        assert_eq!(c(100, "fahrenheit"), Number::from_i64(212));
        assert_eq!(c(0, "fahrenheit"), Number::from_i64(32));
        assert_eq!(c(-40, "fahrenheit"), Number::from_i64(-40));
        assert_eq!(c(0, "kelvin"), Number::from_scaled(27315, -2));

        let f = convert_temperature(&Number::from_i64(212), "fahrenheit", "celsius");
        assert_eq!(f, Number::from_i64(100));
        let freezing = convert_temperature(&Number::from_i64(32), "fahrenheit", "celsius");
        assert_eq!(freezing, Number::from_i64(0));

        let k = convert_temperature(&Number::from_i64(0), "kelvin", "fahrenheit");
        assert!(close(&k, -459.67));
        let fk = convert_temperature(&Number::from_i64(32), "fahrenheit", "kelvin");
        assert_eq!(fk, Number::from_scaled(27315, -2));
    }

    #[test]
    fn test_temperature_same_scale_is_identity() {
        let v = Number::from_scaled(3755, -2);
        for scale in ["celsius", "fahrenheit", "kelvin"] {
            assert_eq!(convert_temperature(&v, scale, scale), v);
        }
    }

    #[test]
    fn test_temperature_unknown_pair_passes_through() {
        let v = Number::from_i64(7);
        assert_eq!(convert_temperature(&v, "celsius", "rankine"), v);
    }

    #[test]
    fn test_fuel_economy() {
        let mpg = convert_fuel_economy(&Number::from_i64(1), "kilometers per liter", "miles per gallon");
        assert_eq!(mpg, Number::from_scaled(235215, -5));

        let kml = convert_fuel_economy(&Number::from_scaled(235215, -5), "miles per gallon", "kilometers per liter");
        assert_eq!(kml, Number::from_i64(1));

        let v = Number::from_i64(30);
        assert_eq!(convert_fuel_economy(&v, "miles per gallon", "miles per gallon"), v);
    }

    #[test]
    fn test_fuel_economy_round_trip() {
        let v = Number::from_scaled(1234, -2);
        let there = convert_fuel_economy(&v, "kilometers per liter", "miles per gallon");
        let back = convert_fuel_economy(&there, "miles per gallon", "kilometers per liter");
        assert!(close(&back, 12.34));
    }
}
