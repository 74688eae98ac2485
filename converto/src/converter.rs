//! Conversion of a value between two friendly-named units of a category

use serde::{Deserialize, Serialize};
use converto_core::Number;
use converto_units::Quantity;

use crate::catalog::{Category, UnitCatalog, CATALOG};
use crate::error::ConversionError;
use crate::special;

/// One conversion as submitted by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: Category,
    pub value: Number,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(category: Category, value: Number, from_unit: &str, to_unit: &str) -> Self {
        ConversionRequest {
            category,
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
        }
    }

    /// Build a request from a category display name
    pub fn parse(category: &str, value: Number, from_unit: &str, to_unit: &str) -> Result<Self, ConversionError> {
        Ok(Self::new(category.parse()?, value, from_unit, to_unit))
    }
}

/// Converts values, dispatching special-case categories to their formulas
/// and everything else to the unit engine through the catalog.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    catalog: &'a UnitCatalog,
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Converter { catalog: &CATALOG }
    }
}

impl<'a> Converter<'a> {
    pub fn new(catalog: &'a UnitCatalog) -> Self {
        Converter { catalog }
    }

    pub fn convert(
        &self,
        category: Category,
        value: &Number,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<Number, ConversionError> {
        let result = match category {
            Category::Temperature => special::convert_temperature(value, from_unit, to_unit),
            Category::FuelEconomy => special::convert_fuel_economy(value, from_unit, to_unit),
            _ => {
                let from_token = self.catalog.resolve(from_unit);
                let to_token = self.catalog.resolve(to_unit);
                Quantity::parse(value.clone(), &from_token)?
                    .to(&to_token)?
                    .magnitude()
                    .clone()
            }
        };

        tracing::debug!(
            category = category.name(),
            from_unit,
            to_unit,
            %value,
            %result,
            "converted"
        );
        Ok(result)
    }

    pub fn convert_request(&self, request: &ConversionRequest) -> Result<Number, ConversionError> {
        self.convert(request.category, &request.value, &request.from_unit, &request.to_unit)
    }
}

/// Convert with the global catalog, naming the category by its display name
pub fn convert(category: &str, value: &Number, from_unit: &str, to_unit: &str) -> Result<Number, ConversionError> {
    let category: Category = category.parse()?;
    Converter::default().convert(category, value, from_unit, to_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Number {
        Number::from_str(s).unwrap()
    }

    fn assert_close(actual: &Number, expected: f64) {
        let actual = actual.to_f64().unwrap();
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!((actual - expected).abs() <= tolerance, "{} != {}", actual, expected);
    }

    #[test]
    fn test_meters_to_kilometers() {
        let result = convert("Length", &num("1000"), "meters", "kilometers").unwrap();
        assert_eq!(result, Number::from_i64(1));
    }

    #[test]
    fn test_gigabytes_to_megabytes_is_decimal() {
        let result = convert("Digital Storage", &num("1"), "gigabytes", "megabytes").unwrap();
        assert_eq!(result, Number::from_i64(1000));
        let bits = convert("Digital Storage", &num("1"), "bytes", "bits").unwrap();
        assert_eq!(bits, Number::from_i64(8));
    }

    #[test]
    fn test_linear_references() {
        assert_close(&convert("Length", &num("1"), "miles", "kilometers").unwrap(), 1.609344);
        assert_close(&convert("Weight", &num("1"), "pounds", "ounces").unwrap(), 16.0);
        assert_close(&convert("Volume", &num("1"), "gallons", "liters").unwrap(), 3.785411784);
        assert_close(&convert("Area", &num("1"), "hectares", "square meters").unwrap(), 10_000.0);
        assert_close(&convert("Area", &num("1"), "acres", "square feet").unwrap(), 43_560.0);
        assert_close(&convert("Energy", &num("1"), "kilowatt hours", "joules").unwrap(), 3.6e6);
        assert_close(&convert("Energy", &num("1"), "kilocalories", "calories").unwrap(), 1000.0);
        assert_close(&convert("Pressure", &num("1"), "atmospheres", "pascals").unwrap(), 101_325.0);
        assert_close(&convert("Pressure", &num("1"), "bars", "hectopascals").unwrap(), 1000.0);
        assert_close(&convert("Speed", &num("36"), "kilometers per hour", "meters per second").unwrap(), 10.0);
        assert_close(&convert("Speed", &num("1"), "knots", "kilometers per hour").unwrap(), 1.852);
        assert_close(&convert("Plane Angle", &num("180"), "degrees", "radians").unwrap(), std::f64::consts::PI);
        assert_close(&convert("Plane Angle", &num("100"), "gradians", "degrees").unwrap(), 90.0);
        assert_close(&convert("Frequency", &num("1"), "gigahertz", "kilohertz").unwrap(), 1e6);
        assert_close(&convert("Data Transfer Rate", &num("1"), "gigabits per second", "megabits per second").unwrap(), 1000.0);
    }

    #[test]
    fn test_temperature_and_fuel_dispatch() {
        assert_eq!(convert("Temperature", &num("100"), "celsius", "fahrenheit").unwrap(), Number::from_i64(212));
        assert_eq!(convert("Temperature", &num("-40"), "fahrenheit", "celsius").unwrap(), Number::from_i64(-40));
        assert_close(&convert("Temperature", &num("0"), "celsius", "kelvin").unwrap(), 273.15);
        assert_close(&convert("Fuel Economy", &num("1"), "kilometers per liter", "miles per gallon").unwrap(), 2.35215);
        assert_close(&convert("Fuel Economy", &num("2.35215"), "miles per gallon", "kilometers per liter").unwrap(), 1.0);
    }

    #[test]
    fn test_identity_for_every_unit() {
        let converter = Converter::default();
        let value = num("123.456");
        for category in Category::ALL {
            for unit in category.units() {
                let result = converter.convert(category, &value, unit, unit).unwrap();
                assert_eq!(result, value, "{} / {}", category, unit);
            }
        }
    }

    #[test]
    fn test_round_trip_every_pair() {
        let converter = Converter::default();
        let value = num("123.456");
        for category in Category::ALL {
            for from in category.units() {
                for to in category.units() {
                    let there = converter.convert(category, &value, from, to).unwrap();
                    let back = converter.convert(category, &there, to, from).unwrap();
                    let back = back.to_f64().unwrap();
                    assert!(
                        (back - 123.456).abs() <= 1e-9 * 123.456,
                        "{}: {} -> {} -> {} gave {}", category, from, to, from, back
                    );
                }
            }
        }
    }

    #[test]
    fn test_incompatible_units_error() {
        let err = convert("Length", &num("1"), "meters", "kilograms").unwrap_err();
        assert!(matches!(
            err,
            ConversionError::Engine(converto_units::ConversionError::IncompatibleDimensions { .. })
        ));
        assert!(err.to_string().contains("incompatible dimensions"));
    }

    #[test]
    fn test_untabulated_unit_uses_fallback_token() {
        // "square meters" is tabulated, "cubic meters" falls back to "cubic_meters"
        let err = convert("Volume", &num("1"), "cubic meters", "liters").unwrap_err();
        assert_eq!(err.to_string(), "unknown unit: cubic_meters");
    }

    #[test]
    fn test_unknown_category() {
        let err = convert("Luminosity", &num("1"), "meters", "meters").unwrap_err();
        assert_eq!(err, ConversionError::UnknownCategory("Luminosity".into()));
    }

    #[test]
    fn test_convert_request() {
        let request = ConversionRequest::parse("weight", num("2"), "kilograms", "grams").unwrap();
        assert_eq!(request.category, Category::Weight);
        let result = Converter::default().convert_request(&request).unwrap();
        assert_eq!(result, Number::from_i64(2000));
    }
}
