//! Unit string parsing - parse expressions like "kilometer/hour" or "ft**2"

use crate::Unit;
use crate::unit::ConversionError;
use crate::units::UNITS;

/// Largest power accepted on a single unit, either sign
const MAX_EXPONENT: i32 = 12;

/// Parse a unit string into a Unit
///
/// Supported formats:
/// - Simple: "m", "kilogram", "watt_hour"
/// - Prefixed: "kilobit", "hectopascal"
/// - Powers: "m^2", "ft**2", "s^-1", "m²"
/// - Products: "kg*m", "W·h", "N m"
/// - Quotients: "m/s", "bit / second", "kg/m^2"
pub fn parse_unit(s: &str) -> Result<Unit, ConversionError> {
    let s = s.trim();

    if s.is_empty() {
        return Ok(Unit::dimensionless());
    }

    // Registered symbols may themselves contain '/' ("km/h")
    if let Some(unit) = UNITS.get(s) {
        return Ok(unit.clone());
    }

    let normalized = s.replace("**", "^");
    parse_unit_expression(&normalized)
}

/// Parse "a/b/c" as a / b / c
fn parse_unit_expression(s: &str) -> Result<Unit, ConversionError> {
    let mut parts = s.split('/');
    let numerator = parts.next().unwrap_or_default();
    let mut result = parse_product(numerator)?;

    for denominator in parts {
        if denominator.trim().is_empty() {
            return Err(ConversionError::InvalidExpression(s.to_string()));
        }
        let unit = parse_product(denominator)?;
        result = result.divide(&unit)?;
    }

    Ok(result)
}

/// Parse a product of units like "kg*m" or "m^2 s"
fn parse_product(s: &str) -> Result<Unit, ConversionError> {
    let mut factors = s
        .split(|c: char| c == '*' || c == '·' || c.is_whitespace())
        .filter(|p| !p.is_empty());

    let Some(first) = factors.next() else {
        return Ok(Unit::dimensionless());
    };

    let mut result = parse_power(first)?;
    for factor in factors {
        result = result.multiply(&parse_power(factor)?)?;
    }

    Ok(result)
}

/// Parse a unit with optional power like "m^2", "s^-1" or "m³"
fn parse_power(s: &str) -> Result<Unit, ConversionError> {
    if let Some((base, exp_str)) = s.split_once('^') {
        let exponent: i32 = exp_str
            .parse()
            .map_err(|_| ConversionError::InvalidExpression(format!("invalid exponent: {}", exp_str)))?;
        return lookup_base_unit(base)?.power(checked_exponent(exponent)?);
    }

    if let Some((base, exponent)) = split_superscript(s) {
        // Registered names such as "m²" win over the generic rule
        if let Some(unit) = UNITS.get(s) {
            return Ok(unit.clone());
        }
        return lookup_base_unit(base)?.power(checked_exponent(exponent)?);
    }

    lookup_base_unit(s)
}

fn checked_exponent(exponent: i32) -> Result<i32, ConversionError> {
    if (-MAX_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
        Ok(exponent)
    } else {
        Err(ConversionError::InvalidExpression(format!(
            "exponent {} out of range (at most {} either way)", exponent, MAX_EXPONENT
        )))
    }
}

/// Split trailing superscript exponents: "m²" -> ("m", 2), "s⁻¹" -> ("s", -1)
fn split_superscript(s: &str) -> Option<(&str, i32)> {
    let digits = |c: char| match c {
        '⁰' => Some('0'),
        '¹' => Some('1'),
        '²' => Some('2'),
        '³' => Some('3'),
        '⁴' => Some('4'),
        '⁵' => Some('5'),
        '⁶' => Some('6'),
        '⁷' => Some('7'),
        '⁸' => Some('8'),
        '⁹' => Some('9'),
        '⁻' => Some('-'),
        _ => None,
    };

    let split_at = s
        .char_indices()
        .rev()
        .take_while(|(_, c)| digits(*c).is_some())
        .last()
        .map(|(i, _)| i)?;

    let exp: String = s[split_at..].chars().filter_map(digits).collect();
    let exponent = exp.parse().ok()?;
    Some((&s[..split_at], exponent))
}

/// Look up a base unit by symbol, alias or prefixed name
fn lookup_base_unit(s: &str) -> Result<Unit, ConversionError> {
    let s = s.trim();

    if s == "1" || s.is_empty() {
        return Ok(Unit::dimensionless());
    }

    UNITS.resolve(s)
        .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}
