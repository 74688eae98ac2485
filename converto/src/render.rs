//! Result messages shown to the user

use converto_core::Number;

use crate::converter::ConversionRequest;
use crate::error::ConversionError;

/// Decimal places in the result when nothing else is configured
pub const DEFAULT_DECIMALS: u32 = 3;

/// Formats conversion outcomes as single-line messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    decimals: u32,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer { decimals: DEFAULT_DECIMALS }
    }
}

impl Renderer {
    pub fn new(decimals: u32) -> Self {
        Renderer { decimals }
    }

    /// "1000.0 meters = 1.000 kilometers"
    pub fn success(&self, request: &ConversionRequest, result: &Number) -> String {
        format!(
            "{} {} = {} {}",
            echo_value(&request.value),
            request.from_unit,
            self.result(result),
            request.to_unit
        )
    }

    /// "Conversion error: unknown unit: furlongs"
    pub fn failure(&self, err: &ConversionError) -> String {
        format!("Conversion error: {}", err)
    }

    pub fn outcome(&self, request: &ConversionRequest, outcome: &Result<Number, ConversionError>) -> String {
        match outcome {
            Ok(result) => self.success(request, result),
            Err(e) => self.failure(e),
        }
    }

    /// The converted value alone, fixed to the configured decimals
    pub fn result(&self, result: &Number) -> String {
        result.to_fixed(self.decimals)
    }
}

/// Echo an input value the way a floating-point field shows it:
/// integral values keep one decimal ("1000.0"), and values whose decimal
/// exponent is below -4 or at least 16 switch to exponent form ("1e+16",
/// "1.5e-05").
pub fn echo_value(value: &Number) -> String {
    match value.to_f64() {
        Some(f) => echo_f64(f),
        None => value.to_string(),
    }
}

fn echo_f64(f: f64) -> String {
    // Shortest round-trip digits, e.g. "1.5e-5"
    let scientific = format!("{:e}", f);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if f != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
    } else if f.fract() == 0.0 {
        format!("{:.1}", f)
    } else {
        format!("{}", f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn request(value: &str, from: &str, to: &str) -> ConversionRequest {
        ConversionRequest::new(Category::Length, Number::from_str(value).unwrap(), from, to)
    }

    #[test]
    fn test_success_message() {
        let r = Renderer::default();
        let msg = r.success(&request("1000", "meters", "kilometers"), &Number::from_i64(1));
        assert_eq!(msg, "1000.0 meters = 1.000 kilometers");
    }

    #[test]
    fn test_success_rounds_result() {
        let r = Renderer::default();
        let msg = r.success(&request("2.5", "miles", "kilometers"), &Number::from_str("4.02336").unwrap());
        assert_eq!(msg, "2.5 miles = 4.023 kilometers");

        let r = Renderer::new(1);
        let msg = r.success(&request("2.5", "miles", "kilometers"), &Number::from_str("4.02336").unwrap());
        assert_eq!(msg, "2.5 miles = 4.0 kilometers");
    }

    #[test]
    fn test_failure_message() {
        let err = ConversionError::from(converto_units::ConversionError::UnknownUnit("furlongs".into()));
        assert_eq!(Renderer::default().failure(&err), "Conversion error: unknown unit: furlongs");
    }

    #[test]
    fn test_outcome() {
        let r = Renderer::default();
        let req = request("-40", "celsius", "fahrenheit");
        assert_eq!(r.outcome(&req, &Ok(Number::from_i64(-40))), "-40.0 celsius = -40.000 fahrenheit");
        let err = Err(ConversionError::UnknownCategory("Colour".into()));
        assert_eq!(r.outcome(&req, &err), "Conversion error: unknown category: Colour");
    }

    #[test]
    fn test_echo_value() {
        assert_eq!(echo_value(&Number::from_i64(0)), "0.0");
        assert_eq!(echo_value(&Number::from_scaled(125, -3)), "0.125");
        assert_eq!(echo_value(&Number::from_i64(-7)), "-7.0");
        assert_eq!(echo_value(&Number::from_scaled(1, -4)), "0.0001");
        assert_eq!(echo_value(&Number::from_scaled(999_999_999_999_999, 0)), "999999999999999.0");
    }

    #[test]
    fn test_echo_value_exponent_form() {
        assert_eq!(echo_value(&Number::from_scaled(1, 16)), "1e+16");
        assert_eq!(echo_value(&Number::from_scaled(-1, 16)), "-1e+16");
        assert_eq!(echo_value(&Number::from_scaled(12345, 16)), "1.2345e+20");
        assert_eq!(echo_value(&Number::from_scaled(1, -5)), "1e-05");
        assert_eq!(echo_value(&Number::from_scaled(15, -6)), "1.5e-05");
    }
}
