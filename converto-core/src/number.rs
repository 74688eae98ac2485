//! Arbitrary precision numbers using dashu
//!
//! Uses dashu-float (DBig) for decimal arithmetic, so factors such as
//! 0.0254 or 2.35215 are held exactly and conversions like
//! 1000 m -> km come out as exactly 1.

use dashu_float::DBig;
use dashu_int::ops::BitTest;
use dashu_int::IBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Working precision for calculations (decimal digits)
const WORK_PRECISION: usize = 50;

/// Largest decimal exponent accepted from user input, either sign
const MAX_INPUT_EXPONENT: isize = 1000;

const PI_STR: &str = "3.14159265358979323846264338327950288419716939937510582097494459230781640628620899862803482534211706798214808651328230664709384460955058223172535940812848111745028410270193852110555964462294895493038196442881097566593344612847564823378678316527120190914564856692346034861045432664821339360726024914127372458700660631558817488152092096282925409171536436789259036001133053054882046652138414695194151160943305727036575959195309218611738193261179310511854807446237996274956735188575272489122793818301194912";

/// Arbitrary precision decimal number
///
/// All operations return Results or new Numbers - never panic.
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    // ========== Construction ==========

    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(WORK_PRECISION).value()
    }

    /// Create from string representation
    /// Supports: "123", "3.14", "1/3", "1.5e10", "-42"
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumberError::ParseError(s.to_string()));
        }

        // Rational format "a/b"
        if s.contains('/') && !s.contains('.') && !s.contains('e') && !s.contains('E') {
            let (num_str, den_str) = s
                .split_once('/')
                .ok_or_else(|| NumberError::ParseError(s.to_string()))?;

            let num: DBig = num_str
                .trim()
                .parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;
            let den: DBig = den_str
                .trim()
                .parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;

            if den == DBig::ZERO {
                return Err(NumberError::DivisionByZero);
            }

            let result = Self::with_work_precision(num) / Self::with_work_precision(den);
            return Ok(Self { inner: result });
        }

        // Scientific notation: "1.5e10", "602214076e15"
        if s.contains('e') || s.contains('E') {
            let lower = s.to_lowercase();
            let (mantissa_str, exp_str) = lower
                .split_once('e')
                .ok_or_else(|| NumberError::ParseError(s.to_string()))?;
            let exp: isize = exp_str
                .trim_start_matches('+')
                .parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;
            let mantissa = Self::parse_plain(mantissa_str)
                .map_err(|_| NumberError::ParseError(s.to_string()))?;

            let (significand, exponent) = mantissa.into_repr().into_parts();
            let exponent = exponent
                .checked_add(exp)
                .filter(|e| (-MAX_INPUT_EXPONENT..=MAX_INPUT_EXPONENT).contains(e))
                .ok_or_else(|| NumberError::ParseError(s.to_string()))?;
            let result = DBig::from_parts(significand, exponent);
            return Ok(Self { inner: Self::with_work_precision(result) });
        }

        let inner = Self::parse_plain(s)?;
        Ok(Self { inner: Self::with_work_precision(inner) })
    }

    fn parse_plain(s: &str) -> Result<DBig, NumberError> {
        let unsigned = s.strip_prefix('+').unwrap_or(s);
        unsigned
            .parse()
            .map_err(|_| NumberError::ParseError(s.to_string()))
    }

    /// Create from i64 with working precision
    pub fn from_i64(n: i64) -> Self {
        Self { inner: Self::with_work_precision(DBig::from(n)) }
    }

    /// Create `significand * 10^exponent` exactly, e.g. `from_scaled(254, -4)` is 0.0254
    pub fn from_scaled(significand: i64, exponent: isize) -> Self {
        let value = DBig::from_parts(IBig::from(significand), exponent);
        Self { inner: Self::with_work_precision(value) }
    }

    /// Create from ratio. A zero denominator yields zero.
    pub fn from_ratio(num: i64, den: i64) -> Self {
        Self::from_i64(num).mul_ratio(1, den)
    }

    /// Pi to the requested number of decimal digits
    pub fn pi(precision: u32) -> Self {
        let end_pos = (precision as usize + 2).min(PI_STR.len());
        Self::from_str(&PI_STR[..end_pos]).unwrap_or_else(|_| Self::from_ratio(355, 113))
    }

    // ========== Predicates ==========

    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }


    // ========== Arithmetic ==========

    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// Multiply by the fraction `num/den`, multiplying before dividing so that
    /// `(v - 32) * 5 / 9` lands exactly on 100 for v = 212. A zero
    /// denominator yields zero.
    pub fn mul_ratio(&self, num: i64, den: i64) -> Self {
        if den == 0 {
            return Self::from_i64(0);
        }
        let n = Self::with_work_precision(DBig::from(num));
        let d = Self::with_work_precision(DBig::from(den));
        Self { inner: &(&self.inner * &n) / &d }
    }

    /// Integer power by repeated squaring. A negative power of zero is zero.
    pub fn pow(&self, exp: i32) -> Self {
        let mut result = Self::from_i64(1);
        let mut base = self.clone();
        let mut n = exp.unsigned_abs();
        while n > 0 {
            if n & 1 == 1 {
                result = result.mul(&base);
            }
            n >>= 1;
            if n > 0 {
                base = base.mul(&base);
            }
        }

        if exp < 0 {
            Self::from_i64(1).checked_div(&result).unwrap_or_else(|_| Self::from_i64(0))
        } else {
            result
        }
    }

    // ========== Display ==========

    /// Render with a fixed number of decimal places
    pub fn to_fixed(&self, places: u32) -> String {
        match self.to_f64() {
            Some(f) => format!("{:.prec$}", f, prec = places as usize),
            None => format!("{}", self.inner),
        }
    }

    /// Convert to f64 (may lose precision)
    pub fn to_f64(&self) -> Option<f64> {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();

        let sig_f64: f64 = if significand.bit_len() <= 53 {
            let as_i64: i64 = significand.try_into().ok()?;
            as_i64 as f64
        } else {
            // Shift right to fit in 53 bits, then scale back up
            let extra_bits = significand.bit_len() - 53;
            let shifted = &significand >> extra_bits;
            let shifted_i64: i64 = shifted.try_into().ok()?;
            shifted_i64 as f64 * 2_f64.powi(extra_bits as i32)
        };

        let result = if exponent == 0 {
            sig_f64
        } else if exponent > 0 && exponent <= 308 {
            sig_f64 * 10_f64.powi(exponent as i32)
        } else if exponent < 0 && exponent >= -308 {
            sig_f64 / 10_f64.powi((-exponent) as i32)
        } else {
            return None;
        };

        if result.is_finite() {
            Some(result)
        } else {
            None
        }
    }
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(std::cmp::Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_integer() {
        let n = Number::from_str("123").unwrap();
        assert_eq!(n, Number::from_i64(123));
    }

    #[test]
    fn test_from_str_decimal() {
        let n = Number::from_str("3.14").unwrap();
        assert_eq!(n, Number::from_scaled(314, -2));
    }

    #[test]
    fn test_from_str_signed() {
        assert_eq!(Number::from_str("+2.5").unwrap(), Number::from_scaled(25, -1));
        assert_eq!(Number::from_str("-42").unwrap(), Number::from_i64(-42));
    }

    #[test]
    fn test_from_str_fraction() {
        let n = Number::from_str("1/4").unwrap();
        assert_eq!(n, Number::from_scaled(25, -2));
        assert!(matches!(Number::from_str("1/0"), Err(NumberError::DivisionByZero)));
    }

    #[test]
    fn test_from_str_scientific() {
        assert_eq!(Number::from_str("1.5e2").unwrap(), Number::from_i64(150));
        assert_eq!(Number::from_str("25e-1").unwrap(), Number::from_scaled(25, -1));
        assert_eq!(Number::from_str("1E+3").unwrap(), Number::from_i64(1000));
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!(Number::from_str("").is_err());
        assert!(Number::from_str("abc").is_err());
        assert!(Number::from_str("1.2.3").is_err());
    }

    #[test]
    fn test_from_str_exponent_out_of_range() {
        assert!(matches!(
            Number::from_str("0.1e-9223372036854775808"),
            Err(NumberError::ParseError(_))
        ));
        assert!(Number::from_str("1e9223372036854775807").is_err());
        assert!(Number::from_str("1e-9223372036854775808").is_err());
        assert!(Number::from_str("1e1001").is_err());
        assert!(Number::from_str("1e-1001").is_err());
        assert_eq!(Number::from_str("1e1000").unwrap(), Number::from_scaled(1, 1000));
        // The mantissa's own exponent counts toward the limit
        assert!(Number::from_str("0.01e-999").is_err());
    }

    #[test]
    fn test_mul_ratio_is_exact() {
        let f = Number::from_i64(212).sub(&Number::from_i64(32));
        assert_eq!(f.mul_ratio(5, 9), Number::from_i64(100));
        assert_eq!(Number::from_i64(7).mul_ratio(1, 0), Number::from_i64(0));
    }

    #[test]
    fn test_checked_div() {
        let six = Number::from_i64(6);
        assert_eq!(six.checked_div(&Number::from_i64(3)).unwrap(), Number::from_i64(2));
        assert!(six.checked_div(&Number::from_i64(0)).is_err());
    }

    #[test]
    fn test_pow() {
        let ten = Number::from_i64(10);
        assert_eq!(ten.pow(3), Number::from_i64(1000));
        assert_eq!(ten.pow(-2), Number::from_scaled(1, -2));
        assert_eq!(ten.pow(0), Number::from_i64(1));
        assert_eq!(Number::from_i64(2).pow(13), Number::from_i64(8192));
        assert_eq!(Number::from_scaled(3048, -4).pow(2), Number::from_scaled(9290304, -8));
        assert_eq!(Number::from_i64(0).pow(-1), Number::from_i64(0));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Number::from_scaled(25, -1).to_f64(), Some(2.5));
        assert_eq!(Number::from_i64(-3).to_f64(), Some(-3.0));
        let third = Number::from_ratio(1, 3).to_f64().unwrap();
        assert!((third - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(Number::from_ratio(2, 3).to_fixed(3), "0.667");
        assert_eq!(Number::from_i64(32).to_fixed(3), "32.000");
    }

    #[test]
    fn test_pi() {
        let pi = Number::pi(20).to_f64().unwrap();
        assert!((pi - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn test_serde_as_string() {
        let n = Number::from_scaled(15, -1);
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, "\"1.5\"");
        let back: Number = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }
}
