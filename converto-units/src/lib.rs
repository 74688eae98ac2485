//! Converto Units - Quantity and Unit Conversion
//!
//! A dimensional-analysis engine: units carry a dimension vector and an
//! affine map onto SI, and quantities convert only between units with the
//! same dimension.
//!
//! Categories:
//! - Length (m, km, ft, mi, etc.)
//! - Mass (kg, g, lb, oz, etc.)
//! - Time (s, min, h, etc.)
//! - Temperature (K, degC, degF)
//! - Area (m², ft², acre, etc.)
//! - Volume (L, mL, gal, cup, etc.)
//! - Velocity (m/s, km/h, mph, knot)
//! - Energy (J, cal, kWh, etc.)
//! - Power (W, hp)
//! - Pressure (Pa, bar, psi, etc.)
//! - Frequency (Hz, rpm)
//! - Data (bit, byte, kB, GiB, etc.) and data rate
//! - Angle (rad, deg, grad)
//!
//! Unit expressions are parsed with [`parse_unit`]: `"kilometer/hour"`,
//! `"ft**2"`, `"bit / second"`, `"kilowatt_hour"`.

mod dimension;
mod unit;
mod quantity;
mod parse;
mod units;

pub use dimension::Dimension;
pub use unit::{Unit, ConversionError};
pub use quantity::Quantity;
pub use units::{UnitRegistry, UNITS};
pub use parse::parse_unit;
