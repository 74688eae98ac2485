//! Unit catalog: friendly unit names, their canonical engine tokens, and
//! the categories the names are grouped into.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// Global catalog, built once on first use
pub static CATALOG: LazyLock<UnitCatalog> = LazyLock::new(UnitCatalog::new);

/// Friendly name -> canonical token understood by `converto_units::parse_unit`
const ENTRIES: &[(&str, &str)] = &[
    // Length
    ("meters", "meter"),
    ("kilometers", "kilometer"),
    ("centimeters", "centimeter"),
    ("millimeters", "millimeter"),
    ("miles", "mile"),
    ("yards", "yard"),
    ("feet", "foot"),
    ("inches", "inch"),

    // Weight
    ("kilograms", "kilogram"),
    ("grams", "gram"),
    ("pounds", "pound"),
    ("ounces", "ounce"),

    // Volume
    ("liters", "liter"),
    ("milliliters", "milliliter"),
    ("gallons", "gallon"),
    ("cups", "cup"),

    // Area
    ("square meters", "m**2"),
    ("square kilometers", "km**2"),
    ("square miles", "mile**2"),
    ("acres", "acre"),
    ("hectares", "hectare"),
    ("square yards", "yd**2"),
    ("square feet", "ft**2"),
    ("square inches", "in**2"),

    // Data transfer rate
    ("bits per second", "bit / second"),
    ("kilobits per second", "kilobit / second"),
    ("megabits per second", "megabit / second"),
    ("gigabits per second", "gigabit / second"),

    // Digital storage
    ("bits", "bit"),
    ("kilobits", "kilobit"),
    ("megabits", "megabit"),
    ("gigabits", "gigabit"),
    ("terabits", "terabit"),
    ("bytes", "byte"),
    ("kilobytes", "kilobyte"),
    ("megabytes", "megabyte"),
    ("gigabytes", "gigabyte"),
    ("terabytes", "terabyte"),

    // Energy
    ("joules", "joule"),
    ("kilojoules", "kilojoule"),
    ("calories", "calorie"),
    ("kilocalories", "kilocalorie"),
    ("watt hours", "watt_hour"),
    ("kilowatt hours", "kilowatt_hour"),

    // Frequency
    ("hertz", "hertz"),
    ("kilohertz", "kilohertz"),
    ("megahertz", "megahertz"),
    ("gigahertz", "gigahertz"),

    // Plane angle
    ("degrees", "degree"),
    ("radians", "radian"),
    ("gradians", "gradian"),

    // Pressure
    ("pascals", "pascal"),
    ("hectopascals", "hectopascal"),
    ("kilopascals", "kilopascal"),
    ("bars", "bar"),
    ("psi", "psi"),
    ("atmospheres", "atmosphere"),

    // Speed
    ("meters per second", "meter/second"),
    ("kilometers per hour", "kilometer/hour"),
    ("miles per hour", "mile/hour"),
    ("knots", "knot"),
];

/// A measurement category offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Area,
    #[serde(rename = "Data Transfer Rate")]
    DataTransferRate,
    #[serde(rename = "Digital Storage")]
    DigitalStorage,
    Energy,
    Frequency,
    #[serde(rename = "Fuel Economy")]
    FuelEconomy,
    #[serde(rename = "Plane Angle")]
    PlaneAngle,
    Pressure,
    Speed,
}

impl Category {
    /// All categories, in the order they are presented
    pub const ALL: [Category; 13] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Area,
        Category::DataTransferRate,
        Category::DigitalStorage,
        Category::Energy,
        Category::Frequency,
        Category::FuelEconomy,
        Category::PlaneAngle,
        Category::Pressure,
        Category::Speed,
    ];

    /// Display name, e.g. "Data Transfer Rate"
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
            Category::Area => "Area",
            Category::DataTransferRate => "Data Transfer Rate",
            Category::DigitalStorage => "Digital Storage",
            Category::Energy => "Energy",
            Category::Frequency => "Frequency",
            Category::FuelEconomy => "Fuel Economy",
            Category::PlaneAngle => "Plane Angle",
            Category::Pressure => "Pressure",
            Category::Speed => "Speed",
        }
    }

    /// Friendly unit names of this category, in presentation order
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            Category::Length => &[
                "meters", "kilometers", "centimeters", "millimeters",
                "miles", "yards", "feet", "inches",
            ],
            Category::Weight => &["kilograms", "grams", "pounds", "ounces"],
            Category::Temperature => &["celsius", "fahrenheit", "kelvin"],
            Category::Volume => &["liters", "milliliters", "gallons", "cups"],
            Category::Area => &[
                "square meters", "square kilometers", "square miles", "acres",
                "hectares", "square yards", "square feet", "square inches",
            ],
            Category::DataTransferRate => &[
                "bits per second", "kilobits per second",
                "megabits per second", "gigabits per second",
            ],
            Category::DigitalStorage => &[
                "bits", "kilobits", "megabits", "gigabits", "terabits",
                "bytes", "kilobytes", "megabytes", "gigabytes", "terabytes",
            ],
            Category::Energy => &[
                "joules", "kilojoules", "calories", "kilocalories",
                "watt hours", "kilowatt hours",
            ],
            Category::Frequency => &["hertz", "kilohertz", "megahertz", "gigahertz"],
            Category::FuelEconomy => &["kilometers per liter", "miles per gallon"],
            Category::PlaneAngle => &["degrees", "radians", "gradians"],
            Category::Pressure => &[
                "pascals", "hectopascals", "kilopascals", "bars", "psi", "atmospheres",
            ],
            Category::Speed => &[
                "meters per second", "kilometers per hour", "miles per hour", "knots",
            ],
        }
    }

    /// Whether values in this category bypass the engine
    pub fn is_special_case(&self) -> bool {
        matches!(self, Category::Temperature | Category::FuelEconomy)
    }

    /// Display names of all categories
    pub fn names() -> Vec<&'static str> {
        Category::ALL.iter().map(Category::name).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    /// Case-insensitive match on the display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConversionError::UnknownCategory(wanted.to_string()))
    }
}

/// Immutable friendly-name -> canonical-token table
#[derive(Debug)]
pub struct UnitCatalog {
    tokens: HashMap<&'static str, &'static str>,
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitCatalog {
    pub fn new() -> Self {
        UnitCatalog {
            tokens: ENTRIES.iter().copied().collect(),
        }
    }

    /// Canonical token for a friendly name.
    ///
    /// Names missing from the table fall back to the name with spaces
    /// replaced by underscores ("nautical miles" -> "nautical_miles").
    /// That fallback is a best-effort guess: nothing checks that the engine
    /// knows the result, so an unknown name only fails at conversion time.
    pub fn resolve<'a>(&self, friendly_name: &'a str) -> Cow<'a, str> {
        match self.tokens.get(friendly_name) {
            Some(token) => Cow::Borrowed(*token),
            None => {
                tracing::trace!(friendly_name, "unit not tabulated, deriving token");
                Cow::Owned(friendly_name.replace(' ', "_"))
            }
        }
    }

    /// Whether the name has an explicit table entry
    pub fn contains(&self, friendly_name: &str) -> bool {
        self.tokens.contains_key(friendly_name)
    }

    /// Friendly unit names for a category, in presentation order
    pub fn units_for(&self, category: Category) -> &'static [&'static str] {
        category.units()
    }

    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// All table entries, sorted by friendly name
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries: Vec<_> = self.tokens.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_unstable();
        entries
    }
}
