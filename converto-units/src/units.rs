//! Unit definitions organized by category
//!
//! Primary symbols are short ("km", "kWh"); long names, plurals and the
//! snake_case spellings used by canonical tokens ("watt_hour") are aliases.

use std::collections::HashMap;
use std::sync::LazyLock;
use converto_core::Number;
use crate::{Unit, Dimension};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// SI prefixes accepted in front of a registered unit name, longest first
const SI_PREFIXES: [(&str, isize); 11] = [
    ("tera", 12),
    ("giga", 9),
    ("mega", 6),
    ("kilo", 3),
    ("hecto", 2),
    ("deca", 1),
    ("deci", -1),
    ("centi", -2),
    ("milli", -3),
    ("micro", -6),
    ("nano", -9),
];

/// Registry of all known units
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by symbol or alias
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        if let Some(unit) = self.units.get(symbol) {
            return Some(unit);
        }
        self.aliases.get(symbol).and_then(|canonical| self.units.get(canonical))
    }

    /// Look up a unit, falling back to an SI prefix word in front of a
    /// registered name ("kilobit", "hectopascal", "kilowatt_hour").
    pub fn resolve(&self, name: &str) -> Option<Unit> {
        if let Some(unit) = self.get(name) {
            return Some(unit.clone());
        }

        SI_PREFIXES.iter().find_map(|(prefix, exponent)| {
            let rest = name.strip_prefix(prefix)?;
            let base = self.get(rest)?;
            if base.has_offset() {
                return None;
            }
            tracing::trace!(name, prefix, base = %base.symbol, "resolved prefixed unit");
            Some(Unit::new(
                name,
                name,
                base.dimension,
                base.to_si_factor.mul(&Number::from_scaled(1, *exponent)),
                &base.category,
            ))
        })
    }

    fn register(&mut self, unit: Unit) {
        self.units.insert(unit.symbol.clone(), unit);
    }

    fn alias(&mut self, symbol: &str, aliases: &[&str]) {
        for alias in aliases {
            self.aliases.insert(alias.to_string(), symbol.to_string());
        }
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_mass_units();
        self.register_time_units();
        self.register_temperature_units();
        self.register_area_units();
        self.register_volume_units();
        self.register_velocity_units();
        self.register_energy_units();
        self.register_power_units();
        self.register_pressure_units();
        self.register_frequency_units();
        self.register_information_units();
        self.register_data_rate_units();
        self.register_angle_units();
    }

    fn register_length_units(&mut self) {
        let length = |symbol: &str, name: &str, factor: Number| {
            Unit::new(symbol, name, Dimension::LENGTH, factor, "length")
        };

        self.register(length("m", "meter", Number::from_i64(1)));
        self.register(length("km", "kilometer", Number::from_i64(1000)));
        self.register(length("cm", "centimeter", Number::from_scaled(1, -2)));
        self.register(length("mm", "millimeter", Number::from_scaled(1, -3)));
        self.register(length("um", "micrometer", Number::from_scaled(1, -6)));
        self.register(length("nm", "nanometer", Number::from_scaled(1, -9)));

        // International yard and pound agreement (1959)
        self.register(length("in", "inch", Number::from_scaled(254, -4)));
        self.register(length("ft", "foot", Number::from_scaled(3048, -4)));
        self.register(length("yd", "yard", Number::from_scaled(9144, -4)));
        self.register(length("mi", "mile", Number::from_scaled(1609344, -3)));
        self.register(length("nmi", "nautical mile", Number::from_i64(1852)));

        self.alias("m", &["meter", "meters", "metre", "metres"]);
        self.alias("km", &["kilometer", "kilometers", "kilometre", "kilometres"]);
        self.alias("cm", &["centimeter", "centimeters"]);
        self.alias("mm", &["millimeter", "millimeters"]);
        self.alias("um", &["micrometer", "micron", "μm"]);
        self.alias("nm", &["nanometer"]);
        self.alias("in", &["inch", "inches"]);
        self.alias("ft", &["foot", "feet"]);
        self.alias("yd", &["yard", "yards"]);
        self.alias("mi", &["mile", "miles"]);
        self.alias("nmi", &["nautical_mile", "nautical_miles"]);
    }

    fn register_mass_units(&mut self) {
        let mass = |symbol: &str, name: &str, factor: Number| {
            Unit::new(symbol, name, Dimension::MASS, factor, "mass")
        };

        self.register(mass("kg", "kilogram", Number::from_i64(1)));
        self.register(mass("g", "gram", Number::from_scaled(1, -3)));
        self.register(mass("mg", "milligram", Number::from_scaled(1, -6)));
        self.register(mass("t", "tonne", Number::from_i64(1000)));
        self.register(mass("lb", "pound", Number::from_scaled(45359237, -8)));
        self.register(mass("oz", "ounce", Number::from_scaled(28349523125, -12)));
        self.register(mass("st", "stone", Number::from_scaled(635029318, -8)));

        self.alias("kg", &["kilogram", "kilograms"]);
        self.alias("g", &["gram", "grams"]);
        self.alias("mg", &["milligram", "milligrams"]);
        self.alias("t", &["tonne", "tonnes", "metric_ton"]);
        self.alias("lb", &["pound", "pounds", "lbs"]);
        self.alias("oz", &["ounce", "ounces"]);
        self.alias("st", &["stone"]);
    }

    fn register_time_units(&mut self) {
        let time = |symbol: &str, name: &str, factor: Number| {
            Unit::new(symbol, name, Dimension::TIME, factor, "time")
        };

        self.register(time("s", "second", Number::from_i64(1)));
        self.register(time("ms", "millisecond", Number::from_scaled(1, -3)));
        self.register(time("min", "minute", Number::from_i64(60)));
        self.register(time("h", "hour", Number::from_i64(3600)));
        self.register(time("d", "day", Number::from_i64(86400)));
        self.register(time("wk", "week", Number::from_i64(604800)));

        self.alias("s", &["second", "seconds", "sec"]);
        self.alias("ms", &["millisecond", "milliseconds"]);
        self.alias("min", &["minute", "minutes"]);
        self.alias("h", &["hour", "hours", "hr"]);
        self.alias("d", &["day", "days"]);
        self.alias("wk", &["week", "weeks"]);
    }

    fn register_temperature_units(&mut self) {
        self.register(Unit::new("K", "kelvin", Dimension::TEMPERATURE, Number::from_i64(1), "temperature"));

        // K = C + 273.15
        self.register(Unit::with_offset(
            "degC", "celsius", Dimension::TEMPERATURE,
            Number::from_i64(1),
            Number::from_scaled(27315, -2),
            "temperature",
        ));

        // K = (F + 459.67) * 5/9 = F * 5/9 + 229835/900
        self.register(Unit::with_offset(
            "degF", "fahrenheit", Dimension::TEMPERATURE,
            Number::from_ratio(5, 9),
            Number::from_ratio(229835, 900),
            "temperature",
        ));

        self.register(Unit::new("degR", "rankine", Dimension::TEMPERATURE, Number::from_ratio(5, 9), "temperature"));

        self.alias("K", &["kelvin"]);
        self.alias("degC", &["celsius", "degree_Celsius", "°C"]);
        self.alias("degF", &["fahrenheit", "degree_Fahrenheit", "°F"]);
        self.alias("degR", &["rankine"]);
    }

    fn register_area_units(&mut self) {
        let area = |symbol: &str, name: &str, factor: Number| {
            Unit::new(symbol, name, Dimension::AREA, factor, "area")
        };

        self.register(area("m2", "square meter", Number::from_i64(1)));
        self.register(area("km2", "square kilometer", Number::from_i64(1_000_000)));
        self.register(area("cm2", "square centimeter", Number::from_scaled(1, -4)));
        self.register(area("ha", "hectare", Number::from_i64(10_000)));
        self.register(area("ac", "acre", Number::from_scaled(40468564224, -7)));
        self.register(area("ft2", "square foot", Number::from_scaled(9290304, -8)));
        self.register(area("in2", "square inch", Number::from_scaled(64516, -8)));
        self.register(area("yd2", "square yard", Number::from_scaled(83612736, -8)));
        self.register(area("mi2", "square mile", Number::from_scaled(2589988110336, -6)));

        self.alias("m2", &["m²", "square_meter"]);
        self.alias("km2", &["km²", "square_kilometer"]);
        self.alias("ft2", &["ft²", "square_foot", "sqft"]);
        self.alias("in2", &["in²", "square_inch"]);
        self.alias("yd2", &["yd²", "square_yard"]);
        self.alias("mi2", &["mi²", "square_mile"]);
        self.alias("ha", &["hectare", "hectares"]);
        self.alias("ac", &["acre", "acres"]);
    }

    fn register_volume_units(&mut self) {
        let volume = |symbol: &str, name: &str, factor: Number| {
            Unit::new(symbol, name, Dimension::VOLUME, factor, "volume")
        };

        self.register(volume("m3", "cubic meter", Number::from_i64(1)));
        self.register(volume("L", "liter", Number::from_scaled(1, -3)));
        self.register(volume("dL", "deciliter", Number::from_scaled(1, -4)));
        self.register(volume("cL", "centiliter", Number::from_scaled(1, -5)));
        self.register(volume("mL", "milliliter", Number::from_scaled(1, -6)));

        // US customary liquid measures (gallon = 231 in³)
        self.register(volume("gal", "gallon", Number::from_scaled(3785411784, -12)));
        self.register(volume("qt", "quart", Number::from_scaled(946352946, -12)));
        self.register(volume("pt", "pint", Number::from_scaled(473176473, -12)));
        self.register(volume("cup", "cup", Number::from_scaled(2365882365, -13)));
        self.register(volume("floz", "fluid ounce", Number::from_scaled(295735295625, -16)));
        self.register(volume("tbsp", "tablespoon", Number::from_scaled(1478676478125, -17)));
        self.register(volume("tsp", "teaspoon", Number::from_scaled(492892159375, -17)));

        self.register(volume("impgal", "imperial gallon", Number::from_scaled(454609, -8)));

        self.alias("m3", &["m³", "cubic_meter"]);
        self.alias("L", &["liter", "liters", "litre", "litres", "l"]);
        self.alias("dL", &["deciliter"]);
        self.alias("cL", &["centiliter"]);
        self.alias("mL", &["milliliter", "milliliters", "ml"]);
        self.alias("gal", &["gallon", "gallons"]);
        self.alias("qt", &["quart", "quarts"]);
        self.alias("pt", &["pint", "pints"]);
        self.alias("cup", &["cups"]);
        self.alias("floz", &["fluid_ounce", "fluid_ounces"]);
        self.alias("tbsp", &["tablespoon", "tablespoons"]);
        self.alias("tsp", &["teaspoon", "teaspoons"]);
        self.alias("impgal", &["imperial_gallon"]);
    }

    fn register_velocity_units(&mut self) {
        let velocity = |symbol: &str, name: &str, factor: Number| {
            Unit::new(symbol, name, Dimension::VELOCITY, factor, "velocity")
        };

        self.register(velocity("m/s", "meter per second", Number::from_i64(1)));
        self.register(velocity("km/h", "kilometer per hour", Number::from_ratio(5, 18)));
        self.register(velocity("mph", "mile per hour", Number::from_scaled(44704, -5)));
        self.register(velocity("ft/s", "foot per second", Number::from_scaled(3048, -4)));
        // One nautical mile (1852 m) per hour
        self.register(velocity("kn", "knot", Number::from_ratio(463, 900)));

        self.alias("km/h", &["kph", "kmh"]);
        self.alias("kn", &["knot", "knots"]);
        self.alias("ft/s", &["fps"]);
    }

    fn register_energy_units(&mut self) {
        let energy = |symbol: &str, name: &str, factor: Number| {
            Unit::new(symbol, name, Dimension::ENERGY, factor, "energy")
        };

        self.register(energy("J", "joule", Number::from_i64(1)));
        self.register(energy("kJ", "kilojoule", Number::from_i64(1000)));
        self.register(energy("MJ", "megajoule", Number::from_i64(1_000_000)));
        // Thermochemical calorie
        self.register(energy("cal", "calorie", Number::from_scaled(4184, -3)));
        self.register(energy("kcal", "kilocalorie", Number::from_i64(4184)));
        self.register(energy("Wh", "watt hour", Number::from_i64(3600)));
        self.register(energy("kWh", "kilowatt hour", Number::from_i64(3_600_000)));
        self.register(energy("eV", "electronvolt", Number::from_scaled(1602176634, -28)));
        self.register(energy("BTU", "British thermal unit", Number::from_scaled(105505585262, -8)));

        self.alias("J", &["joule", "joules"]);
        self.alias("kJ", &["kilojoule", "kilojoules"]);
        self.alias("MJ", &["megajoule", "megajoules"]);
        self.alias("cal", &["calorie", "calories"]);
        self.alias("kcal", &["kilocalorie", "kilocalories", "Cal"]);
        self.alias("Wh", &["watt_hour", "watt_hours"]);
        self.alias("kWh", &["kilowatt_hour", "kilowatt_hours"]);
        self.alias("eV", &["electron_volt"]);
    }

    fn register_power_units(&mut self) {
        let power = |symbol: &str, name: &str, factor: Number| {
            Unit::new(symbol, name, Dimension::POWER, factor, "power")
        };

        self.register(power("W", "watt", Number::from_i64(1)));
        self.register(power("kW", "kilowatt", Number::from_i64(1000)));
        self.register(power("MW", "megawatt", Number::from_i64(1_000_000)));
        // Mechanical horsepower
        self.register(power("hp", "horsepower", Number::from_scaled(745699871582270, -12)));

        self.alias("W", &["watt", "watts"]);
        self.alias("kW", &["kilowatt", "kilowatts"]);
        self.alias("MW", &["megawatt", "megawatts"]);
        self.alias("hp", &["horsepower"]);
    }

    fn register_pressure_units(&mut self) {
        let pressure = |symbol: &str, name: &str, factor: Number| {
            Unit::new(symbol, name, Dimension::PRESSURE, factor, "pressure")
        };

        self.register(pressure("Pa", "pascal", Number::from_i64(1)));
        self.register(pressure("hPa", "hectopascal", Number::from_i64(100)));
        self.register(pressure("kPa", "kilopascal", Number::from_i64(1000)));
        self.register(pressure("MPa", "megapascal", Number::from_i64(1_000_000)));
        self.register(pressure("bar", "bar", Number::from_i64(100_000)));
        self.register(pressure("mbar", "millibar", Number::from_i64(100)));
        self.register(pressure("atm", "atmosphere", Number::from_i64(101_325)));
        // Pound-force per square inch
        self.register(pressure("psi", "psi", Number::from_scaled(6894757293168, -9)));
        self.register(pressure("torr", "torr", Number::from_ratio(101_325, 760)));
        self.register(pressure("mmHg", "millimeter of mercury", Number::from_scaled(133322387415, -9)));

        self.alias("Pa", &["pascal", "pascals"]);
        self.alias("hPa", &["hectopascal", "hectopascals"]);
        self.alias("kPa", &["kilopascal", "kilopascals"]);
        self.alias("MPa", &["megapascal", "megapascals"]);
        self.alias("bar", &["bars"]);
        self.alias("mbar", &["millibar", "millibars"]);
        self.alias("atm", &["atmosphere", "atmospheres"]);
    }

    fn register_frequency_units(&mut self) {
        let frequency = |symbol: &str, name: &str, factor: Number| {
            Unit::new(symbol, name, Dimension::FREQUENCY, factor, "frequency")
        };

        self.register(frequency("Hz", "hertz", Number::from_i64(1)));
        self.register(frequency("kHz", "kilohertz", Number::from_i64(1000)));
        self.register(frequency("MHz", "megahertz", Number::from_i64(1_000_000)));
        self.register(frequency("GHz", "gigahertz", Number::from_i64(1_000_000_000)));
        self.register(frequency("rpm", "revolutions per minute", Number::from_ratio(1, 60)));

        self.alias("Hz", &["hertz"]);
        self.alias("kHz", &["kilohertz"]);
        self.alias("MHz", &["megahertz"]);
        self.alias("GHz", &["gigahertz"]);
    }

    fn register_information_units(&mut self) {
        let data = |symbol: &str, name: &str, bits: i64| {
            Unit::new(symbol, name, Dimension::INFORMATION, Number::from_i64(bits), "data")
        };

        // Decimal prefixes: a kilobyte is 1000 bytes
        self.register(data("bit", "bit", 1));
        self.register(data("kbit", "kilobit", 1_000));
        self.register(data("Mbit", "megabit", 1_000_000));
        self.register(data("Gbit", "gigabit", 1_000_000_000));
        self.register(data("Tbit", "terabit", 1_000_000_000_000));
        self.register(data("B", "byte", 8));
        self.register(data("kB", "kilobyte", 8_000));
        self.register(data("MB", "megabyte", 8_000_000));
        self.register(data("GB", "gigabyte", 8_000_000_000));
        self.register(data("TB", "terabyte", 8_000_000_000_000));

        // Binary units (IEC)
        self.register(data("KiB", "kibibyte", 8 << 10));
        self.register(data("MiB", "mebibyte", 8 << 20));
        self.register(data("GiB", "gibibyte", 8 << 30));
        self.register(data("TiB", "tebibyte", 8 << 40));

        self.alias("bit", &["bits"]);
        self.alias("kbit", &["kilobit", "kilobits"]);
        self.alias("Mbit", &["megabit", "megabits"]);
        self.alias("Gbit", &["gigabit", "gigabits"]);
        self.alias("Tbit", &["terabit", "terabits"]);
        self.alias("B", &["byte", "bytes"]);
        self.alias("kB", &["kilobyte", "kilobytes"]);
        self.alias("MB", &["megabyte", "megabytes"]);
        self.alias("GB", &["gigabyte", "gigabytes"]);
        self.alias("TB", &["terabyte", "terabytes"]);
        self.alias("KiB", &["kibibyte"]);
        self.alias("MiB", &["mebibyte"]);
        self.alias("GiB", &["gibibyte"]);
        self.alias("TiB", &["tebibyte"]);
    }

    fn register_data_rate_units(&mut self) {
        let rate = |symbol: &str, name: &str, bits: i64| {
            Unit::new(symbol, name, Dimension::DATA_RATE, Number::from_i64(bits), "data_rate")
        };

        self.register(rate("bps", "bit per second", 1));
        self.register(rate("kbps", "kilobit per second", 1_000));
        self.register(rate("Mbps", "megabit per second", 1_000_000));
        self.register(rate("Gbps", "gigabit per second", 1_000_000_000));
    }

    fn register_angle_units(&mut self) {
        let angle = |symbol: &str, name: &str, factor: Number| {
            Unit::new(symbol, name, Dimension::DIMENSIONLESS, factor, "angle")
        };
        let pi = Number::pi(50);

        self.register(angle("rad", "radian", Number::from_i64(1)));
        self.register(angle("deg", "degree", pi.mul_ratio(1, 180)));
        self.register(angle("grad", "gradian", pi.mul_ratio(1, 200)));
        self.register(angle("arcmin", "arcminute", pi.mul_ratio(1, 10_800)));
        self.register(angle("arcsec", "arcsecond", pi.mul_ratio(1, 648_000)));
        self.register(angle("turn", "turn", pi.mul_ratio(2, 1)));

        self.alias("rad", &["radian", "radians"]);
        self.alias("deg", &["degree", "degrees", "°"]);
        self.alias("grad", &["gradian", "gradians", "gon"]);
        self.alias("arcmin", &["arcminute", "arcminutes"]);
        self.alias("arcsec", &["arcsecond", "arcseconds"]);
        self.alias("turn", &["turns", "revolution"]);
    }
}
