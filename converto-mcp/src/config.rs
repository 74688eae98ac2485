//! Server settings read from the environment at startup

use std::env;

use converto::DEFAULT_DECIMALS;

/// Upper bound for `CONVERTO_DECIMALS`
pub const MAX_DECIMALS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Decimal places of the converted value in result messages
    pub decimals: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { decimals: DEFAULT_DECIMALS }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; invalid values fall back to the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ServerConfig::default();

        if let Some(raw) = lookup("CONVERTO_DECIMALS") {
            match raw.trim().parse::<u32>() {
                Ok(n) if n <= MAX_DECIMALS => config.decimals = n,
                _ => tracing::warn!(
                    value = %raw,
                    default = config.decimals,
                    "CONVERTO_DECIMALS must be an integer in 0..={}, using default",
                    MAX_DECIMALS
                ),
            }
        }

        config
    }
}
