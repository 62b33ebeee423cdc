use serde::Deserialize;

/// Environment variable overriding the pre-funded starting balance.
pub const STARTING_BALANCE_ENV: &str = "VENDING_STARTING_BALANCE";

/// Machine construction settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Balance the session starts with. Machines are pre-funded, not empty.
    pub starting_balance: f64,
}

impl MachineConfig {
    pub const DEFAULT_STARTING_BALANCE: f64 = 10.0;

    pub fn new(starting_balance: f64) -> Self {
        Self { starting_balance }
    }

    /// Read settings from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        match std::env::var(STARTING_BALANCE_ENV) {
            Ok(raw) => Self::from_raw(&raw),
            Err(_) => Self::default(),
        }
    }

    fn from_raw(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(balance) if balance.is_finite() && balance >= 0.0 => Self::new(balance),
            _ => {
                tracing::warn!(
                    value = raw,
                    "{STARTING_BALANCE_ENV} is not a non-negative number; using default"
                );
                Self::default()
            }
        }
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STARTING_BALANCE)
    }
}
