use crate::error::ConfigError;
use core_types::{DEFAULT_CANDIDATE_RATES, ensure_ascending, ensure_rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The root configuration structure for the entire application.
///
/// Every section is optional in `roi.toml`; missing sections fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scenarios: Scenarios,
    pub input: InputLimits,
    pub display: DisplaySettings,
}

impl Config {
    /// Checks the values that serde alone cannot enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scenarios.validate()?;
        self.input.validate()?;
        self.display.validate()?;
        Ok(())
    }
}

/// Parameters for the profit/loss zone chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Scenarios {
    /// Conversion rates (as fractions) placed on the chart. Must be strictly ascending.
    pub candidate_rates: Vec<Decimal>,
}

impl Default for Scenarios {
    fn default() -> Self {
        Self {
            candidate_rates: DEFAULT_CANDIDATE_RATES.to_vec(),
        }
    }
}

impl Scenarios {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.candidate_rates.is_empty() {
            return Err(ConfigError::invalid("scenarios.candidate_rates", "must not be empty"));
        }
        for rate in &self.candidate_rates {
            ensure_rate("scenarios.candidate_rates", *rate)
                .map_err(|e| ConfigError::invalid("scenarios.candidate_rates", e.to_string()))?;
        }
        ensure_ascending("scenarios.candidate_rates", &self.candidate_rates)
            .map_err(|e| ConfigError::invalid("scenarios.candidate_rates", e.to_string()))?;
        Ok(())
    }
}

/// Bounds applied to user-entered values before they reach the engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// The highest conversion rate a user may enter, as a percentage (10 = 10%).
    pub max_conversion_pct: Decimal,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_conversion_pct: dec!(10),
        }
    }
}

impl InputLimits {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_conversion_pct <= Decimal::ZERO || self.max_conversion_pct > dec!(100) {
            return Err(ConfigError::invalid(
                "input.max_conversion_pct",
                format!("must be in (0, 100], got {}", self.max_conversion_pct),
            ));
        }
        Ok(())
    }
}

/// How results are rendered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Prefix written before every amount of money (e.g. "R$", "$").
    pub currency_symbol: String,
    pub decimal_places: u32,
    pub output: OutputFormat,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            decimal_places: 2,
            output: OutputFormat::Table,
        }
    }
}

impl DisplaySettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.decimal_places > 10 {
            return Err(ConfigError::invalid(
                "display.decimal_places",
                format!("must be at most 10, got {}", self.decimal_places),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,
    /// The full evaluation as JSON.
    Json,
}
