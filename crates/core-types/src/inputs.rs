use crate::error::CoreError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The conversion rates plotted on the profit/loss chart: 0.3% through 2%.
pub const DEFAULT_CANDIDATE_RATES: [Decimal; 8] = [
    dec!(0.003),
    dec!(0.005),
    dec!(0.0075),
    dec!(0.01),
    dec!(0.0125),
    dec!(0.015),
    dec!(0.0175),
    dec!(0.02),
];

/// The three numbers a user supplies to evaluate a campaign.
///
/// All fields are plain `Decimal`s: `cpc` and `commission` are amounts of money in
/// whatever currency the caller uses, and `conversion_rate` is a fraction (0.02 = 2%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignInputs {
    /// Cost paid per ad click.
    pub cpc: Decimal,
    /// Net revenue earned per sale.
    pub commission: Decimal,
    /// Expected fraction of clicks that convert into a sale.
    pub conversion_rate: Decimal,
}

impl CampaignInputs {
    /// Creates a validated set of inputs.
    pub fn new(cpc: Decimal, commission: Decimal, conversion_rate: Decimal) -> Result<Self, CoreError> {
        let inputs = Self {
            cpc,
            commission,
            conversion_rate,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Checks every field against its domain.
    pub fn validate(&self) -> Result<(), CoreError> {
        ensure_positive("cpc", self.cpc)?;
        ensure_positive("commission", self.commission)?;
        ensure_rate("conversion_rate", self.conversion_rate)?;
        Ok(())
    }
}

/// Fails unless `value` is strictly greater than zero.
pub fn ensure_positive(field: &str, value: Decimal) -> Result<Decimal, CoreError> {
    if value <= Decimal::ZERO {
        return Err(CoreError::invalid(field, format!("must be greater than 0, got {value}")));
    }
    Ok(value)
}

/// Fails unless `value` is a conversion probability in (0, 1].
pub fn ensure_rate(field: &str, value: Decimal) -> Result<Decimal, CoreError> {
    ensure_positive(field, value)?;
    if value > Decimal::ONE {
        return Err(CoreError::invalid(field, format!("must be at most 1, got {value}")));
    }
    Ok(value)
}

/// Converts a percentage such as `2.5` into a fraction (`0.025`).
///
/// The percentage must lie in (0, `max_pct`].
pub fn rate_from_percent(pct: Decimal, max_pct: Decimal) -> Result<Decimal, CoreError> {
    ensure_positive("conversion_pct", pct)?;
    if pct > max_pct {
        return Err(CoreError::invalid(
            "conversion_pct",
            format!("must be at most {max_pct}%, got {pct}%"),
        ));
    }
    ensure_rate("conversion_pct", pct / dec!(100))
}

/// Fails unless every value is strictly greater than the one before it.
pub fn ensure_ascending(field: &str, values: &[Decimal]) -> Result<(), CoreError> {
    if let Some(pair) = values.windows(2).find(|w| w[1] <= w[0]) {
        return Err(CoreError::invalid(
            field,
            format!("must be strictly ascending, but {} follows {}", pair[1], pair[0]),
        ));
    }
    Ok(())
}
