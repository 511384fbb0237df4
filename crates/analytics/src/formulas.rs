//! The three metric formulas every other calculation in this crate is built on.

use crate::error::AnalyticsError;
use core_types::{CampaignStatus, ensure_positive, ensure_rate};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Cost per acquisition: what it costs to generate one sale.
///
/// `cpa = cpc / conversion_rate`
///
/// Fails with `AnalyticsError::InvalidInput` when either argument is not strictly
/// positive, so a zero rate can never produce an infinite CPA.
pub fn calculate_cpa(cpc: Decimal, conversion_rate: Decimal) -> Result<Decimal, AnalyticsError> {
    ensure_positive("cpc", cpc)?;
    ensure_rate("conversion_rate", conversion_rate)?;

    cpc.checked_div(conversion_rate)
        .ok_or_else(|| AnalyticsError::Overflow("cpa".to_string()))
}

/// The highest CPC the campaign can pay without losing money per sale.
///
/// `cpc_max = commission * conversion_rate`
pub fn calculate_max_cpc(
    commission: Decimal,
    conversion_rate: Decimal,
) -> Result<Decimal, AnalyticsError> {
    ensure_positive("commission", commission)?;
    ensure_rate("conversion_rate", conversion_rate)?;

    commission
        .checked_mul(conversion_rate)
        .ok_or_else(|| AnalyticsError::Overflow("cpc_max".to_string()))
}

/// Compares the cost of a sale with what the sale earns.
///
/// Equality is exact. Both sides are `Decimal`, so a CPA that is mathematically
/// equal to the commission (e.g. `1.5 / 0.01` against `150`) compares equal.
pub fn feedback_status(cpa: Decimal, commission: Decimal) -> CampaignStatus {
    match cpa.cmp(&commission) {
        Ordering::Less => CampaignStatus::Profitable,
        Ordering::Equal => CampaignStatus::BreakEven,
        Ordering::Greater => CampaignStatus::Unprofitable,
    }
}
