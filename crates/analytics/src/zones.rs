use crate::error::AnalyticsError;
use crate::report::{BreakEvenPoint, ScenarioResult, ZoneAnalysis, ZonePoint};
use crate::scenarios::{RateSequence, calculate_scenarios};
pub use core_types::DEFAULT_CANDIDATE_RATES;
use core_types::{Zone, ensure_ascending};
use rust_decimal::Decimal;

/// Classifies a scenario against the current CPC.
pub fn zone_for(current_cpc: Decimal, cpc_max: Decimal) -> Zone {
    if cpc_max >= current_cpc {
        Zone::Profit
    } else {
        Zone::Loss
    }
}

/// Returns the first scenario, in the given order, whose maximum CPC sustains `current_cpc`.
pub fn find_break_even(current_cpc: Decimal, scenarios: &[ScenarioResult]) -> Option<BreakEvenPoint> {
    scenarios
        .iter()
        .find(|s| zone_for(current_cpc, s.cpc_max) == Zone::Profit)
        .map(|s| BreakEvenPoint {
            conversion_rate: s.conversion_rate,
            cpc_max: s.cpc_max,
        })
}

/// Splits an ascending set of candidate rates into profit and loss zones for the
/// current CPC, and locates the break-even rate.
///
/// # Arguments
///
/// * `cpc` - The CPC currently being paid.
/// * `commission` - Net revenue per sale.
/// * `candidate_rates` - Strictly ascending conversion rates to place on the chart.
///
/// # Returns
///
/// A `ZoneAnalysis` whose `break_even` is `None` when no candidate rate is high
/// enough to sustain the current CPC. That is a normal outcome, not an error.
pub fn analyze_zones(
    cpc: Decimal,
    commission: Decimal,
    candidate_rates: impl Into<RateSequence>,
) -> Result<ZoneAnalysis, AnalyticsError> {
    let candidate_rates = candidate_rates.into();
    ensure_ascending("candidate_rates", candidate_rates.as_slice())?;

    let scenarios = calculate_scenarios(cpc, commission, candidate_rates)?;

    let points = scenarios
        .iter()
        .map(|s| ZonePoint {
            conversion_rate: s.conversion_rate,
            cpc_max: s.cpc_max,
            zone: zone_for(cpc, s.cpc_max),
        })
        .collect();

    let break_even = find_break_even(cpc, &scenarios);
    match &break_even {
        Some(point) => tracing::debug!(rate = %point.conversion_rate, "Break-even found"),
        None => tracing::debug!(%cpc, "No candidate conversion rate sustains the current CPC"),
    }

    Ok(ZoneAnalysis {
        current_cpc: cpc,
        points,
        break_even,
    })
}
