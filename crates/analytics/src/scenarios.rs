use crate::error::AnalyticsError;
use crate::formulas::{calculate_cpa, calculate_max_cpc, feedback_status};
use crate::report::ScenarioResult;
use rust_decimal::Decimal;

/// An ordered sequence of conversion rates to evaluate.
///
/// Built from a single rate or any ordered collection of rates. Order and
/// duplicates are kept exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RateSequence(Vec<Decimal>);

impl RateSequence {
    pub fn as_slice(&self) -> &[Decimal] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Decimal> for RateSequence {
    fn from(rate: Decimal) -> Self {
        Self(vec![rate])
    }
}

impl From<Vec<Decimal>> for RateSequence {
    fn from(rates: Vec<Decimal>) -> Self {
        Self(rates)
    }
}

impl From<&[Decimal]> for RateSequence {
    fn from(rates: &[Decimal]) -> Self {
        Self(rates.to_vec())
    }
}

impl From<&Vec<Decimal>> for RateSequence {
    fn from(rates: &Vec<Decimal>) -> Self {
        Self(rates.clone())
    }
}

impl<const N: usize> From<[Decimal; N]> for RateSequence {
    fn from(rates: [Decimal; N]) -> Self {
        Self(rates.to_vec())
    }
}

impl<const N: usize> From<&[Decimal; N]> for RateSequence {
    fn from(rates: &[Decimal; N]) -> Self {
        Self(rates.to_vec())
    }
}

/// Evaluates all three formulas for one conversion rate.
pub fn evaluate_scenario(
    cpc: Decimal,
    commission: Decimal,
    conversion_rate: Decimal,
) -> Result<ScenarioResult, AnalyticsError> {
    let cpa = calculate_cpa(cpc, conversion_rate)?;
    let cpc_max = calculate_max_cpc(commission, conversion_rate)?;
    let status = feedback_status(cpa, commission);

    Ok(ScenarioResult {
        conversion_rate,
        cpa,
        cpc_max,
        status,
    })
}

/// Evaluates a campaign over one or more conversion rates.
///
/// Returns one `ScenarioResult` per rate, in the order the rates were given.
/// Nothing is sorted or deduplicated. The first invalid rate aborts the whole
/// evaluation with its error.
pub fn calculate_scenarios(
    cpc: Decimal,
    commission: Decimal,
    rates: impl Into<RateSequence>,
) -> Result<Vec<ScenarioResult>, AnalyticsError> {
    let rates = rates.into();
    tracing::debug!(%cpc, %commission, count = rates.len(), "Evaluating scenarios");

    rates
        .as_slice()
        .iter()
        .map(|&rate| evaluate_scenario(cpc, commission, rate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::CampaignStatus;
    use rust_decimal_macros::dec;

    #[test]
    fn test_single_rate_yields_one_scenario() {
        let results = calculate_scenarios(dec!(2.0), dec!(150.0), dec!(0.02)).unwrap();

        assert_eq!(results.len(), 1);
        let scenario = results[0];
        assert_eq!(scenario.conversion_rate, dec!(0.02));
        assert_eq!(scenario.cpa, dec!(100));
        assert_eq!(scenario.cpc_max, dec!(3.0));
        assert_eq!(scenario.status, CampaignStatus::Profitable);
    }

    #[test]
    fn test_order_and_duplicates_are_preserved() {
        let rates = vec![dec!(0.02), dec!(0.005), dec!(0.02), dec!(0.01)];
        let results = calculate_scenarios(dec!(1.0), dec!(100.0), &rates).unwrap();

        let returned: Vec<Decimal> = results.iter().map(|r| r.conversion_rate).collect();
        assert_eq!(returned, rates);
    }

    #[test]
    fn test_statuses_follow_each_rate() {
        // cpa = 1 / r, commission = 100: 0.005 -> 200, 0.01 -> 100, 0.02 -> 50
        let results =
            calculate_scenarios(dec!(1.0), dec!(100.0), [dec!(0.005), dec!(0.01), dec!(0.02)]).unwrap();

        let statuses: Vec<CampaignStatus> = results.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                CampaignStatus::Unprofitable,
                CampaignStatus::BreakEven,
                CampaignStatus::Profitable
            ]
        );
    }

    #[test]
    fn test_empty_sequence_yields_empty_set() {
        let results = calculate_scenarios(dec!(1.0), dec!(100.0), Vec::<Decimal>::new()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_invalid_rate_anywhere_fails_the_set() {
        let err = calculate_scenarios(dec!(1.0), dec!(100.0), [dec!(0.01), dec!(0)]).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput(..)));
    }
}
