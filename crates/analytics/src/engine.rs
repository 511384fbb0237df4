use crate::error::AnalyticsError;
use crate::report::CampaignEvaluation;
use crate::scenarios::evaluate_scenario;
use crate::zones::{DEFAULT_CANDIDATE_RATES, analyze_zones};
use core_types::{CampaignInputs, ensure_ascending, ensure_rate};
use rust_decimal::Decimal;

/// A stateless calculator that turns campaign inputs into a full evaluation.
///
/// The only thing it holds is the ordered list of candidate conversion rates used
/// for the profit/loss zone analysis, so one engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    candidate_rates: Vec<Decimal>,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self {
            candidate_rates: DEFAULT_CANDIDATE_RATES.to_vec(),
        }
    }
}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine that places the given candidate rates on the zone chart.
    ///
    /// The rates must be valid conversion rates and strictly ascending.
    pub fn with_candidate_rates(candidate_rates: Vec<Decimal>) -> Result<Self, AnalyticsError> {
        for rate in &candidate_rates {
            ensure_rate("candidate_rates", *rate)?;
        }
        ensure_ascending("candidate_rates", &candidate_rates)?;
        Ok(Self { candidate_rates })
    }

    pub fn candidate_rates(&self) -> &[Decimal] {
        &self.candidate_rates
    }

    /// The main entry point for evaluating a campaign.
    ///
    /// # Arguments
    ///
    /// * `inputs` - CPC, commission and the expected conversion rate.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `CampaignEvaluation` or an `AnalyticsError`.
    pub fn evaluate(&self, inputs: &CampaignInputs) -> Result<CampaignEvaluation, AnalyticsError> {
        inputs.validate()?;

        // The headline metrics are the scenario for the expected rate.
        let headline = evaluate_scenario(inputs.cpc, inputs.commission, inputs.conversion_rate)?;

        let zones = analyze_zones(inputs.cpc, inputs.commission, &self.candidate_rates)?;

        tracing::debug!(
            cpa = %headline.cpa,
            cpc_max = %headline.cpc_max,
            status = %headline.status,
            "Campaign evaluated"
        );

        Ok(CampaignEvaluation {
            inputs: *inputs,
            cpa: headline.cpa,
            cpc_max: headline.cpc_max,
            status: headline.status,
            scenarios: vec![headline],
            zones,
        })
    }
}
