use core_types::{CampaignInputs, CampaignStatus, Zone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The metrics for a single conversion-rate scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub conversion_rate: Decimal,
    pub cpa: Decimal,
    pub cpc_max: Decimal,
    pub status: CampaignStatus,
}

/// One candidate rate placed on the profit/loss chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonePoint {
    pub conversion_rate: Decimal,
    pub cpc_max: Decimal,
    pub zone: Zone,
}

/// The lowest candidate rate at which the current CPC becomes sustainable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEvenPoint {
    pub conversion_rate: Decimal,
    /// The maximum CPC at that rate. Always at or above the current CPC.
    pub cpc_max: Decimal,
}

/// Profit and loss zones for a current CPC over an ascending set of candidate rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneAnalysis {
    pub current_cpc: Decimal,
    pub points: Vec<ZonePoint>,
    pub break_even: Option<BreakEvenPoint>, // None when no candidate sustains the current CPC
}

impl ZoneAnalysis {
    /// Candidate rates where the current CPC is sustainable.
    pub fn profit_rates(&self) -> Vec<Decimal> {
        self.rates_in(Zone::Profit)
    }

    /// Candidate rates where the current CPC loses money.
    pub fn loss_rates(&self) -> Vec<Decimal> {
        self.rates_in(Zone::Loss)
    }

    fn rates_in(&self, zone: Zone) -> Vec<Decimal> {
        self.points
            .iter()
            .filter(|p| p.zone == zone)
            .map(|p| p.conversion_rate)
            .collect()
    }
}

/// The complete outcome of evaluating one campaign.
///
/// This is the single data transfer object handed to the presentation layer:
/// headline metrics for the expected rate, the scenario table, and the chart zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignEvaluation {
    pub inputs: CampaignInputs,

    // I. Headline metrics at the expected conversion rate
    pub cpa: Decimal,
    pub cpc_max: Decimal,
    pub status: CampaignStatus,

    // II. Scenario table
    pub scenarios: Vec<ScenarioResult>,

    // III. Chart support
    pub zones: ZoneAnalysis,
}
