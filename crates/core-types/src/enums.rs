use serde::{Deserialize, Serialize};
use std::fmt;

/// The qualitative verdict for a campaign, derived from comparing CPA with commission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignStatus {
    /// Each sale costs less than it earns.
    Profitable,
    /// Each sale costs exactly what it earns.
    BreakEven,
    /// Each sale costs more than it earns.
    Unprofitable,
}

impl CampaignStatus {
    /// Returns true when the campaign does not lose money per sale.
    pub fn is_sustainable(&self) -> bool {
        !matches!(self, CampaignStatus::Unprofitable)
    }

    /// A short human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            CampaignStatus::Profitable => "Profitable",
            CampaignStatus::BreakEven => "Break-even",
            CampaignStatus::Unprofitable => "Unprofitable",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which side of the current CPC a scenario's maximum CPC falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// The maximum CPC is at or above the current CPC.
    Profit,
    /// The maximum CPC is below the current CPC.
    Loss,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Profit => f.write_str("Profit"),
            Zone::Loss => f.write_str("Loss"),
        }
    }
}
