pub mod enums;
pub mod error;
pub mod inputs;

// Re-export the core types to provide a clean public API.
pub use enums::{CampaignStatus, Zone};
pub use error::CoreError;
pub use inputs::{CampaignInputs, DEFAULT_CANDIDATE_RATES, ensure_ascending, ensure_positive, ensure_rate, rate_from_percent};
