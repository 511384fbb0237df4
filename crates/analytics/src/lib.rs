//! # ROI Pilot Analytics Engine
//!
//! This crate decides whether an advertising campaign pays for itself. Given the
//! cost per click, the commission per sale and a conversion rate, it derives the
//! cost per acquisition, the maximum sustainable CPC and a profitability verdict,
//! and locates the break-even rate over a set of candidate conversion rates.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of external systems
//!   or of how results are displayed. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every function is pure. The same inputs always produce
//!   the same outputs, and invalid inputs fail with `AnalyticsError::InvalidInput`
//!   instead of producing infinite or meaningless numbers.
//!
//! ## Public API
//!
//! - `calculate_cpa`, `calculate_max_cpc`, `feedback_status`: the metric formulas.
//! - `calculate_scenarios`: evaluates the formulas over an ordered sequence of rates.
//! - `analyze_zones`: profit/loss zones and the break-even point.
//! - `AnalyticsEngine`: runs all of the above for one campaign.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod formulas;
pub mod report;
pub mod scenarios;
pub mod zones;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use formulas::{calculate_cpa, calculate_max_cpc, feedback_status};
pub use report::{BreakEvenPoint, CampaignEvaluation, ScenarioResult, ZoneAnalysis, ZonePoint};
pub use scenarios::{RateSequence, calculate_scenarios, evaluate_scenario};
pub use zones::{DEFAULT_CANDIDATE_RATES, analyze_zones, find_break_even};
