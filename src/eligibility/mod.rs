//! Eligibility Module
//!
//! Benefit-eligibility cache: staleness validation, criteria-subset
//! matching and the orchestrating per-user cache.

mod cache;
pub mod matcher;
pub mod staleness;
mod stats;


// Re-export public types
pub use cache::{CacheOutcome, EligibilityCache, EligibilityRead};
pub use matcher::eligible_benefits;
pub use stats::EligibilityStats;
