//! Response DTOs for the registry API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::eligibility::{EligibilityRead, EligibilityStats};
use crate::registry::{BenefitId, UserId, UserProfile};

/// Response body for GET /users/:id/benefits
#[derive(Debug, Clone, Serialize)]
pub struct EligibleBenefitsResponse {
    pub user_id: UserId,
    /// Ascending benefit ids
    pub benefit_ids: Vec<BenefitId>,
    /// True when served from the profile's cached set
    pub cache_hit: bool,
}

impl EligibleBenefitsResponse {
    pub fn new(user_id: UserId, read: EligibilityRead) -> Self {
        Self {
            user_id,
            cache_hit: read.is_hit(),
            benefit_ids: read.benefit_ids.into_iter().collect(),
        }
    }
}

/// Response body for POST /users and PUT /users/:id/criteria
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub user_id: UserId,
    pub date_criteria_selected: DateTime<Utc>,
}

impl ProfileResponse {
    pub fn registered(profile: &UserProfile) -> Self {
        Self {
            message: format!("Profile {} registered", profile.id),
            user_id: profile.id,
            date_criteria_selected: profile.date_criteria_selected,
        }
    }

    pub fn updated(profile: &UserProfile) -> Self {
        Self {
            message: format!("Criteria for profile {} updated", profile.id),
            user_id: profile.id,
            date_criteria_selected: profile.date_criteria_selected,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub stale_rejections: u64,
    pub not_found: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<EligibilityStats> for StatsResponse {
    fn from(stats: EligibilityStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            stale_rejections: stats.stale_rejections,
            not_found: stats.not_found,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
