//! Request DTOs for the registry API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::registry::{CityId, CriterionId, NewProfile, ProfileUpdate, UserId};

/// Request body for POST /users
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterProfileRequest {
    pub id: UserId,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub child_birth_dates: Vec<NaiveDate>,
    #[serde(default)]
    pub criteria: Vec<CriterionId>,
    #[serde(default)]
    pub city_id: Option<CityId>,
}

impl RegisterProfileRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if has_duplicates(&self.criteria) {
            return Some("Criteria must not repeat".to_string());
        }
        if self.child_birth_dates.iter().any(|d| *d < self.birth_date) {
            return Some("Child birth date precedes the user's birth date".to_string());
        }
        None
    }

    pub fn into_new_profile(self) -> NewProfile {
        NewProfile {
            id: self.id,
            birth_date: self.birth_date,
            child_birth_dates: self.child_birth_dates.into_iter().collect(),
            selected_criteria: self.criteria.into_iter().collect(),
            city_id: self.city_id,
        }
    }
}

/// Request body for PUT /users/:id/criteria
///
/// A full replacement: `city_id` is required, `null` means no city.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCriteriaRequest {
    pub criteria: Vec<CriterionId>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub city_id: Option<CityId>,
}

impl UpdateCriteriaRequest {
    pub fn validate(&self) -> Option<String> {
        if has_duplicates(&self.criteria) {
            return Some("Criteria must not repeat".to_string());
        }
        None
    }

    pub fn into_update(self) -> ProfileUpdate {
        ProfileUpdate {
            selected_criteria: self.criteria.into_iter().collect(),
            city_id: self.city_id,
        }
    }
}

fn has_duplicates(criteria: &[CriterionId]) -> bool {
    let unique: BTreeSet<&CriterionId> = criteria.iter().collect();
    unique.len() != criteria.len()
}
