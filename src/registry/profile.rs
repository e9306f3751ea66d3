//! User Profile Module
//!
//! Defines the profile snapshot carried between the store, the staleness
//! validator and the matcher.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{BenefitId, CityId, CriterionId, UserId};

// == User Profile ==
/// Full profile as persisted by the profile store.
///
/// Every write is a full replace. `cached_benefit_ids` is only meaningful
/// while `freshness_flag` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub child_birth_dates: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub selected_criteria: BTreeSet<CriterionId>,
    #[serde(default)]
    pub city_id: Option<CityId>,
    /// Stamped whenever `selected_criteria` or `city_id` changes
    pub date_criteria_selected: DateTime<Utc>,
    #[serde(default)]
    pub freshness_flag: bool,
    #[serde(default)]
    pub cached_benefit_ids: BTreeSet<BenefitId>,
}

/// Registration payload for a new profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfile {
    pub id: UserId,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub child_birth_dates: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub selected_criteria: BTreeSet<CriterionId>,
    #[serde(default)]
    pub city_id: Option<CityId>,
}

/// Criteria edit applied by the profile service.
///
/// Replaces both fields. `city_id` must be present when deserialized;
/// an explicit `null` clears the city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub selected_criteria: BTreeSet<CriterionId>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub city_id: Option<CityId>,
}

impl UserProfile {
    // == Constructor ==
    /// Creates a profile in the miss state, stamped with `now`.
    pub fn register(new: NewProfile, now: DateTime<Utc>) -> Self {
        Self {
            id: new.id,
            birth_date: new.birth_date,
            child_birth_dates: new.child_birth_dates,
            selected_criteria: new.selected_criteria,
            city_id: new.city_id,
            date_criteria_selected: now,
            freshness_flag: false,
            cached_benefit_ids: BTreeSet::new(),
        }
    }

    // == Cached Benefits ==
    /// Returns the cached benefit set only while it is trustworthy.
    pub fn cached_benefits(&self) -> Option<&BTreeSet<BenefitId>> {
        self.freshness_flag.then_some(&self.cached_benefit_ids)
    }

    // == Birth Dates ==
    /// The user's own birth date followed by every child's birth date.
    pub fn birth_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        std::iter::once(self.birth_date).chain(self.child_birth_dates.iter().copied())
    }

    /// Calendar date the current criteria were chosen on.
    pub fn criteria_selected_on(&self) -> NaiveDate {
        self.date_criteria_selected.date_naive()
    }

    // == Invalidate ==
    /// Applies a criteria edit: replaces criteria and city, clears the
    /// freshness flag and restamps the selection date in one step.
    pub fn with_criteria(mut self, update: ProfileUpdate, now: DateTime<Utc>) -> Self {
        self.selected_criteria = update.selected_criteria;
        self.city_id = update.city_id;
        self.date_criteria_selected = now;
        self.freshness_flag = false;
        self
    }

    // == Fill Cache ==
    /// Stores a freshly computed benefit set and marks it trustworthy.
    pub(crate) fn with_cached_benefits(mut self, benefit_ids: BTreeSet<BenefitId>) -> Self {
        self.cached_benefit_ids = benefit_ids;
        self.freshness_flag = true;
        self
    }
}
