//! Benefit Module
//!
//! Read-only view of a catalog benefit as the eligibility core sees it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ids::{BenefitId, CityId, CriterionId, InstitutionId};

// == Benefit ==
/// An entitlement defined by the criteria required to qualify, scoped to
/// cities and institutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub id: BenefitId,
    #[serde(default)]
    pub required_criterion_ids: BTreeSet<CriterionId>,
    #[serde(default)]
    pub city_ids: BTreeSet<CityId>,
    #[serde(default)]
    pub institution_ids: BTreeSet<InstitutionId>,
}

impl Benefit {
    // == Fully Defined ==
    /// A benefit participates in matching only once it has at least one
    /// city, one institution and one criterion attached.
    pub fn is_fully_defined(&self) -> bool {
        !self.city_ids.is_empty()
            && !self.institution_ids.is_empty()
            && !self.required_criterion_ids.is_empty()
    }

    // == City Scope ==
    /// Returns true if the benefit is offered in `city`.
    ///
    /// A profile without a city is not scoped, so every benefit passes.
    pub fn is_offered_in(&self, city: Option<CityId>) -> bool {
        match city {
            Some(city) => self.city_ids.contains(&city),
            None => true,
        }
    }

    // == Criteria Subset ==
    /// Returns true if every required criterion is in `selected`.
    pub fn is_satisfied_by(&self, selected: &BTreeSet<CriterionId>) -> bool {
        self.required_criterion_ids.is_subset(selected)
    }
}
