//! Eligibility Matcher
//!
//! Pure criteria-subset matching over a catalog snapshot.

use std::collections::BTreeSet;

use crate::registry::{Benefit, BenefitId, CityId, CriterionId};

/// Returns the ids of every benefit the selection qualifies for.
///
/// A benefit qualifies when it is fully defined, offered in `city` (no
/// city means no scoping) and all of its required criteria are selected.
pub fn eligible_benefits<'a>(
    selected: &BTreeSet<CriterionId>,
    city: Option<CityId>,
    catalog: impl IntoIterator<Item = &'a Benefit>,
) -> BTreeSet<BenefitId> {
    catalog
        .into_iter()
        .filter(|benefit| {
            benefit.is_fully_defined()
                && benefit.is_offered_in(city)
                && benefit.is_satisfied_by(selected)
        })
        .map(|benefit| benefit.id)
        .collect()
}
