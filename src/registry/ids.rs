//! Identifier newtypes shared by the registry and the eligibility core.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

id_type!(
    /// Identifies a registered user profile.
    UserId
);
id_type!(
    /// Identifies a benefit in the catalog.
    BenefitId
);
id_type!(
    /// Identifies an eligibility criterion. Only identity matters for matching.
    CriterionId
);
id_type!(
    /// Identifies a city a benefit is offered in.
    CityId
);
id_type!(InstitutionId);
