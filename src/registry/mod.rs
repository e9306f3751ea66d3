//! Registry Module
//!
//! Domain types for user profiles and benefits, plus the profile service
//! that owns criteria edits.

mod benefit;
mod ids;
mod profile;
mod service;

pub use benefit::Benefit;
pub use ids::{BenefitId, CityId, CriterionId, InstitutionId, UserId};
pub use profile::{NewProfile, ProfileUpdate, UserProfile};
pub use service::ProfileService;
