//! Store Module
//!
//! Collaborator contracts the eligibility core depends on, with in-memory
//! implementations and a JSON seed loader.

mod memory;
mod seed;
mod traits;

pub use memory::{InMemoryBenefitCatalog, InMemoryProfileStore};
pub use seed::{SeedData, SeedProfile};
pub use traits::{BenefitCatalog, ProfileStore};
