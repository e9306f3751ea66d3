//! Benefits Registry - eligibility cache service
//!
//! Determines which benefits a user qualifies for by criteria-subset
//! matching, caches the answer on the profile, and refuses to serve it once
//! a birthday may have changed an age-based criterion.

pub mod api;
pub mod clock;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod locks;
pub mod models;
pub mod registry;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use eligibility::EligibilityCache;
pub use error::{EligibilityError, Result};
pub use registry::ProfileService;
