//! Staleness Validator
//!
//! Refuses to answer from criteria chosen before a birthday that may have
//! moved the user, or one of their children, into a different age bracket.

use chrono::{Datelike, NaiveDate};

use crate::error::{EligibilityError, Result};
use crate::registry::UserProfile;

// == Anniversary ==
/// Returns `birth_date` shifted into `year`.
///
/// A 29 February birthday falls on 28 February in non-leap years.
pub fn anniversary_in(birth_date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birth_date.month(), 28))
}

// == Check Subject ==
/// Fails if this year's anniversary of `birth_date` is after
/// `reference_date`.
///
/// Only the anniversary in the year of `today` is considered.
pub fn check_subject(
    birth_date: NaiveDate,
    reference_date: NaiveDate,
    today: NaiveDate,
) -> Result<()> {
    let anniversary = anniversary_in(birth_date, today.year()).ok_or_else(|| {
        EligibilityError::Internal(format!(
            "no anniversary of {} in year {}",
            birth_date,
            today.year()
        ))
    })?;

    if anniversary > reference_date {
        return Err(EligibilityError::Stale {
            subject_birth_date: birth_date,
            reference_date,
        });
    }
    Ok(())
}

// == Check Profile ==
/// Checks the user's birth date and then every child's, against the
/// profile's criteria selection date. Stops at the first failure.
pub fn check_profile(profile: &UserProfile, today: NaiveDate) -> Result<()> {
    let reference_date = profile.criteria_selected_on();
    profile
        .birth_dates()
        .try_for_each(|birth_date| check_subject(birth_date, reference_date, today))
}
