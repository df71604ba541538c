use crate::domain::ports::Clock;
use crate::utils::error::EligibilityError;
use chrono::{Datelike, NaiveDate};
use std::sync::Arc;

pub const MINIMUM_AGE: u32 = 14;

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Full years elapsed from `birth_date` to `as_of`.
///
/// The birthday counts as reached once `(month, day)` of `as_of` is not
/// earlier than that of `birth_date`. A Feb 29 birthday is therefore reached
/// on Mar 1 in common years. Birth dates after `as_of` give a negative age.
pub fn compute_age(birth_date: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - birth_date.year();
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Parses `YYYY-MM-DD`. Empty or invalid text yields `None`.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, BIRTH_DATE_FORMAT).ok()
}

/// Minimum-age check with the page's single error slot.
pub struct AgeGate {
    min_age: u32,
    clock: Arc<dyn Clock>,
    error: Option<EligibilityError>,
}

impl AgeGate {
    pub fn new(min_age: u32, clock: Arc<dyn Clock>) -> Self {
        Self {
            min_age,
            clock,
            error: None,
        }
    }

    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn is_eligible(&self, birth_date: NaiveDate) -> bool {
        compute_age(birth_date, self.today()) >= self.min_age as i32
    }

    /// Recomputes eligibility after the birth date field changed.
    ///
    /// Empty or unparseable text leaves the slot untouched, even if it holds
    /// an error from an earlier value.
    pub fn on_birth_date_change(&mut self, raw: &str) -> Option<&EligibilityError> {
        let Some(birth_date) = parse_birth_date(raw) else {
            tracing::debug!("Birth date '{}' not usable yet, keeping current state", raw);
            return self.error.as_ref();
        };

        let age = compute_age(birth_date, self.today());
        if age < self.min_age as i32 {
            tracing::debug!("Computed age {} is below {}", age, self.min_age);
            self.error = Some(EligibilityError::Underage {
                min_age: self.min_age,
            });
        } else {
            tracing::debug!("Computed age {}, eligible", age);
            self.error = None;
        }
        self.error.as_ref()
    }

    /// Final check run when the user submits. A failure is also stored in
    /// the slot; success leaves the slot as it is.
    pub fn validate_on_submit(&mut self, raw: &str) -> Result<(), EligibilityError> {
        let outcome = match parse_birth_date(raw) {
            None => Err(EligibilityError::BirthDateRequired),
            Some(birth_date) if !self.is_eligible(birth_date) => Err(EligibilityError::Restricted {
                min_age: self.min_age,
            }),
            Some(_) => Ok(()),
        };

        if let Err(e) = &outcome {
            tracing::warn!("Submission blocked: {}", e);
            self.error = Some(e.clone());
        }
        outcome
    }

    pub fn error(&self) -> Option<&EligibilityError> {
        self.error.as_ref()
    }

    pub fn submit_enabled(&self) -> bool {
        self.error.is_none()
    }
}
