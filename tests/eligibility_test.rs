use chrono::NaiveDate;
use proptest::prelude::*;
use retreat_registration::core::age_gate::MINIMUM_AGE;
use retreat_registration::{
    compute_age, normalize_phone, normalize_postal_code, AgeGate, EligibilityError, FixedClock,
};
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn gate_on(today: NaiveDate) -> AgeGate {
    AgeGate::new(MINIMUM_AGE, Arc::new(FixedClock(today)))
}

#[test]
fn test_age_is_exact_around_the_birthday() {
    let birth = date(2011, 6, 21);
    assert_eq!(compute_age(birth, date(2025, 6, 20)), 13);
    assert_eq!(compute_age(birth, date(2025, 6, 21)), 14);
    assert_eq!(compute_age(birth, date(2025, 6, 22)), 14);

    let mut gate = gate_on(date(2025, 6, 20));
    assert!(gate.validate_on_submit("2011-06-21").is_err());

    let mut gate = gate_on(date(2025, 6, 21));
    assert!(gate.validate_on_submit("2011-06-21").is_ok());
}

#[test]
fn test_every_day_of_the_year_around_the_boundary() {
    // Walk a full year of submission dates for one applicant.
    let birth = date(2011, 6, 21);
    let mut day = date(2025, 1, 1);
    while day <= date(2025, 12, 31) {
        let mut gate = gate_on(day);
        let eligible = gate.validate_on_submit("2011-06-21").is_ok();
        assert_eq!(eligible, day >= date(2025, 6, 21), "on {}", day);
        assert_eq!(gate.is_eligible(birth), eligible);
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn test_empty_change_never_touches_the_slot() {
    let mut gate = gate_on(date(2025, 6, 21));
    assert!(gate.on_birth_date_change("").is_none());

    gate.on_birth_date_change("2020-01-01");
    let before = gate.error().cloned();
    gate.on_birth_date_change("");
    assert_eq!(gate.error().cloned(), before);
}

#[test]
fn test_empty_submit_always_requires_birth_date() {
    for prior in ["", "2000-01-01", "2020-01-01"] {
        let mut gate = gate_on(date(2025, 6, 21));
        gate.on_birth_date_change(prior);
        assert_eq!(
            gate.validate_on_submit(""),
            Err(EligibilityError::BirthDateRequired),
            "after {:?}",
            prior
        );
    }
}

#[test]
fn test_leap_day_applicant() {
    // Turns 14 on Mar 1 because 2026 has no Feb 29.
    let mut gate = gate_on(date(2026, 2, 28));
    assert!(gate.validate_on_submit("2012-02-29").is_err());

    let mut gate = gate_on(date(2026, 3, 1));
    assert!(gate.validate_on_submit("2012-02-29").is_ok());
}

#[test]
fn test_mask_examples() {
    assert_eq!(normalize_phone("19999998888"), "(19) 99999-8888");
    assert_eq!(normalize_postal_code("12345678"), "12345-678");
    assert_eq!(normalize_postal_code("1234567890"), "12345-678");
}

proptest! {
    #[test]
    fn test_masks_are_idempotent_for_any_text(input in ".*") {
        let phone = normalize_phone(&input);
        prop_assert_eq!(normalize_phone(&phone), phone);

        let postal = normalize_postal_code(&input);
        prop_assert_eq!(normalize_postal_code(&postal), postal);
    }

    #[test]
    fn test_masks_are_idempotent_for_typed_numbers(input in "[0-9 ()+.-]{0,40}") {
        let phone = normalize_phone(&input);
        prop_assert!(phone.chars().count() <= 15);
        prop_assert_eq!(normalize_phone(&phone), phone);

        let postal = normalize_postal_code(&input);
        prop_assert!(postal.chars().count() <= 9);
        prop_assert_eq!(normalize_postal_code(&postal), postal);
    }
}
