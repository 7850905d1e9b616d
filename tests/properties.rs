//! End-to-end checks of the generator guarantees through the public facade.
//!
//! These tests verify that:
//! 1. Range generators stay within their bounds and reach both signs
//! 2. Invalid arguments are rejected when the generator is built
//! 3. Generated emails and registered structs have the documented shape

use anyhow::Result;
use fabricate::prelude::*;
use proptest::prelude::*;
use std::collections::HashMap;

const DRAWS: usize = 10_000;

// ============================================================================
// Ranges
// ============================================================================

#[test]
fn test_integer_draws_stay_in_range() -> Result<()> {
    let generator = numbers::integers(-50, 50)?;
    for value in generator.take(DRAWS) {
        assert!((-50..50).contains(&value));
    }
    Ok(())
}

#[test]
fn test_long_draws_stay_in_range() -> Result<()> {
    let generator = numbers::longs(i64::MIN, -10)?;
    for value in generator.take(DRAWS) {
        assert!(value < -10);
    }
    Ok(())
}

#[test]
fn test_double_draws_stay_in_range() -> Result<()> {
    let generator = numbers::doubles(-1.5, 2.5)?;
    for value in generator.take(DRAWS) {
        assert!((-1.5..=2.5).contains(&value));
    }
    Ok(())
}

#[test]
fn test_straddling_range_reaches_both_signs() -> Result<()> {
    let draws = numbers::integers(-1_000, 1_000)?.take(DRAWS);

    assert!(draws.iter().any(|v| *v < 0));
    assert!(draws.iter().any(|v| *v >= 0));
    Ok(())
}

#[test]
fn test_full_integer_range_does_not_overflow() -> Result<()> {
    let generator = numbers::integers(i32::MIN, i32::MAX)?;
    let draws = generator.take(DRAWS);

    assert!(draws.iter().all(|v| *v < i32::MAX));
    assert!(draws.iter().any(|v| *v < 0));
    assert!(draws.iter().any(|v| *v > 0));
    Ok(())
}

#[test]
fn test_empty_and_inverted_ranges_are_rejected() {
    assert!(numbers::integers(5, 5).unwrap_err().is_invalid_argument());
    assert!(numbers::integers(10, 3).unwrap_err().is_invalid_argument());
    assert!(numbers::longs(0, 0).unwrap_err().is_invalid_argument());
    assert!(numbers::doubles(1.0, 0.5).unwrap_err().is_invalid_argument());
}

proptest! {
    #[test]
    fn prop_integers_within_bounds(lower in any::<i32>(), span in 1u32..=u32::MAX) {
        let upper = lower.saturating_add_unsigned(span);
        prop_assume!(lower < upper);

        let generator = numbers::integers(lower, upper).unwrap();
        for _ in 0..32 {
            let value = generator.get();
            prop_assert!(value >= lower && value < upper);
        }
    }

    #[test]
    fn prop_strings_have_requested_length(length in 1usize..200) {
        let value = strings::alphanumeric_strings_of_length(length).unwrap().get();
        prop_assert_eq!(value.chars().count(), length);
    }
}

// ============================================================================
// Emails
// ============================================================================

#[test]
fn test_emails_have_one_at_and_a_default_domain() {
    let domains = Settings::default().email_domains;
    let generator = emails::emails();

    for email in generator.take(1_000) {
        assert_eq!(email.matches('@').count(), 1);
        assert!(
            domains.iter().any(|d| email.ends_with(&format!("@{d}"))),
            "unexpected domain in {email}"
        );
    }
}

// ============================================================================
// Populator
// ============================================================================

#[derive(Debug, Default)]
struct Composite {
    id: i64,
    label: String,
}
pojo!(Composite { id, label });

#[derive(Debug, Default)]
struct Level2 {
    inner: Composite,
}
pojo!(Level2 { inner });

#[derive(Debug, Default)]
struct Outer {
    nested: Level2,
    words: Vec<String>,
    by_key: HashMap<String, Composite>,
}
pojo!(Outer { nested, words, by_key });

#[test]
fn test_outer_composite_is_populated_to_depth_three() -> Result<()> {
    let generator = pojos::<Outer>()?;

    for _ in 0..50 {
        let outer = generator.get();
        assert!(outer.nested.inner.id > 0);
        assert!(!outer.nested.inner.label.is_empty());

        assert!((3..=25).contains(&outer.words.len()));
        assert!((3..=25).contains(&outer.by_key.len()));
        assert!(outer.by_key.values().all(|c| c.id > 0 && !c.label.is_empty()));
    }

    Ok(())
}
