//! String generators.

use crate::collections::from_list;
use crate::identifiers::uuids;
use crate::numbers::int_range;
use fabricate_core::checks::check_that;
use fabricate_core::{Generator, GeneratorError};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt::Display;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

// ============================================================================
// Basic strings
// ============================================================================

/// Strings of 5 to 999 arbitrary Unicode scalar values.
pub fn strings() -> Generator<String> {
    let lengths = int_range(5, 1000);
    Generator::new(move || random_chars(&mut rand::thread_rng(), lengths.get() as usize))
}

/// Strings of exactly `length` arbitrary Unicode scalar values.
pub fn strings_of_length(length: usize) -> Result<Generator<String>, GeneratorError> {
    check_that(length > 0, "Length must be at least 1")?;
    Ok(Generator::new(move || {
        random_chars(&mut rand::thread_rng(), length)
    }))
}

/// Lowercase hexadecimal strings of exactly `length` digits.
pub fn hexadecimal_strings(length: usize) -> Result<Generator<String>, GeneratorError> {
    check_that(length > 0, "Length must be at least 1")?;
    Ok(Generator::new(move || {
        random_hex(&mut rand::thread_rng(), length)
    }))
}

/// Letters only, 10 to 99 characters.
pub fn alphabetic_strings() -> Generator<String> {
    let lengths = int_range(10, 100);
    Generator::new(move || random_letters(&mut rand::thread_rng(), lengths.get() as usize))
}

/// Letters only, exactly `length` characters.
pub fn alphabetic_strings_of_length(length: usize) -> Result<Generator<String>, GeneratorError> {
    check_that(length > 0, "length must be > 0")?;
    Ok(Generator::new(move || {
        random_letters(&mut rand::thread_rng(), length)
    }))
}

/// Letters and digits, 10 to 99 characters.
pub fn alphanumeric_strings() -> Generator<String> {
    let lengths = int_range(10, 100);
    Generator::new(move || random_alphanumeric(&mut rand::thread_rng(), lengths.get() as usize))
}

/// Letters and digits, exactly `length` characters.
pub fn alphanumeric_strings_of_length(
    length: usize,
) -> Result<Generator<String>, GeneratorError> {
    check_that(length > 0, "length must be > 0")?;
    Ok(Generator::new(move || {
        random_alphanumeric(&mut rand::thread_rng(), length)
    }))
}

/// Digits only, 4 to 24 characters. Leading zeros are allowed.
pub fn numeric_strings() -> Generator<String> {
    let lengths = int_range(4, 25);
    Generator::new(move || random_digits(&mut rand::thread_rng(), lengths.get() as usize))
}

/// Digits only, exactly `length` characters.
pub fn numeric_strings_of_length(length: usize) -> Result<Generator<String>, GeneratorError> {
    check_that(length > 0, "length must be > 0")?;
    Ok(Generator::new(move || {
        random_digits(&mut rand::thread_rng(), length)
    }))
}

/// Hyphenated version-4 UUID strings.
pub fn uuid_strings() -> Generator<String> {
    uuids().map(|uuid| uuid.to_string())
}

// ============================================================================
// From fixed targets
// ============================================================================

/// Strings picked uniformly from `values`.
pub fn strings_from_fixed_list<I, S>(values: I) -> Result<Generator<String>, GeneratorError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    from_list(values.into_iter().map(Into::into).collect())
}

/// Render every value drawn from `generator` with `Display`.
pub fn as_strings<T>(generator: Generator<T>) -> Generator<String>
where
    T: Display + 'static,
{
    generator.map(|value| value.to_string())
}

// ============================================================================
// Draw helpers
// ============================================================================

fn random_chars<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length).map(|_| rng.gen::<char>()).collect()
}

pub(crate) fn random_letters<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

fn random_alphanumeric<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect()
}

fn random_digits<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

fn random_hex<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    const HEX: &[u8] = b"0123456789abcdef";
    (0..length)
        .map(|_| HEX[rng.gen_range(0..HEX.len())] as char)
        .collect()
}
