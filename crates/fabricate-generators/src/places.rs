//! City, state, country and address generators.
//!
//! Street addresses come in four shapes:
//!
//! ```text
//! 1200 Maple Ave          number + street name + ending
//! 1200 N Maple Ave        number + direction + street name + ending
//! 1200 42 St              number + block
//! 1200 N 42 St            number + direction + block
//! ```

use crate::numbers::draw_i32;
use crate::people::names;
use crate::resources::WordLists;
use fabricate_core::Generator;
use rand::seq::SliceRandom;
use rand::Rng;

const DIRECTIONS: &[&str] = &["N", "S", "E", "W"];
const STREET_ENDINGS: &[&str] = &["Blvd", "St", "Ave", "Pl", "Rd"];

pub fn cities() -> Generator<String> {
    WordLists::embedded().cities()
}

/// The fifty US states.
pub fn states() -> Generator<String> {
    WordLists::embedded().states()
}

pub fn countries() -> Generator<String> {
    WordLists::embedded().countries()
}

/// Street addresses such as `1200 N Maple Ave`.
pub fn street_addresses() -> Generator<String> {
    let street_names = names();

    Generator::new(move || {
        let mut rng = rand::thread_rng();
        let number = draw_i32(&mut rng, 100, 10_000);
        let block = draw_i32(&mut rng, 1, 300);
        let direction = DIRECTIONS.choose(&mut rng).copied().unwrap_or("N");
        let ending = STREET_ENDINGS.choose(&mut rng).copied().unwrap_or("St");

        match (rng.gen_bool(0.5), rng.gen_bool(0.5)) {
            (true, true) => format!("{number} {direction} {block} St"),
            (true, false) => format!("{number} {block} St"),
            (false, true) => format!("{number} {direction} {} {ending}", street_names.get()),
            (false, false) => format!("{number} {} {ending}", street_names.get()),
        }
    })
}

/// A street address followed by city and state (US) or city and country.
pub fn full_addresses(us_address: bool) -> Generator<String> {
    let streets = street_addresses();
    let cities = cities();
    let states = states();
    let countries = countries();

    Generator::new(move || {
        if us_address {
            format!("{} {}, {} United States", streets.get(), cities.get(), states.get())
        } else {
            format!("{} {}, {}", streets.get(), cities.get(), countries.get())
        }
    })
}
