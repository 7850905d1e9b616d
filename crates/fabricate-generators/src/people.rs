//! Names, ages and phone numbers.

use crate::numbers::{draw_i32, int_range};
use crate::resources::WordLists;
use fabricate_core::Generator;

/// First names from the embedded names list.
pub fn names() -> Generator<String> {
    WordLists::embedded().names()
}

/// Ages in `[1, 100)`.
pub fn ages() -> Generator<i32> {
    int_range(1, 100)
}

/// Ages in `[18, 100)`.
pub fn adult_ages() -> Generator<i32> {
    int_range(18, 100)
}

/// Ages in `[1, 18)`.
pub fn child_ages() -> Generator<i32> {
    int_range(1, 18)
}

/// Ten-digit phone numbers without a leading zero.
pub fn phone_numbers() -> Generator<u64> {
    Generator::new(|| {
        let (area, exchange, line) = phone_parts();
        area * 10_000_000 + exchange * 10_000 + line
    })
}

/// Phone numbers formatted as `ddd-ddd-dddd`.
pub fn phone_number_strings() -> Generator<String> {
    Generator::new(|| {
        let (area, exchange, line) = phone_parts();
        format!("{area}-{exchange}-{line}")
    })
}

fn phone_parts() -> (u64, u64, u64) {
    let mut rng = rand::thread_rng();
    let area = draw_i32(&mut rng, 100, 1_000);
    let exchange = draw_i32(&mut rng, 100, 1_000);
    let line = draw_i32(&mut rng, 1_000, 10_000);

    (area as u64, exchange as u64, line as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let generator = names();
        for _ in 0..100 {
            let name = generator.get();
            assert!(!name.is_empty());
            assert!(name.chars().next().unwrap().is_uppercase());
        }
    }

    #[test]
    fn test_ages() {
        assert!(ages().take(1_000).iter().all(|a| (1..100).contains(a)));
        assert!(adult_ages().take(1_000).iter().all(|a| (18..100).contains(a)));
        assert!(child_ages().take(1_000).iter().all(|a| (1..18).contains(a)));
    }

    #[test]
    fn test_phone_numbers() {
        for number in phone_numbers().take(500) {
            assert!((1_000_000_000..10_000_000_000).contains(&number));
            assert_eq!(number.to_string().len(), 10);
        }
    }

    #[test]
    fn test_phone_number_strings() {
        for number in phone_number_strings().take(500) {
            let parts: Vec<&str> = number.split('-').collect();
            assert_eq!(parts.len(), 3);
            assert_eq!(parts[0].len(), 3);
            assert_eq!(parts[1].len(), 3);
            assert_eq!(parts[2].len(), 4);
            assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
        }
    }
}
