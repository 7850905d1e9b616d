//! Boolean generators.

use fabricate_core::Generator;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Fair coin flips.
pub fn booleans() -> Generator<bool> {
    Generator::new(|| rand::thread_rng().gen_bool(0.5))
}

/// `false`, `true`, `false`, ... with a counter private to each generator.
pub fn alternating_booleans() -> Generator<bool> {
    let count = Arc::new(AtomicU64::new(0));
    Generator::new(move || {
        let current = count.fetch_add(1, Ordering::Relaxed) + 1;
        current % 2 == 0
    })
}
