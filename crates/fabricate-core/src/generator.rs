//! The [`Generator`] type every factory in the workspace returns.

use std::fmt;
use std::sync::Arc;

/// A zero-argument factory that produces a fresh value on each call.
///
/// Generators are cheap to clone (the draw function is reference counted)
/// and are `Send + Sync`, so a single generator can be shared across test
/// threads. A generator may close over its own state, but drawing from one
/// generator never affects another.
pub struct Generator<T> {
    draw: Arc<dyn Fn() -> T + Send + Sync>,
}

impl<T: 'static> Generator<T> {
    /// Create a generator from a draw function.
    pub fn new<F>(draw: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            draw: Arc::new(draw),
        }
    }

    /// A generator that always returns a clone of `value`.
    pub fn constant(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::new(move || value.clone())
    }

    /// Draw one value.
    pub fn get(&self) -> T {
        (self.draw)()
    }

    /// Transform every drawn value with `f`.
    pub fn map<U, F>(self, f: F) -> Generator<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Generator::new(move || f(self.get()))
    }

    /// Draw `count` values.
    pub fn take(&self, count: usize) -> Vec<T> {
        (0..count).map(|_| self.get()).collect()
    }

    /// An endless iterator of drawn values.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        std::iter::repeat_with(move || self.get())
    }
}

impl<T> Clone for Generator<T> {
    fn clone(&self) -> Self {
        Self {
            draw: Arc::clone(&self.draw),
        }
    }
}

impl<T> fmt::Debug for Generator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generator<{}>", std::any::type_name::<T>())
    }
}

/// Draw a single value from `generator`.
pub fn one<T: 'static>(generator: &Generator<T>) -> T {
    generator.get()
}
