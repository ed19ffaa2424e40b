//! Random sources for demo data.
//!
//! Generators never call into `rand` directly; they take a [`RandomSource`]
//! so tests can drive them with a scripted sequence and assert exact output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A fixed, non-empty list of values to pick from.
///
/// `Catalog::new` is a `const fn` that panics on an empty slice, so a
/// catalog declared as a `const` fails to compile rather than failing at
/// pick time.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<T: 'static> {
    items: &'static [T],
}

impl<T: 'static> Catalog<T> {
    /// Wrap a non-empty static slice.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty. Use in a `const` to turn that into a
    /// compile-time error.
    #[must_use]
    pub const fn new(items: &'static [T]) -> Self {
        assert!(!items.is_empty(), "a catalog must not be empty");
        Self { items }
    }

    /// Number of entries. Always at least one.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// All entries, in declaration order.
    #[must_use]
    pub const fn as_slice(&self) -> &'static [T] {
        self.items
    }

    /// Entry at `index`, wrapping around the end.
    #[must_use]
    pub fn get_wrapping(&self, index: usize) -> &'static T {
        &self.items[index % self.items.len()]
    }
}

/// Source of randomness for data generation.
pub trait RandomSource {
    /// A uniformly distributed integer in the half-open range `[lo, hi)`.
    ///
    /// Implementations must be total: when `hi <= lo` they return `lo`.
    fn int_in_range(&mut self, lo: i64, hi: i64) -> i64;

    /// Pick one entry uniformly from a catalog. Never fails.
    fn choose_one<T: 'static>(&mut self, catalog: &Catalog<T>) -> &'static T {
        let len = i64::try_from(catalog.len()).unwrap_or(i64::MAX);
        let index = self.int_in_range(0, len);
        catalog.get_wrapping(usize::try_from(index).unwrap_or(0))
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn int_in_range(&mut self, lo: i64, hi: i64) -> i64 {
        (**self).int_in_range(lo, hi)
    }
}

/// A [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// A reproducible source: the same seed always yields the same sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A source seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_in_range(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..hi)
    }
}

/// Replays a fixed script of raw values, reduced into each requested range.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedSource {
    values: Vec<i64>,
    next: usize,
    draws: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(values: Vec<i64>) -> Self {
        assert!(!values.is_empty());
        Self {
            values,
            next: 0,
            draws: 0,
        }
    }

    /// Every draw lands on the low end of its range.
    pub(crate) fn lowest() -> Self {
        Self::new(vec![0])
    }

    /// Number of values consumed so far.
    pub(crate) fn draws(&self) -> usize {
        self.draws
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn int_in_range(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        let raw = self.values[self.next % self.values.len()];
        self.next += 1;
        self.draws += 1;
        lo + raw.rem_euclid(hi - lo)
    }
}
