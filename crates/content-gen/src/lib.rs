//! Random content for database fixtures.
//!
//! `ContentGen` is the single source of randomness for a fill run. It hands
//! out integers, floats, calendar points, phrase fragments and subsets, all
//! drawn from one `StdRng` so that a seeded generator reproduces the exact
//! same sequence of values across runs.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

mod phrases;

use phrases::PHRASES;

/// Error type for content generation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContentError {
    /// A pick was requested from an empty list.
    #[error("cannot pick from an empty list")]
    EmptyList,
}

/// Generator of random fixture content.
///
/// Seeded construction makes every output reproducible:
///
/// ```
/// use content_gen::ContentGen;
///
/// let mut a = ContentGen::seeded(42);
/// let mut b = ContentGen::seeded(42);
/// assert_eq!(a.int(0, 100), b.int(0, 100));
/// ```
pub struct ContentGen {
    rng: StdRng,
}

impl ContentGen {
    /// Create a generator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Random integer in `[min, max]` (inclusive).
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    /// Random unsigned integer in `[min, max]` (inclusive).
    ///
    /// Used for ranges whose upper bound does not fit in `i64`, such as
    /// unsigned BIGINT columns.
    pub fn uint(&mut self, min: u64, max: u64) -> u64 {
        self.rng.gen_range(min..=max)
    }

    /// Random float in `[min, max]`.
    pub fn float(&mut self, min: f64, max: f64) -> f64 {
        self.rng.gen_range(min..=max)
    }

    /// Random date in `[start, end]`, bounds swapped when inverted.
    ///
    /// Defaults to the 2006-01-01 .. 2020-01-01 window when a bound is
    /// omitted.
    pub fn date(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> NaiveDate {
        let start = start.unwrap_or_else(default_start_date);
        let end = end.unwrap_or_else(default_end_date);
        let (start, end) = if start <= end { (start, end) } else { (end, start) };

        let days = (end - start).num_days();
        start + Duration::days(self.int(0, days))
    }

    /// Random datetime in `[start, end]`, bounds swapped when inverted.
    ///
    /// Samples a uniform whole-second offset across the window; defaults to
    /// the same window as [`ContentGen::date`].
    pub fn datetime(
        &mut self,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> NaiveDateTime {
        let start = start.unwrap_or_else(|| default_start_date().into());
        let end = end.unwrap_or_else(|| default_end_date().into());
        let (start, end) = if start <= end { (start, end) } else { (end, start) };

        let seconds = (end - start).num_seconds();
        start + Duration::seconds(self.int(0, seconds))
    }

    /// Uniformly chosen element of `list`.
    pub fn pick_one<'a, T>(&mut self, list: &'a [T]) -> Result<&'a T, ContentError> {
        if list.is_empty() {
            return Err(ContentError::EmptyList);
        }

        Ok(&list[self.int(0, list.len() as i64 - 1) as usize])
    }

    /// Non-empty random subset of `list`.
    ///
    /// The number of draws is uniform in `[1, len]`; duplicate draws
    /// collapse, so the subset may be smaller than the draw count. The
    /// result is an ordered set.
    pub fn pick_subset<T>(&mut self, list: &[T]) -> Result<BTreeSet<T>, ContentError>
    where
        T: Ord + Clone,
    {
        if list.is_empty() {
            return Err(ContentError::EmptyList);
        }

        let draws = self.int(1, list.len() as i64);
        let mut subset = BTreeSet::new();
        for _ in 0..draws {
            subset.insert(self.pick_one(list)?.clone());
        }

        Ok(subset)
    }

    /// A phrase from the corpus, truncated to a random prefix of length
    /// `[1, max_len]` when the phrase is longer than `max_len`.
    pub fn text(&mut self, max_len: usize) -> String {
        let phrase = PHRASES[self.int(0, PHRASES.len() as i64 - 1) as usize];

        if phrase.len() > max_len {
            let cut = self.int(1, max_len.max(1) as i64) as usize;
            return phrase[..cut].to_string();
        }

        phrase.to_string()
    }
}

impl Default for ContentGen {
    fn default() -> Self {
        Self::new()
    }
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2006, 1, 1).expect("window start is a valid date")
}

fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("window end is a valid date")
}
