//! Grade-weighted vocabulary sampler.
//!
//! Builds a word list of fixed size for a target grade:
//!
//! ```text
//! high  = round(total × tier ratio)      drawn from grades above the target
//! main  = total − high                   drawn from the target grade,
//!                                        backfilled from grades below it
//! ```
//!
//! Each grade bucket is first shuffled and capped. All draws are uniform
//! without replacement. The RNG is supplied by the caller so selections can be
//! made reproducible by seeding it.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::VocabularyConfig;
use crate::difficulty::Tier;
use crate::vocab::entry::VocabEntry;

/// Word counts a selection aims for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPlan {
    /// Words from the target grade (or lower grades as backfill).
    pub main: usize,
    /// Words from higher grades.
    pub high: usize,
}

impl SelectionPlan {
    pub fn new(total_words: usize, tier: Tier) -> Self {
        let high = ((total_words as f64) * tier.high_word_ratio()).round() as usize;
        let high = high.min(total_words);
        Self {
            main: total_words - high,
            high,
        }
    }
}

/// The vocabulary sampler.
#[derive(Debug, Clone)]
pub struct VocabSelector {
    total_words: usize,
    per_grade_cap: usize,
}

impl VocabSelector {
    pub fn new(config: &VocabularyConfig) -> Self {
        Self {
            total_words: config.total_words,
            per_grade_cap: config.per_grade_cap,
        }
    }

    /// Select a word list for `grade` at the given tier.
    ///
    /// Returns main words first, then higher-grade words. The list is shorter
    /// than `total_words` only when the corpus cannot supply enough words.
    pub fn select<R: Rng + ?Sized>(
        &self,
        entries: &[VocabEntry],
        grade: u32,
        tier: Tier,
        rng: &mut R,
    ) -> Vec<String> {
        let buckets = self.grade_buckets(entries, rng);
        let plan = SelectionPlan::new(self.total_words, tier);

        let mut selected = buckets.get(&grade).cloned().unwrap_or_default();
        selected.shuffle(rng);
        selected.truncate(plan.main);

        if selected.len() < plan.main {
            let missing = plan.main - selected.len();
            let lower = buckets.range(..grade).flat_map(|(_, words)| words.iter());
            selected.extend(draw(lower, missing, rng));
        }

        let higher = buckets
            .range((Excluded(grade), Unbounded))
            .flat_map(|(_, words)| words.iter());
        selected.extend(draw(higher, plan.high, rng));

        selected
    }

    /// Group words by grade, each bucket shuffled and capped.
    fn grade_buckets<R: Rng + ?Sized>(
        &self,
        entries: &[VocabEntry],
        rng: &mut R,
    ) -> BTreeMap<u32, Vec<String>> {
        let mut buckets: BTreeMap<u32, Vec<String>> = BTreeMap::new();
        for entry in entries {
            buckets
                .entry(entry.grade)
                .or_default()
                .push(entry.word.clone());
        }

        for words in buckets.values_mut() {
            words.shuffle(rng);
            words.truncate(self.per_grade_cap);
        }

        buckets
    }
}

/// Uniformly draw up to `count` words from a pool without replacement.
fn draw<'a, R: Rng + ?Sized>(
    pool: impl Iterator<Item = &'a String>,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }
    let mut pool: Vec<String> = pool.cloned().collect();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}
