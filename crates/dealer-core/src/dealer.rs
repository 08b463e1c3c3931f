//! History-aware selection: one random unseen item per deal.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::history::RecentQueue;
use crate::rng::{Lcg32, RandomSource};

/// Default size of the shared recent-deal window.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Picks a random item from a candidate pool while avoiding recent repeats.
///
/// Two exclusion scopes apply to every deal:
///
/// - a bounded FIFO of the most recently dealt items, shared across all
///   consumers (the cross-consumer "don't serve this again just yet"
///   window), and
/// - an unbounded per-consumer set of everything that consumer has already
///   received.
///
/// When both scopes together rule out every candidate, the consumer's
/// personal history is cleared and the deal proceeds from the full pool, so
/// a consumer is never starved. This trades strict no-repeat for liveness.
///
/// The consumer map never evicts entries; with very many distinct consumers
/// over a long process lifetime it grows without bound. An LRU cap on
/// tracked consumers would change exclusion behavior, so it is left as an
/// explicit extension rather than applied silently.
///
/// A `Dealer` assumes exclusive access per deal (`&mut self`); callers that
/// share one instance across threads serialize around it themselves.
pub struct Dealer<I, C, R = Lcg32> {
    source: R,
    global_history: RecentQueue<I>,
    consumer_histories: HashMap<C, HashSet<I>>,
}

impl<I, C> Dealer<I, C>
where
    I: Eq + Hash + Clone,
    C: Eq + Hash,
{
    /// Dealer with the default window capacity and a clock-seeded generator.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Dealer with an explicit window capacity (0 disables the shared
    /// window) and a clock-seeded generator.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_source(capacity, Lcg32::from_clock())
    }
}

impl<I, C> Default for Dealer<I, C>
where
    I: Eq + Hash + Clone,
    C: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, C, R> Dealer<I, C, R>
where
    I: Eq + Hash + Clone,
    C: Eq + Hash,
    R: RandomSource,
{
    /// Dealer with an injected random source, for reproducible deals.
    pub fn with_source(capacity: usize, source: R) -> Self {
        Self {
            source,
            global_history: RecentQueue::new(capacity),
            consumer_histories: HashMap::new(),
        }
    }

    /// Deal one item from `candidates` to `consumer`.
    ///
    /// Returns `None` only when `candidates` is empty; in that case no
    /// history is touched (not even a lazily created consumer entry). A
    /// successful deal is recorded in both histories before returning.
    pub fn deal(&mut self, candidates: &[I], consumer: C) -> Option<I> {
        if candidates.is_empty() {
            return None;
        }

        let seen = self.consumer_histories.entry(consumer).or_default();
        let global = &self.global_history;

        let mut available: Vec<&I> = candidates
            .iter()
            .filter(|&item| !global.contains(item) && !seen.contains(item))
            .collect();

        // Exhausted: every candidate is excluded by one of the two scopes.
        // Fall back to the full pool and start this consumer's history over.
        if available.is_empty() {
            available = candidates.iter().collect();
            seen.clear();
        }

        let chosen = (*self.source.choice(&available)?).clone();

        self.global_history.push(chosen.clone());
        seen.insert(chosen.clone());

        Some(chosen)
    }

    /// The shared recent-deal window, oldest-first.
    pub fn recent(&self) -> impl Iterator<Item = &I> {
        self.global_history.iter()
    }

    /// Items already dealt to `consumer`, if any deal has happened for it.
    pub fn seen_by(&self, consumer: &C) -> Option<&HashSet<I>> {
        self.consumer_histories.get(consumer)
    }

    /// Number of consumers with a recorded history.
    pub fn tracked_consumers(&self) -> usize {
        self.consumer_histories.len()
    }
}
