//! Per-granularity retention capacities

use crate::Granularity;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

/// Number of most-recent distinct buckets to retain per granularity
///
/// Only enforced granularities are stored: a zero count is dropped when the
/// limits are built, so every stored capacity is positive. Iteration follows
/// [`Granularity`] order (daily first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetentionLimits {
    caps: BTreeMap<Granularity, NonZeroUsize>,
}

impl RetentionLimits {
    /// Limits that enforce nothing (keep nothing)
    pub fn none() -> Self {
        Self::default()
    }

    /// Build limits from the four per-tier counts, dropping zeros
    pub fn from_counts(daily: usize, weekly: usize, monthly: usize, yearly: usize) -> Self {
        [
            (Granularity::Daily, daily),
            (Granularity::Weekly, weekly),
            (Granularity::Monthly, monthly),
            (Granularity::Yearly, yearly),
        ]
        .into_iter()
        .fold(Self::none(), |limits, (g, count)| limits.with(g, count))
    }

    /// Return a copy with `granularity` set to `count` (0 disables it)
    pub fn with(mut self, granularity: Granularity, count: usize) -> Self {
        match NonZeroUsize::new(count) {
            Some(cap) => {
                self.caps.insert(granularity, cap);
            }
            None => {
                self.caps.remove(&granularity);
            }
        }
        self
    }

    /// Capacity for `granularity`, if enforced
    pub fn get(&self, granularity: Granularity) -> Option<usize> {
        self.caps.get(&granularity).map(|cap| cap.get())
    }

    /// Enforced granularities and their capacities
    pub fn iter(&self) -> impl Iterator<Item = (Granularity, usize)> + '_ {
        self.caps.iter().map(|(g, cap)| (*g, cap.get()))
    }

    /// True when no granularity is enforced
    pub fn is_empty(&self) -> bool {
        self.caps.is_empty()
    }

    /// Number of enforced granularities
    pub fn len(&self) -> usize {
        self.caps.len()
    }
}
