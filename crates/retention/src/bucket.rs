//! Calendar bucketing of dated items
//!
//! Each enforced granularity keeps its own bucket map, filled independently
//! from a single newest-first ordering of the items. A bucket holds the
//! newest item whose timestamp falls in that calendar slot, and a tier stops
//! accepting new buckets once it reaches its capacity. Slots without any
//! item consume no capacity.

use slotkeep_core::{Granularity, Item, RetentionLimits};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Retained identifiers per granularity, keyed by bucket key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketMap<I> {
    tiers: BTreeMap<Granularity, BTreeMap<String, I>>,
}

impl<I> Default for BucketMap<I> {
    fn default() -> Self {
        Self {
            tiers: BTreeMap::new(),
        }
    }
}

impl<I> BucketMap<I> {
    /// Buckets retained for `granularity` (None if not enforced)
    pub fn tier(&self, granularity: Granularity) -> Option<&BTreeMap<String, I>> {
        self.tiers.get(&granularity)
    }

    /// Enforced tiers in granularity order
    pub fn iter(&self) -> impl Iterator<Item = (Granularity, &BTreeMap<String, I>)> {
        self.tiers.iter().map(|(g, buckets)| (*g, buckets))
    }

    /// True when no tier holds any bucket
    pub fn is_empty(&self) -> bool {
        self.tiers.values().all(BTreeMap::is_empty)
    }
}

/// Why an item was kept: one (granularity, bucket key) pair
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeepReason {
    pub granularity: Granularity,
    pub bucket: String,
}

impl fmt::Display for KeepReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.granularity, self.bucket)
    }
}

/// Assign items to the most recent buckets of every enforced granularity
///
/// Items are ordered newest first with a stable sort. When several items
/// share a timestamp, the one that comes first in `items` claims the bucket;
/// callers that need a particular winner must order their input accordingly.
pub fn compute_bucket_map<I: Clone>(items: &[Item<I>], limits: &RetentionLimits) -> BucketMap<I> {
    let mut newest_first: Vec<&Item<I>> = items.iter().collect();
    newest_first.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut map = BucketMap::default();
    for (granularity, capacity) in limits.iter() {
        let mut buckets: BTreeMap<String, I> = BTreeMap::new();
        for item in &newest_first {
            if buckets.len() >= capacity {
                break;
            }
            buckets
                .entry(granularity.bucket_key(&item.timestamp))
                .or_insert_with(|| item.id.clone());
        }
        map.tiers.insert(granularity, buckets);
    }

    map
}

/// Every identifier retained by at least one tier
pub fn derive_keep_set<I: Ord + Clone>(map: &BucketMap<I>) -> BTreeSet<I> {
    map.tiers
        .values()
        .flat_map(|buckets| buckets.values().cloned())
        .collect()
}

/// Keep reasons per retained identifier
///
/// Reasons are listed in granularity order (daily first). The result is for
/// reporting only; the keep set does not depend on it.
pub fn explain_keep_set<I: Ord + Clone>(map: &BucketMap<I>) -> BTreeMap<I, Vec<KeepReason>> {
    let mut reasons: BTreeMap<I, Vec<KeepReason>> = BTreeMap::new();
    for (granularity, buckets) in map.iter() {
        for (bucket, id) in buckets {
            reasons.entry(id.clone()).or_default().push(KeepReason {
                granularity,
                bucket: bucket.clone(),
            });
        }
    }
    reasons
}
