//! Retention partitioning and pruning

use crate::bucket::{compute_bucket_map, derive_keep_set, explain_keep_set, BucketMap, KeepReason};
use slotkeep_core::{Item, RetentionLimits};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;
use tracing::{debug, warn};

/// Keep/delete decision for one set of items
#[derive(Debug, Clone)]
pub struct Partition<I> {
    /// Buckets that justify the keep set
    pub buckets: BucketMap<I>,
    /// Identifiers retained by at least one tier
    pub keep: BTreeSet<I>,
    /// Every other identifier
    pub delete: BTreeSet<I>,
}

impl<I: Ord + Clone> Partition<I> {
    /// Keep reasons per retained identifier, for verbose reporting
    pub fn reasons(&self) -> BTreeMap<I, Vec<KeepReason>> {
        explain_keep_set(&self.buckets)
    }
}

/// Split `items` into the ones `limits` retains and the ones it does not
///
/// Pure and deterministic: the same items and limits always produce the
/// same partition. Deleting `delete` and partitioning what remains yields an
/// empty delete set.
pub fn partition<I: Ord + Clone>(items: &[Item<I>], limits: &RetentionLimits) -> Partition<I> {
    if limits.is_empty() {
        warn!("No retention limits enforced; every item is eligible for deletion");
    }

    let buckets = compute_bucket_map(items, limits);
    let keep = derive_keep_set(&buckets);
    let delete: BTreeSet<I> = items
        .iter()
        .filter(|item| !keep.contains(&item.id))
        .map(|item| item.id.clone())
        .collect();

    debug!(
        "Partitioned {} items: keep {}, delete {}",
        items.len(),
        keep.len(),
        delete.len()
    );

    Partition {
        buckets,
        keep,
        delete,
    }
}

/// Removes items selected for deletion
pub trait DeletionSink<I> {
    /// Failure cause reported for a single item
    type Error: Display;

    /// Remove one item
    fn delete(&mut self, id: &I) -> Result<(), Self::Error>;
}

/// Outcome of one deletion attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PruneOutcome<I> {
    Deleted(I),
    Failed { id: I, cause: String },
}

/// Outcomes of a prune pass, in attempt order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneReport<I> {
    pub outcomes: Vec<PruneOutcome<I>>,
}

impl<I> PruneReport<I> {
    /// Number of items removed
    pub fn deleted_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, PruneOutcome::Deleted(_)))
            .count()
    }

    /// Number of items that could not be removed
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.deleted_count()
    }
}

/// Applies retention limits to items and removes the rest through a sink
#[derive(Debug, Clone)]
pub struct Pruner {
    limits: RetentionLimits,
}

impl Pruner {
    /// Create a pruner for the given limits
    pub fn new(limits: RetentionLimits) -> Self {
        Self { limits }
    }

    /// Limits this pruner enforces
    pub fn limits(&self) -> &RetentionLimits {
        &self.limits
    }

    /// Compute the partition without deleting anything
    pub fn plan<I: Ord + Clone>(&self, items: &[Item<I>]) -> Partition<I> {
        partition(items, &self.limits)
    }

    /// Delete every item of `plan.delete`, one at a time
    ///
    /// A failure is recorded and the next item is attempted. Nothing is
    /// retried.
    pub fn apply<I, S>(&self, plan: &Partition<I>, sink: &mut S) -> PruneReport<I>
    where
        I: Ord + Clone + std::fmt::Debug,
        S: DeletionSink<I>,
    {
        let outcomes = plan
            .delete
            .iter()
            .map(|id| match sink.delete(id) {
                Ok(()) => {
                    debug!("Deleted {:?}", id);
                    PruneOutcome::Deleted(id.clone())
                }
                Err(e) => {
                    warn!("Failed to delete {:?}: {}", id, e);
                    PruneOutcome::Failed {
                        id: id.clone(),
                        cause: e.to_string(),
                    }
                }
            })
            .collect();

        PruneReport { outcomes }
    }
}
