// classblock-data/src/samplers/class_blocked.rs
//! # Class-blocked batch sampling
//!
//! [`ClassBlockedBatchSampler`] yields fixed-size batches whose classes always
//! appear in the same ascending label order, while the examples inside each
//! class are reshuffled every epoch.
//!
//! ```rust
//! use classblock_data::datasets::LabeledVecDataset;
//! use classblock_data::samplers::ClassBlockedBatchSampler;
//!
//! let dataset = LabeledVecDataset::new(
//!     (0..10).collect::<Vec<i32>>(),
//!     vec![0u32, 0, 0, 1, 1, 1, 1, 2, 2, 2],
//! ).expect("one label per example");
//! let mut sampler = ClassBlockedBatchSampler::new(&dataset, 3).expect("valid dataset");
//! for batch in sampler.start_traversal() {
//!     let batch = batch.expect("in-bounds indices");
//!     assert_eq!(batch.len(), 3);
//! }
//! ```
//!
//! ## Remainder policy
//!
//! Only full batches are emitted. When the dataset size is not a multiple of
//! the batch size, the last `len % batch_size` indices of each epoch's order
//! are dropped. Since the order is blocked by label, the dropped examples always
//! belong to the largest label(s).

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use super::label_groups::LabelGroups;
use crate::batch::Batch;
use crate::config::SamplerConfig;
use crate::datasets::LabeledDataset;
use crate::error::DataError;

/// Batch sampler that keeps classes in a fixed order and shuffles within them.
///
/// The label grouping is computed once, at construction. Every call to
/// [`start_traversal`](Self::start_traversal) draws a fresh permutation of each
/// label's indices from the sampler's RNG and returns a [`Traversal`] handle
/// that owns that epoch's order.
#[derive(Debug)]
pub struct ClassBlockedBatchSampler<'a, D: LabeledDataset> {
    dataset: &'a D,
    batch_size: usize,
    groups: LabelGroups<D::Label>,
    rng: StdRng,
    epochs_started: usize,
}

impl<'a, D: LabeledDataset> ClassBlockedBatchSampler<'a, D> {
    /// Creates a sampler over `dataset` with the given batch size and an
    /// entropy-seeded RNG.
    ///
    /// # Errors
    ///
    /// See [`with_config`](Self::with_config).
    pub fn new(dataset: &'a D, batch_size: usize) -> Result<Self, DataError> {
        Self::with_config(dataset, SamplerConfig::new(batch_size))
    }

    /// Creates a sampler from a [`SamplerConfig`].
    ///
    /// Only the label grouping is built here. No shuffle is drawn until
    /// [`start_traversal`](Self::start_traversal), so with a fixed seed the
    /// first traversal uses the RNG's first draw.
    ///
    /// # Errors
    ///
    /// - `DataError::InvalidBatchSize` if the batch size is zero.
    /// - `DataError::MissingLabels` if the dataset has no label vector.
    /// - `DataError::LabelCountMismatch` if the label vector length differs
    ///   from the dataset length.
    pub fn with_config(dataset: &'a D, config: SamplerConfig) -> Result<Self, DataError> {
        config.validate()?;
        let groups = LabelGroups::from_dataset(dataset)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        debug!(
            "ClassBlockedBatchSampler: {} examples in {} labels, batch_size = {}",
            groups.len(),
            groups.num_labels(),
            config.batch_size
        );
        if config.batch_size > groups.len() {
            warn!(
                "ClassBlockedBatchSampler: batch_size ({}) > dataset_len ({}). Traversals will yield no batches.",
                config.batch_size,
                groups.len()
            );
        }

        Ok(ClassBlockedBatchSampler {
            dataset,
            batch_size: config.batch_size,
            groups,
            rng,
            epochs_started: 0,
        })
    }

    /// Starts a new epoch.
    ///
    /// Each label's indices are shuffled independently and concatenated in
    /// ascending label order. The RNG state carries over between calls, so
    /// consecutive traversals see different permutations.
    pub fn start_traversal(&mut self) -> Traversal<'a, D> {
        let order = self.groups.shuffled_order(&mut self.rng);
        let epoch = self.epochs_started;
        self.epochs_started += 1;
        debug!(
            "ClassBlockedBatchSampler: epoch {} started, {} batches, {} examples dropped",
            epoch,
            self.num_batches(),
            self.num_dropped()
        );
        Traversal {
            dataset: self.dataset,
            order,
            batch_size: self.batch_size,
            samples_returned: 0,
            epoch,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// The immutable label-to-indices grouping.
    pub fn label_groups(&self) -> &LabelGroups<D::Label> {
        &self.groups
    }

    /// The order in which label blocks appear in every traversal.
    pub fn label_order(&self) -> Vec<D::Label> {
        self.groups.labels().cloned().collect()
    }

    /// Number of full batches each traversal yields.
    pub fn num_batches(&self) -> usize {
        self.groups.len() / self.batch_size
    }

    /// Number of trailing examples each traversal drops.
    pub fn num_dropped(&self) -> usize {
        self.groups.len() % self.batch_size
    }

    /// Number of examples in the underlying dataset.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// How many traversals have been started so far.
    pub fn epochs_started(&self) -> usize {
        self.epochs_started
    }
}

/// One epoch over a [`ClassBlockedBatchSampler`].
///
/// Owns the flattened index order for the epoch and a cursor into it. Only
/// borrows the dataset, so dropping a traversal early and starting a new one is
/// always allowed.
#[derive(Debug)]
pub struct Traversal<'a, D: LabeledDataset> {
    dataset: &'a D,
    order: Vec<usize>,
    batch_size: usize,
    samples_returned: usize,
    epoch: usize,
}

impl<'a, D: LabeledDataset> Traversal<'a, D> {
    /// Returns the next full batch, or `None` once fewer than `batch_size`
    /// indices remain.
    ///
    /// Reaching the end resets the cursor to 0. Calling again after that
    /// replays the same order from the start; a reshuffled epoch needs a new
    /// [`ClassBlockedBatchSampler::start_traversal`].
    ///
    /// # Errors
    ///
    /// `Some(Err(_))` if the dataset fails to fetch the batch. The cursor still
    /// advances past the failed slice.
    pub fn next_batch(&mut self) -> Option<Result<Batch<D::Item, D::Label>, DataError>> {
        let start = self.samples_returned;
        let end = start + self.batch_size;
        if end > self.order.len() {
            debug!(
                "ClassBlockedBatchSampler: epoch {} finished, {} examples delivered",
                self.epoch, start
            );
            self.samples_returned = 0;
            return None;
        }
        self.samples_returned = end;
        Some(self.dataset.get_batch(&self.order[start..end]))
    }

    /// The full flattened index order of this epoch, including the dropped tail.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Examples delivered so far in this epoch.
    pub fn samples_returned(&self) -> usize {
        self.samples_returned
    }

    /// Zero-based epoch number assigned by the sampler.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    /// Full batches left before the next end of traversal.
    pub fn remaining_batches(&self) -> usize {
        (self.order.len() - self.samples_returned) / self.batch_size
    }
}

impl<'a, D: LabeledDataset> Iterator for Traversal<'a, D> {
    type Item = Result<Batch<D::Item, D::Label>, DataError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_batch()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining_batches();
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
#[path = "class_blocked_test.rs"]
mod tests;
