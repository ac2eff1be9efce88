//! # classblock-data
//!
//! Class-blocked batch sampling for training loops: batches follow a fixed,
//! ascending label order, and examples are reshuffled within each label every
//! epoch.
//!
//! - [`datasets`]: the [`Dataset`] / [`LabeledDataset`] traits and an in-memory labeled dataset.
//! - [`samplers`]: [`ClassBlockedBatchSampler`] and the [`LabelGroups`] helper.
//! - [`Batch`]: what a batch fetch returns.

pub mod batch;
pub mod config;
pub mod datasets;
pub mod error;
pub mod samplers;

pub use batch::Batch;
pub use config::{SamplerConfig, DEFAULT_BATCH_SIZE};
pub use datasets::{Dataset, LabeledDataset, LabeledVecDataset};
pub use error::DataError;
pub use samplers::{ClassBlockedBatchSampler, LabelGroups, Traversal};

/// Label conventionally reserved for the background / majority class.
///
/// Samplers give it no special treatment: it is ordered like any other label,
/// which puts it first among unsigned labels.
pub const BACKGROUND_LABEL: u32 = 0;
