use crate::error::DataError;

/// Batch size used when none is given.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Construction parameters for a [`ClassBlockedBatchSampler`](crate::samplers::ClassBlockedBatchSampler).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Number of examples per emitted batch. Must be at least 1.
    pub batch_size: usize,
    /// Seed for the intra-label shuffles. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
        }
    }
}

impl SamplerConfig {
    pub fn new(batch_size: usize) -> Self {
        SamplerConfig {
            batch_size,
            ..Default::default()
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Fixes the shuffle seed so that traversals are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    ///
    /// Returns `DataError::InvalidBatchSize` if `batch_size` is zero.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.batch_size == 0 {
            return Err(DataError::InvalidBatchSize(self.batch_size));
        }
        Ok(())
    }
}
