use thiserror::Error;

/// Error type for datasets and samplers in `classblock-data`.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum DataError {
    #[error("Index out of bounds: index {index} for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Label count mismatch: {labels} labels for {examples} examples")]
    LabelCountMismatch { labels: usize, examples: usize },

    #[error("Dataset does not provide a label vector")]
    MissingLabels,

    #[error("Invalid batch size: {0} (must be at least 1)")]
    InvalidBatchSize(usize),
}
