pub mod labeled_vec_dataset;
pub mod traits;

pub use labeled_vec_dataset::LabeledVecDataset;
pub use traits::{Dataset, LabeledDataset};
