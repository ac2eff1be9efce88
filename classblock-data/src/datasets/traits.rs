// classblock-data/src/datasets/traits.rs

use std::fmt::Debug;

use crate::batch::Batch;
use crate::error::DataError;

/// Represents a dataset that can be accessed by index.
///
/// A dataset is a collection of items, where each item can be a feature vector,
/// a tuple (e.g. `(features, target)`), or any other custom type that
/// implements `Send + 'static`.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `DataError::IndexOutOfBounds` if the index is out of bounds.
    fn get(&self, index: usize) -> Result<Self::Item, DataError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A dataset whose items each carry a categorical label.
///
/// The label vector is parallel to the items: `labels()[i]` is the label of
/// `get(i)`. Samplers rely on `labels().len() == len()`.
pub trait LabeledDataset: Dataset {
    /// The label type. Labels are grouped by equality and ordered ascending.
    type Label: Ord + Clone + Debug + Send + 'static;

    /// Returns the per-item label vector.
    ///
    /// # Errors
    ///
    /// Returns `DataError::MissingLabels` if the dataset has no label vector.
    fn labels(&self) -> Result<&[Self::Label], DataError>;

    /// Fetches the items at `indices`, in that exact order, as a single batch.
    ///
    /// The default implementation gathers items one by one through
    /// [`Dataset::get`] and reads labels from [`LabeledDataset::labels`].
    /// Datasets with a cheaper bulk path can override it.
    ///
    /// # Errors
    ///
    /// Propagates lookup errors from `get` and `labels`, and returns
    /// `DataError::IndexOutOfBounds` if an index has no label.
    fn get_batch(&self, indices: &[usize]) -> Result<Batch<Self::Item, Self::Label>, DataError> {
        let labels = self.labels()?;
        let mut batch = Batch::with_capacity(indices.len());
        for &index in indices {
            let label = labels.get(index).cloned().ok_or(DataError::IndexOutOfBounds {
                index,
                len: labels.len(),
            })?;
            batch.push(index, self.get(index)?, label);
        }
        Ok(batch)
    }
}
