use std::fmt::Debug;

use super::traits::{Dataset, LabeledDataset};
use crate::error::DataError;

/// An in-memory dataset of items with a parallel vector of labels.
///
/// `labels[i]` is the class of `items[i]`. Both vectors must have the same
/// length; this is checked once in [`LabeledVecDataset::new`].
#[derive(Debug, Clone)]
pub struct LabeledVecDataset<T, L>
where
    T: Clone + Send + 'static,
    L: Ord + Clone + Debug + Send + 'static,
{
    items: Vec<T>,
    labels: Vec<L>,
}

impl<T, L> LabeledVecDataset<T, L>
where
    T: Clone + Send + 'static,
    L: Ord + Clone + Debug + Send + 'static,
{
    /// Creates a new `LabeledVecDataset`.
    ///
    /// # Errors
    ///
    /// Returns `DataError::LabelCountMismatch` if `items` and `labels` have
    /// different lengths.
    pub fn new(items: Vec<T>, labels: Vec<L>) -> Result<Self, DataError> {
        if items.len() != labels.len() {
            return Err(DataError::LabelCountMismatch {
                labels: labels.len(),
                examples: items.len(),
            });
        }
        Ok(Self { items, labels })
    }

    /// Builds a dataset from `(item, label)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, L)>,
    {
        let (items, labels) = pairs.into_iter().unzip();
        Self { items, labels }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T, L> Dataset for LabeledVecDataset<T, L>
where
    T: Clone + Send + 'static,
    L: Ord + Clone + Debug + Send + 'static,
{
    type Item = T;

    fn get(&self, index: usize) -> Result<Self::Item, DataError> {
        self.items.get(index).cloned().ok_or(DataError::IndexOutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T, L> LabeledDataset for LabeledVecDataset<T, L>
where
    T: Clone + Send + 'static,
    L: Ord + Clone + Debug + Send + 'static,
{
    type Label = L;

    fn labels(&self) -> Result<&[L], DataError> {
        Ok(&self.labels)
    }
}

#[cfg(test)]
#[path = "labeled_vec_dataset_test.rs"]
mod tests;
