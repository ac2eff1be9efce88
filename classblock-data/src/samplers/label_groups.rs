// classblock-data/src/samplers/label_groups.rs

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

use crate::datasets::LabeledDataset;
use crate::error::DataError;

/// Dataset indices grouped by label.
///
/// Labels are kept in ascending order. Within a label, indices keep their
/// original dataset order. The grouping is immutable once built: traversals
/// shuffle copies of the per-label lists, never the lists themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGroups<L: Ord> {
    groups: BTreeMap<L, Vec<usize>>,
    total: usize,
}

impl<L: Ord + Clone> LabelGroups<L> {
    /// Groups the positions of `labels` by label value.
    pub fn from_labels(labels: &[L]) -> Self {
        let mut groups: BTreeMap<L, Vec<usize>> = BTreeMap::new();
        for (index, label) in labels.iter().enumerate() {
            groups.entry(label.clone()).or_default().push(index);
        }
        LabelGroups {
            groups,
            total: labels.len(),
        }
    }

    /// Groups the examples of `dataset` by their label.
    ///
    /// # Errors
    ///
    /// Returns `DataError::MissingLabels` if the dataset has no label vector and
    /// `DataError::LabelCountMismatch` if it does not hold one label per example.
    pub fn from_dataset<D>(dataset: &D) -> Result<Self, DataError>
    where
        D: LabeledDataset<Label = L>,
    {
        let labels = dataset.labels()?;
        if labels.len() != dataset.len() {
            return Err(DataError::LabelCountMismatch {
                labels: labels.len(),
                examples: dataset.len(),
            });
        }
        Ok(Self::from_labels(labels))
    }

    /// Distinct labels, ascending.
    pub fn labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.groups.keys()
    }

    /// Indices of the examples labeled `label`, in dataset order.
    pub fn indices(&self, label: &L) -> Option<&[usize]> {
        self.groups.get(label).map(Vec::as_slice)
    }

    /// Iterates over `(label, indices)` pairs in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (&L, &[usize])> + '_ {
        self.groups.iter().map(|(label, indices)| (label, indices.as_slice()))
    }

    /// Number of examples per label, ascending by label.
    pub fn class_counts(&self) -> Vec<(L, usize)> {
        self.groups
            .iter()
            .map(|(label, indices)| (label.clone(), indices.len()))
            .collect()
    }

    /// Number of distinct labels.
    pub fn num_labels(&self) -> usize {
        self.groups.len()
    }

    /// Total number of grouped examples.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Builds one epoch's flattened index order.
    ///
    /// Each label's indices are copied and shuffled independently with `rng`,
    /// then the blocks are concatenated in ascending label order.
    pub fn shuffled_order<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.total);
        for indices in self.groups.values() {
            let start = order.len();
            order.extend_from_slice(indices);
            order[start..].shuffle(rng);
        }
        order
    }
}

#[cfg(test)]
#[path = "label_groups_test.rs"]
mod tests;
