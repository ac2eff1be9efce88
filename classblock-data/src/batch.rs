// classblock-data/src/batch.rs

/// A batch of examples fetched from a labeled dataset.
///
/// The three vectors are parallel: `items[i]` is the example stored at dataset
/// position `indices[i]` and carries the label `labels[i]`. Their order is the
/// order in which the indices were requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<T, L> {
    /// The examples, in request order.
    pub items: Vec<T>,
    /// The label of each example.
    pub labels: Vec<L>,
    /// The dataset index each example was read from.
    pub indices: Vec<usize>,
}

impl<T, L> Batch<T, L> {
    /// Creates an empty batch with room for `capacity` examples.
    pub fn with_capacity(capacity: usize) -> Self {
        Batch {
            items: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
            indices: Vec::with_capacity(capacity),
        }
    }

    /// Appends one example together with its label and source index.
    pub fn push(&mut self, index: usize, item: T, label: L) {
        self.indices.push(index);
        self.items.push(item);
        self.labels.push(label);
    }

    /// Number of examples in the batch.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over `(index, item, label)` triples in batch order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T, &L)> + '_ {
        self.indices
            .iter()
            .zip(self.items.iter())
            .zip(self.labels.iter())
            .map(|((&index, item), label)| (index, item, label))
    }
}
