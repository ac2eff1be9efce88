use classblock_data::LabeledVecDataset;

// Helper to build a dataset whose items are their own indices, so a batch's
// items can be checked against its indices directly.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub fn indexed_dataset(labels: Vec<u32>) -> LabeledVecDataset<usize, u32> {
    let items = (0..labels.len()).collect();
    LabeledVecDataset::new(items, labels).expect("Test dataset creation failed")
}

/// Labels of `len` examples spread over `classes` classes in an interleaved pattern.
#[allow(dead_code)]
pub fn interleaved_labels(len: usize, classes: u32) -> Vec<u32> {
    (0..len as u32).map(|i| (i * 7 + 3) % classes).collect()
}
