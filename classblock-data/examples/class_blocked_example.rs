//! Example: class-blocked batching over a small labeled dataset.
//!
//! Run with `RUST_LOG=debug` to see the sampler's epoch logs.

use classblock_data::{ClassBlockedBatchSampler, LabeledVecDataset, SamplerConfig};

fn main() {
    env_logger::init();

    // 10 synthetic feature vectors (3 features each) in 3 classes
    let features: Vec<Vec<f32>> = (0..10)
        .map(|i| vec![i as f32, (i * i) as f32, 1.0 / (i as f32 + 1.0)])
        .collect();
    let labels = vec![0u32, 0, 0, 1, 1, 1, 1, 2, 2, 2];
    let dataset = LabeledVecDataset::new(features, labels).expect("One label per example");

    let config = SamplerConfig::new(3).with_seed(42);
    let mut sampler =
        ClassBlockedBatchSampler::with_config(&dataset, config).expect("Valid dataset");

    println!("Label order: {:?}", sampler.label_order());
    println!(
        "{} batches per epoch, {} example(s) dropped",
        sampler.num_batches(),
        sampler.num_dropped()
    );

    for _ in 0..2 {
        let traversal = sampler.start_traversal();
        println!("\n--- Epoch {} ---", traversal.epoch());
        println!("Flattened order: {:?}", traversal.order());
        for (i, batch) in traversal.enumerate() {
            let batch = batch.expect("No error expected");
            println!("Batch {i}: indices {:?}, labels {:?}", batch.indices, batch.labels);
        }
    }
}
