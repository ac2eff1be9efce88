use classblock_data::{
    ClassBlockedBatchSampler, LabeledDataset, SamplerConfig, BACKGROUND_LABEL,
};
use std::collections::{HashMap, HashSet};

mod common;
use common::{indexed_dataset, interleaved_labels};

#[test]
fn test_epoch_covers_truncated_flattened_order() {
    let labels = interleaved_labels(103, 5);
    let dataset = indexed_dataset(labels.clone());
    let mut sampler = ClassBlockedBatchSampler::new(&dataset, 8).unwrap();
    assert_eq!(sampler.num_batches(), 12);
    assert_eq!(sampler.num_dropped(), 7);

    for _ in 0..5 {
        let mut traversal = sampler.start_traversal();
        let order = traversal.order().to_vec();

        // Each index exactly once in the flattened order.
        let unique: HashSet<usize> = order.iter().copied().collect();
        assert_eq!(unique.len(), labels.len());
        assert_eq!(order.len(), labels.len());

        let mut delivered = Vec::new();
        let mut batch_count = 0;
        while let Some(batch) = traversal.next_batch() {
            let batch = batch.expect("Batch should not error");
            assert_eq!(batch.len(), 8, "No ragged batches");
            assert_eq!(batch.items, batch.indices);
            delivered.extend(batch.indices);
            batch_count += 1;
        }
        assert_eq!(batch_count, 12);
        assert_eq!(&delivered[..], &order[..96]);
        for dropped in &order[96..] {
            assert!(!delivered.contains(dropped));
        }
    }
}

#[test]
fn test_label_blocks_are_permutations_of_groups() {
    let labels = interleaved_labels(40, 4);
    let dataset = indexed_dataset(labels.clone());
    let mut sampler = ClassBlockedBatchSampler::new(&dataset, 4).unwrap();

    let mut expected: HashMap<u32, HashSet<usize>> = HashMap::new();
    for (index, &label) in labels.iter().enumerate() {
        expected.entry(label).or_default().insert(index);
    }

    for _ in 0..10 {
        let traversal = sampler.start_traversal();
        let mut position = 0;
        for label in sampler.label_order() {
            let block_len = expected[&label].len();
            let block: HashSet<usize> =
                traversal.order()[position..position + block_len].iter().copied().collect();
            assert_eq!(block, expected[&label]);
            position += block_len;
        }
        assert_eq!(position, labels.len());
    }
}

#[test]
fn test_batch_labels_never_decrease_within_epoch() {
    let dataset = indexed_dataset(interleaved_labels(64, 6));
    let mut sampler = ClassBlockedBatchSampler::new(&dataset, 5).unwrap();
    let mut previous: Option<u32> = None;
    for batch in sampler.start_traversal() {
        for label in batch.unwrap().labels {
            if let Some(prev) = previous {
                assert!(label >= prev, "label {} after {}", label, prev);
            }
            previous = Some(label);
        }
    }
}

#[test]
fn test_background_label_is_ordered_like_any_other() {
    let labels = vec![2, BACKGROUND_LABEL, 1, BACKGROUND_LABEL, 2, 1];
    let dataset = indexed_dataset(labels);
    let mut sampler = ClassBlockedBatchSampler::new(&dataset, 2).unwrap();
    assert_eq!(sampler.label_order(), vec![BACKGROUND_LABEL, 1, 2]);

    let batches: Vec<_> = sampler.start_traversal().map(|b| b.unwrap()).collect();
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].labels, vec![BACKGROUND_LABEL, BACKGROUND_LABEL]);
    assert_eq!(batches[1].labels, vec![1, 1]);
    assert_eq!(batches[2].labels, vec![2, 2]);
}

#[test]
fn test_seeded_traversals_repeat_across_samplers() {
    let dataset = indexed_dataset(interleaved_labels(50, 3));
    let config = SamplerConfig::new(7).with_seed(2024);

    let run = || {
        let mut sampler = ClassBlockedBatchSampler::with_config(&dataset, config).unwrap();
        (0..3)
            .map(|_| {
                sampler
                    .start_traversal()
                    .map(|batch| batch.unwrap().indices)
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_new_traversal_after_partial_consumption() {
    let dataset = indexed_dataset(interleaved_labels(30, 3));
    let mut sampler = ClassBlockedBatchSampler::new(&dataset, 3).unwrap();

    let mut partial = sampler.start_traversal();
    assert!(partial.next_batch().is_some());
    drop(partial);

    let full = sampler.start_traversal();
    assert_eq!(full.samples_returned(), 0);
    assert_eq!(full.count(), 10);
    assert_eq!(dataset.labels().unwrap().len(), 30);
}
