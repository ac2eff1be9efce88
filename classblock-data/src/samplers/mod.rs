pub mod class_blocked;
pub mod label_groups;

pub use class_blocked::{ClassBlockedBatchSampler, Traversal};
pub use label_groups::LabelGroups;
