//! Core building blocks: numeric traits and index partitioning.

pub mod partition;
pub mod traits;

pub use partition::{partition, partitions, Partition};
pub use traits::Real;
