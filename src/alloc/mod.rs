//! Block allocation for the radix index.
//!
//! One `SlabPool` instance serves one fixed block type; the index owns two
//! (interior-node blocks and leaf-value blocks) and never shares them.

pub mod slab;

pub use slab::{AllocError, PoolStats, SlabPool};
