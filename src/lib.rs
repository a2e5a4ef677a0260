//! # `strata` - Pooled Wide-Radix Integer Index
//!
//! An ordered key/value index for fixed-width integer keys, built as a
//! 256-way radix trie fed by slab-pooled node and value blocks. Tuned for
//! dense or clustered integer domains where a comparison tree pays too
//! much per probe.
//!
//! ## Key Features
//!
//! - **Byte-sliced descent**: one 256-way node per key byte, so lookups
//!   cost a fixed number of probes for a given key width
//! - **Find-ceiling**: `find_geq` answers "smallest stored key ≥ probe"
//!   with at most one 256-bit scan per level
//! - **Pooled blocks**: interior and leaf blocks come from two private
//!   slab pools; emptied blocks recycle without touching the process
//!   allocator
//! - **Predictable footprint**: arenas grow by a fixed increment and are
//!   released in one pass on drop
//!
//! ## Example
//!
//! ```rust
//! use strata::RadixMap;
//!
//! let mut map = RadixMap::new(20, 0)?;
//! map.insert(0x00FF, 1)?;
//! map.insert(0x0100, 2)?;
//!
//! assert_eq!(map.find(0x00FF), 1);
//! // Successor query across the byte boundary.
//! assert_eq!(map.find_geq(0x0100), 2);
//!
//! assert_eq!(map.remove(0x00FF), 1);
//! assert_eq!(map.find_geq(0), 2);
//! # Ok::<(), strata::RadixError>(())
//! ```
//!
//! Values are machine words and **0 is reserved to mean "absent"**: the
//! query operations return 0 for a missing key, and storing 0 is
//! rejected. Callers that need the full value range shift or tag their
//! values.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod alloc;
pub mod radix;

pub use alloc::{AllocError, PoolStats, SlabPool};
pub use radix::{Iter, MapStats, RadixError, RadixMap};

// Compile-time assertions for the block layout the pools rely on.
#[cfg(target_pointer_width = "64")]
const _: () = {
    use core::mem;

    use crate::radix::node::{LeafBlock, NodeBlock, RadixNode};

    // A node is four presence words plus four child references.
    assert!(mem::size_of::<RadixNode>() == 64);

    // An interior block of 64 nodes fills one 4 KiB page.
    assert!(mem::size_of::<NodeBlock>() == 4096);

    // A leaf block is 64 values.
    assert!(mem::size_of::<LeafBlock>() == 512);
};
