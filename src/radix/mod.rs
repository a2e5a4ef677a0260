//! The pooled wide-radix index.
//!
//! A fixed-fanout radix trie over fixed-width integer keys: each level
//! consumes one key byte through a 256-slot node (four 64-bit presence
//! words plus four child-group references). Point operations and the
//! find-ceiling query all run in a bounded number of byte-probes.

pub(crate) mod bits;
pub(crate) mod node;

pub mod iter;
pub mod map;

pub use iter::Iter;
pub use map::{MapStats, RadixError, RadixMap};
