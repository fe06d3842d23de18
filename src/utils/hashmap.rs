//! The hash-map used for edge bookkeeping.

pub use hashbrown::hash_map::Entry;
pub use hashbrown::HashMap;
