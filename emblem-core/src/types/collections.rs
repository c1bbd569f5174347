//! Hash collections keyed by FxHash.

pub use rustc_hash::{FxHashMap, FxHashSet};
