//! Hash collection aliases backed by AHash.

pub use ahash::AHashMap as HashMap;
