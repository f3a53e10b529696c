//! # strmap: String-Keyed Hash Maps with Pluggable Collision Resolution
//!
//! This crate implements a key-value container over a flat backing array in
//! two independent variants sharing one public contract:
//!
//! - [`OpenAddressingMap`]: all entries live directly in the slot array;
//!   collisions are resolved by linear probing and deletions leave tombstones
//!   so probe chains stay intact until the next growth compacts them.
//! - [`ChainingMap`]: each bucket owns a singly linked chain of entries;
//!   collisions append to the chain and deletions splice it immediately.
//!
//! Both variants hash keys with the same deterministic djb2-style string
//! hash, grow by a fixed factor of 3 when the load ratio crosses 0.9, and
//! report missing keys through the dedicated
//! [`StrMapError::KeyNotFound`] error kind.
//!
//! ## Quick Start
//!
//! ```rust
//! use strmap::{ChainingMap, OpenAddressingMap, StringTable};
//!
//! let mut probed = OpenAddressingMap::new();
//! probed.insert("Hobbit", "Frodo");
//! probed.insert("Maiar", "Sauron");
//! assert_eq!(probed.get("Maiar"), Ok(&"Sauron"));
//!
//! let mut chained = ChainingMap::new();
//! chained.insert("Wizard", "Gandalf");
//! assert_eq!(chained.remove("Wizard"), Ok("Gandalf"));
//! assert!(chained.get("Wizard").is_err());
//!
//! // both variants implement the shared StringTable contract
//! fn count<T: StringTable<&'static str>>(table: &T) -> usize {
//!     table.len()
//! }
//! assert_eq!(count(&probed), 2);
//! assert_eq!(count(&chained), 0);
//! ```

#![warn(missing_docs)]

pub mod chaining;
pub mod error;
pub mod hash_functions;
pub mod open_addressing;
pub mod traits;

// Re-export core types
pub use chaining::ChainingMap;
pub use error::{Result, StrMapError};
pub use open_addressing::OpenAddressingMap;
pub use traits::StringTable;

// Export hash and sizing utilities
pub use hash_functions::{djb2_hash, slot_index, DEFAULT_CAPACITY, GROWTH_FACTOR, MAX_LOAD_RATIO};

// Export iterator types with module-qualified names to avoid conflicts
pub use chaining::{Iter as ChainingIter, Keys as ChainingKeys, Values as ChainingValues};
pub use open_addressing::{
    Iter as OpenAddressingIter, Keys as OpenAddressingKeys, Values as OpenAddressingValues,
};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing strmap v{}", VERSION);
}
