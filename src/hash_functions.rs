//! String hashing and table sizing utilities
//!
//! Both map variants share a deterministic djb2-style string hash and a set
//! of fixed sizing constants. The hash is pure and stateless, so equal keys
//! always land on the same probe sequence or bucket chain regardless of
//! which table instance computes it.
//!
//! # Usage
//!
//! ```rust
//! use strmap::hash_functions::{djb2_hash, slot_index};
//!
//! let hash = djb2_hash("Hobbit");
//! assert_eq!(hash, djb2_hash("Hobbit"));
//!
//! let index = slot_index(hash, 8);
//! assert!(index < 8);
//! ```

/// Default slot/bucket count for tables constructed with `new`
pub const DEFAULT_CAPACITY: usize = 8;

/// Load ratio above which a table grows before the next insertion
pub const MAX_LOAD_RATIO: f64 = 0.9;

/// Multiplier applied to the capacity on every growth step
pub const GROWTH_FACTOR: usize = 3;

/// Hash a string key to a 32-bit value (djb2)
///
/// Seed accumulator 5381; for each UTF-16 code unit of the key in order,
/// `acc = acc * 33 + unit` with 32-bit wraparound at every step. The result
/// is deterministic and identical across table instances.
#[inline]
pub fn djb2_hash(key: &str) -> u32 {
    let mut hash: u32 = 5381;
    for unit in key.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_add(hash)
            .wrapping_add(u32::from(unit));
    }
    hash
}

/// Map a hash to a slot index for a table of the given capacity
#[inline]
pub fn slot_index(hash: u32, capacity: usize) -> usize {
    hash as usize % capacity
}
