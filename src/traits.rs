//! Shared table contract
//!
//! Both collision-resolution variants expose the same operations; the
//! [`StringTable`] trait captures that contract so callers and tests can be
//! written once and run against either strategy.

use crate::error::Result;

/// Contract shared by the open-addressing and chaining map variants
pub trait StringTable<V> {
    /// Look up the value stored for `key`
    ///
    /// Fails with [`StrMapError::KeyNotFound`](crate::StrMapError::KeyNotFound)
    /// when the key is absent.
    fn get(&self, key: &str) -> Result<&V>;

    /// Insert or overwrite the value for `key`
    ///
    /// Returns the previous value when the key already existed.
    fn insert(&mut self, key: String, value: V) -> Option<V>;

    /// Remove the entry for `key`, returning its value
    ///
    /// Fails with [`StrMapError::KeyNotFound`](crate::StrMapError::KeyNotFound)
    /// when the key is absent.
    fn remove(&mut self, key: &str) -> Result<V>;

    /// Check whether `key` has a live entry
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Number of live entries
    fn len(&self) -> usize;

    /// Check if the table holds no live entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current slot/bucket count
    fn capacity(&self) -> usize;
}
