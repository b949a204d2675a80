//! # avl-rs
//!
//! An ordered map backed by an AVL tree: a binary search tree in which the
//! heights of every node's two subtrees differ by at most one.
//!
//! Insertion, removal and lookup are `O(log n)`. Entries can be walked in
//! ascending or descending key order, either with a visitor that may stop
//! early or with a lazy [`Iter`].
//!
//! ## Example
//!
//! ```rust
//! use avl_rs::AvlTree;
//!
//! let mut tree: AvlTree<u64, &str> = AvlTree::new();
//! tree.insert(2, "two");
//! tree.insert(1, "one");
//! tree.insert(3, "three");
//!
//! assert_eq!(tree.get(&2), Some(&"two"));
//! assert_eq!(tree.len(), 3);
//!
//! // An existing key keeps its first value.
//! assert!(!tree.insert(2, "deux"));
//! assert_eq!(tree.get(&2), Some(&"two"));
//!
//! let mut seen = Vec::new();
//! tree.visit_descending(|k, _| {
//!     seen.push(*k);
//!     *k > 2
//! });
//! assert_eq!(seen, vec![3, 2]);
//! ```

#![forbid(unsafe_code)]

mod error;
mod iter;
mod key;
mod mutate;
mod node;
mod query;
#[cfg(feature = "serde")]
mod serde_impl;
mod validate;

use log::debug;

pub use error::{InvariantError, Side};
pub use iter::{Iter, Keys, Values};
pub use key::Key;

use node::Link;

// =============================================================================
// AvlTree
// =============================================================================

/// An ordered map from unique keys to values, kept height-balanced.
///
/// Keys are compared through [`Key`], which every `Ord` type already
/// implements. Inserting a key that is already present is a no-op: the first
/// value wins. To replace a value, [`remove`](Self::remove) then
/// [`insert`](Self::insert), or write through [`get_mut`](Self::get_mut).
#[derive(Clone)]
pub struct AvlTree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> AvlTree<K, V> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the root: `-1` when empty, `0` for a single entry.
    #[inline]
    pub fn height(&self) -> i16 {
        node::height(&self.root)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        debug!("clearing AVL tree with {} entries", self.len);
        self.root = None;
        self.len = 0;
    }

    /// The entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        query::leftmost(&self.root).map(|n| (&n.key, &n.value))
    }

    /// The entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        query::rightmost(&self.root).map(|n| (&n.key, &n.value))
    }

    /// Call `visit` on each entry in ascending key order until it returns
    /// `false`.
    ///
    /// Returns `true` if every entry was visited.
    pub fn visit_ascending<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        query::visit_ascending(&self.root, &mut visit)
    }

    /// Descending counterpart of [`visit_ascending`](Self::visit_ascending).
    pub fn visit_descending<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        query::visit_descending(&self.root, &mut visit)
    }

    /// Entries in ascending key order. Use `.rev()` for descending.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.len)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Key, V> AvlTree<K, V> {
    pub fn get(&self, key: &K) -> Option<&V> {
        query::lookup(&self.root, key).map(|n| &n.value)
    }

    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        query::lookup(&self.root, key).map(|n| (&n.key, &n.value))
    }

    /// Mutable access to a stored value. The key itself stays immutable.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        query::lookup_mut(&mut self.root, key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        query::lookup(&self.root, key).is_some()
    }

    /// Insert `(key, value)` if no equal key is stored yet.
    ///
    /// Returns `true` if the entry was added. On `false` the map is unchanged
    /// and `value` is dropped.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let mut inserted = false;
        self.root = Some(mutate::insert(self.root.take(), key, value, &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Remove the entry for `key`, returning its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let mut removed = None;
        self.root = mutate::remove(self.root.take(), key, &mut removed);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Walk the whole tree and report the first broken invariant, if any.
    ///
    /// Every public operation preserves these invariants; a failure points at
    /// a [`Key`] implementation that is not a strict total order, or at a key
    /// whose ordering changed while stored.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut counted = 0;
        validate::check_subtree(&self.root, 0, None, None, &mut counted)?;
        if counted != self.len {
            return Err(InvariantError::Size {
                recorded: self.len,
                counted,
            });
        }
        Ok(())
    }
}

impl<K, V> Default for AvlTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for AvlTree<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Key, V: PartialEq> PartialEq for AvlTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .zip(other.iter())
                .all(|((ka, va), (kb, vb))| ka.equals(kb) && va == vb)
    }
}

impl<K: Key, V: Eq> Eq for AvlTree<K, V> {}

impl<K: Key, V> FromIterator<(K, V)> for AvlTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Key, V> Extend<(K, V)> for AvlTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a AvlTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod proptests;
