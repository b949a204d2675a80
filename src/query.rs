//! Read-only descent and in-order walks.

use crate::key::Key;
use crate::node::{Link, Node};

pub(crate) fn lookup<'a, K: Key, V>(mut link: &'a Link<K, V>, key: &K) -> Option<&'a Node<K, V>> {
    while let Some(node) = link.as_deref() {
        if key.less(&node.key) {
            link = &node.left;
        } else if key.equals(&node.key) {
            return Some(node);
        } else {
            link = &node.right;
        }
    }
    None
}

pub(crate) fn lookup_mut<'a, K: Key, V>(link: &'a mut Link<K, V>, key: &K) -> Option<&'a mut V> {
    let node = link.as_deref_mut()?;
    if key.less(&node.key) {
        lookup_mut(&mut node.left, key)
    } else if key.equals(&node.key) {
        Some(&mut node.value)
    } else {
        lookup_mut(&mut node.right, key)
    }
}

pub(crate) fn leftmost<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    Some(node)
}

pub(crate) fn rightmost<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
    let mut node = link.as_deref()?;
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    Some(node)
}

/// Left subtree, node, right subtree. Returns `false` as soon as `visit` does,
/// without touching anything further.
pub(crate) fn visit_ascending<K, V, F>(link: &Link<K, V>, visit: &mut F) -> bool
where
    F: FnMut(&K, &V) -> bool,
{
    let Some(node) = link else {
        return true;
    };
    visit_ascending(&node.left, visit)
        && visit(&node.key, &node.value)
        && visit_ascending(&node.right, visit)
}

/// Right subtree, node, left subtree. Same early-exit contract as
/// [`visit_ascending`].
pub(crate) fn visit_descending<K, V, F>(link: &Link<K, V>, visit: &mut F) -> bool
where
    F: FnMut(&K, &V) -> bool,
{
    let Some(node) = link else {
        return true;
    };
    visit_descending(&node.right, visit)
        && visit(&node.key, &node.value)
        && visit_descending(&node.left, visit)
}
