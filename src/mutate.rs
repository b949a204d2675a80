//! Recursive insertion and removal.
//!
//! Both walk down from the subtree root, then rebalance every frame on the way
//! back up and hand the (possibly new) subtree root to the caller.

use crate::key::Key;
use crate::node::{rebalance, Link, Node};

/// Insert `(key, value)` unless an equal key is already present.
///
/// Sets `*inserted` only when a new leaf was created. An existing entry keeps
/// its value and `value` is dropped.
pub(crate) fn insert<K: Key, V>(
    link: Link<K, V>,
    key: K,
    value: V,
    inserted: &mut bool,
) -> Box<Node<K, V>> {
    let mut node = match link {
        Some(node) => node,
        None => {
            *inserted = true;
            return Node::leaf(key, value);
        }
    };

    if key.equals(&node.key) {
        return node;
    }

    if key.less(&node.key) {
        node.left = Some(insert(node.left.take(), key, value, inserted));
    } else {
        node.right = Some(insert(node.right.take(), key, value, inserted));
    }

    rebalance(node)
}

/// Remove the entry whose key equals `key`, storing it in `*removed`.
///
/// An absent key leaves the subtree untouched and `*removed` as `None`.
pub(crate) fn remove<K: Key, V>(
    link: Link<K, V>,
    key: &K,
    removed: &mut Option<(K, V)>,
) -> Link<K, V> {
    let mut node = link?;

    if key.less(&node.key) {
        node.left = remove(node.left.take(), key, removed);
    } else if !key.equals(&node.key) {
        node.right = remove(node.right.take(), key, removed);
    } else {
        match (node.left.take(), node.right.take()) {
            (None, None) => {
                let Node { key, value, .. } = *node;
                *removed = Some((key, value));
                return None;
            }
            (Some(child), None) | (None, Some(child)) => {
                let Node { key, value, .. } = *node;
                *removed = Some((key, value));
                return Some(child);
            }
            (Some(left), Some(right)) => {
                // Splice in the in-order successor.
                let (rest, successor) = remove_min(right);
                let Node {
                    key: succ_key,
                    value: succ_value,
                    ..
                } = *successor;
                let old_key = std::mem::replace(&mut node.key, succ_key);
                let old_value = std::mem::replace(&mut node.value, succ_value);
                *removed = Some((old_key, old_value));
                node.left = Some(left);
                node.right = rest;
            }
        }
    }

    Some(rebalance(node))
}

/// Detach the leftmost node of `node`'s subtree.
///
/// Returns the rebalanced remainder and the detached node, whose child links
/// are both empty.
pub(crate) fn remove_min<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = remove_min(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
    }
}
