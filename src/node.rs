//! Tree vertices and the balance engine.
//!
//! Every function here operates on an owned subtree (`Box<Node>`) and returns
//! the root of the resulting subtree. Nothing keeps parent pointers; callers
//! reattach the returned root to whatever slot they took it from.

use log::trace;

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
    /// Cached subtree height. A leaf is 0, a missing subtree is -1.
    pub(crate) height: i16,
}

impl<K, V> Node<K, V> {
    #[inline]
    pub(crate) fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
            height: 0,
        })
    }

    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    #[inline]
    pub(crate) fn balance_factor(&self) -> i16 {
        height(&self.left) - height(&self.right)
    }
}

#[inline]
pub(crate) fn height<K, V>(link: &Link<K, V>) -> i16 {
    link.as_ref().map_or(-1, |n| n.height)
}

#[inline]
pub(crate) fn balance_factor<K, V>(link: &Link<K, V>) -> i16 {
    link.as_ref().map_or(0, |n| n.balance_factor())
}

// =============================================================================
// Rotations
// =============================================================================

/// ```text
///     x              y
///    / \            / \
///   a   y    =>    x   c
///      / \        / \
///     b   c      a   b
/// ```
fn rotate_left<K, V>(mut x: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut y = x
        .right
        .take()
        .expect("left rotation requires a right child");
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Mirror image of [`rotate_left`].
fn rotate_right<K, V>(mut x: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut y = x
        .left
        .take()
        .expect("right rotation requires a left child");
    x.left = y.right.take();
    x.update_height();
    y.right = Some(x);
    y.update_height();
    y
}

fn rotate_left_right<K, V>(mut x: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let left = x
        .left
        .take()
        .expect("left-right rotation requires a left child");
    x.left = Some(rotate_left(left));
    rotate_right(x)
}

fn rotate_right_left<K, V>(mut x: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let right = x
        .right
        .take()
        .expect("right-left rotation requires a right child");
    x.right = Some(rotate_right(right));
    rotate_left(x)
}

/// Restore the AVL property at `n`, assuming both children already satisfy it.
///
/// Refreshes `n`'s cached height first, so this is also the height fix-up for
/// frames that didn't go out of balance. Returns the new subtree root.
pub(crate) fn rebalance<K, V>(mut n: Box<Node<K, V>>) -> Box<Node<K, V>> {
    n.update_height();

    let bf = n.balance_factor();
    if (-1..=1).contains(&bf) {
        return n;
    }

    // A heavy-side child with factor 0 only shows up after a removal; the
    // single rotation handles it.
    if bf < 0 {
        if balance_factor(&n.right) <= 0 {
            trace!("RR rotation at height {}", n.height);
            rotate_left(n)
        } else {
            trace!("RL rotation at height {}", n.height);
            rotate_right_left(n)
        }
    } else if balance_factor(&n.left) >= 0 {
        trace!("LL rotation at height {}", n.height);
        rotate_right(n)
    } else {
        trace!("LR rotation at height {}", n.height);
        rotate_left_right(n)
    }
}
