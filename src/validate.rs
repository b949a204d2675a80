use crate::error::{InvariantError, Side};
use crate::key::Key;
use crate::node::Link;

/// Check order, uniqueness, cached heights and balance under `link`.
///
/// Every key must sit strictly between `lower` and `upper` (the nearest
/// ancestors it hangs right / left of). Returns the recomputed height.
pub(crate) fn check_subtree<K: Key, V>(
    link: &Link<K, V>,
    depth: usize,
    lower: Option<&K>,
    upper: Option<&K>,
    count: &mut usize,
) -> Result<i16, InvariantError> {
    let Some(node) = link else {
        return Ok(-1);
    };
    *count += 1;

    if let Some(lo) = lower {
        if node.key.equals(lo) {
            return Err(InvariantError::DuplicateKey { depth });
        }
        if node.key.less(lo) {
            return Err(InvariantError::Order {
                depth,
                side: Side::Right,
            });
        }
    }
    if let Some(hi) = upper {
        if node.key.equals(hi) {
            return Err(InvariantError::DuplicateKey { depth });
        }
        if !node.key.less(hi) {
            return Err(InvariantError::Order {
                depth,
                side: Side::Left,
            });
        }
    }

    let left = check_subtree(&node.left, depth + 1, lower, Some(&node.key), count)?;
    let right = check_subtree(&node.right, depth + 1, Some(&node.key), upper, count)?;

    let expected = 1 + left.max(right);
    if node.height != expected {
        return Err(InvariantError::Height {
            depth,
            stored: node.height,
            expected,
        });
    }

    let balance = left - right;
    if !(-1..=1).contains(&balance) {
        return Err(InvariantError::Unbalanced { depth, balance });
    }

    Ok(expected)
}
