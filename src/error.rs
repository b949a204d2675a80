use thiserror::Error;

/// A broken structural invariant, reported by
/// [`AvlTree::check_invariants`](crate::AvlTree::check_invariants).
///
/// `depth` is the distance from the root (root = 0) of the offending node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("search order violated at depth {depth}: {side} subtree holds a key on the wrong side")]
    Order { depth: usize, side: Side },

    #[error("two nodes hold equal keys (second found at depth {depth})")]
    DuplicateKey { depth: usize },

    #[error("balance factor {balance} out of range at depth {depth}")]
    Unbalanced { depth: usize, balance: i16 },

    #[error("cached height {stored} at depth {depth}, expected {expected}")]
    Height {
        depth: usize,
        stored: i16,
        expected: i16,
    },

    #[error("recorded size {recorded} but {counted} nodes are reachable")]
    Size { recorded: usize, counted: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}
