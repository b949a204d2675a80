//! Ordering capability required of every key stored in an [`AvlTree`](crate::AvlTree).

/// A strict total order over keys.
///
/// Keys are only ever compared, never hashed. The tree assumes that for any
/// two keys exactly one of `a.less(b)`, `a.equals(b)`, `b.less(a)` holds; an
/// implementation that breaks this produces an arbitrary (but memory-safe)
/// tree shape.
///
/// Every `T: Ord` is a `Key` already. Implement it by hand when a type's
/// identity is a subset of its fields:
///
/// ```rust
/// use avl_rs::Key;
///
/// struct User {
///     id: u64,
///     age: u8,
/// }
///
/// impl Key for User {
///     fn less(&self, other: &Self) -> bool {
///         self.id < other.id
///     }
///
///     fn equals(&self, other: &Self) -> bool {
///         self.id == other.id
///     }
/// }
///
/// let a = User { id: 1, age: 30 };
/// let b = User { id: 1, age: 31 };
/// assert!(a.equals(&b));
/// ```
///
/// A stored key must not change its ordering while it is in the tree.
pub trait Key {
    fn less(&self, other: &Self) -> bool;

    fn equals(&self, other: &Self) -> bool;
}

impl<T: Ord + ?Sized> Key for T {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        self < other
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}
