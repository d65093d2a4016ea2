//! Growable `i32` buffer parameterized by an insertion policy
//!
//! `IntBuf` owns a contiguous backing block that doubles in capacity when an
//! insertion finds it full. The policy type parameter selects what a push
//! does: plain append, order-preserving placement, or duplicate rejection.
//! [`SortedBuf`] and [`UniqueBuf`] name the two specialized variants.

use crate::buf::policy::{Dedup, InsertPolicy, Ordered, Plain};
use crate::buf::store::RawStore;
use crate::error::{check_bounds, BufError, Result};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut, Index, IndexMut};

/// Growable buffer of `i32` values with a policy-controlled insertion path.
///
/// The backing block always holds at least two slots and exactly doubles
/// whenever a push finds it full, so capacity values are predictable.
/// Out-of-range access and popping an empty buffer return structured errors
/// and never change the buffer.
///
/// # Examples
///
/// ```rust
/// use valbuf::IntBuf;
///
/// let mut buf: IntBuf = IntBuf::new();
/// buf.push(10);
/// buf.push(20);
/// buf.push(30);
/// assert_eq!(buf.to_string(), "[10, 20, 30]");
/// assert_eq!(buf.get(1), Ok(20));
/// ```
pub struct IntBuf<P: InsertPolicy = Plain> {
    store: RawStore,
    _policy: PhantomData<P>,
}

/// Buffer that keeps its elements in ascending order across every push.
///
/// # Examples
///
/// ```rust
/// use valbuf::SortedBuf;
///
/// let mut buf = SortedBuf::new();
/// for v in [50, 10, 30, 20] {
///     buf.push(v);
/// }
/// assert_eq!(buf.to_string(), "[10, 20, 30, 50]");
/// assert_eq!(buf.search(30), Some(2));
/// ```
pub type SortedBuf = IntBuf<Ordered>;

/// Buffer that silently rejects values it already contains.
///
/// # Examples
///
/// ```rust
/// use valbuf::UniqueBuf;
///
/// let mut buf = UniqueBuf::new();
/// for v in [10, 20, 10, 30] {
///     buf.push(v);
/// }
/// assert_eq!(buf.len(), 3);
/// assert!(buf.contains(20));
/// ```
pub type UniqueBuf = IntBuf<Dedup>;

impl<P: InsertPolicy> IntBuf<P> {
    /// Create an empty buffer with the minimum capacity of two slots.
    pub fn new() -> Self {
        Self {
            store: RawStore::new(),
            _policy: PhantomData,
        }
    }

    /// Create an empty buffer with exactly `cap` slots (coerced up to the
    /// minimum of two).
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            store: RawStore::with_capacity(cap),
            _policy: PhantomData,
        }
    }

    /// Number of logically present elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    /// Number of allocated slots. At least two, and never reduced.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Insert `value` through the buffer's policy.
    ///
    /// Plain buffers append at the end (amortized O(1)). Ordered buffers
    /// shift the value into its sorted position (O(n) worst case). Dedup
    /// buffers silently skip values already present (O(n) scan); use
    /// [`try_push`](Self::try_push) to observe the outcome.
    #[inline]
    pub fn push(&mut self, value: i32) {
        P::insert(&mut self.store, value);
    }

    /// Insert `value` through the policy, reporting whether it was actually
    /// inserted.
    ///
    /// Always `true` for plain and ordered buffers; `false` when a dedup
    /// buffer rejects a duplicate (in which case nothing changes).
    #[inline]
    pub fn try_push(&mut self, value: i32) -> bool {
        P::insert(&mut self.store, value)
    }

    /// Remove and return the last element.
    ///
    /// Returns [`BufError::Empty`] on an empty buffer; the buffer is left
    /// unchanged.
    pub fn pop(&mut self) -> Result<i32> {
        self.store.pop_raw().ok_or(BufError::Empty)
    }

    /// Return the element at `index`, or [`BufError::OutOfBounds`] when the
    /// index is past the logical length.
    pub fn get(&self, index: usize) -> Result<i32> {
        check_bounds(index, self.len())?;
        Ok(self.store.as_slice()[index])
    }

    /// Reset the buffer to empty. Capacity is retained.
    #[inline]
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// View the logical elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        self.store.as_slice()
    }

    /// Push every value in `values` through the policy, in order.
    pub fn extend_from_slice(&mut self, values: &[i32]) {
        for &value in values {
            P::insert(&mut self.store, value);
        }
    }

    /// Build a new plain buffer holding this buffer's elements followed by
    /// `other`'s.
    ///
    /// The result is allocated to fit both operands up front, so no growth
    /// happens while copying. Neither operand is mutated. `other` may carry
    /// any policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valbuf::IntBuf;
    ///
    /// let a: IntBuf = IntBuf::from(&[10, 20][..]);
    /// let b: IntBuf = IntBuf::from(&[30][..]);
    /// let joined = a.concat(&b);
    /// assert_eq!(joined.as_slice(), &[10, 20, 30]);
    /// assert_eq!(joined.capacity(), 3);
    /// ```
    pub fn concat<Q: InsertPolicy>(&self, other: &IntBuf<Q>) -> IntBuf<Plain> {
        let mut out = IntBuf::<Plain>::with_capacity(self.len() + other.len());
        out.extend_from_slice(self.as_slice());
        out.extend_from_slice(other.as_slice());
        out
    }
}

impl IntBuf<Plain> {
    /// Overwrite the element at `index`.
    ///
    /// Returns [`BufError::OutOfBounds`] without changing anything when the
    /// index is past the logical length. Only plain buffers expose this:
    /// writing an arbitrary slot could break the ordered or dedup invariant.
    pub fn set(&mut self, index: usize, value: i32) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Get a writable handle to the element at `index`, or
    /// [`BufError::OutOfBounds`].
    pub fn get_mut(&mut self, index: usize) -> Result<&mut i32> {
        check_bounds(index, self.len())?;
        Ok(&mut self.store.as_mut_slice()[index])
    }

    /// View the logical elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        self.store.as_mut_slice()
    }
}

impl IntBuf<Ordered> {
    /// Binary search for `value` over the ordered elements.
    ///
    /// Returns `Some(i)` with `self[i] == value` when the value is present,
    /// `None` otherwise. When duplicates exist, an arbitrary matching index
    /// is returned.
    pub fn search(&self, value: i32) -> Option<usize> {
        let slots = self.as_slice();
        let mut low = 0;
        let mut high = slots.len();
        while low < high {
            let mid = low + (high - low) / 2;
            if slots[mid] == value {
                return Some(mid);
            }
            if slots[mid] < value {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        None
    }
}

impl IntBuf<Dedup> {
    /// Check whether `value` is present, by linear scan.
    pub fn contains(&self, value: i32) -> bool {
        self.as_slice().contains(&value)
    }
}

impl<P: InsertPolicy> Default for IntBuf<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: InsertPolicy> Clone for IntBuf<P> {
    /// Deep copy: the clone gets its own backing block sized to the
    /// source's capacity, so the two buffers never alias and compare equal
    /// in both contents and capacity.
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _policy: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.store.clone_from(&source.store);
    }
}

impl<P: InsertPolicy> From<&[i32]> for IntBuf<P> {
    /// Build a buffer by pushing each value through the policy, so an
    /// ordered buffer comes out sorted and a dedup buffer drops duplicates.
    fn from(values: &[i32]) -> Self {
        let mut buf = Self::with_capacity(values.len());
        buf.extend_from_slice(values);
        buf
    }
}

impl<P: InsertPolicy> Deref for IntBuf<P> {
    type Target = [i32];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl DerefMut for IntBuf<Plain> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<P: InsertPolicy> Index<usize> for IntBuf<P> {
    type Output = i32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for IntBuf<Plain> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<P: InsertPolicy, Q: InsertPolicy> PartialEq<IntBuf<Q>> for IntBuf<P> {
    /// Element-wise equality: equal length and pairwise-equal elements in
    /// order. Capacity does not participate.
    fn eq(&self, other: &IntBuf<Q>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<P: InsertPolicy> Eq for IntBuf<P> {}

impl<P: InsertPolicy> fmt::Debug for IntBuf<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<P: InsertPolicy> fmt::Display for IntBuf<P> {
    /// Bracketed, comma-separated rendering, e.g. `[10, 20, 30]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

#[cfg(feature = "serde")]
impl<P: InsertPolicy> serde::Serialize for IntBuf<P> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(self.as_slice(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, P: InsertPolicy> serde::Deserialize<'de> for IntBuf<P> {
    /// Deserialized values are replayed through the policy, so an ordered
    /// buffer re-sorts and a dedup buffer re-rejects duplicates from
    /// untrusted input.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = Vec::<i32>::deserialize(deserializer)?;
        Ok(Self::from(values.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let buf: IntBuf = IntBuf::new();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 2);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_with_capacity() {
        let buf: IntBuf = IntBuf::with_capacity(10);
        assert_eq!(buf.capacity(), 10);
        let buf: IntBuf = IntBuf::with_capacity(0);
        assert_eq!(buf.capacity(), 2);
    }

    #[test]
    fn test_push_pop() {
        let mut buf: IntBuf = IntBuf::new();
        buf.push(1);
        buf.push(2);
        buf.push(3);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.pop(), Ok(3));
        assert_eq!(buf.pop(), Ok(2));
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn test_pop_empty() {
        let mut buf: IntBuf = IntBuf::new();
        assert_eq!(buf.pop(), Err(BufError::Empty));
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn test_growth_doubles() {
        let mut buf: IntBuf = IntBuf::new();
        buf.push(1);
        buf.push(2);
        assert_eq!(buf.capacity(), 2);
        buf.push(3);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
        buf.push(4);
        buf.push(5);
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_get_set() {
        let mut buf: IntBuf = IntBuf::new();
        buf.push(10);
        buf.push(20);
        buf.push(30);
        assert_eq!(buf.get(1), Ok(20));
        assert_eq!(buf.get(3), Err(BufError::out_of_bounds(3, 3)));

        buf.set(1, 25).unwrap();
        assert_eq!(buf.get(1), Ok(25));
        assert_eq!(buf.set(9, 0), Err(BufError::out_of_bounds(9, 3)));
        assert_eq!(buf.as_slice(), &[10, 25, 30]);
    }

    #[test]
    fn test_get_mut() {
        let mut buf: IntBuf = IntBuf::new();
        buf.push(7);
        *buf.get_mut(0).unwrap() = 8;
        assert_eq!(buf.get(0), Ok(8));
        assert!(buf.get_mut(1).is_err());
    }

    #[test]
    fn test_index() {
        let mut buf: IntBuf = IntBuf::new();
        buf.push(42);
        buf.push(84);
        assert_eq!(buf[0], 42);
        buf[1] = 100;
        assert_eq!(buf[1], 100);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let buf: IntBuf = IntBuf::new();
        let _ = buf[0];
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut buf: IntBuf = IntBuf::new();
        for i in 0..20 {
            buf.push(i);
        }
        let cap = buf.capacity();
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn test_concat() {
        let mut a: IntBuf = IntBuf::new();
        a.push(10);
        a.push(20);
        a.push(30);
        let mut b: IntBuf = IntBuf::new();
        b.push(40);
        b.push(50);

        let joined = a.concat(&b);
        assert_eq!(joined.as_slice(), &[10, 20, 30, 40, 50]);
        assert_eq!(joined.capacity(), 5);
        // operands untouched
        assert_eq!(a.as_slice(), &[10, 20, 30]);
        assert_eq!(b.as_slice(), &[40, 50]);
    }

    #[test]
    fn test_concat_empty_operands() {
        let a: IntBuf = IntBuf::new();
        let b: IntBuf = IntBuf::new();
        let joined = a.concat(&b);
        assert!(joined.is_empty());
        assert_eq!(joined.capacity(), 2);
    }

    #[test]
    fn test_concat_cross_policy() {
        let plain: IntBuf = IntBuf::from(&[3, 1][..]);
        let sorted = SortedBuf::from(&[9, 4][..]);
        let joined = plain.concat(&sorted);
        assert_eq!(joined.as_slice(), &[3, 1, 4, 9]);
    }

    #[test]
    fn test_clone_deep_copy() {
        let mut buf: IntBuf = IntBuf::with_capacity(8);
        buf.push(1);
        buf.push(2);
        let mut copy = buf.clone();
        assert_eq!(buf, copy);
        assert_eq!(copy.capacity(), 8);

        copy.set(0, 99).unwrap();
        assert_eq!(buf.as_slice(), &[1, 2]);
        assert_eq!(copy.as_slice(), &[99, 2]);
    }

    #[test]
    fn test_clone_from_assignment() {
        let src: IntBuf = IntBuf::from(&[4, 5, 6][..]);
        let mut dst: IntBuf = IntBuf::from(&[1][..]);
        dst.clone_from(&src);
        assert_eq!(dst, src);
        assert_eq!(dst.capacity(), src.capacity());
    }

    #[test]
    fn test_equality() {
        let a: IntBuf = IntBuf::from(&[1, 2, 3][..]);
        let mut b: IntBuf = IntBuf::with_capacity(100);
        b.extend_from_slice(&[1, 2, 3]);
        // capacity does not participate
        assert_eq!(a, b);
        b.push(4);
        assert_ne!(a, b);
    }

    #[test]
    fn test_cross_policy_equality() {
        let plain: IntBuf = IntBuf::from(&[10, 20, 30][..]);
        let sorted = SortedBuf::from(&[30, 10, 20][..]);
        assert_eq!(plain, sorted);
    }

    #[test]
    fn test_display() {
        let buf: IntBuf = IntBuf::from(&[10, 20, 30][..]);
        assert_eq!(buf.to_string(), "[10, 20, 30]");
        let empty: IntBuf = IntBuf::new();
        assert_eq!(empty.to_string(), "[]");
        let one: IntBuf = IntBuf::from(&[-1][..]);
        assert_eq!(one.to_string(), "[-1]");
    }

    #[test]
    fn test_debug_matches_display_shape() {
        let buf: IntBuf = IntBuf::from(&[1, 2][..]);
        assert_eq!(format!("{:?}", buf), "[1, 2]");
    }

    #[test]
    fn test_deref_slice_access() {
        let buf: IntBuf = IntBuf::from(&[1, 2, 3][..]);
        let slice: &[i32] = &buf;
        assert_eq!(slice.iter().sum::<i32>(), 6);
    }

    #[test]
    fn test_sorted_push_keeps_order() {
        let mut buf = SortedBuf::new();
        for v in [50, 10, 30, 20] {
            buf.push(v);
        }
        assert_eq!(buf.as_slice(), &[10, 20, 30, 50]);
        assert_eq!(buf.to_string(), "[10, 20, 30, 50]");
    }

    #[test]
    fn test_sorted_search() {
        let buf = SortedBuf::from(&[50, 10, 30, 20][..]);
        assert_eq!(buf.search(30), Some(2));
        assert_eq!(buf.search(10), Some(0));
        assert_eq!(buf.search(50), Some(3));
        assert_eq!(buf.search(35), None);
        assert_eq!(buf.search(5), None);
        assert_eq!(buf.search(60), None);
    }

    #[test]
    fn test_sorted_search_empty() {
        let buf = SortedBuf::new();
        assert_eq!(buf.search(1), None);
    }

    #[test]
    fn test_sorted_search_duplicates_finds_a_match() {
        let buf = SortedBuf::from(&[5, 5, 5, 1][..]);
        let idx = buf.search(5).unwrap();
        assert_eq!(buf[idx], 5);
    }

    #[test]
    fn test_unique_rejects_duplicates() {
        let mut buf = UniqueBuf::new();
        for v in [10, 20, 10, 30] {
            buf.push(v);
        }
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.to_string(), "[10, 20, 30]");
        assert!(buf.contains(20));
        assert!(!buf.contains(40));
    }

    #[test]
    fn test_unique_try_push_status() {
        let mut buf = UniqueBuf::new();
        assert!(buf.try_push(10));
        assert!(buf.try_push(20));
        assert!(!buf.try_push(10));
        assert_eq!(buf.len(), 2);
        assert!(buf.try_push(30));
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_try_push_always_true_for_plain_and_ordered() {
        let mut plain: IntBuf = IntBuf::new();
        assert!(plain.try_push(1));
        assert!(plain.try_push(1));

        let mut sorted = SortedBuf::new();
        assert!(sorted.try_push(2));
        assert!(sorted.try_push(2));
    }

    #[test]
    fn test_from_slice_routes_through_policy() {
        let sorted = SortedBuf::from(&[3, 1, 2][..]);
        assert_eq!(sorted.as_slice(), &[1, 2, 3]);

        let unique = UniqueBuf::from(&[1, 1, 2][..]);
        assert_eq!(unique.as_slice(), &[1, 2]);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use crate::{IntBuf, SortedBuf, UniqueBuf};

        #[test]
        fn test_serialize_as_sequence() {
            let buf: IntBuf = IntBuf::from(&[10, 20, 30][..]);
            let json = serde_json::to_string(&buf).unwrap();
            assert_eq!(json, "[10,20,30]");
        }

        #[test]
        fn test_deserialize_replays_policy() {
            let sorted: SortedBuf = serde_json::from_str("[50,10,30,20]").unwrap();
            assert_eq!(sorted.as_slice(), &[10, 20, 30, 50]);

            let unique: UniqueBuf = serde_json::from_str("[10,20,10,30]").unwrap();
            assert_eq!(unique.as_slice(), &[10, 20, 30]);
        }
    }
}
