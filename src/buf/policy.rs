//! Insertion policies for [`IntBuf`](crate::IntBuf)
//!
//! A policy decides what happens when a value is pushed: plain append,
//! order-preserving placement, or duplicate rejection. Policies are
//! zero-sized markers resolved at compile time, so buffer variants pay no
//! dispatch cost and carry no extra state.
//!
//! The policy trait is sealed: the set of policies is part of the buffer's
//! invariant story and cannot be extended from outside the crate.

pub(crate) mod sealed {
    use crate::buf::store::RawStore;

    pub trait Sealed {
        /// Apply the policy to `store`, returning whether the value was
        /// actually inserted.
        fn insert(store: &mut RawStore, value: i32) -> bool;
    }
}

/// Capability trait for insertion policies.
///
/// Implemented by [`Plain`], [`Ordered`] and [`Dedup`] only.
pub trait InsertPolicy: sealed::Sealed + 'static {}

/// Append at the end of the buffer. The classic dynamic-array behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plain;

/// Keep the buffer ascending across every insertion.
///
/// A pushed value is appended and then shifted leftward past any larger
/// predecessors (insertion-sort shift), so the order invariant holds after
/// each push at O(n) worst-case cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ordered;

/// Reject values already present in the buffer.
///
/// A duplicate push is a silent no-op through [`IntBuf::push`]; use
/// [`IntBuf::try_push`] when the caller needs to know whether the insertion
/// happened.
///
/// [`IntBuf::push`]: crate::IntBuf::push
/// [`IntBuf::try_push`]: crate::IntBuf::try_push
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dedup;

impl sealed::Sealed for Plain {
    #[inline]
    fn insert(store: &mut crate::buf::store::RawStore, value: i32) -> bool {
        store.push_raw(value);
        true
    }
}

impl sealed::Sealed for Ordered {
    fn insert(store: &mut crate::buf::store::RawStore, value: i32) -> bool {
        store.push_raw(value);
        let slots = store.as_mut_slice();
        let mut i = slots.len() - 1;
        while i > 0 && slots[i - 1] > value {
            slots[i] = slots[i - 1];
            i -= 1;
        }
        slots[i] = value;
        true
    }
}

impl sealed::Sealed for Dedup {
    fn insert(store: &mut crate::buf::store::RawStore, value: i32) -> bool {
        if store.as_slice().contains(&value) {
            return false;
        }
        store.push_raw(value);
        true
    }
}

impl InsertPolicy for Plain {}
impl InsertPolicy for Ordered {}
impl InsertPolicy for Dedup {}
