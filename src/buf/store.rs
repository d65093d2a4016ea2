//! Manually managed backing block for [`IntBuf`](crate::IntBuf)
//!
//! The store keeps a single heap block of `i32` slots and grows it with
//! realloc, which can often extend in place instead of copying. Capacity
//! never drops below [`MIN_CAPACITY`], so the block is always allocated and
//! the data pointer is always valid.
//!
//! Growth is part of the contract: when an insertion finds the block full,
//! capacity exactly doubles. Tests assert the resulting capacity values.

use std::alloc::{self, Layout};
use std::ptr::{self, NonNull};
use std::slice;

/// Smallest capacity a store ever has. Smaller requests are coerced up to
/// this value.
pub const MIN_CAPACITY: usize = 2;

/// Contiguous owned block of `i32` slots with a logically valid prefix.
///
/// Invariants: `len <= cap` and `cap >= MIN_CAPACITY`.
pub(crate) struct RawStore {
    ptr: NonNull<i32>,
    len: usize,
    cap: usize,
}

impl RawStore {
    /// Create an empty store with `MIN_CAPACITY` slots.
    pub(crate) fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Create an empty store with `cap` slots, coerced up to `MIN_CAPACITY`.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        let cap = cap.max(MIN_CAPACITY);
        Self {
            ptr: allocate(cap),
            len: 0,
            cap,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const i32 {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut i32 {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[i32] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [i32] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Double the capacity, moving existing elements into the new block.
    fn grow(&mut self) {
        let new_cap = self.cap * 2;
        let old_layout = layout_for(self.cap);
        let new_layout = layout_for(new_cap);
        let new_ptr =
            unsafe { alloc::realloc(self.ptr.as_ptr() as *mut u8, old_layout, new_layout.size()) };
        let new_ptr = new_ptr as *mut i32;
        match NonNull::new(new_ptr) {
            Some(p) => self.ptr = p,
            None => alloc::handle_alloc_error(new_layout),
        }
        self.cap = new_cap;
    }

    /// Write `value` at the end of the logical prefix, doubling first when
    /// full.
    pub(crate) fn push_raw(&mut self, value: i32) {
        if self.len == self.cap {
            self.grow();
        }
        unsafe {
            ptr::write(self.as_mut_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Remove and return the last element of the logical prefix.
    pub(crate) fn pop_raw(&mut self) -> Option<i32> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(unsafe { ptr::read(self.as_ptr().add(self.len)) })
        }
    }

    /// Reset the logical prefix to empty. The block is retained.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }
}

impl Clone for RawStore {
    /// Deep copy: a fresh block sized to the source's capacity, with the
    /// logical prefix copied over. Clones never alias the source's block.
    fn clone(&self) -> Self {
        let ptr = allocate(self.cap);
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), ptr.as_ptr(), self.len);
        }
        Self {
            ptr,
            len: self.len,
            cap: self.cap,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

impl Drop for RawStore {
    fn drop(&mut self) {
        unsafe {
            alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout_for(self.cap));
        }
    }
}

// Safety: RawStore exclusively owns its block of plain i32 values.
unsafe impl Send for RawStore {}
unsafe impl Sync for RawStore {}

#[inline]
fn layout_for(cap: usize) -> Layout {
    // cap is bounded by what allocation has already succeeded for (or is
    // about to be requested); i32 arrays cannot overflow Layout before the
    // allocator itself gives out.
    Layout::array::<i32>(cap).expect("capacity overflows allocation layout")
}

fn allocate(cap: usize) -> NonNull<i32> {
    let layout = layout_for(cap);
    let ptr = unsafe { alloc::alloc(layout) as *mut i32 };
    match NonNull::new(ptr) {
        Some(p) => p,
        None => alloc::handle_alloc_error(layout),
    }
}
