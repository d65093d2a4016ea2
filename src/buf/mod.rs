//! Policy-driven growable integer buffers
//!
//! One buffer type, three insertion behaviors selected at construction time
//! through a zero-sized policy parameter:
//!
//! - **`IntBuf`** (alias for `IntBuf<Plain>`) - classic append-at-the-end
//!   dynamic array
//! - **`SortedBuf`** - ascending order maintained across every push, with
//!   binary search
//! - **`UniqueBuf`** - duplicate values silently rejected, with a membership
//!   test and a status-reporting insert
//!
//! All three share the same backing store: a contiguous block of at least
//! two `i32` slots that exactly doubles whenever a push finds it full.

mod int_buf;
pub mod policy;
mod store;

pub use int_buf::{IntBuf, SortedBuf, UniqueBuf};
pub use policy::{Dedup, InsertPolicy, Ordered, Plain};
pub use store::MIN_CAPACITY;
