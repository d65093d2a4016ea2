//! # valbuf: Growable Integer Buffers with Pluggable Insertion Policies
//!
//! This crate provides a contiguous, growable buffer of `i32` values whose
//! insertion behavior is selected at construction time through a zero-sized
//! policy type, with no virtual dispatch and no per-variant state.
//!
//! ## Key Features
//!
//! - **Predictable growth**: capacity starts at two slots and exactly
//!   doubles whenever a push finds the buffer full, so capacity values are
//!   part of the observable contract
//! - **Insertion policies**: plain append, order-preserving placement
//!   (insertion-sort shift plus binary search), and duplicate rejection
//!   (membership test plus status-reporting insert)
//! - **Structured errors**: out-of-range access and popping an empty buffer
//!   return error values instead of printing or handing out sentinels
//! - **Deep ownership**: every buffer exclusively owns its backing block;
//!   clones copy the block, capacity included, and never alias
//!
//! ## Quick Start
//!
//! ```rust
//! use valbuf::{IntBuf, SortedBuf, UniqueBuf};
//!
//! // Plain append with doubling growth
//! let mut buf: IntBuf = IntBuf::new();
//! buf.push(10);
//! buf.push(20);
//! buf.push(30);
//! assert_eq!(buf.to_string(), "[10, 20, 30]");
//! buf.set(1, 25).unwrap();
//! assert_eq!(buf.get(1), Ok(25));
//!
//! // Ascending order maintained on every push
//! let mut sorted = SortedBuf::new();
//! for v in [50, 10, 30, 20] {
//!     sorted.push(v);
//! }
//! assert_eq!(sorted.to_string(), "[10, 20, 30, 50]");
//! assert_eq!(sorted.search(30), Some(2));
//!
//! // Duplicates silently rejected
//! let mut unique = UniqueBuf::new();
//! for v in [10, 20, 10, 30] {
//!     unique.push(v);
//! }
//! assert_eq!(unique.len(), 3);
//! assert!(unique.contains(20));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod buf;
pub mod error;

pub use buf::{Dedup, InsertPolicy, IntBuf, Ordered, Plain, SortedBuf, UniqueBuf, MIN_CAPACITY};
pub use error::{BufError, Result};
