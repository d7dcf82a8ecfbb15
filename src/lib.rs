#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! `RingFifo`: a bounded FIFO queue stored in a circular buffer of slots.
//!
//! The queue keeps `Copy` elements in a contiguous buffer that is either
//! provided by the client (borrowed) or allocated by the queue (owned).
//! One slot is always left free, so a queue over `slots` slots holds at
//! most `slots - 1` elements and no separate element counter is needed.
//!
//! Elements are pushed at the head and popped at the tail. A push to a full
//! queue is rejected, never overwriting; a pop from an empty queue returns
//! `None`. Neither call blocks.
//!
//! # Performance Characteristics
//!
//! - `push()`, `pop()`, `peek_first()`, `peek_last()`, `get()`: O(1)
//! - `clear()`: O(1) - resets the cursors only, old elements stay in the buffer
//! - `copy_range()`, `copy_all()`: O(n), at most two contiguous copies
//! - `for_each()`, `find()`, `reduce()`: O(n), oldest element first
//!
//! # Feature Flags
//!
//! - `alloc`: owned storage through `Fifo::with_slots()` and `Fifo::to_vec()`
//! - `std`: links the standard library (implies `alloc`)
//! - `sync` (default): `SyncFifo`, a queue guarded by one mutex (implies `std`)
//!
//! Without `std` the crate is `no_std` and performs no allocation:
//! ```toml
//! [dependencies]
//! ringfifo = { version = "0.1", default-features = false }
//! ```
//!
//! # Queue Interface
//!
//! ```
//! # use ringfifo::Fifo;
//! let mut buffer = [0i32; 8];
//! let mut fifo = Fifo::new(&mut buffer, 8).unwrap();
//! assert_eq!(fifo.capacity(), 7);
//!
//! for i in 1..=5 {
//!     fifo.push(i).unwrap();
//! }
//! assert_eq!(fifo.len(), 5);
//! assert_eq!(fifo.peek_first(), Some(&1));
//! assert_eq!(fifo.peek_last(), Some(&5));
//!
//! assert_eq!(fifo.pop(), Some(1));
//! assert_eq!(fifo.get(0), Some(&2));
//! assert_eq!(fifo.len(), 4);
//! ```
//!
//! # Traversal
//!
//! Traversal takes a read-only visitor. `reduce()` folds into a
//! caller-owned accumulator; the [`combine`] module has numeric adders.
//!
//! ```
//! # use ringfifo::{combine, Fifo};
//! let mut buffer = [0i32; 8];
//! let mut fifo = Fifo::from_buffer(&mut buffer).unwrap();
//! for i in 2..=5 {
//!     fifo.push(i).unwrap();
//! }
//!
//! assert_eq!(fifo.find(|x| x % 2 == 0), Some(&2));
//!
//! let mut sum = 0i32;
//! fifo.reduce(&mut sum, combine::add_i32);
//! assert_eq!(sum, 14);
//!
//! let mut out = [0i32; 4];
//! assert_eq!(fifo.copy_range(0, 4, &mut out), 4);
//! assert_eq!(out, [2, 3, 4, 5]);
//!
//! let collected: Vec<_> = fifo.iter().copied().collect();
//! assert_eq!(collected, vec![2, 3, 4, 5]);
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod combine;
mod cursor;
mod error;
mod fifo;
mod iter;
mod storage;
#[cfg(feature = "sync")]
mod sync;

// Re-export public types
pub use error::FifoError;
pub use fifo::Fifo;
pub use iter::FifoIter;
#[cfg(feature = "sync")]
pub use sync::SyncFifo;
