use core::mem::size_of;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::cursor::{Cursors, MAX_SLOTS};
use crate::error::FifoError;
use crate::iter::FifoIter;
use crate::storage::Storage;

/// A bounded FIFO of `Copy` elements stored in a ring of slots.
///
/// One slot is reserved to tell "empty" from "full", so a queue built on
/// `slots` slots holds at most `slots - 1` elements. Elements are pushed at
/// the head and popped at the tail; nothing is ever overwritten.
#[derive(Debug)]
pub struct Fifo<'a, T> {
    storage: Storage<'a, T>,
    cursors: Cursors,
}

fn validate<T>(slots: usize) -> Result<(), FifoError> {
    if size_of::<T>() == 0 {
        return Err(FifoError::InvalidConfiguration {
            parameter: "element_size",
            value: 0,
        });
    }
    if !(2..=MAX_SLOTS).contains(&slots) {
        return Err(FifoError::InvalidConfiguration {
            parameter: "slots",
            value: slots,
        });
    }
    Ok(())
}

impl<'a, T: Copy> Fifo<'a, T> {
    /// Creates a queue over the first `slots` elements of a caller-provided buffer.
    ///
    /// The buffer is only borrowed: dropping the queue leaves it untouched,
    /// and stale elements from earlier use remain in it.
    ///
    /// # Errors
    ///
    /// - `FifoError::InvalidConfiguration` if `slots < 2`, `slots` exceeds
    ///   `u32::MAX`, or `T` is zero-sized
    /// - `FifoError::BufferTooSmall` if the buffer has fewer than `slots` elements
    pub fn new(buffer: &'a mut [T], slots: usize) -> Result<Self, FifoError> {
        validate::<T>(slots)?;
        let provided = buffer.len();
        let Some(buffer) = buffer.get_mut(..slots) else {
            return Err(FifoError::BufferTooSmall {
                required: slots,
                provided,
            });
        };
        Ok(Self {
            storage: Storage::Borrowed(buffer),
            cursors: Cursors::new(slots),
        })
    }

    /// Creates a queue using every element of `buffer` as a slot.
    ///
    /// # Errors
    ///
    /// Same as [`Fifo::new`].
    pub fn from_buffer(buffer: &'a mut [T]) -> Result<Self, FifoError> {
        let slots = buffer.len();
        Self::new(buffer, slots)
    }

    /// Total number of slots, including the reserved one.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.cursors.slots()
    }

    /// Whether the queue allocated its own storage.
    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.storage.is_owned()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cursors.is_full()
    }

    /// Number of queued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Maximum number of elements the queue can hold, `slots - 1`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cursors.capacity()
    }

    /// Number of pushes that would succeed right now.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cursors.remaining()
    }

    #[cfg(feature = "sync")]
    pub(crate) fn cursors(&self) -> Cursors {
        self.cursors
    }

    /// Empties the queue. Old elements stay in the slots but are unreachable.
    pub fn clear(&mut self) {
        self.cursors.reset();
    }

    /// Appends an element at the head.
    ///
    /// # Errors
    ///
    /// Returns `FifoError::Full` if the queue is at capacity; the queue is unchanged.
    pub fn push(&mut self, value: T) -> Result<(), FifoError> {
        if self.cursors.is_full() {
            return Err(FifoError::Full {
                capacity: self.cursors.capacity(),
            });
        }

        // Cursors stay below `slots`, which never exceeds the storage length
        let head = self.cursors.head();
        self.storage.as_mut_slice()[head] = value;
        self.cursors.advance_head();
        Ok(())
    }

    /// Removes and returns the oldest element.
    ///
    /// Returns `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.cursors.is_empty() {
            return None;
        }

        let value = self.storage.as_slice()[self.cursors.tail()];
        self.cursors.advance_tail();
        Some(value)
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    ///
    /// Returns `FifoError::Empty` if the queue is empty.
    pub fn try_pop(&mut self) -> Result<T, FifoError> {
        self.pop().ok_or(FifoError::Empty)
    }

    /// Drops the oldest element without copying it out.
    ///
    /// Returns `false` if the queue is empty.
    pub fn discard(&mut self) -> bool {
        if self.cursors.is_empty() {
            return false;
        }
        self.cursors.advance_tail();
        true
    }

    /// The oldest element, the next one to be popped.
    #[must_use]
    pub fn peek_first(&self) -> Option<&T> {
        if self.cursors.is_empty() {
            return None;
        }
        self.storage.as_slice().get(self.cursors.tail())
    }

    /// The newest element, the last one pushed.
    #[must_use]
    pub fn peek_last(&self) -> Option<&T> {
        if self.cursors.is_empty() {
            return None;
        }
        self.storage.as_slice().get(self.cursors.last())
    }

    /// Element at logical position `index`; 0 is the oldest.
    ///
    /// Returns `None` if `index >= len()`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.cursors.len() {
            return None;
        }
        self.storage.as_slice().get(self.cursors.physical(index))
    }

    /// The queued elements as two contiguous runs, oldest first.
    ///
    /// The second slice is non-empty only when the contents wrap past the
    /// physical end of the buffer.
    #[must_use]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let slots = self.storage.as_slice();
        let (head, tail) = (self.cursors.head(), self.cursors.tail());
        if tail <= head {
            (slots.get(tail..head).unwrap_or_default(), &[][..])
        } else {
            let (wrapped, older) = slots.split_at(tail);
            (older, wrapped.get(..head).unwrap_or_default())
        }
    }

    /// Copies up to `count` elements, starting at logical position `start`,
    /// into `dst` in logical order.
    ///
    /// The count is clamped to the elements available after `start` and to
    /// `dst.len()`. Returns the number of elements copied; `dst` is left
    /// untouched when `start >= len()`.
    pub fn copy_range(&self, start: usize, count: usize, dst: &mut [T]) -> usize {
        let available = self.cursors.len();
        if start >= available {
            return 0;
        }
        let count = count.min(available - start).min(dst.len());

        let slots = self.storage.as_slice();
        let first = self.cursors.physical(start);
        let (dst, _) = dst.split_at_mut(count);
        if first + count <= slots.len() {
            dst.copy_from_slice(&slots[first..first + count]);
        } else {
            let first_part = slots.len() - first;
            let (front, back) = dst.split_at_mut(first_part);
            front.copy_from_slice(&slots[first..]);
            back.copy_from_slice(&slots[..count - first_part]);
        }
        count
    }

    /// Copies every element into `dst`, oldest first. See [`Fifo::copy_range`].
    pub fn copy_all(&self, dst: &mut [T]) -> usize {
        self.copy_range(0, self.cursors.len(), dst)
    }

    /// Copies every element into a new vector, oldest first.
    #[cfg(feature = "alloc")]
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        let (older, newer) = self.as_slices();
        let mut out = Vec::with_capacity(older.len() + newer.len());
        out.extend_from_slice(older);
        out.extend_from_slice(newer);
        out
    }

    /// Calls `visitor` on each element, oldest first.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&T),
    {
        for element in self {
            visitor(element);
        }
    }

    /// The oldest element matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|element| predicate(*element))
    }

    /// Folds every element into `acc`, oldest first.
    ///
    /// The queue does not interpret the accumulator; `combine` decides what
    /// folding means. See [`crate::combine`] for ready-made numeric adders.
    ///
    /// ```
    /// # use ringfifo::{combine, Fifo};
    /// let mut buffer = [0u32; 4];
    /// let mut fifo = Fifo::from_buffer(&mut buffer).unwrap();
    /// fifo.push(u32::MAX).unwrap();
    /// fifo.push(5).unwrap();
    ///
    /// let mut sum = 0u64;
    /// fifo.reduce(&mut sum, combine::add_u32_to_u64);
    /// assert_eq!(sum, u64::from(u32::MAX) + 5);
    /// ```
    pub fn reduce<A, F>(&self, acc: &mut A, mut combine: F)
    where
        F: FnMut(&T, &mut A),
    {
        for element in self {
            combine(element, acc);
        }
    }

    /// Same as [`Fifo::reduce`]. The traversal is sequential and in order.
    pub fn reduce_parallel<A, F>(&self, acc: &mut A, combine: F)
    where
        F: FnMut(&T, &mut A),
    {
        self.reduce(acc, combine);
    }

    /// Returns an iterator over the elements, oldest first.
    #[must_use]
    pub fn iter(&self) -> FifoIter<'_, T> {
        self.into_iter()
    }
}

#[cfg(feature = "alloc")]
impl<T: Copy + Default> Fifo<'static, T> {
    /// Creates a queue with `slots` slots of internally allocated storage.
    ///
    /// The storage is released when the queue is dropped.
    ///
    /// # Errors
    ///
    /// - `FifoError::InvalidConfiguration` on the same conditions as [`Fifo::new`]
    /// - `FifoError::AllocationFailure` if the allocation is refused
    pub fn with_slots(slots: usize) -> Result<Self, FifoError> {
        validate::<T>(slots)?;
        Ok(Self {
            storage: Storage::allocate(slots)?,
            cursors: Cursors::new(slots),
        })
    }
}

impl<'b, T: Copy> IntoIterator for &'b Fifo<'_, T> {
    type Item = &'b T;
    type IntoIter = FifoIter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        let (older, newer) = self.as_slices();
        FifoIter::new(older, newer)
    }
}
