use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::cursor::Cursors;
use crate::error::FifoError;
use crate::fifo::Fifo;

/// A `Fifo` behind a per-queue mutex, shareable between threads.
///
/// Every operation takes `&self` and holds the lock for its whole duration.
/// Status queries (`len`, `is_full`, ...) do not lock: they read a cursor
/// snapshot published after each mutation.
///
/// The lock is not reentrant. A visitor passed to [`SyncFifo::for_each`],
/// [`SyncFifo::find`], [`SyncFifo::reduce`] or [`SyncFifo::with_lock`] must
/// not call back into the same queue, or it deadlocks.
///
/// ```
/// # use ringfifo::SyncFifo;
/// let fifo = SyncFifo::<u32>::with_slots(4).unwrap();
/// std::thread::scope(|s| {
///     s.spawn(|| fifo.push(7).unwrap());
/// });
/// assert_eq!(fifo.pop(), Some(7));
/// ```
#[derive(Debug)]
pub struct SyncFifo<'a, T> {
    inner: Mutex<Fifo<'a, T>>,
    cursors: AtomicU64,
    slots: usize,
}

impl<'a, T: Copy> SyncFifo<'a, T> {
    /// Wraps an existing queue, borrowed or owned.
    #[must_use]
    pub fn from_fifo(fifo: Fifo<'a, T>) -> Self {
        let cursors = fifo.cursors();
        Self {
            inner: Mutex::new(fifo),
            cursors: AtomicU64::new(cursors.pack()),
            slots: cursors.slots(),
        }
    }

    /// Creates a locked queue over a caller-provided buffer.
    ///
    /// # Errors
    ///
    /// Same as [`Fifo::new`].
    pub fn new(buffer: &'a mut [T], slots: usize) -> Result<Self, FifoError> {
        Fifo::new(buffer, slots).map(Self::from_fifo)
    }

    /// Consumes the wrapper and returns the queue.
    pub fn into_inner(self) -> Fifo<'a, T> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // The cursors only move after an element copy has finished, so a guard
    // recovered from a panicking visitor still sees a consistent queue.
    fn locked(&self) -> MutexGuard<'_, Fifo<'a, T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, fifo: &Fifo<'a, T>) {
        self.cursors.store(fifo.cursors().pack(), Ordering::Release);
    }

    fn snapshot(&self) -> Cursors {
        Cursors::unpack(self.cursors.load(Ordering::Acquire), self.slots)
    }

    #[must_use]
    pub fn slots(&self) -> usize {
        self.slots
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.snapshot().is_full()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots - 1
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.snapshot().remaining()
    }

    pub fn clear(&self) {
        let mut fifo = self.locked();
        fifo.clear();
        self.publish(&fifo);
    }

    /// Appends an element at the head.
    ///
    /// # Errors
    ///
    /// Returns `FifoError::Full` if the queue is at capacity.
    pub fn push(&self, value: T) -> Result<(), FifoError> {
        let mut fifo = self.locked();
        fifo.push(value)?;
        self.publish(&fifo);
        Ok(())
    }

    /// Removes and returns the oldest element, or `None` if the queue is empty.
    pub fn pop(&self) -> Option<T> {
        let mut fifo = self.locked();
        let value = fifo.pop()?;
        self.publish(&fifo);
        Some(value)
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    ///
    /// Returns `FifoError::Empty` if the queue is empty.
    pub fn try_pop(&self) -> Result<T, FifoError> {
        self.pop().ok_or(FifoError::Empty)
    }

    /// Drops the oldest element; `false` if the queue is empty.
    pub fn discard(&self) -> bool {
        let mut fifo = self.locked();
        let discarded = fifo.discard();
        if discarded {
            self.publish(&fifo);
        }
        discarded
    }

    /// A copy of the oldest element.
    #[must_use]
    pub fn peek_first(&self) -> Option<T> {
        self.locked().peek_first().copied()
    }

    /// A copy of the newest element.
    #[must_use]
    pub fn peek_last(&self) -> Option<T> {
        self.locked().peek_last().copied()
    }

    /// A copy of the element at logical position `index`; 0 is the oldest.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.locked().get(index).copied()
    }

    /// See [`Fifo::copy_range`].
    pub fn copy_range(&self, start: usize, count: usize, dst: &mut [T]) -> usize {
        self.locked().copy_range(start, count, dst)
    }

    /// See [`Fifo::copy_all`].
    pub fn copy_all(&self, dst: &mut [T]) -> usize {
        self.locked().copy_all(dst)
    }

    /// Calls `visitor` on each element, oldest first, with the lock held.
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.locked().for_each(visitor);
    }

    /// A copy of the oldest element matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.locked().find(predicate).copied()
    }

    /// See [`Fifo::reduce`]. The lock is held for the whole fold.
    pub fn reduce<A, F>(&self, acc: &mut A, combine: F)
    where
        F: FnMut(&T, &mut A),
    {
        self.locked().reduce(acc, combine);
    }

    /// Same as [`SyncFifo::reduce`]; the fold runs on the calling thread.
    pub fn reduce_parallel<A, F>(&self, acc: &mut A, combine: F)
    where
        F: FnMut(&T, &mut A),
    {
        self.locked().reduce_parallel(acc, combine);
    }

    /// Runs `f` with read access to the queue while holding the lock.
    ///
    /// References handed out by the queue are valid inside `f` only.
    pub fn with_lock<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&Fifo<'a, T>) -> R,
    {
        f(&self.locked())
    }
}

impl<T: Copy + Default> SyncFifo<'static, T> {
    /// Creates a locked queue with internally allocated storage.
    ///
    /// # Errors
    ///
    /// Same as [`Fifo::with_slots`].
    pub fn with_slots(slots: usize) -> Result<Self, FifoError> {
        Fifo::with_slots(slots).map(Self::from_fifo)
    }
}

impl<'a, T: Copy> From<Fifo<'a, T>> for SyncFifo<'a, T> {
    fn from(fifo: Fifo<'a, T>) -> Self {
        Self::from_fifo(fifo)
    }
}
