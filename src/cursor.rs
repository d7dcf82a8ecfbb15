/// Largest slot count a queue accepts; both cursors must fit in one packed word.
pub(crate) const MAX_SLOTS: usize = u32::MAX as usize;

/// Read and write positions of a ring of `slots` elements.
///
/// One slot is always kept free, so `head == tail` means empty and
/// `head + 1 == tail` (modulo `slots`) means full. This is the only place
/// that does modular arithmetic on the cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursors {
    head: usize,
    tail: usize,
    slots: usize,
}

impl Cursors {
    /// `slots` must already be validated to lie in `2..=MAX_SLOTS`.
    pub(crate) fn new(slots: usize) -> Self {
        debug_assert!((2..=MAX_SLOTS).contains(&slots));
        Self {
            head: 0,
            tail: 0,
            slots,
        }
    }

    pub(crate) fn slots(self) -> usize {
        self.slots
    }

    pub(crate) fn head(self) -> usize {
        self.head
    }

    pub(crate) fn tail(self) -> usize {
        self.tail
    }

    pub(crate) fn is_empty(self) -> bool {
        self.head == self.tail
    }

    pub(crate) fn is_full(self) -> bool {
        self.wrap(self.head + 1) == self.tail
    }

    pub(crate) fn len(self) -> usize {
        (self.head + self.slots - self.tail) % self.slots
    }

    pub(crate) fn capacity(self) -> usize {
        self.slots - 1
    }

    pub(crate) fn remaining(self) -> usize {
        self.capacity() - self.len()
    }

    /// Physical slot of the element `logical` positions after the tail.
    ///
    /// The caller checks `logical < len()`.
    pub(crate) fn physical(self, logical: usize) -> usize {
        self.wrap(self.tail + logical)
    }

    /// Physical slot of the newest element. Meaningless on an empty ring.
    pub(crate) fn last(self) -> usize {
        if self.head == 0 {
            self.slots - 1
        } else {
            self.head - 1
        }
    }

    pub(crate) fn advance_head(&mut self) {
        self.head = self.wrap(self.head + 1);
    }

    pub(crate) fn advance_tail(&mut self) {
        self.tail = self.wrap(self.tail + 1);
    }

    pub(crate) fn reset(&mut self) {
        self.head = 0;
        self.tail = 0;
    }

    /// Packs both cursors into one word: head in the high half, tail in the low half.
    #[cfg(feature = "sync")]
    #[allow(clippy::cast_possible_truncation)] // Both cursors are below MAX_SLOTS
    pub(crate) fn pack(self) -> u64 {
        (u64::from(self.head as u32) << 32) | u64::from(self.tail as u32)
    }

    #[cfg(feature = "sync")]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn unpack(word: u64, slots: usize) -> Self {
        Self {
            head: (word >> 32) as u32 as usize,
            tail: word as u32 as usize,
            slots,
        }
    }

    fn wrap(self, position: usize) -> usize {
        if position >= self.slots {
            position - self.slots
        } else {
            position
        }
    }
}
