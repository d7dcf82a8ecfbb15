use core::slice;

/// Iterator over the elements of a `Fifo`, oldest first
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct FifoIter<'a, T> {
    older: slice::Iter<'a, T>,
    newer: slice::Iter<'a, T>,
}

impl<'a, T> FifoIter<'a, T> {
    pub(crate) fn new(older: &'a [T], newer: &'a [T]) -> Self {
        Self {
            older: older.iter(),
            newer: newer.iter(),
        }
    }
}

impl<'a, T> Iterator for FifoIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.older.next().or_else(|| self.newer.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.older.len() + self.newer.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for FifoIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.newer.next_back().or_else(|| self.older.next_back())
    }
}

impl<T> ExactSizeIterator for FifoIter<'_, T> {}
