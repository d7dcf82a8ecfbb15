#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};

#[cfg(feature = "alloc")]
use crate::error::FifoError;

/// Backing slots of a queue.
///
/// A borrowed buffer stays with the caller and is never released here.
/// An owned buffer is released exactly once, when the storage is dropped.
#[derive(Debug)]
pub(crate) enum Storage<'a, T> {
    Borrowed(&'a mut [T]),
    #[cfg(feature = "alloc")]
    Owned(Box<[T]>),
}

impl<T> Storage<'_, T> {
    pub(crate) fn as_slice(&self) -> &[T] {
        match self {
            Storage::Borrowed(slots) => &slots[..],
            #[cfg(feature = "alloc")]
            Storage::Owned(slots) => &slots[..],
        }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Storage::Borrowed(slots) => &mut slots[..],
            #[cfg(feature = "alloc")]
            Storage::Owned(slots) => &mut slots[..],
        }
    }

    pub(crate) fn is_owned(&self) -> bool {
        match self {
            Storage::Borrowed(_) => false,
            #[cfg(feature = "alloc")]
            Storage::Owned(_) => true,
        }
    }
}

#[cfg(feature = "alloc")]
impl<T: Copy + Default> Storage<'static, T> {
    /// Allocates `slots` default-initialized elements.
    ///
    /// # Errors
    ///
    /// Returns `FifoError::AllocationFailure` if the allocator refuses the request.
    pub(crate) fn allocate(slots: usize) -> Result<Self, FifoError> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(slots)
            .map_err(|_| FifoError::AllocationFailure { slots })?;
        buffer.resize(slots, T::default());
        Ok(Storage::Owned(buffer.into_boxed_slice()))
    }
}
