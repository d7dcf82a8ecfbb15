use thiserror::Error;

/// Error types for `Fifo` and `SyncFifo` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum FifoError {
    /// A construction parameter is out of range
    #[error("Invalid configuration: {parameter} = {value}")]
    InvalidConfiguration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
    /// The borrowed buffer holds fewer elements than the requested slot count
    #[error("Buffer too small: {required} slots required, but only {provided} provided")]
    BufferTooSmall {
        /// Number of slots requested
        required: usize,
        /// Number of elements in the buffer
        provided: usize,
    },
    /// Owned storage could not be allocated
    #[error("Allocation failed for {slots} slots")]
    AllocationFailure {
        /// Number of slots requested
        slots: usize,
    },
    /// Push on a full queue
    #[error("Queue full: capacity of {capacity} elements reached")]
    Full {
        /// Usable capacity of the queue
        capacity: usize,
    },
    /// Pop or peek on an empty queue
    #[error("Queue empty")]
    Empty,
}
