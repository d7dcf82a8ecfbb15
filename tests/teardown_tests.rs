//! Storage release checks through a counting global allocator.
//!
//! Only blocks of exactly `TRACKED_BYTES` are counted, so allocations made by
//! the test harness do not interfere. Keep everything in a single test: a
//! second test running in parallel would race on the counters.

#![cfg(feature = "alloc")]

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use ringfifo::Fifo;

const TRACKED_SLOTS: usize = 7_919;
const TRACKED_BYTES: usize = TRACKED_SLOTS * std::mem::size_of::<u64>();

static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);
static RELEASES: AtomicUsize = AtomicUsize::new(0);

struct CountingAllocator;

#[allow(unsafe_code)]
unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if layout.size() == TRACKED_BYTES {
            ALLOCATIONS.fetch_add(1, Ordering::SeqCst);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        if layout.size() == TRACKED_BYTES {
            RELEASES.fetch_add(1, Ordering::SeqCst);
        }
        System.dealloc(ptr, layout);
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn counts() -> (usize, usize) {
    (
        ALLOCATIONS.load(Ordering::SeqCst),
        RELEASES.load(Ordering::SeqCst),
    )
}

#[test]
fn test_storage_release() {
    // Borrowed: dropping the queue must not release the caller's buffer
    let mut buffer = vec![0u64; TRACKED_SLOTS];
    let (allocated, released) = counts();
    {
        let mut fifo = Fifo::from_buffer(&mut buffer).unwrap();
        assert!(!fifo.is_owned());
        fifo.push(42).unwrap();
    }
    assert_eq!(counts(), (allocated, released));
    assert_eq!(buffer[0], 42);
    drop(buffer);
    assert_eq!(counts(), (allocated, released + 1));

    // Owned: one allocation, released exactly once on drop
    let (allocated, released) = counts();
    {
        let mut fifo = Fifo::<u64>::with_slots(TRACKED_SLOTS).unwrap();
        assert!(fifo.is_owned());
        assert_eq!(counts(), (allocated + 1, released));
        for i in 0..100 {
            fifo.push(i).unwrap();
        }
        fifo.clear();
    }
    assert_eq!(counts(), (allocated + 1, released + 1));

    // Rejected configuration: nothing is allocated
    let (allocated, released) = counts();
    assert!(Fifo::<u64>::with_slots(1).is_err());
    assert_eq!(counts(), (allocated, released));

    #[cfg(feature = "sync")]
    {
        let (allocated, released) = counts();
        let fifo = ringfifo::SyncFifo::<u64>::with_slots(TRACKED_SLOTS).unwrap();
        fifo.push(1).unwrap();
        drop(fifo);
        assert_eq!(counts(), (allocated + 1, released + 1));
    }
}
