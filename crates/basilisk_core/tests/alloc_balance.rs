//! Storage lifecycle accounting: across grows, shrinks, copies, and
//! final drop, every buffer the queue allocates must be released
//! exactly once.

// The counting allocator needs raw allocator hooks.
#![allow(unsafe_code)]

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicI64, Ordering};

use basilisk_core::ElasticQueue;

static OUTSTANDING: AtomicI64 = AtomicI64::new(0);

/// System allocator wrapper that tracks live allocation count.
struct CountingAlloc;

// SAFETY: delegates directly to the system allocator; only the
// counters are added on top.
unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            OUTSTANDING.fetch_add(1, Ordering::SeqCst);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        OUTSTANDING.fetch_sub(1, Ordering::SeqCst);
        System.dealloc(ptr, layout);
    }
}

#[global_allocator]
static ALLOCATOR: CountingAlloc = CountingAlloc;

/// Single test function: the counter is process-global, so parallel
/// test functions in this binary would pollute each other's deltas.
#[test]
fn queue_lifecycle_releases_every_buffer() {
    let before = OUTSTANDING.load(Ordering::SeqCst);

    {
        let mut queue: ElasticQueue<u64> = ElasticQueue::new(4, 4, 8);

        // Force a run of growth events.
        for i in 0..200 {
            queue.push_back(i);
        }
        // Force compaction events.
        for _ in 0..150 {
            queue.pop_front();
        }
        // Independent deep copy, dropped inside the scope.
        let copy = queue.clone();
        assert_eq!(copy.len(), queue.len());
        drop(copy);

        // Populated construction and full drain.
        let mut seeded = ElasticQueue::from_slice(queue.as_slice(), 4, 8);
        while seeded.pop_front().is_some() {}
        assert!(queue.stats().grows > 0);
        assert!(queue.stats().shrinks > 0);
    }

    let after = OUTSTANDING.load(Ordering::SeqCst);
    assert_eq!(
        before, after,
        "queue lifecycle leaked or double-released a buffer"
    );
}
