//! Cross-worker state of the in-place sweep.
//!
//! The wavefront sweep lets every worker read and write one grid buffer. The
//! borrow checker cannot see that the writes are disjoint and that reads of
//! another worker's cells are ordered by the progress counters, so the buffer
//! is handed out as a raw view and every access is an `unsafe` call whose
//! contract the sweep upholds.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Raw view of a mutably borrowed cell buffer, shareable across workers.
pub struct SharedCells<'a, T> {
    ptr: *mut T,
    len: usize,
    _borrow: PhantomData<&'a mut [T]>,
}

// SAFETY: the view only hands out cells through `read`/`write`, whose callers
// guarantee that no cell is written while another worker accesses it.
unsafe impl<T: Send> Send for SharedCells<'_, T> {}
unsafe impl<T: Send + Sync> Sync for SharedCells<'_, T> {}

impl<'a, T: Copy> SharedCells<'a, T> {
    pub fn new(cells: &'a mut [T]) -> Self {
        Self { ptr: cells.as_mut_ptr(), len: cells.len(), _borrow: PhantomData }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// # Safety
    /// `idx < len`, and no other worker writes `idx` concurrently.
    #[inline(always)]
    pub unsafe fn read(&self, idx: usize) -> T {
        debug_assert!(idx < self.len);
        unsafe { *self.ptr.add(idx) }
    }

    /// # Safety
    /// `idx < len`, and no other worker reads or writes `idx` concurrently.
    #[inline(always)]
    pub unsafe fn write(&self, idx: usize, value: T) {
        debug_assert!(idx < self.len);
        unsafe { *self.ptr.add(idx) = value }
    }
}

const SPINS_BEFORE_YIELD: u32 = 256;

#[repr(align(64))]
struct Progress(AtomicUsize);

/// One completed-block counter per worker, each on its own cache line.
///
/// Worker `k` bumps only its own counter; worker `k + 1` only reads it.
pub struct ProgressCounters {
    counters: Vec<Progress>,
}

impl ProgressCounters {
    pub fn new(workers: usize) -> Self {
        Self { counters: (0..workers).map(|_| Progress(AtomicUsize::new(0))).collect() }
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Blocks finished by `worker` so far.
    #[inline]
    pub fn load(&self, worker: usize) -> usize {
        self.counters[worker].0.load(Ordering::Acquire)
    }

    /// Spin until `worker` has finished more than `done` blocks.
    ///
    /// The acquire load pairs with the release in [`Self::publish`], so every
    /// cell `worker` wrote before publishing is visible afterwards. The thread
    /// gives up its time slice every few hundred polls so that an
    /// oversubscribed pool still lets the awaited worker run.
    #[inline]
    pub fn wait_past(&self, worker: usize, done: usize) {
        let counter = &self.counters[worker].0;
        let mut spins = 0;
        while counter.load(Ordering::Acquire) <= done {
            std::hint::spin_loop();
            spins += 1;
            if spins == SPINS_BEFORE_YIELD {
                spins = 0;
                std::thread::yield_now();
            }
        }
    }

    /// Mark one more block of `worker` as finished.
    #[inline]
    pub fn publish(&self, worker: usize) {
        self.counters[worker].0.fetch_add(1, Ordering::Release);
    }
}
