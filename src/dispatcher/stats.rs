use crate::sync::{AtomicU64, Ordering};

/// Counters snapshot. Each field only grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats{
    /// Items accepted by `put`/`put_priority`, including later dropped ones.
    pub put: u64,
    /// Handler calls that returned normally.
    pub handled: u64,
    /// Handler calls that panicked.
    pub failed: u64,
    /// Items thrown away by the overflow policy.
    pub dropped: u64,
    /// Times the overflow policy fired.
    pub overflows: u64,
}

// All ops relaxed: counters are informational, never used for synchronization.
pub(crate) struct Counters{
    put: AtomicU64,
    handled: AtomicU64,
    failed: AtomicU64,
    dropped: AtomicU64,
    overflows: AtomicU64,
}

impl Counters{
    pub(crate) fn new() -> Self{
        Self{
            put: AtomicU64::new(0),
            handled: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
            overflows: AtomicU64::new(0),
        }
    }

    #[inline]
    pub(crate) fn on_put(&self){
        self.put.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn on_handled(&self){
        self.handled.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn on_failed(&self){
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn on_overflow(&self, dropped: usize){
        self.overflows.fetch_add(1, Ordering::Relaxed);
        self.dropped.fetch_add(dropped as u64, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> Stats{
        Stats{
            put: self.put.load(Ordering::Relaxed),
            handled: self.handled.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            overflows: self.overflows.load(Ordering::Relaxed),
        }
    }
}
