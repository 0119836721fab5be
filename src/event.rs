//! Wait/signal primitive: a [Mutex] paired with a condition variable.
//!
//! Waiting always happens under a [ScopedLock](crate::mutex::ScopedLock) on the paired mutex,
//! so a wait can not start without the lock, and the lock is re-acquired before
//! the wait returns.
//!
//! `signal_one` is remembered as a permit when nobody is parked yet. A thread that
//! checked its work source, found nothing, and is about to wait, will still see
//! a signal sent in between.

#[cfg(not(loom))]
use std::time::{Duration, Instant};
use crate::mutex::Mutex;
use crate::sync::Condvar;

#[derive(Debug, Default)]
struct State{
    /// Undelivered `signal_one`s. Never exceeds max(waiters, 1).
    permits: usize,
    waiters: usize,
    /// Bumped by `signal_all`.
    generation: u64,
}

impl State{
    /// Consumes whatever woke us. `false` - not signaled yet.
    #[inline]
    fn try_consume(&mut self, generation: u64) -> bool{
        if self.generation != generation{
            return true;
        }
        if self.permits > 0 {
            self.permits -= 1;
            return true;
        }
        false
    }
}

pub struct Event{
    state: Mutex<State>,
    condvar: Condvar,
}

impl Default for Event{
    fn default() -> Self{
        Self::new()
    }
}

impl Event{
    pub fn new() -> Self{
        Self{
            state: Mutex::new(State::default()),
            condvar: Condvar::new(),
        }
    }

    /// Blocks until signaled by [signal_one](Self::signal_one) or
    /// [signal_all](Self::signal_all).
    pub fn wait(&self){
        let mut state = self.state.lock();
        let generation = state.generation;
        state.waiters += 1;

        while !state.try_consume(generation) {
            self.condvar.wait(state.guard_mut());
        }

        state.waiters -= 1;
    }

    /// Returns `true` if signaled, `false` if `timeout` elapsed first.
    ///
    /// A timeout past what [Instant] can represent waits like [wait](Self::wait).
    #[cfg(not(loom))]
    pub fn wait_timeout(&self, timeout: Duration) -> bool{
        let deadline = Instant::now().checked_add(timeout);

        let mut state = self.state.lock();
        let generation = state.generation;
        state.waiters += 1;

        let signaled = loop {
            if state.try_consume(generation) {
                break true;
            }
            match deadline {
                Some(deadline) => {
                    if self.condvar.wait_until(state.guard_mut(), deadline).timed_out() {
                        // signal may have raced with the timeout
                        break state.try_consume(generation);
                    }
                }
                None => self.condvar.wait(state.guard_mut()),
            }
        };

        state.waiters -= 1;
        signaled
    }

    /// Wakes at most one waiting thread. Which one is up to the scheduler.
    pub fn signal_one(&self){
        let mut state = self.state.lock();
        state.permits = (state.permits + 1).min(state.waiters.max(1));
        self.condvar.notify_one();
    }

    /// Wakes every thread waiting at the moment of the call.
    pub fn signal_all(&self){
        let mut state = self.state.lock();
        state.generation = state.generation.wrapping_add(1);
        self.condvar.notify_all();
    }

    /// Threads currently parked in [wait](Self::wait) / [wait_timeout](Self::wait_timeout).
    pub fn waiting(&self) -> usize{
        self.state.lock().waiters
    }
}
