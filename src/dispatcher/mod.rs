//! Worker pool in front of a [SyncQueue](crate::queue::SyncQueue).
//!
//! Producers [put](Dispatcher::put) items; each put wakes one idle worker. A worker
//! drains the queue, calling the [Handler] for every item, then waits again.
//! Workers live as long as the process - there is no stop. Their join handles are
//! kept by the dispatcher.
//!
//! Overflow: with a non-zero threshold, the put that makes the backlog longer than
//! the threshold drops the *whole* backlog, itself included. Producers are not told;
//! see [Stats::dropped].

mod handler;
mod stats;
mod worker;

pub use handler::*;
pub use stats::*;

use std::thread::{self, JoinHandle};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::mutex::Mutex;
use crate::queue::SyncQueue;
use crate::sync::{Arc, AtomicUsize, Ordering};
use stats::Counters;
use worker::Shared;

pub struct Dispatcher<T, H>{
    shared: Arc<Shared<T, H>>,
    thread_count: AtomicUsize,
    thread_name: String,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl<T, H> Dispatcher<T, H>
where
    T: Send + 'static,
    H: Handler<T>,
{
    /// [Config::default]: one worker, unbounded, started immediately.
    pub fn new(handler: H) -> Result<Self>{
        Self::with_config(Config::default(), handler)
    }

    pub fn with_config(config: Config, handler: H) -> Result<Self>{
        config.validate()?;

        let this = Self{
            shared: Arc::new(Shared{
                queue: SyncQueue::new(),
                event: Event::new(),
                threshold: AtomicUsize::new(config.threshold),
                counters: Counters::new(),
                handler,
            }),
            thread_count: AtomicUsize::new(config.thread_count),
            thread_name: config.thread_name,
            workers: Mutex::new(Vec::new()),
        };

        if config.auto_start {
            this.start()?;
        }
        Ok(this)
    }

    /// Spawns [thread_count](Self::thread_count) workers. Returns how many were spawned.
    ///
    /// If the OS refuses a thread, workers spawned before it keep running, and
    /// the dispatcher counts as started.
    pub fn start(&self) -> Result<usize>{
        let mut workers = self.workers.lock();
        if !workers.is_empty() {
            return Err(Error::AlreadyStarted);
        }

        let thread_count = self.thread_count.load(Ordering::Relaxed);
        if thread_count == 0 {
            return Err(Error::ZeroThreads);
        }

        for index in 0..thread_count {
            let name = format!("{}-{}", self.thread_name, index);
            let shared = self.shared.clone();
            let handle = thread::Builder::new()
                .name(name.clone())
                .spawn(move || worker::run(shared, index))
                .map_err(|source| Error::Spawn{ name, source })?;
            workers.push(handle);
        }

        tracing::debug!(workers = thread_count, name = %self.thread_name, "dispatcher started");
        Ok(thread_count)
    }

    #[inline]
    pub fn is_started(&self) -> bool{
        !self.workers.lock().is_empty()
    }

    /// Number of spawned workers.
    #[inline]
    pub fn workers(&self) -> usize{
        self.workers.lock().len()
    }

    /// Takes effect on the next [start](Self::start) only. Running workers are not
    /// added or removed.
    pub fn set_thread_count(&self, thread_count: usize){
        if self.is_started() {
            tracing::debug!(thread_count, "dispatcher already started, new thread count is not applied");
        }
        self.thread_count.store(thread_count, Ordering::Relaxed);
    }

    #[inline]
    pub fn thread_count(&self) -> usize{
        self.thread_count.load(Ordering::Relaxed)
    }

    /// 0 - unbounded. Applies to puts that start after this call.
    #[inline]
    pub fn set_threshold(&self, threshold: usize){
        self.shared.threshold.store(threshold, Ordering::Relaxed);
    }

    #[inline]
    pub fn threshold(&self) -> usize{
        self.shared.threshold.load(Ordering::Relaxed)
    }

    /// Queues `item` at the back and wakes one worker. Never blocks on capacity.
    #[inline]
    pub fn put(&self, item: T){
        self.put_impl(item, false);
    }

    /// Queues `item` at the front, so it is the next one taken.
    #[inline]
    pub fn put_priority(&self, item: T){
        self.put_impl(item, true);
    }

    /// [put_priority](Self::put_priority) if `priority`, else [put](Self::put).
    #[inline]
    pub fn put_with(&self, item: T, priority: bool){
        self.put_impl(item, priority);
    }

    fn put_impl(&self, item: T, priority: bool){
        let shared = &*self.shared;
        shared.counters.on_put();
        let threshold = shared.threshold.load(Ordering::Relaxed);

        let mut items = shared.queue.locked();
        if priority {
            items.push_front(item);
        } else {
            items.push_back(item);
        }

        if threshold > 0 && items.len() > threshold {
            let dropped = std::mem::take(&mut *items);
            drop(items);

            shared.counters.on_overflow(dropped.len());
            tracing::warn!(threshold, dropped = dropped.len(), "queue overflow, pending items dropped");
            return;
        }
        drop(items);

        shared.event.signal_one();
    }

    /// Pending items, not yet taken by a worker.
    #[inline]
    pub fn len(&self) -> usize{
        self.shared.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool{
        self.shared.queue.is_empty()
    }

    /// Drops all pending items. Returns how many.
    #[inline]
    pub fn clear(&self) -> usize{
        self.shared.queue.clear()
    }

    #[inline]
    pub fn stats(&self) -> Stats{
        self.shared.counters.snapshot()
    }
}
