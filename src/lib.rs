//! Producer/consumer decoupling with a worker pool.
//!
//! Building blocks, leaves first:
//!
//! * [mutex] - [Mutex](mutex::Mutex) with scope-bound [ScopedLock](mutex::ScopedLock).
//! * [event] - [Event](event::Event), mutex + condition variable wait/signal pair.
//! * [queue] - [SyncQueue](queue::SyncQueue), double-ended queue with priority insertion.
//! * [dispatcher] - [Dispatcher](dispatcher::Dispatcher), worker threads draining a
//!   [SyncQueue](queue::SyncQueue) into a [Handler](dispatcher::Handler), with a drop-all
//!   overflow policy.
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use msg_dispatch::{Config, Dispatcher};
//!
//! let sum = Arc::new(AtomicUsize::new(0));
//! let dispatcher = {
//!     let sum = sum.clone();
//!     Dispatcher::with_config(
//!         Config::new().thread_count(2).threshold(1000),
//!         move |n: usize| { sum.fetch_add(n, Ordering::Relaxed); }
//!     ).unwrap()
//! };
//!
//! for i in 1..=10 {
//!     dispatcher.put(i);
//! }
//! while dispatcher.stats().handled < 10 {
//!     std::thread::yield_now();
//! }
//! assert_eq!(sum.load(Ordering::Relaxed), 55);
//! ```

mod sync;

pub mod config;
pub mod error;
pub mod event;
pub mod mutex;
pub mod queue;

#[cfg(not(loom))]
pub mod dispatcher;

pub use config::Config;
pub use error::{Error, Result};
pub use event::Event;
pub use mutex::{Mutex, ScopedLock};
pub use queue::SyncQueue;

#[cfg(not(loom))]
pub use dispatcher::{Dispatcher, Handler, Stats};

#[cfg(test)]
mod tests;
