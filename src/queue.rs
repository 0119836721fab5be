//! Double-ended queue under a single [Mutex].
//!
//! Every operation holds the lock for its whole duration, so operations on one
//! instance are atomic with respect to each other. Nothing blocks waiting for
//! items or for space: [pop](SyncQueue::pop) on an empty queue returns `None`, and
//! capacity is not this type's concern.

use std::collections::VecDeque;
use crate::mutex::{Mutex, ScopedLock};

pub struct SyncQueue<T>{
    items: Mutex<VecDeque<T>>,
}

impl<T> Default for SyncQueue<T>{
    fn default() -> Self{
        Self::new()
    }
}

impl<T> SyncQueue<T>{
    #[inline]
    pub fn new() -> Self{
        Self{ items: Mutex::new(VecDeque::new()) }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self{
        Self{ items: Mutex::new(VecDeque::with_capacity(capacity)) }
    }

    /// Appends to the back.
    #[inline]
    pub fn push(&self, value: T){
        self.items.lock().push_back(value);
    }

    /// Inserts at the front, ahead of everything pending.
    #[inline]
    pub fn push_priority(&self, value: T){
        self.items.lock().push_front(value);
    }

    #[inline]
    pub fn push_with(&self, value: T, priority: bool){
        if priority {
            self.push_priority(value);
        } else {
            self.push(value);
        }
    }

    // Not an Extend trait, because Extend::extend(&mut self)
    /// Appends all items at the back, under one lock.
    #[inline]
    pub fn extend<I>(&self, iter: I)
        where I: IntoIterator<Item = T>
    {
        self.items.lock().extend(iter);
    }

    /// Removes the front item.
    #[inline]
    pub fn pop(&self) -> Option<T>{
        self.items.lock().pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize{
        self.items.lock().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool{
        self.items.lock().is_empty()
    }

    /// Removes everything. Returns number of removed items.
    ///
    /// Items are dropped after the lock is released.
    pub fn clear(&self) -> usize{
        let removed = std::mem::take(&mut *self.items.lock());
        removed.len()
    }

    /// Lock the whole deque, for compound operations that must be atomic.
    #[inline]
    pub(crate) fn locked(&self) -> ScopedLock<'_, VecDeque<T>>{
        self.items.lock()
    }
}
