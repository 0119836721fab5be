//! Mutual exclusion with scope-bound release.
//!
//! [Mutex::lock] hands out a [ScopedLock], which releases the mutex exactly once when it
//! goes out of scope - on normal exit and while a panic unwinds through it. Explicit
//! [lock_raw](Mutex::lock_raw) / [unlock_raw](Mutex::unlock_raw) are available for code that
//! can not express its critical section as a scope.
//!
//! Not reentrant: locking again from the owning thread deadlocks.

use std::ops::{Deref, DerefMut};
use crate::sync;

pub struct Mutex<T = ()>{
    inner: sync::Mutex<T>,
}

impl<T: Default> Default for Mutex<T>{
    fn default() -> Self{
        Self::new(T::default())
    }
}

impl<T> Mutex<T>{
    #[inline]
    pub fn new(value: T) -> Self{
        Self{ inner: sync::Mutex::new(value) }
    }

    /// Blocks until the mutex is acquired.
    #[inline]
    pub fn lock(&self) -> ScopedLock<'_, T>{
        ScopedLock{ guard: self.inner.lock() }
    }
}

#[cfg(not(loom))]
impl<T> Mutex<T>{
    #[inline]
    pub fn try_lock(&self) -> Option<ScopedLock<'_, T>>{
        self.inner.try_lock().map(|guard| ScopedLock{guard})
    }

    #[inline]
    pub fn is_locked(&self) -> bool{
        self.inner.is_locked()
    }

    /// Acquires the mutex without producing a guard.
    ///
    /// Must be paired with [unlock_raw](Self::unlock_raw) on the same thread.
    #[inline]
    pub fn lock_raw(&self){
        std::mem::forget(self.inner.lock());
    }

    /// Releases a mutex acquired with [lock_raw](Self::lock_raw).
    ///
    /// # Safety
    ///
    /// The mutex must be locked, and the lock must be owned by the calling thread
    /// with no [ScopedLock] alive for it.
    #[inline]
    pub unsafe fn unlock_raw(&self){
        self.inner.force_unlock();
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut T{
        self.inner.get_mut()
    }

    #[inline]
    pub fn into_inner(self) -> T{
        self.inner.into_inner()
    }
}

/// Holds the lock of a [Mutex] for as long as it lives.
#[must_use = "the mutex is released as soon as the guard is dropped"]
pub struct ScopedLock<'a, T>{
    guard: sync::MutexGuard<'a, T>,
}

impl<'a, T> ScopedLock<'a, T>{
    // Condvar waits need the underlying guard.
    #[inline]
    pub(crate) fn guard_mut(&mut self) -> &mut sync::MutexGuard<'a, T>{
        &mut self.guard
    }
}

impl<'a, T> Deref for ScopedLock<'a, T>{
    type Target = T;

    #[inline]
    fn deref(&self) -> &T{
        &self.guard
    }
}

impl<'a, T> DerefMut for ScopedLock<'a, T>{
    #[inline]
    fn deref_mut(&mut self) -> &mut T{
        &mut self.guard
    }
}
