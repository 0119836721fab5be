use std::time::{Duration, Instant};
use crate::queue::SyncQueue;

/// Pops until empty.
pub fn drain<T>(queue: &SyncQueue<T>) -> Vec<T> {
    let mut v = Vec::new();
    while let Some(item) = queue.pop(){
        v.push(item);
    }
    v
}

/// Polls `condition` until it holds or `timeout` passes. Returns last result.
pub fn wait_until<F>(timeout: Duration, mut condition: F) -> bool
    where F: FnMut() -> bool
{
    let deadline = Instant::now() + timeout;
    loop {
        if condition() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        std::thread::sleep(Duration::from_millis(1));
    }
}
