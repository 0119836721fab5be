use crate::queue::SyncQueue;
use crate::sync::{Arc, thread};
use itertools::assert_equal;
use super::utils::drain;

/// `threads_count` producers push `len` distinct values each, then one thread pops everything.
pub(crate) fn mt_push_pop_test_impl(threads_count: usize, len: usize) {
    let queue = Arc::new(SyncQueue::new());

    let mut threads = Vec::new();
    for thread_id in 0..threads_count{
        let queue = queue.clone();
        threads.push(thread::spawn(move || {
            let from = thread_id * len;
            for i in from..from+len{
                queue.push(i);
            }
        }));
    }

    for thread in threads{
        thread.join().unwrap();
    }

    let mut popped = drain(&queue);

    // FIFO per producer.
    for thread_id in 0..threads_count{
        let range = thread_id*len..(thread_id+1)*len;
        let own: Vec<usize> = popped.iter().copied().filter(|i| range.contains(i)).collect();
        assert_equal(own, range);
    }

    popped.sort_unstable();
    assert_eq!(popped, (0..threads_count*len).collect::<Vec<_>>());
    assert!(queue.is_empty());
}
