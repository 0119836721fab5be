use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use itertools::assert_equal;
use parking_lot::Mutex;
use msg_dispatch::{Config, Dispatcher};

const LONG: Duration = Duration::from_secs(10);

fn wait_until<F: FnMut() -> bool>(mut condition: F) -> bool{
    let deadline = Instant::now() + LONG;
    while !condition(){
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(1));
    }
    true
}

#[test]
fn single_worker_fifo_test(){
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = {
        let recorded = recorded.clone();
        Dispatcher::with_config(
            Config::new().thread_count(1).threshold(0),
            move |item: u32| recorded.lock().push(item)
        ).unwrap()
    };

    dispatcher.put(1);
    dispatcher.put(2);
    dispatcher.put(3);

    assert!(wait_until(|| dispatcher.stats().handled == 3));
    assert_equal(recorded.lock().iter(), &[1, 2, 3]);
}

#[test]
fn overflow_wipes_backlog_test(){
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = {
        let recorded = recorded.clone();
        Dispatcher::with_config(
            Config::new().threshold(2).auto_start(false),
            move |item: u32| recorded.lock().push(item)
        ).unwrap()
    };

    dispatcher.put(1);
    dispatcher.put(2);
    dispatcher.put(3);
    assert_eq!(dispatcher.len(), 0);

    dispatcher.start().unwrap();
    // Give the worker a chance to (wrongly) see something.
    thread::sleep(Duration::from_millis(50));
    assert!(recorded.lock().is_empty());
    assert_eq!(dispatcher.stats().dropped, 3);
}

#[test]
fn four_workers_deliver_each_item_once_test(){
    let len = 1000;
    let seen = Arc::new(Mutex::new(Vec::with_capacity(len)));
    let dispatcher = {
        let seen = seen.clone();
        Dispatcher::with_config(
            Config::new().thread_count(4),
            move |item: usize| seen.lock().push(item)
        ).unwrap()
    };
    assert_eq!(dispatcher.workers(), 4);

    for i in 0..len{
        dispatcher.put(i);
    }

    assert!(wait_until(|| dispatcher.stats().handled == len as u64));
    let seen = seen.lock();
    assert_eq!(seen.len(), len);
    let unique: HashSet<_> = seen.iter().copied().collect();
    assert_eq!(unique.len(), len);
    assert!(unique.iter().all(|&i| i < len));
}

#[test]
fn many_producers_many_workers_test(){
    let producers = 8;
    let per_producer = 2_000;

    let seen = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = {
        let seen = seen.clone();
        Arc::new(Dispatcher::with_config(
            Config::new().thread_count(4),
            move |item: usize| seen.lock().push(item)
        ).unwrap())
    };

    let threads: Vec<_> = (0..producers).map(|producer| {
        let dispatcher = dispatcher.clone();
        thread::spawn(move || {
            for i in producer*per_producer..(producer+1)*per_producer{
                dispatcher.put(i);
            }
        })
    }).collect();
    for thread in threads{
        thread.join().unwrap();
    }

    let total = producers * per_producer;
    assert!(wait_until(|| dispatcher.stats().handled == total as u64));

    let mut seen = seen.lock().clone();
    seen.sort_unstable();
    assert_equal(seen, 0..total);
    assert_eq!(dispatcher.stats().put, total as u64);
    assert!(dispatcher.is_empty());
}

#[test]
fn idle_workers_wake_for_later_work_test(){
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = {
        let recorded = recorded.clone();
        Dispatcher::with_config(
            Config::new().thread_count(2),
            move |item: u32| recorded.lock().push(item)
        ).unwrap()
    };

    // Several rounds, with workers back to idle between them.
    for round in 0..5u32{
        dispatcher.put(round);
        assert!(wait_until(|| dispatcher.stats().handled == u64::from(round) + 1));
        thread::sleep(Duration::from_millis(5));
    }
    assert_equal(recorded.lock().iter(), &[0, 1, 2, 3, 4]);
}
