use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use crate::event::Event;
use crate::queue::SyncQueue;
use crate::sync::{Arc, AtomicUsize};
use super::Handler;
use super::stats::Counters;

/// State shared by the dispatcher front and all its workers.
pub(crate) struct Shared<T, H>{
    pub(crate) queue: SyncQueue<T>,
    pub(crate) event: Event,
    /// 0 - unbounded. Read on every put.
    pub(crate) threshold: AtomicUsize,
    pub(crate) counters: Counters,
    pub(crate) handler: H,
}

impl<T, H: Handler<T>> Shared<T, H>{
    /// Runs the handler for one item. A panic costs the item, not the worker.
    fn dispatch(&self, item: T, worker: usize){
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.handler.handle(item)));
        match result {
            Ok(()) => self.counters.on_handled(),
            Err(payload) => {
                self.counters.on_failed();
                tracing::error!(
                    worker,
                    reason = panic_message(payload.as_ref()),
                    "handler panicked, item discarded"
                );
            }
        }
    }
}

/// Worker thread body: wait for a signal, drain the queue, repeat. Never returns.
pub(crate) fn run<T, H: Handler<T>>(shared: Arc<Shared<T, H>>, worker: usize){
    tracing::debug!(worker, "worker started");
    loop {
        shared.event.wait();

        let mut drained = 0usize;
        while let Some(item) = shared.queue.pop() {
            shared.dispatch(item, worker);
            drained += 1;
        }
        tracing::trace!(worker, drained, "queue drained");
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str{
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "<non-string panic payload>"
    }
}

#[cfg(test)]
mod test{
    use super::panic_message;

    #[test]
    fn panic_payload_text_test(){
        let payload = std::panic::catch_unwind(|| panic!("static text")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "static text");

        let payload = std::panic::catch_unwind(|| panic!("formatted {}", 42)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "formatted 42");

        let payload = std::panic::catch_unwind(|| std::panic::panic_any(7u8)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "<non-string panic payload>");
    }
}
