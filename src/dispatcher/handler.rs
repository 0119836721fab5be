/// Per-item consumer. Called once for each dequeued item, on whichever worker
/// thread popped it.
///
/// Workers share one handler, so any mutable state it touches must be
/// synchronized. A panic inside `handle` loses that item only; the worker
/// keeps running.
pub trait Handler<T>: Send + Sync + 'static{
    fn handle(&self, item: T);
}

impl<T, F> Handler<T> for F
    where F: Fn(T) + Send + Sync + 'static
{
    #[inline]
    fn handle(&self, item: T){
        self(item)
    }
}
