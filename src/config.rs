use crate::error::{Error, Result};

/// [Dispatcher](crate::dispatcher::Dispatcher) construction parameters.
///
/// Defaults:
///
/// thread_count = 1
/// threshold = 0 (unbounded)
/// auto_start = true
/// thread_name = "msg-dispatch"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config{
    /// Worker threads spawned by `start`.
    pub thread_count: usize,

    /// Max pending items. When a put makes the backlog longer than this, the
    /// whole backlog is dropped. 0 - no limit.
    pub threshold: usize,

    /// Spawn workers right in the constructor.
    pub auto_start: bool,

    /// Workers are named `{thread_name}-{index}`.
    pub thread_name: String,
}

impl Default for Config{
    fn default() -> Self{
        Self{
            thread_count: 1,
            threshold: 0,
            auto_start: true,
            thread_name: String::from("msg-dispatch"),
        }
    }
}

impl Config{
    #[inline]
    pub fn new() -> Self{
        Self::default()
    }

    #[must_use]
    pub fn thread_count(mut self, thread_count: usize) -> Self{
        self.thread_count = thread_count;
        self
    }

    #[must_use]
    pub fn threshold(mut self, threshold: usize) -> Self{
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn auto_start(mut self, auto_start: bool) -> Self{
        self.auto_start = auto_start;
        self
    }

    #[must_use]
    pub fn thread_name(mut self, thread_name: impl Into<String>) -> Self{
        self.thread_name = thread_name.into();
        self
    }

    pub fn validate(&self) -> Result<()>{
        if self.thread_count == 0 {
            return Err(Error::ZeroThreads);
        }
        Ok(())
    }
}
