use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error{
    #[error("dispatcher needs at least one worker thread")]
    ZeroThreads,

    #[error("dispatcher workers are already running")]
    AlreadyStarted,

    #[error("failed to spawn worker thread `{name}`")]
    Spawn{
        name: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
