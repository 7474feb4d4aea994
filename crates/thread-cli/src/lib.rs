//! Library side of the `thread-replay` command.

pub mod logging;
pub mod replay;
