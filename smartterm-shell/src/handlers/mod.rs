//! One module per handler family. Handlers never print directly: they write
//! through the [`OutputSink`](crate::output::OutputSink) they are given and
//! return a [`ShellError`](crate::error::ShellError) for the dispatcher to
//! report when the whole operation fails.

pub mod cat;
pub mod filesystem;
pub mod info;
pub mod system;
