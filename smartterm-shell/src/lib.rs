//! Command engine behind the SmartTerm shell.
//!
//! Input lines are split with shell word rules, looked up in a fixed
//! [`CommandRegistry`], decoded into a typed [`ShellCommand`], and run against
//! a single [`Session`]. Handlers write through an [`OutputSink`], so the same
//! command can render to the terminal or be captured as text for the agent
//! bridge without swapping any process-wide stream.

pub mod command;
pub mod error;
pub mod handlers;
pub mod input;
pub mod output;
pub mod probe;
pub mod registry;
pub mod session;
pub mod shell;
pub mod tokenizer;

pub use command::{CatRequest, CommandCategory, Redirect, ShellCommand, WriteMode};
pub use error::{ShellError, ShellResult};
pub use handlers::info::HELP_ENTRIES;
pub use input::{InputSource, LineInput, NoInput};
pub use output::{CaptureSink, OutputSink, TerminalSink};
#[cfg(feature = "sysinfo-probe")]
pub use probe::SysinfoProbe;
pub use probe::{MemoryStats, ProcessInfo, SystemProbe};
pub use registry::{CommandRegistry, CommandSpec};
pub use session::Session;
pub use shell::Shell;
pub use smartterm_commons::Tone;
pub use tokenizer::{Tokens, tokenize};
