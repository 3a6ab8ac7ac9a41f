pub mod repl;
pub mod welcome;

pub use repl::{EditorInput, InputLine, LoopControl, dispatch_line, run_repl};
pub use welcome::render_welcome;
