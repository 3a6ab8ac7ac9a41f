//! Shared helpers reused by the SmartTerm crates. Keeps the shell engine free
//! of any dependency on the CLI presentation layer while still agreeing on
//! path semantics and output tones.

pub mod paths;
pub mod styling;

pub use paths::{normalize_path, resolve_path};
pub use styling::{ColorPalette, Tone};
