//! SmartTerm: an interactive filesystem shell with a natural-language mode.
//!
//! Plain input lines run through [`smartterm_shell::Shell`]. Lines prefixed
//! with `!ai` go to the [`agent::AgentBridge`], which lets Gemini pick one of
//! the shell's operations through function calling and then explains the
//! result.

pub mod agent;
pub mod cli;
pub mod config;

pub use agent::{AgentBridge, BridgeOutcome};
pub use config::AgentConfig;
