//! Natural-language mode: Gemini function calling mapped onto shell commands.

pub mod bridge;
pub mod functions;
pub mod instructions;
pub mod translate;

pub use bridge::{AgentBridge, BridgeOutcome, EXIT_MESSAGE, FAREWELL};
pub use functions::{build_function_declarations, build_tools};
pub use instructions::SYSTEM_INSTRUCTIONS;
pub use translate::{AgentAction, TranslateError, decode_function_call};
