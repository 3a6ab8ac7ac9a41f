//! Gemini function-calling client used by the SmartTerm agent bridge.
//!
//! The crate exposes the wire types for `generateContent`, a small
//! [`LLMProvider`] abstraction, the production [`GeminiProvider`], and (behind
//! the `mock` feature) a queued-response provider for deterministic tests.

pub mod error;
pub mod error_handling;
pub mod gemini;
pub mod provider;
pub mod types;

#[cfg(feature = "mock")]
pub mod mock;

pub use error::LLMError;
pub use gemini::{DEFAULT_MODEL, GEMINI_API_BASE, GeminiProvider};
#[cfg(feature = "mock")]
pub use mock::StaticResponseProvider;
pub use provider::LLMProvider;
pub use types::{
    Candidate, Content, FunctionCall, FunctionDeclaration, FunctionResponse,
    GenerateContentRequest, GenerateContentResponse, Part, SystemInstruction, Tool, roles,
};
