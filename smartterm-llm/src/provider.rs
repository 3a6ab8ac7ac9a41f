use async_trait::async_trait;

use crate::error::LLMError;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// A remote model that accepts a conversation plus function declarations and
/// answers with either text or a function call.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Short provider name used in logs and error messages.
    fn name(&self) -> &str;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    async fn generate(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LLMError>;
}
