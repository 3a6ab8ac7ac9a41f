//! One natural-language turn against the model: a request, at most one
//! function call run through the shell, and a continuation for the final
//! answer.

use std::sync::Arc;

use serde_json::json;
use smartterm_llm::{
    Content, GenerateContentRequest, GenerateContentResponse, LLMError, LLMProvider,
    SystemInstruction, Tool,
};
use smartterm_shell::{OutputSink, Shell, Tone};
use tracing::{debug, warn};

use super::functions::build_tools;
use super::instructions::SYSTEM_INSTRUCTIONS;
use super::translate::{AgentAction, decode_function_call};

pub const FAREWELL: &str = "Hope we meet again ^_^";
pub const EXIT_MESSAGE: &str = "Exiting SmartTerm...";

/// Whether the read loop should keep going after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeOutcome {
    Continue,
    Exit,
}

pub struct AgentBridge {
    provider: Arc<dyn LLMProvider>,
    tools: Vec<Tool>,
    system_instruction: SystemInstruction,
}

impl AgentBridge {
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self {
            provider,
            tools: build_tools(),
            system_instruction: SystemInstruction::new(SYSTEM_INSTRUCTIONS),
        }
    }

    pub fn provider(&self) -> &dyn LLMProvider {
        self.provider.as_ref()
    }

    fn request(&self, contents: Vec<Content>) -> GenerateContentRequest {
        GenerateContentRequest {
            contents,
            tools: Some(self.tools.clone()),
            system_instruction: Some(self.system_instruction.clone()),
        }
    }

    /// Handle one `!ai` utterance. Service failures are reported through
    /// `sink` and end the turn; they never escape to the read loop.
    pub async fn handle(
        &self,
        shell: &mut Shell,
        utterance: &str,
        sink: &mut dyn OutputSink,
    ) -> BridgeOutcome {
        match self.converse(shell, utterance, sink).await {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(provider = self.provider.name(), %error, "agent turn failed");
                sink.error(&format!("Error calling Gemini API: {error}"));
                BridgeOutcome::Continue
            }
        }
    }

    async fn converse(
        &self,
        shell: &mut Shell,
        utterance: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<BridgeOutcome, LLMError> {
        let mut contents = vec![Content::user_text(utterance)];
        let response = self.provider.generate(self.request(contents.clone())).await?;
        let model_turn = first_content(response)?;

        let Some(call) = model_turn.function_call().cloned() else {
            sink.write_line(Tone::Assistant, &model_turn.text());
            return Ok(BridgeOutcome::Continue);
        };

        debug!(function = %call.name, "model requested a function call");
        let result = match decode_function_call(&call) {
            Ok(AgentAction::Run(command)) => shell.run_captured(command),
            Ok(AgentAction::Exit) => {
                sink.write_line(Tone::Assistant, FAREWELL);
                sink.notice(EXIT_MESSAGE);
                return Ok(BridgeOutcome::Exit);
            }
            Err(error) => {
                let message = error.to_string();
                sink.error(&message);
                message
            }
        };

        // The model turn goes back verbatim so any thought signatures survive.
        contents.push(model_turn);
        contents.push(Content::function_response(
            call.name,
            json!({ "result": result }),
        ));

        let final_response = self.provider.generate(self.request(contents)).await?;
        sink.write_line(Tone::Assistant, &final_response.text());
        Ok(BridgeOutcome::Continue)
    }
}

fn first_content(response: GenerateContentResponse) -> Result<Content, LLMError> {
    response
        .candidates
        .into_iter()
        .next()
        .map(|candidate| candidate.content)
        .ok_or_else(|| LLMError::Parse {
            message: "response contained no candidates".to_string(),
        })
}
