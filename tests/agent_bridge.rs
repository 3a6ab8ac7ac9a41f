//! Agent bridge round trips against the queued mock provider.

use std::fs;
use std::sync::Arc;

use assert_fs::TempDir;
use assert_fs::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use smartterm::agent::{AgentBridge, BridgeOutcome, EXIT_MESSAGE, FAREWELL};
use smartterm::cli::{LoopControl, dispatch_line};
use smartterm_llm::{
    Content, FunctionCall, GenerateContentResponse, LLMError, Part, StaticResponseProvider, roles,
};
use smartterm_shell::{
    CaptureSink, MemoryStats, ProcessInfo, Session, Shell, SystemProbe,
};

struct FixedProbe;

impl SystemProbe for FixedProbe {
    fn cpu_usage(&mut self) -> f32 {
        3.0
    }

    fn memory(&mut self) -> MemoryStats {
        MemoryStats {
            total: 4 * 1024 * 1024 * 1024,
            available: 1024 * 1024 * 1024,
            used: 3 * 1024 * 1024 * 1024,
        }
    }

    fn processes(&mut self) -> Vec<ProcessInfo> {
        vec![ProcessInfo {
            pid: 7,
            name: "smartterm".to_string(),
        }]
    }
}

struct Harness {
    temp: TempDir,
    shell: Shell,
    provider: Arc<StaticResponseProvider>,
    bridge: AgentBridge,
}

impl Harness {
    fn new(provider: StaticResponseProvider) -> Self {
        let temp = TempDir::new().unwrap();
        let session = Session::new(temp.path()).unwrap();
        let shell = Shell::new(session, Box::new(FixedProbe));
        let provider = Arc::new(provider);
        let bridge = AgentBridge::new(provider.clone());
        Self {
            temp,
            shell,
            provider,
            bridge,
        }
    }

    async fn ask(&mut self, utterance: &str) -> (BridgeOutcome, String) {
        let mut sink = CaptureSink::new();
        let outcome = self.bridge.handle(&mut self.shell, utterance, &mut sink).await;
        (outcome, sink.finish())
    }

    /// The `result` string of the function response in the continuation request.
    fn function_result(&self) -> String {
        let requests = self.provider.requests();
        let continuation = requests.get(1).expect("continuation request");
        let function_turn = continuation.contents.last().expect("function turn");
        assert_eq!(function_turn.role, roles::FUNCTION);
        match function_turn.parts.first() {
            Some(Part::FunctionResponse { function_response }) => function_response.response
                ["result"]
                .as_str()
                .expect("result string")
                .to_string(),
            other => panic!("expected function response, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn plain_text_reply_is_printed_after_one_request() {
    let mut harness = Harness::new(
        StaticResponseProvider::new().with_response(GenerateContentResponse::text_reply(
            "I can list, create and remove files.",
        )),
    );

    let (outcome, output) = harness.ask("what can you do?").await;

    assert_eq!(outcome, BridgeOutcome::Continue);
    assert_eq!(output, "I can list, create and remove files.");

    let requests = harness.provider.requests();
    assert_eq!(requests.len(), 1);
    let request = requests.first().unwrap();
    assert_eq!(request.contents, vec![Content::user_text("what can you do?")]);
    let declarations = request
        .tools
        .as_ref()
        .and_then(|tools| tools.first())
        .map(|tool| tool.function_declarations.len());
    assert_eq!(declarations, Some(12));
    assert!(request.system_instruction.is_some());
}

#[tokio::test]
async fn make_directory_call_matches_typed_mkdir() {
    let mut harness = Harness::new(
        StaticResponseProvider::new()
            .with_response(GenerateContentResponse::function_call_reply(
                "make_directory",
                json!({ "path": "x" }),
            ))
            .with_response(GenerateContentResponse::text_reply("Created the folder x.")),
    );

    let (outcome, output) = harness.ask("create a folder named x").await;

    assert_eq!(outcome, BridgeOutcome::Continue);
    assert_eq!(output, "Created the folder x.");
    assert!(harness.temp.child("x").path().is_dir());

    let typed = harness.shell.execute_captured("mkdir y", None);
    assert!(harness.temp.child("y").path().is_dir());
    assert_eq!(
        harness.function_result(),
        typed.replace(
            &harness.temp.path().join("y").display().to_string(),
            &harness.temp.path().join("x").display().to_string()
        )
    );
}

#[tokio::test]
async fn continuation_echoes_the_model_turn_with_its_signature() {
    let model_parts = vec![Part::FunctionCall {
        function_call: FunctionCall::new("print_working_directory", json!({})),
        thought_signature: Some("sig-abc".to_string()),
    }];
    let mut harness = Harness::new(
        StaticResponseProvider::new()
            .with_response(GenerateContentResponse::from_parts(model_parts.clone()))
            .with_response(GenerateContentResponse::text_reply("You are in the temp dir.")),
    );

    harness.ask("where am I?").await;

    let requests = harness.provider.requests();
    assert_eq!(requests.len(), 2);
    let continuation = requests.get(1).unwrap();
    let [user, model, function] = continuation.contents.as_slice() else {
        panic!("expected three turns, got {:?}", continuation.contents);
    };
    assert_eq!(user, &Content::user_text("where am I?"));
    assert_eq!(model.role, roles::MODEL);
    assert_eq!(model.parts, model_parts);
    assert_eq!(
        function,
        &Content::function_response(
            "print_working_directory",
            json!({ "result": harness.temp.path().display().to_string() })
        )
    );
}

#[tokio::test]
async fn change_directory_call_moves_the_shared_session() {
    let mut harness = Harness::new(
        StaticResponseProvider::new()
            .with_response(GenerateContentResponse::function_call_reply(
                "change_directory",
                json!({ "path": "nested dir" }),
            ))
            .with_response(GenerateContentResponse::text_reply("Done.")),
    );
    harness.temp.child("nested dir").create_dir_all().unwrap();

    harness.ask("go into nested dir").await;

    assert_eq!(harness.shell.cwd(), harness.temp.path().join("nested dir"));
    assert_eq!(harness.function_result(), "");
}

#[tokio::test]
async fn cat_file_write_keeps_spaces_in_target_names() {
    let mut harness = Harness::new(
        StaticResponseProvider::new()
            .with_response(GenerateContentResponse::function_call_reply(
                "cat_file",
                json!({ "mode": "write", "target": "my notes.txt", "content": "remember the milk" }),
            ))
            .with_response(GenerateContentResponse::text_reply("Saved.")),
    );

    harness.ask("write a note").await;

    let written = fs::read_to_string(harness.temp.child("my notes.txt").path()).unwrap();
    assert_eq!(written, "remember the milk\n");
    assert_eq!(
        harness.function_result(),
        "cat: content written to my notes.txt"
    );
}

#[tokio::test]
async fn handler_errors_are_returned_to_the_model() {
    let mut harness = Harness::new(
        StaticResponseProvider::new()
            .with_response(GenerateContentResponse::function_call_reply(
                "remove_path",
                json!({ "path": "ghost.txt" }),
            ))
            .with_response(GenerateContentResponse::text_reply("That file does not exist.")),
    );

    let (_, output) = harness.ask("delete ghost.txt").await;

    assert_eq!(output, "That file does not exist.");
    assert_eq!(
        harness.function_result(),
        "rm: cannot remove 'ghost.txt': No such file or directory"
    );
}

#[tokio::test]
async fn exit_terminal_ends_the_session_without_a_continuation() {
    let mut harness = Harness::new(StaticResponseProvider::new().with_response(
        GenerateContentResponse::function_call_reply("exit_terminal", Value::Null),
    ));

    let (outcome, output) = harness.ask("bye").await;

    assert_eq!(outcome, BridgeOutcome::Exit);
    assert_eq!(output, format!("{FAREWELL}\n{EXIT_MESSAGE}"));
    assert_eq!(harness.provider.requests().len(), 1);
}

#[tokio::test]
async fn unknown_function_is_reported_and_round_tripped() {
    let mut harness = Harness::new(
        StaticResponseProvider::new()
            .with_response(GenerateContentResponse::function_call_reply(
                "format_disk",
                json!({}),
            ))
            .with_response(GenerateContentResponse::text_reply("I cannot do that.")),
    );

    let (outcome, output) = harness.ask("format my disk").await;

    assert_eq!(outcome, BridgeOutcome::Continue);
    assert_eq!(
        output,
        "Function 'format_disk' is not implemented yet\nI cannot do that."
    );
    assert_eq!(
        harness.function_result(),
        "Function 'format_disk' is not implemented yet"
    );
}

#[tokio::test]
async fn service_errors_are_reported_and_the_session_continues() {
    let mut harness =
        Harness::new(StaticResponseProvider::new().with_error(LLMError::RateLimit));

    let (outcome, output) = harness.ask("list files").await;

    assert_eq!(outcome, BridgeOutcome::Continue);
    assert_eq!(output, "Error calling Gemini API: Rate limit exceeded");
}

#[tokio::test]
async fn continuation_failure_is_reported_after_the_command_ran() {
    let mut harness = Harness::new(StaticResponseProvider::new().with_response(
        GenerateContentResponse::function_call_reply("make_directory", json!({ "path": "kept" })),
    ));

    let (outcome, output) = harness.ask("make kept").await;

    assert_eq!(outcome, BridgeOutcome::Continue);
    assert!(harness.temp.child("kept").path().is_dir());
    assert!(output.starts_with("Error calling Gemini API: Invalid request:"));
}

#[tokio::test]
async fn empty_candidate_list_is_a_reported_error() {
    let mut harness = Harness::new(StaticResponseProvider::new().with_response(
        GenerateContentResponse {
            candidates: Vec::new(),
            usage_metadata: None,
        },
    ));

    let (_, output) = harness.ask("hello").await;

    assert_eq!(
        output,
        "Error calling Gemini API: Failed to parse response: response contained no candidates"
    );
}

#[tokio::test]
async fn read_loop_routes_commands_agent_lines_and_exit() {
    let mut harness = Harness::new(
        StaticResponseProvider::new()
            .with_response(GenerateContentResponse::text_reply("Hello!")),
    );
    let mut sink = CaptureSink::new();

    let control = dispatch_line(&mut harness.shell, &harness.bridge, "mkdir docs", &mut sink).await;
    assert_eq!(control, LoopControl::Continue);
    assert!(harness.temp.child("docs").path().is_dir());

    let control = dispatch_line(&mut harness.shell, &harness.bridge, "   ", &mut sink).await;
    assert_eq!(control, LoopControl::Continue);

    let control = dispatch_line(&mut harness.shell, &harness.bridge, "!ai", &mut sink).await;
    assert_eq!(control, LoopControl::Continue);
    assert!(harness.provider.requests().is_empty());

    let control = dispatch_line(&mut harness.shell, &harness.bridge, "!ai hi", &mut sink).await;
    assert_eq!(control, LoopControl::Continue);
    assert_eq!(harness.provider.requests().len(), 1);

    let control = dispatch_line(&mut harness.shell, &harness.bridge, "QUIT", &mut sink).await;
    assert_eq!(control, LoopControl::Exit);

    let output = sink.finish();
    assert!(output.contains("Directory created:"));
    assert!(output.contains("!ai: missing instruction"));
    assert!(output.contains("Hello!"));
    assert!(output.ends_with(EXIT_MESSAGE));
}
