//! Decoding of model function calls into typed shell commands.
//!
//! Arguments are deserialized straight into [`ShellCommand`] values, so paths
//! containing spaces or quotes reach the handlers untouched.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use smartterm_llm::FunctionCall;
use smartterm_shell::{CatRequest, ShellCommand, WriteMode};
use thiserror::Error;
use tracing::debug;

use super::functions::names;

/// What the bridge should do with a decoded function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentAction {
    Run(ShellCommand),
    Exit,
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Function '{0}' is not implemented yet")]
    UnknownFunction(String),

    #[error("{function}: invalid arguments: {source}")]
    InvalidArguments {
        function: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{function}: missing argument '{argument}'")]
    MissingArgument {
        function: String,
        argument: &'static str,
    },
}

#[derive(Debug, Deserialize)]
struct PathArgs {
    path: String,
}

#[derive(Debug, Default, Deserialize)]
struct OptionalPathArgs {
    #[serde(default)]
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MoveArgs {
    source: String,
    destination: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum CatMode {
    #[default]
    Read,
    Write,
    Append,
}

#[derive(Debug, Deserialize)]
struct CatArgs {
    #[serde(default)]
    files: Vec<String>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    mode: CatMode,
    #[serde(default)]
    content: Option<String>,
}

fn parse_args<T: DeserializeOwned>(call: &FunctionCall) -> Result<T, TranslateError> {
    serde_json::from_value(call.args_object()).map_err(|source| {
        TranslateError::InvalidArguments {
            function: call.name.clone(),
            source,
        }
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn cat_request(call: &FunctionCall) -> Result<CatRequest, TranslateError> {
    let CatArgs {
        files,
        target,
        mode,
        content,
    } = parse_args(call)?;

    let write_mode = match mode {
        CatMode::Read => None,
        CatMode::Write => Some(WriteMode::Overwrite),
        CatMode::Append => Some(WriteMode::Append),
    };

    match (write_mode, non_empty(target)) {
        (None, _) => Ok(CatRequest::read(files).with_content(content)),
        (Some(mode), Some(target)) => Ok(CatRequest::write(target, mode)
            .with_sources(files)
            .with_content(content)),
        (Some(_), None) => Err(TranslateError::MissingArgument {
            function: call.name.clone(),
            argument: "target",
        }),
    }
}

/// Map one function call onto the action it names.
pub fn decode_function_call(call: &FunctionCall) -> Result<AgentAction, TranslateError> {
    debug!(function = %call.name, "decoding function call");

    let command = match call.name.as_str() {
        names::LIST_DIRECTORY => {
            let OptionalPathArgs { path } = parse_args(call)?;
            ShellCommand::List {
                path: non_empty(path),
            }
        }
        names::PRINT_WORKING_DIRECTORY => ShellCommand::PrintWorkingDirectory,
        names::CHANGE_DIRECTORY => {
            let PathArgs { path } = parse_args(call)?;
            ShellCommand::ChangeDirectory { path }
        }
        names::MAKE_DIRECTORY => {
            let PathArgs { path } = parse_args(call)?;
            ShellCommand::MakeDirectory { path }
        }
        names::MOVE_PATH => {
            let MoveArgs {
                source,
                destination,
            } = parse_args(call)?;
            ShellCommand::Move {
                source,
                destination,
            }
        }
        names::CAT_FILE => ShellCommand::Cat(cat_request(call)?),
        names::REMOVE_PATH => {
            let PathArgs { path } = parse_args(call)?;
            ShellCommand::Remove { path }
        }
        names::SHOW_CPU => ShellCommand::Cpu,
        names::SHOW_MEMORY => ShellCommand::Memory,
        names::LIST_PROCESSES => ShellCommand::Processes,
        names::SHOW_HELP => ShellCommand::Help,
        names::EXIT_TERMINAL => return Ok(AgentAction::Exit),
        other => return Err(TranslateError::UnknownFunction(other.to_string())),
    };

    Ok(AgentAction::Run(command))
}

/// Convenience for callers holding raw JSON arguments.
pub fn decode(name: &str, args: Value) -> Result<AgentAction, TranslateError> {
    decode_function_call(&FunctionCall::new(name, args))
}
