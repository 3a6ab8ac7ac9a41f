use std::io::{self, Write};

use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use smartterm_shell::{InputSource, OutputSink, Shell, TerminalSink, Tone};
use tracing::{debug, warn};

use crate::agent::{AgentBridge, BridgeOutcome, EXIT_MESSAGE};

use super::welcome::render_welcome;

pub const PROMPT: &str = "SmartTerm>> ";
pub const AGENT_PREFIX: &str = "!ai";
const INTERRUPT_HINT: &str = "Use 'exit' to quit.";

/// Classification of one line typed at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLine<'a> {
    Empty,
    Exit,
    Agent(&'a str),
    Command(&'a str),
}

impl<'a> InputLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            return Self::Exit;
        }
        match line.strip_prefix(AGENT_PREFIX) {
            Some(utterance) => Self::Agent(utterance.trim()),
            None => Self::Command(line),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Route one input line to the shell or the agent bridge.
pub async fn dispatch_line(
    shell: &mut Shell,
    bridge: &AgentBridge,
    line: &str,
    sink: &mut dyn OutputSink,
) -> LoopControl {
    match InputLine::parse(line) {
        InputLine::Empty => LoopControl::Continue,
        InputLine::Exit => {
            sink.notice(EXIT_MESSAGE);
            LoopControl::Exit
        }
        InputLine::Agent("") => {
            sink.error("!ai: missing instruction");
            LoopControl::Continue
        }
        InputLine::Agent(utterance) => match bridge.handle(shell, utterance, sink).await {
            BridgeOutcome::Continue => LoopControl::Continue,
            BridgeOutcome::Exit => LoopControl::Exit,
        },
        InputLine::Command(command) => {
            shell.execute(command, None, sink);
            LoopControl::Continue
        }
    }
}

/// The interactive session: banner, then prompt until `exit` or end of input.
pub async fn run_repl(shell: &mut Shell, bridge: &AgentBridge, styled: bool) -> Result<()> {
    let mut editor = DefaultEditor::new().context("Failed to initialize line editor")?;
    let mut sink = TerminalSink::stdout(styled);

    render_welcome(&mut sink);

    loop {
        sink.line("");
        sink.write_line(
            Tone::Notice,
            &format!("Current Directory: {}", shell.cwd().display()),
        );

        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty()
                    && let Err(error) = editor.add_history_entry(line.as_str())
                {
                    debug!(%error, "failed to record history entry");
                }
                if dispatch_line(shell, bridge, &line, &mut sink).await == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => sink.error(INTERRUPT_HINT),
            Err(ReadlineError::Eof) => break,
            Err(error) => return Err(error).context("Failed to read input"),
        }
    }

    Ok(())
}

/// Line editor used for interactive `cat > file` capture. Ctrl-C and Ctrl-D
/// both end the capture.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("Failed to initialize capture editor")?;
        Ok(Self { editor })
    }
}

impl InputSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(error)) => Err(error),
            Err(error) => Err(io::Error::other(error.to_string())),
        }
    }

    fn notify(&mut self, message: &str) {
        let mut stdout = io::stdout();
        if let Err(error) = writeln!(stdout, "{message}").and_then(|()| stdout.flush()) {
            warn!(%error, "failed to write capture prompt");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(InputLine::parse(""), InputLine::Empty);
        assert_eq!(InputLine::parse("   \t"), InputLine::Empty);
    }

    #[test]
    fn exit_words_are_case_insensitive() {
        assert_eq!(InputLine::parse("exit"), InputLine::Exit);
        assert_eq!(InputLine::parse("  QUIT "), InputLine::Exit);
        assert_eq!(InputLine::parse("Exit"), InputLine::Exit);
    }

    #[test]
    fn agent_prefix_strips_and_trims() {
        assert_eq!(
            InputLine::parse("!ai create a folder named x"),
            InputLine::Agent("create a folder named x")
        );
        assert_eq!(InputLine::parse("!ai"), InputLine::Agent(""));
    }

    #[test]
    fn agent_prefix_must_start_the_line() {
        assert_eq!(InputLine::parse("  !ai x"), InputLine::Command("  !ai x"));
    }

    #[test]
    fn everything_else_is_a_command() {
        assert_eq!(InputLine::parse("ls src"), InputLine::Command("ls src"));
        assert_eq!(InputLine::parse("exit now"), InputLine::Command("exit now"));
    }
}
