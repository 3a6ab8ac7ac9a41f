use std::path::Path;

use tracing::debug;

use crate::command::ShellCommand;
use crate::error::{ShellError, ShellResult};
use crate::handlers::{cat, filesystem, info, system};
use crate::input::{InputSource, NoInput};
use crate::output::{CaptureSink, OutputSink};
use crate::probe::SystemProbe;
use crate::registry::CommandRegistry;
use crate::session::Session;
use crate::tokenizer::tokenize;

/// The command dispatcher. Owns the session state, the registry, and the
/// collaborators handlers need (stats probe, interactive input).
///
/// Nothing here panics or returns an error to the caller: every failure is
/// rendered through the sink of the call that caused it.
pub struct Shell {
    session: Session,
    registry: CommandRegistry,
    probe: Box<dyn SystemProbe>,
    input: Box<dyn InputSource>,
}

impl Shell {
    pub fn new(session: Session, probe: Box<dyn SystemProbe>) -> Self {
        Self {
            session,
            registry: CommandRegistry::builtin(),
            probe,
            input: Box::new(NoInput),
        }
    }

    /// Use `input` for interactive `cat > file` capture.
    pub fn with_input(mut self, input: Box<dyn InputSource>) -> Self {
        self.input = input;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cwd(&self) -> &Path {
        self.session.cwd()
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Tokenize and run one input line, writing everything to `sink`.
    ///
    /// `content` is forwarded to `cat` only.
    pub fn execute(&mut self, line: &str, content: Option<&str>, sink: &mut dyn OutputSink) {
        match self.parse_line(line, content) {
            Ok(Some(command)) => self.run(command, sink),
            Ok(None) => {}
            Err(error) => sink.error(&error.to_string()),
        }
    }

    /// Like [`Shell::execute`] but collects the output and returns it with
    /// trailing whitespace trimmed.
    pub fn execute_captured(&mut self, line: &str, content: Option<&str>) -> String {
        let mut capture = CaptureSink::new();
        self.execute(line, content, &mut capture);
        capture.finish()
    }

    /// Run an already decoded command.
    pub fn run(&mut self, command: ShellCommand, sink: &mut dyn OutputSink) {
        let category = command.category();
        debug!(?category, "dispatching command");
        if let Err(error) = self.dispatch(command, sink) {
            debug!(?category, %error, "command failed");
            sink.error(&error.to_string());
        }
    }

    pub fn run_captured(&mut self, command: ShellCommand) -> String {
        let mut capture = CaptureSink::new();
        self.run(command, &mut capture);
        capture.finish()
    }

    fn parse_line(&self, line: &str, content: Option<&str>) -> ShellResult<Option<ShellCommand>> {
        let Some(tokens) = tokenize(line)? else {
            return Ok(None);
        };
        let spec = self
            .registry
            .lookup(&tokens.name)
            .ok_or_else(|| ShellError::UnknownCommand(tokens.name.clone()))?;
        ShellCommand::from_args(spec.category, &tokens.args, content).map(Some)
    }

    fn dispatch(&mut self, command: ShellCommand, sink: &mut dyn OutputSink) -> ShellResult<()> {
        match command {
            ShellCommand::List { path } => filesystem::list(&self.session, path.as_deref(), sink),
            ShellCommand::PrintWorkingDirectory => {
                filesystem::print_working_directory(&self.session, sink);
                Ok(())
            }
            ShellCommand::ChangeDirectory { path } => {
                filesystem::change_directory(&mut self.session, &path)
            }
            ShellCommand::MakeDirectory { path } => {
                filesystem::make_directory(&self.session, &path, sink)
            }
            ShellCommand::Move {
                source,
                destination,
            } => filesystem::move_path(&self.session, &source, &destination, sink),
            ShellCommand::Remove { path } => filesystem::remove(&self.session, &path, sink),
            ShellCommand::Cat(request) => {
                cat::run(&self.session, request, self.input.as_mut(), sink)
            }
            ShellCommand::Cpu => {
                system::cpu(self.probe.as_mut(), sink);
                Ok(())
            }
            ShellCommand::Memory => {
                system::memory(self.probe.as_mut(), sink);
                Ok(())
            }
            ShellCommand::Processes => {
                system::processes(self.probe.as_mut(), sink);
                Ok(())
            }
            ShellCommand::Help => {
                info::help(sink);
                Ok(())
            }
        }
    }
}

#[cfg(feature = "sysinfo-probe")]
impl Shell {
    /// A shell backed by the real system probe.
    pub fn with_system_probe(session: Session) -> Self {
        Self::new(session, Box::new(crate::probe::SysinfoProbe::new()))
    }
}
