use crate::error::{ShellError, ShellResult};

/// Logical grouping for the commands the registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    ListDirectory,
    PrintDirectory,
    ChangeDirectory,
    CreateDirectory,
    Move,
    Remove,
    Concatenate,
    CpuUsage,
    MemoryUsage,
    ProcessList,
    Help,
}

/// How a redirection writes to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// `>`
    Overwrite,
    /// `>>`
    Append,
}

impl WriteMode {
    pub fn operator(self) -> &'static str {
        match self {
            Self::Overwrite => ">",
            Self::Append => ">>",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub mode: WriteMode,
    pub target: String,
}

/// Decoded form of a `cat` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatRequest {
    pub sources: Vec<String>,
    pub redirect: Option<Redirect>,
    pub content: Option<String>,
}

impl CatRequest {
    pub fn read(sources: Vec<String>) -> Self {
        Self {
            sources,
            ..Self::default()
        }
    }

    pub fn write(target: impl Into<String>, mode: WriteMode) -> Self {
        Self {
            redirect: Some(Redirect {
                mode,
                target: target.into(),
            }),
            ..Self::default()
        }
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_content(mut self, content: Option<String>) -> Self {
        self.content = content;
        self
    }

    /// Split `cat` arguments at the redirection operator.
    ///
    /// `>>` takes precedence over `>` when both appear. Everything before the
    /// operator is a source file and exactly one target must follow it.
    pub fn from_args(args: &[String], content: Option<&str>) -> ShellResult<Self> {
        if args.is_empty() && content.is_none() {
            return Err(ShellError::usage("cat: missing arguments"));
        }

        let content = content.map(str::to_owned);
        let operator = args
            .iter()
            .position(|arg| arg == ">>")
            .map(|idx| (idx, WriteMode::Append))
            .or_else(|| {
                args.iter()
                    .position(|arg| arg == ">")
                    .map(|idx| (idx, WriteMode::Overwrite))
            });

        let Some((idx, mode)) = operator else {
            return Ok(Self::read(args.to_vec()).with_content(content));
        };

        let (sources, rest) = args.split_at(idx);
        let target = match rest {
            [_, target] => target.clone(),
            _ => return Err(ShellError::usage("cat: invalid redirection usage")),
        };

        Ok(Self::write(target, mode)
            .with_sources(sources.to_vec())
            .with_content(content))
    }
}

/// A fully validated invocation of one registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List { path: Option<String> },
    PrintWorkingDirectory,
    ChangeDirectory { path: String },
    MakeDirectory { path: String },
    Move { source: String, destination: String },
    Remove { path: String },
    Cat(CatRequest),
    Cpu,
    Memory,
    Processes,
    Help,
}

impl ShellCommand {
    /// Build a command from tokenized arguments. `content` is only consumed by
    /// [`CommandCategory::Concatenate`]; every other command ignores it.
    pub fn from_args(
        category: CommandCategory,
        args: &[String],
        content: Option<&str>,
    ) -> ShellResult<Self> {
        let first = || args.first().cloned();
        let command = match category {
            CommandCategory::ListDirectory => Self::List { path: first() },
            CommandCategory::PrintDirectory => Self::PrintWorkingDirectory,
            CommandCategory::ChangeDirectory => Self::ChangeDirectory {
                path: first().ok_or_else(|| ShellError::usage("cd: missing argument"))?,
            },
            CommandCategory::CreateDirectory => Self::MakeDirectory {
                path: first().ok_or_else(|| ShellError::usage("mkdir: missing directory name"))?,
            },
            CommandCategory::Move => match args {
                [source, destination, ..] => Self::Move {
                    source: source.clone(),
                    destination: destination.clone(),
                },
                _ => return Err(ShellError::usage("mv: missing source or destination")),
            },
            CommandCategory::Remove => Self::Remove {
                path: first().ok_or_else(|| ShellError::usage("rm: missing file/directory name"))?,
            },
            CommandCategory::Concatenate => Self::Cat(CatRequest::from_args(args, content)?),
            CommandCategory::CpuUsage => Self::Cpu,
            CommandCategory::MemoryUsage => Self::Memory,
            CommandCategory::ProcessList => Self::Processes,
            CommandCategory::Help => Self::Help,
        };
        Ok(command)
    }

    pub fn category(&self) -> CommandCategory {
        match self {
            Self::List { .. } => CommandCategory::ListDirectory,
            Self::PrintWorkingDirectory => CommandCategory::PrintDirectory,
            Self::ChangeDirectory { .. } => CommandCategory::ChangeDirectory,
            Self::MakeDirectory { .. } => CommandCategory::CreateDirectory,
            Self::Move { .. } => CommandCategory::Move,
            Self::Remove { .. } => CommandCategory::Remove,
            Self::Cat(_) => CommandCategory::Concatenate,
            Self::Cpu => CommandCategory::CpuUsage,
            Self::Memory => CommandCategory::MemoryUsage,
            Self::Processes => CommandCategory::ProcessList,
            Self::Help => CommandCategory::Help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_string()).collect()
    }

    #[test]
    fn cat_without_operator_reads_sources() {
        let request = CatRequest::from_args(&args(&["a.txt", "b.txt"]), None).unwrap();
        assert_eq!(request, CatRequest::read(args(&["a.txt", "b.txt"])));
    }

    #[test]
    fn cat_splits_sources_and_target() {
        let request = CatRequest::from_args(&args(&["a", "b", ">", "out"]), None).unwrap();
        assert_eq!(request.sources, args(&["a", "b"]));
        assert_eq!(
            request.redirect,
            Some(Redirect {
                mode: WriteMode::Overwrite,
                target: "out".to_string()
            })
        );
    }

    #[test]
    fn cat_append_operator_wins_over_overwrite() {
        let request = CatRequest::from_args(&args(&["a", ">>", "log"]), None).unwrap();
        let redirect = request.redirect.unwrap();
        assert_eq!(redirect.mode, WriteMode::Append);
        assert_eq!(redirect.target, "log");
    }

    #[test]
    fn cat_requires_exactly_one_target() {
        for bad in [&["a", ">"][..], &["a", ">", "x", "y"][..], &[">>"][..]] {
            let error = CatRequest::from_args(&args(bad), None).unwrap_err();
            assert_eq!(error.to_string(), "cat: invalid redirection usage");
        }
    }

    #[test]
    fn cat_with_nothing_is_missing_arguments() {
        let error = CatRequest::from_args(&[], None).unwrap_err();
        assert_eq!(error.to_string(), "cat: missing arguments");
    }

    #[test]
    fn cat_forwards_content() {
        let request = CatRequest::from_args(&args(&[">", "f"]), Some("X")).unwrap();
        assert_eq!(request.content.as_deref(), Some("X"));
        assert!(request.sources.is_empty());
    }

    #[test]
    fn content_is_ignored_by_other_commands() {
        let command =
            ShellCommand::from_args(CommandCategory::PrintDirectory, &[], Some("ignored"))
                .unwrap();
        assert_eq!(command, ShellCommand::PrintWorkingDirectory);
    }

    #[test]
    fn move_needs_both_paths() {
        let error = ShellCommand::from_args(CommandCategory::Move, &args(&["a"]), None)
            .unwrap_err();
        assert_eq!(error.to_string(), "mv: missing source or destination");

        let command =
            ShellCommand::from_args(CommandCategory::Move, &args(&["a", "b"]), None).unwrap();
        assert_eq!(
            command,
            ShellCommand::Move {
                source: "a".to_string(),
                destination: "b".to_string()
            }
        );
    }

    #[test]
    fn category_round_trips() {
        let command =
            ShellCommand::from_args(CommandCategory::Remove, &args(&["x"]), None).unwrap();
        assert_eq!(command.category(), CommandCategory::Remove);
    }
}
