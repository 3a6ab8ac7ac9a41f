use std::collections::HashMap;

use crate::command::CommandCategory;

/// A registry entry binding a command name to the operation it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub category: CommandCategory,
}

const BUILTIN_COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "ls",
        category: CommandCategory::ListDirectory,
    },
    CommandSpec {
        name: "pwd",
        category: CommandCategory::PrintDirectory,
    },
    CommandSpec {
        name: "cd",
        category: CommandCategory::ChangeDirectory,
    },
    CommandSpec {
        name: "mkdir",
        category: CommandCategory::CreateDirectory,
    },
    CommandSpec {
        name: "cat",
        category: CommandCategory::Concatenate,
    },
    CommandSpec {
        name: "rm",
        category: CommandCategory::Remove,
    },
    CommandSpec {
        name: "mv",
        category: CommandCategory::Move,
    },
    CommandSpec {
        name: "cpu",
        category: CommandCategory::CpuUsage,
    },
    CommandSpec {
        name: "mem",
        category: CommandCategory::MemoryUsage,
    },
    CommandSpec {
        name: "processes",
        category: CommandCategory::ProcessList,
    },
    CommandSpec {
        name: "help",
        category: CommandCategory::Help,
    },
];

/// Immutable name → operation map, built once per shell.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    entries: HashMap<&'static str, CommandSpec>,
}

impl CommandRegistry {
    pub fn builtin() -> Self {
        let entries = BUILTIN_COMMANDS
            .iter()
            .map(|spec| (spec.name, *spec))
            .collect();
        Self { entries }
    }

    /// Command names are matched exactly (case-sensitive).
    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
