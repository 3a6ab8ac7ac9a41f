use crate::output::OutputSink;

/// The command table shown by `help`. Kept as static text so it can also
/// list entries, like `exit`, that the registry does not dispatch.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("ls", "List files and directories in the current directory"),
    ("pwd", "Show the current directory path"),
    ("cd", "Change directory"),
    ("mkdir", "Create a new directory"),
    ("cat", "View a file's content or create and write to it"),
    ("rm", "Remove a file or directory"),
    ("mv", "Moves/Renames a file or directory"),
    ("cpu", "Show CPU usage percentage"),
    ("mem", "Show memory usage details"),
    ("processes", "List running processes"),
    ("help", "Show this commands table"),
    ("exit / quit", "Exit the terminal"),
];

pub fn help(sink: &mut dyn OutputSink) {
    let width = HELP_ENTRIES
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or_default();

    sink.heading("Available Commands");
    for (name, description) in HELP_ENTRIES {
        sink.line(&format!("{name:<width$}  {description}"));
    }
    sink.write_line(
        smartterm_commons::Tone::Assistant,
        "Apart from the above mentioned commands, I can also talk and follow your instructions ^_^",
    );
    sink.write_line(
        smartterm_commons::Tone::Assistant,
        "Use !ai prefix to talk with me or instruct me.",
    );
}
