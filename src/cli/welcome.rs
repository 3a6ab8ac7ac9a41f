use smartterm_shell::{OutputSink, Tone};

const TITLE: &str = "SmartTerm";
const SUBTITLE: &str = "Rust Based Smart Terminal for Developers";
const FEATURES: &[&str] = &[
    "Filesystem Operations",
    "Process Checks",
    "Commands History",
    "Natural Language Queries",
];
const PANEL_LABEL: &str = " Welcome ";
const PADDING: usize = 4;

/// Lines of the startup panel, border included.
pub fn welcome_lines() -> Vec<(Tone, String)> {
    let features = FEATURES.join(" | ");
    let body = [TITLE, SUBTITLE, features.as_str()];
    let inner = body
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or_default()
        + PADDING * 2;

    let label_width = PANEL_LABEL.chars().count();
    let top = format!(
        "╭─{PANEL_LABEL}{}╮",
        "─".repeat(inner.saturating_sub(label_width + 1))
    );
    let bottom = format!("╰{}╯", "─".repeat(inner));
    let blank = format!("│{}│", " ".repeat(inner));
    let row = |text: &str| format!("│{text:^inner$}│");

    vec![
        (Tone::Notice, top),
        (Tone::Notice, blank.clone()),
        (Tone::Heading, row(TITLE)),
        (Tone::Plain, row(SUBTITLE)),
        (Tone::Plain, row(&features)),
        (Tone::Notice, blank),
        (Tone::Notice, bottom),
    ]
}

pub fn render_welcome(sink: &mut dyn OutputSink) {
    for (tone, line) in welcome_lines() {
        sink.write_line(tone, &line);
    }
}
