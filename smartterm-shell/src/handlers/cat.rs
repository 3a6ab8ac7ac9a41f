//! `cat`: read, concatenate, and redirect file contents.
//!
//! | request                                   | effect                                   |
//! |-------------------------------------------|------------------------------------------|
//! | sources, no redirect                      | print each source in order               |
//! | redirect + content                        | write/append `content` + `\n` to target  |
//! | `>` redirect, no sources, no content      | collect lines interactively into target  |
//! | redirect + sources (or `>>` alone)        | join sources with `\n`, write/append     |
//! | nothing                                   | `cat: missing arguments`                 |

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::command::{CatRequest, Redirect, WriteMode};
use crate::error::{ShellError, ShellResult};
use crate::input::InputSource;
use crate::output::OutputSink;
use crate::session::Session;

/// End-of-transmission marker some consoles leave in the captured text (Ctrl+Z).
const EOT_MARKER: char = '\u{1a}';

pub fn run(
    session: &Session,
    request: CatRequest,
    input: &mut dyn InputSource,
    sink: &mut dyn OutputSink,
) -> ShellResult<()> {
    let CatRequest {
        sources,
        redirect,
        content,
    } = request;

    let Some(redirect) = redirect else {
        if sources.is_empty() {
            return Err(match content {
                Some(_) => ShellError::usage("cat: no target file given for content"),
                None => ShellError::usage("cat: missing arguments"),
            });
        }
        print_sources(session, &sources, sink);
        return Ok(());
    };

    let target = session.resolve(&redirect.target);
    debug!(
        target = %target.display(),
        operator = redirect.mode.operator(),
        sources = sources.len(),
        has_content = content.is_some(),
        "cat redirection"
    );

    if let Some(content) = content {
        let mut payload = content;
        payload.push('\n');
        write_target(&target, &redirect, payload.as_bytes())?;
        let action = match redirect.mode {
            WriteMode::Overwrite => "written to",
            WriteMode::Append => "appended to",
        };
        sink.success(&format!("cat: content {action} {}", redirect.target));
        return Ok(());
    }

    if sources.is_empty() && redirect.mode == WriteMode::Overwrite {
        let lines = collect_interactive(&redirect.target, input)?;
        let mut payload = lines.join("\n");
        payload.push('\n');
        write_target(&target, &redirect, payload.as_bytes())?;
        sink.success(&format!("cat: created {}", redirect.target));
        return Ok(());
    }

    let collected: Vec<Vec<u8>> = sources
        .iter()
        .filter_map(|source| read_source(session, source, sink))
        .collect();
    write_target(&target, &redirect, &collected.join(&b'\n'))?;
    let action = match redirect.mode {
        WriteMode::Overwrite => "written to",
        WriteMode::Append => "appended to",
    };
    sink.success(&format!("cat: {action} {}", redirect.target));
    Ok(())
}

fn print_sources(session: &Session, sources: &[String], sink: &mut dyn OutputSink) {
    for source in sources {
        if let Some(contents) = read_source(session, source, sink) {
            sink.write_raw(&String::from_utf8_lossy(&contents));
        }
    }
}

/// Raw bytes of a source. Missing or unreadable sources are reported and
/// skipped.
fn read_source(session: &Session, source: &str, sink: &mut dyn OutputSink) -> Option<Vec<u8>> {
    let path = session.resolve(source);
    if !path.exists() {
        sink.error(&format!("cat: {source} does not exist"));
        return None;
    }
    match fs::read(&path) {
        Ok(contents) => Some(contents),
        Err(err) => {
            sink.error(&format!("Error reading {source}: {err}"));
            None
        }
    }
}

fn collect_interactive(target: &str, input: &mut dyn InputSource) -> ShellResult<Vec<String>> {
    input.notify(&format!(
        "Enter content for {target} (Ctrl+D or Ctrl+Z+Enter to save):"
    ));

    let mut lines = Vec::new();
    loop {
        match input.read_line("") {
            Ok(Some(line)) => lines.push(line),
            Ok(None) => break,
            Err(err) => {
                return Err(ShellError::operation(format!(
                    "cat: failed to read input for {target}: {err}"
                )));
            }
        }
    }
    Ok(clean_lines(lines))
}

/// Drop the EOT marker, trim each line, and discard lines left blank.
fn clean_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| line.replace(EOT_MARKER, "").trim().to_owned())
        .filter(|line| !line.is_empty())
        .collect()
}

fn write_target(target: &Path, redirect: &Redirect, payload: &[u8]) -> ShellResult<()> {
    let mut options = OpenOptions::new();
    options.create(true);
    match redirect.mode {
        WriteMode::Overwrite => options.write(true).truncate(true),
        WriteMode::Append => options.append(true),
    };

    options
        .open(target)
        .and_then(|mut file| file.write_all(payload))
        .map_err(|err| {
            ShellError::operation(format!("Error writing to {}: {err}", redirect.target))
        })
}
