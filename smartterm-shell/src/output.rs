//! Output sinks handlers write through instead of touching stdout directly.
//!
//! A [`TerminalSink`] renders to any writer (styled or not); a
//! [`CaptureSink`] collects plain text for programmatic consumers such as the
//! agent bridge.

use std::io::Write;

use smartterm_commons::{ColorPalette, Tone};
use tracing::warn;

pub trait OutputSink {
    /// Emit one line. The sink appends the line terminator.
    fn write_line(&mut self, tone: Tone, text: &str);

    /// Emit text verbatim, without styling or an added newline.
    fn write_raw(&mut self, text: &str);

    fn line(&mut self, text: &str) {
        self.write_line(Tone::Plain, text);
    }

    fn heading(&mut self, text: &str) {
        self.write_line(Tone::Heading, text);
    }

    fn success(&mut self, text: &str) {
        self.write_line(Tone::Success, text);
    }

    fn error(&mut self, text: &str) {
        self.write_line(Tone::Error, text);
    }

    fn notice(&mut self, text: &str) {
        self.write_line(Tone::Notice, text);
    }
}

/// Writes to a terminal-like writer, optionally styling each tone.
pub struct TerminalSink<W: Write> {
    writer: W,
    palette: Option<ColorPalette>,
}

impl TerminalSink<std::io::Stdout> {
    pub fn stdout(styled: bool) -> Self {
        Self::new(std::io::stdout(), styled)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(writer: W, styled: bool) -> Self {
        Self {
            writer,
            palette: styled.then(ColorPalette::default),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_text(&mut self, text: &str) {
        let result = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush());
        if let Err(error) = result {
            warn!(%error, "failed to write shell output");
        }
    }
}

impl<W: Write> OutputSink for TerminalSink<W> {
    fn write_line(&mut self, tone: Tone, text: &str) {
        let mut rendered = match &self.palette {
            Some(palette) => palette.paint(tone, text),
            None => text.to_owned(),
        };
        rendered.push('\n');
        self.write_text(&rendered);
    }

    fn write_raw(&mut self, text: &str) {
        self.write_text(text);
    }
}

/// Buffers plain text. Dropping the sink discards the capture, so a capture
/// never outlives the call that created it.
#[derive(Debug, Default)]
pub struct CaptureSink {
    buffer: String,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// The captured text with trailing whitespace removed.
    pub fn finish(self) -> String {
        let mut buffer = self.buffer;
        let trimmed = buffer.trim_end().len();
        buffer.truncate(trimmed);
        buffer
    }
}

impl OutputSink for CaptureSink {
    fn write_line(&mut self, _tone: Tone, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn write_raw(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}
