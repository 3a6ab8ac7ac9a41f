use std::io::{self, BufRead};

/// Source of interactive lines, used by `cat > file` to collect content.
pub trait InputSource {
    /// Read one line without its terminator. `Ok(None)` means end of input
    /// or an interrupt; either ends the current capture.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Tell the user what is being collected. Sources without a visible
    /// terminal may ignore this.
    fn notify(&mut self, _message: &str) {}
}

/// Always at end of input.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl InputSource for NoInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(None)
    }
}

/// Reads lines from any buffered reader (pipes, files, test fixtures).
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineInput<io::Cursor<String>> {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(io::Cursor::new(text.into()))
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_input_strips_terminators() {
        let mut input = LineInput::from_text("first\r\nsecond\nlast");
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("first"));
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("second"));
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("last"));
        assert_eq!(input.read_line("").unwrap(), None);
    }

    #[test]
    fn no_input_is_always_exhausted() {
        assert_eq!(NoInput.read_line("> ").unwrap(), None);
    }
}
