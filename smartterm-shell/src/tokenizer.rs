use crate::error::ShellResult;

/// A tokenized input line: the command name followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    pub name: String,
    pub args: Vec<String>,
}

/// Split a raw line with POSIX shell word rules (quotes, backslash escapes,
/// whitespace separation). Returns `Ok(None)` for a blank line.
///
/// Redirection operators are only recognised as standalone words, so
/// `cat a >out` treats `>out` as a file name.
pub fn tokenize(line: &str) -> ShellResult<Option<Tokens>> {
    let mut words = shell_words::split(line.trim())?.into_iter();
    Ok(words.next().map(|name| Tokens {
        name,
        args: words.collect(),
    }))
}
