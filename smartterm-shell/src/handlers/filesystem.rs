use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use tracing::debug;

use crate::error::{ShellError, ShellResult};
use crate::output::OutputSink;
use crate::session::Session;

/// `ls [path]`: entry names of a directory, sorted, one per line.
pub fn list(session: &Session, path: Option<&str>, sink: &mut dyn OutputSink) -> ShellResult<()> {
    let dir = match path {
        Some(path) => session.resolve(path),
        None => session.cwd().to_path_buf(),
    };

    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(ShellError::operation(format!(
                "No such directory: {}",
                dir.display()
            )));
        }
        Err(err) if dir.is_file() => {
            debug!(%err, "ls target is a file");
            return Err(ShellError::operation(format!(
                "ls: not a directory: {}",
                dir.display()
            )));
        }
        Err(err) => return Err(ShellError::io("ls: cannot open directory", dir, err)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| ShellError::io("ls: cannot read entry in", &dir, err))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    sink.heading(&display_name(&dir));
    for name in &names {
        sink.line(name);
    }
    Ok(())
}

/// `pwd`
pub fn print_working_directory(session: &Session, sink: &mut dyn OutputSink) {
    sink.notice(&session.cwd().display().to_string());
}

/// `cd <path>`
pub fn change_directory(session: &mut Session, path: &str) -> ShellResult<()> {
    session.change_dir(path)?;
    Ok(())
}

/// `mkdir <path>`: creates missing parents, but refuses an existing target.
pub fn make_directory(session: &Session, path: &str, sink: &mut dyn OutputSink) -> ShellResult<()> {
    let target = session.resolve(path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| ShellError::io("mkdir: cannot create directory", parent, err))?;
    }
    match fs::create_dir(&target) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            return Err(ShellError::operation(format!(
                "mkdir: cannot create directory '{path}': File exists"
            )));
        }
        Err(err) => return Err(ShellError::io("mkdir: cannot create directory", &target, err)),
    }
    sink.success(&format!("Directory created: {}", target.display()));
    Ok(())
}

/// `mv <source> <destination>`: a rename, or a move into `destination` when it
/// is an existing directory.
pub fn move_path(
    session: &Session,
    source: &str,
    destination: &str,
    sink: &mut dyn OutputSink,
) -> ShellResult<()> {
    let src = session.resolve(source);
    let mut dest = session.resolve(destination);

    if !src.exists() {
        return Err(ShellError::operation(format!(
            "mv: source does not exist: {source}"
        )));
    }
    if session.cwd().starts_with(&src) {
        return Err(ShellError::operation(format!(
            "mv: refusing to move '{source}': current directory is inside it"
        )));
    }

    if dest.is_dir()
        && let Some(file_name) = src.file_name()
    {
        dest.push(file_name);
    }

    if src == dest {
        return Err(ShellError::operation(format!(
            "mv: '{source}' and '{destination}' are the same file"
        )));
    }

    let moved = match fs::rename(&src, &dest) {
        Err(err) if err.kind() == ErrorKind::CrossesDevices => {
            debug!(%err, "rename crosses devices, copying instead");
            move_by_copy(&src, &dest)
        }
        other => other,
    };
    moved.map_err(|err| {
        ShellError::operation(format!(
            "mv: error moving '{source}' to '{destination}': {err}"
        ))
    })?;
    sink.success(&format!(
        "Moved/Renamed: {} \u{2192} {}",
        src.display(),
        dest.display()
    ));
    Ok(())
}

/// `rm <path>`: files are unlinked, directories removed recursively.
pub fn remove(session: &Session, path: &str, sink: &mut dyn OutputSink) -> ShellResult<()> {
    let target = session.resolve(path);
    if session.cwd().starts_with(&target) {
        return Err(ShellError::operation(format!(
            "rm: refusing to remove '{path}': current directory is inside it"
        )));
    }
    if target.is_file() {
        fs::remove_file(&target).map_err(|err| ShellError::io("rm: cannot remove", &target, err))?;
        sink.success(&format!("Removed file: {}", target.display()));
    } else if target.is_dir() {
        fs::remove_dir_all(&target)
            .map_err(|err| ShellError::io("rm: cannot remove", &target, err))?;
        sink.success(&format!("Removed directory: {}", target.display()));
    } else {
        return Err(ShellError::operation(format!(
            "rm: cannot remove '{path}': No such file or directory"
        )));
    }
    Ok(())
}

/// Copy `src` to `dest` and then delete `src`, for moves `rename` cannot do
/// across filesystems.
fn move_by_copy(src: &Path, dest: &Path) -> io::Result<()> {
    if src.is_dir() {
        copy_tree(src, dest)?;
        fs::remove_dir_all(src)
    } else {
        fs::copy(src, dest)?;
        fs::remove_file(src)
    }
}

fn copy_tree(src: &Path, dest: &Path) -> io::Result<()> {
    fs::create_dir(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let to = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &to)?;
        } else {
            fs::copy(entry.path(), &to)?;
        }
    }
    Ok(())
}

fn display_name(dir: &Path) -> String {
    dir.file_name().map_or_else(
        || dir.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
