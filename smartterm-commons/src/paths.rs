use std::path::{Component, Path, PathBuf};

/// Normalize a path by resolving `.` and `..` components lexically.
///
/// Symlinks are not followed and the path does not need to exist. A `..`
/// that would climb above the root is dropped.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(component.as_os_str()),
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}

/// Join `user_path` onto `base` (unless it is already absolute) and normalize
/// the result. With an absolute `base` the result is always absolute.
pub fn resolve_path(base: &Path, user_path: impl AsRef<Path>) -> PathBuf {
    let user_path = user_path.as_ref();
    let joined = if user_path.is_absolute() {
        user_path.to_path_buf()
    } else {
        base.join(user_path)
    };
    normalize_path(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_collapses_dots() {
        assert_eq!(
            normalize_path(Path::new("/work/./src/../docs")),
            PathBuf::from("/work/docs")
        );
    }

    #[test]
    fn normalize_does_not_escape_root() {
        assert_eq!(normalize_path(Path::new("/../../etc")), PathBuf::from("/etc"));
    }

    #[test]
    fn resolve_joins_relative_paths() {
        let base = Path::new("/home/dev/project");
        assert_eq!(
            resolve_path(base, "notes/../todo.txt"),
            PathBuf::from("/home/dev/project/todo.txt")
        );
        assert_eq!(resolve_path(base, ".."), PathBuf::from("/home/dev"));
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let base = Path::new("/home/dev");
        assert_eq!(resolve_path(base, "/tmp/./x"), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn resolve_empty_path_is_base() {
        let base = Path::new("/srv");
        assert_eq!(resolve_path(base, ""), PathBuf::from("/srv"));
    }
}
