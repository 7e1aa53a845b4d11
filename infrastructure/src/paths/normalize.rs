//! Lexical path normalization helpers

use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// `~user` forms are left untouched, as is everything when no home
/// directory can be determined.
pub fn expand_home(raw: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (raw, home) {
        ("~", Some(home)) => home,
        (s, Some(home)) if s.starts_with("~/") => home.join(&s[2..]),
        (s, _) => PathBuf::from(s),
    }
}

/// Remove `.` components and fold `..` into its parent without touching
/// the filesystem (symlinks are not resolved).
pub fn lexical_clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_clean() {
        assert_eq!(
            lexical_clean(Path::new("/cases/./a/../b.bin")),
            PathBuf::from("/cases/b.bin")
        );
        assert_eq!(lexical_clean(Path::new("/../etc")), PathBuf::from("/etc"));
        assert_eq!(lexical_clean(Path::new("/a/b/")), PathBuf::from("/a/b"));
    }

    #[test]
    fn test_expand_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_home("~"), home);
        assert_eq!(expand_home("~/evidence/x.img"), home.join("evidence/x.img"));
        assert_eq!(expand_home("/abs/~/x"), PathBuf::from("/abs/~/x"));
        assert_eq!(expand_home("~other/x"), PathBuf::from("~other/x"));
    }
}
