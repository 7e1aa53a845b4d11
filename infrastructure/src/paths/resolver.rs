//! Local filesystem path resolver

use super::normalize::{expand_home, lexical_clean};
use launcher_application::ports::path_resolver::PathResolverPort;
use launcher_domain::{PathSources, ResolvedPathSet, ResolvedPathSetBuilder};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Resolves explicit paths, a directory root and a list file against the
/// local filesystem.
///
/// Every candidate is normalized first: home-expanded, made absolute
/// against the base directory (the process working directory unless
/// overridden), then lexically cleaned.
#[derive(Debug, Clone, Default)]
pub struct LocalPathResolver {
    base_dir: Option<PathBuf>,
}

impl LocalPathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative inputs against `dir` instead of the working
    /// directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Normalize a raw input string to an absolute path.
    pub fn normalize(&self, raw: &str) -> PathBuf {
        let expanded = expand_home(raw);
        let absolute = if expanded.is_absolute() {
            expanded
        } else {
            match self.base_dir.clone().or_else(|| std::env::current_dir().ok()) {
                Some(base) => base.join(expanded),
                None => expanded,
            }
        };
        lexical_clean(&absolute)
    }

    fn add_candidate(&self, builder: &mut ResolvedPathSetBuilder, raw: &str) {
        let path = self.normalize(raw);
        if path.is_file() {
            builder.push_file(&path);
        } else {
            debug!("Not a regular file: {}", path.display());
            builder.push_missing(&path);
        }
    }

    fn add_directory(&self, builder: &mut ResolvedPathSetBuilder, raw: &str) {
        let root = self.normalize(raw);
        if !root.is_dir() {
            builder.push_missing(&root);
            return;
        }

        let mut entries: Vec<PathBuf> = match fs::read_dir(&root) {
            Ok(rd) => rd.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
            Err(e) => {
                warn!("Could not read directory {}: {}", root.display(), e);
                builder.push_missing(&root);
                return;
            }
        };
        entries.sort();

        // One level only; subdirectories are never descended into.
        for entry in entries.iter().filter(|p| p.is_file()) {
            builder.push_file(entry);
        }
    }

    fn add_list_file(&self, builder: &mut ResolvedPathSetBuilder, raw: &str) {
        let list = self.normalize(raw);
        if !list.is_file() {
            builder.push_missing(&list);
            return;
        }

        let bytes = match fs::read(&list) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Could not read list file {}: {}", list.display(), e);
                builder.push_missing(&list);
                return;
            }
        };

        for line in decode_dropping_invalid(&bytes).lines() {
            let cleaned = line.trim();
            if cleaned.is_empty() || cleaned.starts_with('#') {
                continue;
            }
            self.add_candidate(builder, cleaned);
        }
    }
}

impl PathResolverPort for LocalPathResolver {
    fn resolve(&self, sources: &PathSources) -> ResolvedPathSet {
        let mut builder = ResolvedPathSet::builder();

        for raw in &sources.explicit {
            self.add_candidate(&mut builder, raw);
        }
        if let Some(dir) = &sources.directory {
            self.add_directory(&mut builder, dir);
        }
        if let Some(list) = &sources.list_file {
            self.add_list_file(&mut builder, list);
        }

        let set = builder.build();
        debug!(
            "Resolved {} file(s), {} missing",
            set.paths.len(),
            set.missing.len()
        );
        set
    }
}

/// Decode UTF-8, silently dropping invalid byte sequences.
fn decode_dropping_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::path::Path;
    use tempfile::TempDir;

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                dir: tempfile::tempdir().unwrap(),
            }
        }

        fn root(&self) -> &Path {
            self.dir.path()
        }

        fn file(&self, rel: &str) -> PathBuf {
            let path = self.root().join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            File::create(&path).unwrap().write_all(b"data").unwrap();
            path
        }

        fn list(&self, rel: &str, contents: &[u8]) -> PathBuf {
            let path = self.root().join(rel);
            fs::write(&path, contents).unwrap();
            path
        }

        fn resolver(&self) -> LocalPathResolver {
            LocalPathResolver::new().with_base_dir(self.root())
        }

        fn s(path: &Path) -> String {
            path.to_string_lossy().to_string()
        }
    }

    // ==================== Explicit paths ====================

    #[test]
    fn test_explicit_files_resolve_in_order() {
        let fx = Fixture::new();
        let a = fx.file("a.txt");
        let b = fx.file("b.bin");

        let set = fx
            .resolver()
            .resolve(&PathSources::new().with_paths(["b.bin", "a.txt"]));

        assert_eq!(set.paths, vec![b, a]);
        assert!(set.missing.is_empty());
    }

    #[test]
    fn test_missing_and_directory_inputs_go_to_missing() {
        let fx = Fixture::new();
        fx.file("sub/inner.txt");

        let set = fx
            .resolver()
            .resolve(&PathSources::new().with_paths(["nope.txt", "sub"]));

        assert!(set.paths.is_empty());
        assert_eq!(
            set.missing,
            vec![fx.root().join("nope.txt"), fx.root().join("sub")]
        );
    }

    #[test]
    fn test_relative_inputs_are_normalized_before_dedup() {
        let fx = Fixture::new();
        let a = fx.file("a.txt");
        let absolute = Fixture::s(&a);

        let set = fx.resolver().resolve(&PathSources::new().with_paths([
            "a.txt",
            "./a.txt",
            "x/../a.txt",
            absolute.as_str(),
        ]));

        assert_eq!(set.paths, vec![a]);
    }

    // ==================== Directory scan ====================

    #[test]
    fn test_directory_scan_is_one_level_deep() {
        let fx = Fixture::new();
        let only = fx.file("case/only.bin");
        fx.file("case/nested/deep.bin");

        let set = fx
            .resolver()
            .resolve(&PathSources::new().with_directory("case"));

        assert_eq!(set.paths, vec![only]);
        assert!(set.missing.is_empty());
    }

    #[test]
    fn test_directory_entries_sorted() {
        let fx = Fixture::new();
        let c = fx.file("d/c");
        let a = fx.file("d/a");
        let b = fx.file("d/b");

        let set = fx.resolver().resolve(&PathSources::new().with_directory("d"));

        assert_eq!(set.paths, vec![a, b, c]);
    }

    #[test]
    fn test_directory_root_missing_or_file() {
        let fx = Fixture::new();
        let file = fx.file("plain.txt");

        let set = fx
            .resolver()
            .resolve(&PathSources::new().with_directory("absent"));
        assert_eq!(set.missing, vec![fx.root().join("absent")]);

        let set = fx
            .resolver()
            .resolve(&PathSources::new().with_directory("plain.txt"));
        assert!(set.paths.is_empty());
        assert_eq!(set.missing, vec![file]);
    }

    // ==================== List file ====================

    #[test]
    fn test_list_file_skips_blank_and_comment_lines() {
        let fx = Fixture::new();
        let a = fx.file("a.txt");
        let list = fx.list(
            "targets.lst",
            format!(
                "# evidence list\n\n   \n  # indented comment\n{}\n  a.txt  \nghost.bin\n",
                Fixture::s(&a)
            )
            .as_bytes(),
        );

        let set = fx
            .resolver()
            .resolve(&PathSources::new().with_list_file(Fixture::s(&list)));

        assert_eq!(set.paths, vec![a]);
        assert_eq!(set.missing, vec![fx.root().join("ghost.bin")]);
    }

    #[test]
    fn test_list_file_of_only_comments_resolves_nothing() {
        let fx = Fixture::new();
        fx.list("empty.lst", b"# one\n\n#two\n   \n");

        let set = fx
            .resolver()
            .resolve(&PathSources::new().with_list_file("empty.lst"));

        assert!(set.paths.is_empty());
        assert!(set.missing.is_empty());
    }

    #[test]
    fn test_missing_list_file_is_reported() {
        let fx = Fixture::new();

        let set = fx
            .resolver()
            .resolve(&PathSources::new().with_list_file("absent.lst"));

        assert_eq!(set.missing, vec![fx.root().join("absent.lst")]);
    }

    #[test]
    fn test_list_file_invalid_utf8_is_dropped() {
        let fx = Fixture::new();
        let a = fx.file("a.txt");
        fx.list("bad.lst", b"\xffa.t\xfe\xfdxt\n");

        let set = fx
            .resolver()
            .resolve(&PathSources::new().with_list_file("bad.lst"));

        assert_eq!(set.paths, vec![a]);
    }

    // ==================== Cross-source behavior ====================

    #[test]
    fn test_dedup_across_sources_keeps_priority_order() {
        let fx = Fixture::new();
        let a = fx.file("case/a");
        let b = fx.file("case/b");
        let c = fx.file("c");
        fx.list("t.lst", b"c\ncase/a\n");

        let set = fx.resolver().resolve(
            &PathSources::new()
                .with_paths(["case/b"])
                .with_directory("case")
                .with_list_file("t.lst"),
        );

        assert_eq!(set.paths, vec![b, a, c]);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let fx = Fixture::new();
        fx.file("d/1");
        fx.file("d/2");
        fx.file("x");
        fx.list("l", b"x\nmissing\n");
        let sources = PathSources::new()
            .with_paths(["x", "gone"])
            .with_directory("d")
            .with_list_file("l");

        let resolver = fx.resolver();
        assert_eq!(resolver.resolve(&sources), resolver.resolve(&sources));
    }

    #[test]
    fn test_normalize_expands_home() {
        let home = dirs::home_dir().unwrap();
        let resolver = LocalPathResolver::new();
        assert_eq!(resolver.normalize("~/cases/a.bin"), home.join("cases/a.bin"));
    }

    #[test]
    fn test_normalize_relative_against_base_dir() {
        let resolver = LocalPathResolver::new().with_base_dir("/base");
        assert_eq!(resolver.normalize("x/./y"), PathBuf::from("/base/x/y"));
        assert_eq!(resolver.normalize("../up"), PathBuf::from("/up"));
    }
}
