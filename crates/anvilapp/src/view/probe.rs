//! Extension probing.
//!
//! The probe never opens files; it only asks a [`FileProbe`] whether a path exists.
//! [`FsProbe`] checks the real filesystem, [`MemProbe`] a fixed set of paths for tests.

use super::{push_relative, ViewIdentifier};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Existence check used by the view resolver.
pub trait FileProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probes the local filesystem. Only regular files count as views.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// In-memory probe for testing.
#[derive(Debug, Clone, Default)]
pub struct MemProbe {
    files: HashSet<PathBuf>,
}

impl MemProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }
}

impl FileProbe for MemProbe {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }
}

impl<P: FileProbe + ?Sized> FileProbe for &P {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// Paths probed for `identifier` inside `dir`, one per extension, in order.
pub fn probe_paths(dir: &Path, identifier: &ViewIdentifier, extensions: &[String]) -> Vec<PathBuf> {
    let segments: Vec<&str> = identifier.segments().collect();
    let Some((file_stem, parents)) = segments.split_last() else {
        return Vec::new();
    };

    let mut base = dir.to_path_buf();
    for segment in parents {
        push_relative(&mut base, segment);
    }

    extensions
        .iter()
        .map(|ext| {
            let mut path = base.clone();
            push_relative(&mut path, &format!("{}.{}", file_stem, ext));
            path
        })
        .collect()
}

/// First existing `{dir}/{name}.{ext}`, extensions tried in order.
pub fn probe<F: FileProbe + ?Sized>(
    files: &F,
    dir: &Path,
    identifier: &ViewIdentifier,
    extensions: &[String],
) -> Option<PathBuf> {
    probe_paths(dir, identifier, extensions)
        .into_iter()
        .find(|path| {
            let found = files.exists(path);
            debug!(path = %path.display(), found, "probed view path");
            found
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts() -> Vec<String> {
        vec!["php".to_string(), "blade.php".to_string()]
    }

    #[test]
    fn probe_paths_one_per_extension() {
        let paths = probe_paths(Path::new("/views"), &"home".into(), &exts());
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/views/home.php"),
                PathBuf::from("/views/home.blade.php"),
            ]
        );
    }

    #[test]
    fn dotted_names_become_directories() {
        let paths = probe_paths(Path::new("/views"), &"admin.users.list".into(), &exts());
        assert_eq!(paths[0], PathBuf::from("/views/admin/users/list.php"));
    }

    #[test]
    fn absolute_names_stay_inside_dir() {
        let paths = probe_paths(Path::new("/views"), &"/secret/x".into(), &exts());
        assert_eq!(paths[0], PathBuf::from("/views/secret/x.php"));

        let paths = probe_paths(Path::new("/views"), &"../up.x".into(), &exts());
        assert_eq!(paths[0], PathBuf::from("/views/up/x.php"));
    }

    #[test]
    fn first_extension_wins() {
        let files = MemProbe::new()
            .with_file("/views/home.php")
            .with_file("/views/home.blade.php");
        let found = probe(&files, Path::new("/views"), &"home".into(), &exts());
        assert_eq!(found, Some(PathBuf::from("/views/home.php")));
    }

    #[test]
    fn later_extension_found_when_first_missing() {
        let files = MemProbe::new().with_file("/views/home.blade.php");
        let found = probe(&files, Path::new("/views"), &"home".into(), &exts());
        assert_eq!(found, Some(PathBuf::from("/views/home.blade.php")));
    }

    #[test]
    fn missing_file_returns_none() {
        let files = MemProbe::new();
        assert!(probe(&files, Path::new("/views"), &"home".into(), &exts()).is_none());
    }

    #[test]
    fn fs_probe_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("home.php")).unwrap();
        std::fs::write(dir.path().join("page.php"), "<p>page</p>").unwrap();

        assert!(!FsProbe.exists(&dir.path().join("home.php")));
        assert!(FsProbe.exists(&dir.path().join("page.php")));
    }
}
