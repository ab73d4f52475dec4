//! Candidate directory generation.
//!
//! [`ViewFinderState`] is assembled once during bootstrap through a
//! [`ViewFinderBuilder`] and is read-only afterwards.

use super::{push_relative, ViewIdentifier};
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSIONS: [&str; 2] = ["php", "blade.php"];

const VIEWS_DIR: &str = "views";
const PARTIALS_DIR: &str = "partials";

/// Where views live: theme root, module root, explicit locations and extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFinderState {
    theme_root: PathBuf,
    module_root: PathBuf,
    explicit_paths: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl ViewFinderState {
    pub fn builder() -> ViewFinderBuilder {
        ViewFinderBuilder::default()
    }

    pub fn theme_root(&self) -> &Path {
        &self.theme_root
    }

    pub fn module_root(&self) -> &Path {
        &self.module_root
    }

    pub fn explicit_paths(&self) -> &[PathBuf] {
        &self.explicit_paths
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Directory of the given theme (`{theme_root}/{theme}`).
    pub fn current_theme_path(&self, theme: &str) -> PathBuf {
        self.theme_root.join(theme)
    }

    pub(crate) fn push_location(&mut self, location: PathBuf) {
        self.explicit_paths.push(location);
    }

    /// Ordered candidate directories for `identifier` under the given theme.
    ///
    /// Explicit locations always come first, regardless of module.
    pub fn candidates(&self, theme: &str, identifier: &ViewIdentifier) -> Vec<PathBuf> {
        let mut paths = self.explicit_paths.clone();
        let theme_views = self.current_theme_path(theme).join(VIEWS_DIR);

        match &identifier.module {
            Some(module) => {
                let mut partials = theme_views.join(PARTIALS_DIR);
                push_relative(&mut partials, module);
                paths.push(partials);

                let mut module_views = self.module_root.clone();
                push_relative(&mut module_views, module);
                module_views.push(VIEWS_DIR);
                paths.push(module_views);
            }
            None => paths.push(theme_views),
        }

        paths
    }
}

/// Bootstrap-time configuration of a [`ViewFinderState`].
#[derive(Debug, Clone)]
pub struct ViewFinderBuilder {
    theme_root: PathBuf,
    module_root: PathBuf,
    explicit_paths: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl Default for ViewFinderBuilder {
    fn default() -> Self {
        Self {
            theme_root: PathBuf::from("themes"),
            module_root: PathBuf::from("modules"),
            explicit_paths: Vec::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ViewFinderBuilder {
    pub fn theme_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.theme_root = path.into();
        self
    }

    pub fn module_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.module_root = path.into();
        self
    }

    /// Register an explicit location. Earlier registrations take priority.
    pub fn add_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_paths.push(path.into());
        self
    }

    /// Replace the recognized extensions. A leading dot is dropped (`.php` → `php`).
    pub fn extensions<I, E>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    pub fn build(self) -> ViewFinderState {
        ViewFinderState {
            theme_root: self.theme_root,
            module_root: self.module_root,
            explicit_paths: self.explicit_paths,
            extensions: self.extensions,
        }
    }
}
