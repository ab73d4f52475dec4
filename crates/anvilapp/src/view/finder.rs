use super::paths::ViewFinderState;
use super::probe::{probe, probe_paths, FileProbe};
use super::ViewIdentifier;
use crate::error::{AnvilError, Result};
use std::path::PathBuf;
use tracing::debug;

/// Supplies the active theme at resolution time.
///
/// The theme is asked for on every call, so it may vary per request.
pub trait ThemeProvider {
    fn current_theme(&self) -> String;
}

/// A theme that never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTheme(pub String);

impl FixedTheme {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl ThemeProvider for FixedTheme {
    fn current_theme(&self) -> String {
        self.0.clone()
    }
}

impl<F> ThemeProvider for F
where
    F: Fn() -> String,
{
    fn current_theme(&self) -> String {
        self()
    }
}

/// Resolves view identifiers to existing template files.
pub struct ViewResolver<F: FileProbe, T: ThemeProvider> {
    state: ViewFinderState,
    files: F,
    theme: T,
}

impl<F: FileProbe, T: ThemeProvider> ViewResolver<F, T> {
    pub fn new(state: ViewFinderState, files: F, theme: T) -> Self {
        Self {
            state,
            files,
            theme,
        }
    }

    pub fn state(&self) -> &ViewFinderState {
        &self.state
    }

    /// Append an explicit location behind the ones already registered.
    pub fn add_location(&mut self, location: impl Into<PathBuf>) {
        self.state.push_location(location.into());
    }

    /// Directory of the active theme.
    pub fn current_theme_path(&self) -> PathBuf {
        self.state.current_theme_path(&self.theme.current_theme())
    }

    /// Candidate directories for `identifier`, in search order.
    pub fn candidates(&self, identifier: &str) -> Vec<PathBuf> {
        let identifier = ViewIdentifier::parse(identifier);
        self.state
            .candidates(&self.theme.current_theme(), &identifier)
    }

    /// Find the template file for `identifier`.
    ///
    /// Fails with [`AnvilError::ViewNotFound`] carrying every probed path when
    /// no (directory, extension) pair exists.
    pub fn resolve(&self, identifier: &str) -> Result<PathBuf> {
        let parsed = ViewIdentifier::parse(identifier);
        let theme = self.theme.current_theme();
        let extensions = self.state.extensions();

        let candidates = self.state.candidates(&theme, &parsed);

        for dir in &candidates {
            if let Some(path) = probe(&self.files, dir, &parsed, extensions) {
                debug!(view = identifier, path = %path.display(), "resolved view");
                return Ok(path);
            }
        }

        let attempted = candidates
            .iter()
            .flat_map(|dir| probe_paths(dir, &parsed, extensions))
            .collect();

        Err(AnvilError::ViewNotFound {
            identifier: identifier.to_string(),
            attempted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::probe::MemProbe;
    use std::cell::Cell;

    fn state() -> ViewFinderState {
        ViewFinderState::builder()
            .theme_path("/themes")
            .module_path("/modules")
            .add_location("/custom")
            .build()
    }

    #[test]
    fn module_view_falls_through_to_module_directory() {
        let files = MemProbe::new().with_file("/modules/blog/views/post.php");
        let resolver = ViewResolver::new(state(), files, FixedTheme::new("default"));

        let path = resolver.resolve("blog::post").unwrap();
        assert_eq!(path, PathBuf::from("/modules/blog/views/post.php"));
    }

    #[test]
    fn theme_partial_overrides_module_view() {
        let files = MemProbe::new()
            .with_file("/themes/default/views/partials/blog/post.blade.php")
            .with_file("/modules/blog/views/post.php");
        let resolver = ViewResolver::new(state(), files, FixedTheme::new("default"));

        let path = resolver.resolve("blog::post").unwrap();
        assert_eq!(
            path,
            PathBuf::from("/themes/default/views/partials/blog/post.blade.php")
        );
    }

    #[test]
    fn explicit_location_overrides_everything() {
        let files = MemProbe::new()
            .with_file("/custom/post.blade.php")
            .with_file("/themes/default/views/partials/blog/post.php")
            .with_file("/modules/blog/views/post.php");
        let resolver = ViewResolver::new(state(), files, FixedTheme::new("default"));

        let path = resolver.resolve("blog::post").unwrap();
        assert_eq!(path, PathBuf::from("/custom/post.blade.php"));
    }

    #[test]
    fn plain_view_never_searches_module_directories() {
        let files = MemProbe::new().with_file("/modules/home/views/home.php");
        let resolver = ViewResolver::new(state(), files, FixedTheme::new("default"));

        assert!(resolver.resolve("home").is_err());
    }

    #[test]
    fn plain_view_resolves_in_theme() {
        let files = MemProbe::new().with_file("/themes/default/views/layouts/default.php");
        let resolver = ViewResolver::new(state(), files, FixedTheme::new("default"));

        let path = resolver.resolve("layouts.default").unwrap();
        assert_eq!(path, PathBuf::from("/themes/default/views/layouts/default.php"));
    }

    #[test]
    fn not_found_lists_attempted_paths_in_order() {
        let resolver = ViewResolver::new(state(), MemProbe::new(), FixedTheme::new("default"));

        let err = resolver.resolve("blog::post").unwrap_err();
        match err {
            AnvilError::ViewNotFound {
                identifier,
                attempted,
            } => {
                assert_eq!(identifier, "blog::post");
                assert_eq!(
                    attempted,
                    vec![
                        PathBuf::from("/custom/post.php"),
                        PathBuf::from("/custom/post.blade.php"),
                        PathBuf::from("/themes/default/views/partials/blog/post.php"),
                        PathBuf::from("/themes/default/views/partials/blog/post.blade.php"),
                        PathBuf::from("/modules/blog/views/post.php"),
                        PathBuf::from("/modules/blog/views/post.blade.php"),
                    ]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn configured_extension_order_decides_precedence() {
        let state = ViewFinderState::builder()
            .theme_path("/themes")
            .extensions(["blade.php", "php"])
            .build();
        let files = MemProbe::new()
            .with_file("/themes/default/views/home.php")
            .with_file("/themes/default/views/home.blade.php");
        let resolver = ViewResolver::new(state, files, FixedTheme::new("default"));

        assert_eq!(
            resolver.resolve("home").unwrap(),
            PathBuf::from("/themes/default/views/home.blade.php")
        );
    }

    #[test]
    fn absolute_identifiers_cannot_leave_configured_roots() {
        let files = MemProbe::new().with_file("/secret/x.php");
        let resolver = ViewResolver::new(state(), files, FixedTheme::new("default"));

        assert!(resolver.resolve("/secret/x").is_err());
        assert!(resolver.resolve("/secret::x").is_err());
        assert_eq!(
            resolver.candidates("/secret::x"),
            vec![
                PathBuf::from("/custom"),
                PathBuf::from("/themes/default/views/partials/secret"),
                PathBuf::from("/modules/secret/views"),
            ]
        );
    }

    #[test]
    fn absolute_name_is_probed_below_candidates() {
        let files = MemProbe::new().with_file("/themes/default/views/secret/x.php");
        let resolver = ViewResolver::new(state(), files, FixedTheme::new("default"));

        assert_eq!(
            resolver.resolve("/secret/x").unwrap(),
            PathBuf::from("/themes/default/views/secret/x.php")
        );
    }

    #[test]
    fn theme_is_read_on_every_resolution() {
        let files = MemProbe::new()
            .with_file("/themes/light/views/home.php")
            .with_file("/themes/dark/views/home.php");
        let dark = Cell::new(false);
        let theme = || {
            if dark.get() {
                "dark".to_string()
            } else {
                "light".to_string()
            }
        };
        let resolver = ViewResolver::new(state(), files, theme);

        assert_eq!(
            resolver.resolve("home").unwrap(),
            PathBuf::from("/themes/light/views/home.php")
        );
        dark.set(true);
        assert_eq!(
            resolver.resolve("home").unwrap(),
            PathBuf::from("/themes/dark/views/home.php")
        );
    }

    #[test]
    fn add_location_appends_after_existing_locations() {
        let files = MemProbe::new()
            .with_file("/late/home.php")
            .with_file("/themes/default/views/home.php");
        let mut resolver = ViewResolver::new(state(), files, FixedTheme::new("default"));
        resolver.add_location("/late");

        assert_eq!(
            resolver.candidates("home"),
            vec![
                PathBuf::from("/custom"),
                PathBuf::from("/late"),
                PathBuf::from("/themes/default/views"),
            ]
        );
        assert_eq!(resolver.resolve("home").unwrap(), PathBuf::from("/late/home.php"));
    }

    #[test]
    fn current_theme_path_uses_provider() {
        let resolver = ViewResolver::new(state(), MemProbe::new(), FixedTheme::new("dark"));
        assert_eq!(resolver.current_theme_path(), PathBuf::from("/themes/dark"));
    }
}
