use super::{LinkStore, MenuRecord};
use crate::error::{AnvilError, Result};
use crate::menu::{LinkRecord, Power};
use std::fs;
use std::path::{Path, PathBuf};

/// Link store backed by a JSON file.
///
/// The file is read on every fetch, so edits show up on the next request.
/// A missing file behaves as a store with no menus.
pub struct JsonLinkStore {
    path: PathBuf,
}

impl JsonLinkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_menus(&self) -> Result<Vec<MenuRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(AnvilError::Io)?;
        let menus: Vec<MenuRecord> =
            serde_json::from_str(&content).map_err(AnvilError::Serialization)?;
        Ok(menus)
    }

    pub fn save_menus(&self, menus: &[MenuRecord]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(AnvilError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(menus).map_err(AnvilError::Serialization)?;

        // Atomic write
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| AnvilError::Store(format!("Invalid store path: {}", self.path.display())))?;
        let tmp_file = self.path.with_file_name(format!(
            ".{}-{}.tmp",
            file_name.to_string_lossy(),
            std::process::id()
        ));
        fs::write(&tmp_file, content).map_err(AnvilError::Io)?;
        fs::rename(&tmp_file, &self.path).map_err(AnvilError::Io)?;
        Ok(())
    }
}

impl LinkStore for JsonLinkStore {
    fn fetch_links(&self, name: &str, power: Option<Power>) -> Result<Option<Vec<LinkRecord>>> {
        let menu = self.load_menus()?.into_iter().find(|m| m.slug == name);

        Ok(menu.map(|m| {
            m.links
                .into_iter()
                .filter(|link| link.permits(power))
                .collect()
        }))
    }

    fn menu_names(&self) -> Result<Vec<String>> {
        Ok(self.load_menus()?.into_iter().map(|m| m.slug).collect())
    }
}
