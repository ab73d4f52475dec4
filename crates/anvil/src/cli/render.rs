//! # Rendering Module
//!
//! Styled terminal output through minijinja templates.
//!
//! Layout (tree indentation, markers, path formatting) stays in Rust; templates
//! only decide what goes on which line and which semantic style applies.

use super::styles;
use super::templates::{
    CANDIDATES_TEMPLATE, CONFIG_TEMPLATE, LIST_TEMPLATE, MENU_TEMPLATE, NOT_FOUND_TEMPLATE,
    RESOLVE_TEMPLATE,
};
use anvilapp::config::AnvilConfig;
use anvilapp::menu::{MenuBuild, MenuNode, Power};
use minijinja::{Environment, Value};
use serde::Serialize;
use std::path::{Path, PathBuf};

const PARENT_MARKER: &str = "▸";
const LEAF_MARKER: &str = "•";
const INDENT: &str = "  ";

#[derive(Serialize)]
struct ResolveData {
    path: String,
}

#[derive(Serialize)]
struct NotFoundData {
    identifier: String,
    attempted: Vec<String>,
}

/// One probed file inside a candidate directory.
#[derive(Serialize)]
pub struct ProbeFile {
    pub path: String,
    pub exists: bool,
}

#[derive(Serialize)]
pub struct CandidateDir {
    pub rank: usize,
    pub path: String,
    pub files: Vec<ProbeFile>,
}

#[derive(Serialize)]
struct CandidatesData<'a> {
    identifier: &'a str,
    theme: &'a str,
    dirs: &'a [CandidateDir],
    resolved: Option<String>,
}

#[derive(Serialize)]
struct MenuLine {
    indent: String,
    marker: &'static str,
    title: String,
    url: String,
    id: String,
}

#[derive(Serialize)]
struct MenuData<'a> {
    name: &'a str,
    power: Option<Power>,
    empty: bool,
    lines: Vec<MenuLine>,
    fallbacks: Vec<String>,
}

#[derive(Serialize)]
struct ListData<'a> {
    items: &'a [String],
    empty_message: &'a str,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(use_color: bool) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_filter("style", move |value: Value, name: String| {
            styles::apply(&value.to_string(), &name, use_color)
        });

        for (name, source) in [
            ("resolve", RESOLVE_TEMPLATE),
            ("not_found", NOT_FOUND_TEMPLATE),
            ("candidates", CANDIDATES_TEMPLATE),
            ("menu", MENU_TEMPLATE),
            ("list", LIST_TEMPLATE),
            ("config", CONFIG_TEMPLATE),
        ] {
            env.add_template(name, source)?;
        }

        Ok(Self { env })
    }

    /// Renderer with colors decided by terminal detection.
    pub fn detect() -> Result<Self, minijinja::Error> {
        Self::new(console::colors_enabled())
    }

    fn render<S: Serialize>(&self, name: &str, data: &S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(data)
    }

    pub fn resolved(&self, path: &Path) -> Result<String, minijinja::Error> {
        self.render(
            "resolve",
            &ResolveData {
                path: path.display().to_string(),
            },
        )
    }

    pub fn not_found(
        &self,
        identifier: &str,
        attempted: &[PathBuf],
    ) -> Result<String, minijinja::Error> {
        self.render(
            "not_found",
            &NotFoundData {
                identifier: identifier.to_string(),
                attempted: attempted.iter().map(|p| p.display().to_string()).collect(),
            },
        )
    }

    pub fn candidates(
        &self,
        identifier: &str,
        theme: &str,
        dirs: &[CandidateDir],
    ) -> Result<String, minijinja::Error> {
        let resolved = dirs
            .iter()
            .flat_map(|d| &d.files)
            .find(|f| f.exists)
            .map(|f| f.path.clone());

        self.render(
            "candidates",
            &CandidatesData {
                identifier,
                theme,
                dirs,
                resolved,
            },
        )
    }

    pub fn menu(
        &self,
        name: &str,
        power: Option<Power>,
        build: &MenuBuild,
    ) -> Result<String, minijinja::Error> {
        let mut lines = Vec::new();
        push_menu_lines(&build.root, 0, &mut lines);

        let fallbacks = build
            .fallbacks()
            .map(|(id, parent)| {
                format!(
                    "link #{} attached to root: parent #{} not in menu",
                    id, parent
                )
            })
            .collect();

        self.render(
            "menu",
            &MenuData {
                name,
                power,
                empty: build.root.children.is_empty(),
                lines,
                fallbacks,
            },
        )
    }

    pub fn list(&self, items: &[String], empty_message: &str) -> Result<String, minijinja::Error> {
        self.render(
            "list",
            &ListData {
                items,
                empty_message,
            },
        )
    }

    pub fn config(&self, config: &AnvilConfig) -> Result<String, minijinja::Error> {
        let entries = vec![
            ConfigEntry {
                key: "theme",
                value: config.theme.clone(),
            },
            ConfigEntry {
                key: "theme_path",
                value: config.theme_path.clone(),
            },
            ConfigEntry {
                key: "module_path",
                value: config.module_path.clone(),
            },
            ConfigEntry {
                key: "locations",
                value: format!("{:?}", config.locations()),
            },
            ConfigEntry {
                key: "extensions",
                value: format!("{:?}", config.extensions()),
            },
            ConfigEntry {
                key: "links_file",
                value: config.links_file.clone(),
            },
            ConfigEntry {
                key: "missing_menu",
                value: format!("{:?}", config.missing_menu).to_lowercase(),
            },
        ];
        self.render("config", &ConfigData { entries })
    }
}

fn push_menu_lines(node: &MenuNode, depth: usize, lines: &mut Vec<MenuLine>) {
    for child in &node.children {
        lines.push(MenuLine {
            indent: INDENT.repeat(depth + 1),
            marker: if child.children.is_empty() {
                LEAF_MARKER
            } else {
                PARENT_MARKER
            },
            title: child.title.clone().unwrap_or_default(),
            url: child.url.clone().unwrap_or_default(),
            id: child.link_id.map(|id| id.to_string()).unwrap_or_default(),
        });
        push_menu_lines(child, depth + 1, lines);
    }
}
