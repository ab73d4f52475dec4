//! Output templates, embedded at compile time.
//!
//! Templates are minijinja based and use explicit `\n` line breaks where
//! loops and conditionals would otherwise make whitespace hard to follow.
//! Layout math (indentation, markers) is done in Rust before rendering.

pub const RESOLVE_TEMPLATE: &str = include_str!("templates/resolve.jinja");
pub const NOT_FOUND_TEMPLATE: &str = include_str!("templates/not_found.jinja");
pub const CANDIDATES_TEMPLATE: &str = include_str!("templates/candidates.jinja");
pub const MENU_TEMPLATE: &str = include_str!("templates/menu.jinja");
pub const LIST_TEMPLATE: &str = include_str!("templates/list.jinja");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.jinja");
