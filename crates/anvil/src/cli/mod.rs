//! # CLI Behavior
//!
//! This is **one possible client** for anvil, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Commands
//!
//! - `anvil resolve <view>`: print the template file a view resolves to
//! - `anvil candidates <view>`: show every directory and file probed, in order
//! - `anvil menu <name> [--power N]`: print a composed menu tree
//! - `anvil menus`: list the menus of the site
//! - `anvil config`: show the effective configuration
//!
//! All commands take `--root <dir>` (defaults to the current directory) and
//! `--theme <name>` to override the configured theme.
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. The level defaults to `warn`,
//! `--verbose` raises it to `debug`, and `ANVIL_LOG` takes any `EnvFilter` directive.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting through templates
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Embedded output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
