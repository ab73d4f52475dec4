//! # Anvil CLI
//!
//! A thin inspection client over the `anvilapp` library. The binary only invokes
//! `cli::run()` and handles process termination; everything user-facing lives in
//! `src/cli/`.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/anvil/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering via minijinja templates (render.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/anvilapp/src/api.rs)                     │
//! │  - View resolution and menu composition                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering
//!
//! Templates live in `src/cli/templates/` and are embedded at compile time via
//! `include_str!()`. `render.rs` turns library results into flat, pre-laid-out
//! data and feeds it to those templates.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
