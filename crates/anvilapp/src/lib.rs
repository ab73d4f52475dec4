//! # Anvil Architecture
//!
//! Anvil's presentation core answers two questions for the rendering layer:
//!
//! 1. **Which file renders this view?** A logical identifier such as `blog::post`
//!    is resolved against explicit locations, the active theme and the module's
//!    own views.
//! 2. **What does this menu look like for this user?** Flat link records are
//!    filtered by the requester's power and assembled into a nested tree.
//!
//! Rendering itself, routing, authentication and persistence are somebody
//! else's job: the core consumes them through small traits and hands back
//! plain Rust values.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients (CLI in crates/anvil, or any web layer)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the view and menu engines               │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  view/                        │ │  menu/                    │
//! │  candidates → extension probe │ │  power filter → tree      │
//! └───────────────────────────────┘ └───────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  FileProbe + ThemeProvider    │ │  store/ (LinkStore)       │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Key Principle: Collaborators Are Injected
//!
//! Nothing is looked up from global state. The resolver receives its file probe
//! and theme provider, the menu facade its link store, at construction time.
//! Configuration is assembled once ([`view::ViewFinderBuilder`], [`config`]) and
//! only read afterwards.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`view`]: View identifier parsing, candidate paths, extension probing, resolution
//! - [`menu`]: Link filtering, menu tree assembly, the menu facade
//! - [`store`]: Link store abstraction and implementations
//! - [`config`]: Configuration management
//! - [`init`]: Site bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod init;
pub mod menu;
pub mod store;
pub mod view;

#[cfg(test)]
pub mod test_utils;
