/// Folio: personal portfolio website
///
/// Serves a handful of informational pages plus a projects showcase backed by
/// a single SQLite table that visitors can add to and delete from.

// Core configuration and setup
pub mod config;

// Project records, form validation and the SQLite data access layer
pub mod project;

// Page templates compiled into the binary
pub mod templates;

// Handler error type and its HTTP mapping
pub mod error;

// HTTP routes for pages, projects and static assets
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use config::Config;
pub use project::{Project, ProjectStore};
pub use server::{create_app, start_server};
