/// Project showcase module
///
/// Holds the project record types, create-form validation and the SQLite
/// data access layer for the single projects table.

pub mod database;
pub mod types;

pub use database::{ProjectStore, StoreError};
pub use types::{NewProject, Project, ProjectForm, ValidationError};
