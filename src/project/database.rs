/// SQLite persistence layer for portfolio projects
///
/// Every operation opens its own connection, runs one statement and closes the
/// connection again. Nothing is cached between calls; concurrent writers are
/// serialized by SQLite itself.

use crate::project::types::Project;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    ConnectOptions, Connection,
};
use std::path::{Path, PathBuf};

/// Storage failure (connect, read or write)
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Handle to the projects table in a single SQLite file
///
/// Cheap to clone: holds only the file location and connect options.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl ProjectStore {
    /// Create a store for the given database file (created on first connect)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        Self { path, options }
    }

    /// Location of the backing database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn connect(&self) -> Result<SqliteConnection, StoreError> {
        Ok(self.options.connect().await?)
    }

    /// Create the projects table if it is absent
    ///
    /// Safe to call on every start; an existing table is left untouched.
    pub async fn init(&self) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                image_file_name TEXT NOT NULL
            )
            "#,
        )
        .execute(&mut conn)
        .await?;
        conn.close().await?;

        tracing::debug!("projects schema ready in {}", self.path.display());
        Ok(())
    }

    /// All projects, newest (highest id) first
    pub async fn list_all(&self) -> Result<Vec<Project>, StoreError> {
        let mut conn = self.connect().await?;
        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, title, description, image_file_name FROM projects ORDER BY id DESC",
        )
        .fetch_all(&mut conn)
        .await?;
        conn.close().await?;

        Ok(projects)
    }

    /// Insert one project and return the id storage assigned to it
    pub async fn add(
        &self,
        title: &str,
        description: &str,
        image_file_name: &str,
    ) -> Result<i64, StoreError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(
            "INSERT INTO projects (title, description, image_file_name) VALUES (?, ?, ?)",
        )
        .bind(title)
        .bind(description)
        .bind(image_file_name)
        .execute(&mut conn)
        .await?;
        conn.close().await?;

        let id = result.last_insert_rowid();
        tracing::info!("Added project {}: {}", id, title);
        Ok(id)
    }

    /// Delete a project by id; a missing id is a no-op
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await?;
        conn.close().await?;

        tracing::info!("Deleted project {} ({} row(s))", id, result.rows_affected());
        Ok(())
    }

    /// Overwrite the text fields of a project; a missing id is a no-op
    pub async fn update(
        &self,
        id: i64,
        title: &str,
        description: &str,
        image_file_name: &str,
    ) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET title = ?, description = ?, image_file_name = ?
            WHERE id = ?
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(image_file_name)
        .bind(id)
        .execute(&mut conn)
        .await?;
        conn.close().await?;

        tracing::info!("Updated project {} ({} row(s))", id, result.rows_affected());
        Ok(())
    }
}
