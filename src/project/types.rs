/// Project type definitions
///
/// A project is one showcased piece of work: a title, a short description and
/// the file name of its preview image.

use serde::Serialize;

/// A stored project row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Project {
    /// Storage-assigned identifier, higher means more recent
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Preview image file name, not checked against the filesystem
    pub image_file_name: String,
}

/// Raw create-form submission
///
/// Missing fields stay empty so they fail validation instead of rejecting
/// the request.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub image_file_name: String,
}

/// Validated, trimmed input for a new project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_file_name: String,
}

/// Create-form validation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),
}

impl ProjectForm {
    /// Build a form from decoded key/value pairs
    ///
    /// The first value of a repeated field wins; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let (mut title, mut description, mut image_file_name) = (None, None, None);
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "title" => &mut title,
                "description" => &mut description,
                "image_file_name" => &mut image_file_name,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        Self {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            image_file_name: image_file_name.unwrap_or_default(),
        }
    }

    /// Trim every field and require all three to be non-empty
    pub fn validate(self) -> Result<NewProject, ValidationError> {
        let title = required("title", &self.title)?;
        let description = required("description", &self.description)?;
        let image_file_name = required("image_file_name", &self.image_file_name)?;

        Ok(NewProject {
            title,
            description,
            image_file_name,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
