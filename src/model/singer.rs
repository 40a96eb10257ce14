//! Singer types

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Identifier assigned to a singer by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SingerId(String);

impl SingerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SingerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SingerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SingerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A singer and the ordered list of their songs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Singer {
    pub id: SingerId,
    pub name: String,
    #[serde(default)]
    pub songs: Vec<String>,
}

impl Singer {
    pub fn new(id: impl Into<SingerId>, name: impl Into<String>, songs: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            songs,
        }
    }

    /// Case-insensitive name comparison
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Exact song title lookup
    pub fn has_song(&self, song: &str) -> bool {
        self.songs.iter().any(|s| s == song)
    }
}

/// A validated singer name
///
/// Surrounding whitespace is trimmed; an empty result is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingerName(String);

impl SingerName {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SingerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
