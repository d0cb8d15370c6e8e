//! Plain LMS records rendered by cards, rows and pages.
//!
//! DESIGN
//! ======
//! Records are inert value types. Fields that drive presentation but may carry
//! values the UI does not know (assignment status) stay as strings and are
//! interpreted leniently at render time.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use serde::{Deserialize, Serialize};

/// Account role shown next to a user's name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Instructor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Instructor, Role::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Instructor => "Instructor",
            Self::Admin => "Administrator",
        }
    }

    /// Parse a form value, falling back to `Student`.
    pub fn parse_or_default(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Up to two uppercase initials for avatar placeholders.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub code: String,
    pub title: String,
    pub instructor: String,
    /// Completion percentage. Values above 100 are clamped when rendered.
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub lessons: u32,
}

impl Course {
    pub fn clamped_progress(&self) -> u8 {
        self.progress.min(100)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub course: String,
    /// Human-readable due date, e.g. `"Oct 24"`.
    pub due: String,
    /// `submitted`, `pending` or `overdue`; anything else renders as pending.
    pub status: String,
}
