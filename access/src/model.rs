//! Wire model shared with the enrollment backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON. `Session` is the only type that is
//! persisted client-side; every other type is display data fetched per page.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Role attached to every account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Teacher,
    Manager,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Manager];

    /// Wire name, e.g. `"STUDENT"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Teacher => "TEACHER",
            Self::Manager => "MANAGER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in identity cached on the client.
///
/// Built from the login response and persisted under
/// [`crate::SESSION_STORAGE_KEY`]. A value of this type always carries one of
/// the fixed [`Role`]s; stored JSON with any other role fails to decode and is
/// treated as no session at all.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    pub username: String,
    pub role: Role,
    pub token: String,
}

// The backend sends `"name": null` for accounts without a display name.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Session {
    /// The account part of the session, as sent in enrollment payloads.
    #[must_use]
    pub fn user(&self) -> User {
        User {
            id: self.id,
            name: Some(self.name.clone()),
            username: self.username.clone(),
            role: Some(self.role),
        }
    }

    /// Name to show in page chrome; falls back to the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.username
        } else {
            &self.name
        }
    }
}

// The bearer token stays out of logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("role", &self.role)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// An account as returned inside course and enrollment payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// A course offered by an instructor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub instructor: Option<User>,
}

impl Course {
    /// Instructor display name, or an empty string for self-study courses.
    #[must_use]
    pub fn instructor_name(&self) -> &str {
        self.instructor
            .as_ref()
            .map_or("", |i| i.name.as_deref().unwrap_or(&i.username))
    }
}

/// One enrollment record linking a student to a course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseStudent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub student: User,
    pub course: Course,
}

impl CourseStudent {
    /// New enrollment request for the signed-in student.
    #[must_use]
    pub fn enroll(session: &Session, course: Course) -> Self {
        Self { id: None, student: session.user(), course }
    }
}

/// Registration form payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
