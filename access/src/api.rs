//! Backend endpoint catalogue and the error type shared by both HTTP layers.
//!
//! DESIGN
//! ======
//! The web client sends requests with `gloo-net` and the CLI with `reqwest`;
//! both describe calls with [`Endpoint`] and classify responses with
//! [`check_status`], so paths, auth schemes and status handling live here once.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes an [`ApiError`]. Pages never show the raw error:
//! [`ApiError::user_message`] maps it to one of the fixed strings in
//! [`crate::messages`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use crate::messages;
use crate::model::Session;

/// Backend base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Error returned by backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A protected call was attempted without a usable session.
    #[error("authentication required")]
    AuthenticationRequired,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("username already exists")]
    UsernameTaken,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Fixed message suitable for display.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::AuthenticationRequired => messages::SIGN_IN_REQUIRED,
            Self::InvalidCredentials => messages::INVALID_LOGIN,
            Self::UsernameTaken => messages::USERNAME_TAKEN,
            Self::Transport(_) | Self::Status { .. } | Self::Decode(_) => messages::UNEXPECTED_ERROR,
        }
    }
}

/// HTTP method of an [`Endpoint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Credentials an [`Endpoint`] expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointAuth {
    Public,
    /// HTTP Basic username/password (login only).
    Basic,
    /// Bearer token from the current session. Logout sends it when one
    /// exists and still clears locally without it.
    Bearer,
}

/// Backend operations used by the clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Courses,
    Enroll,
    Login,
    Logout,
    Register,
    StudentCourses(i64),
    TeacherStudents(i64),
    ManagerEnrollments,
}

impl Endpoint {
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Courses
            | Self::Login
            | Self::StudentCourses(_)
            | Self::TeacherStudents(_)
            | Self::ManagerEnrollments => Method::Get,
            Self::Enroll | Self::Logout | Self::Register => Method::Post,
        }
    }

    #[must_use]
    pub fn auth(self) -> EndpointAuth {
        match self {
            Self::Courses | Self::Register => EndpointAuth::Public,
            Self::Login => EndpointAuth::Basic,
            Self::Enroll
            | Self::Logout
            | Self::StudentCourses(_)
            | Self::TeacherStudents(_)
            | Self::ManagerEnrollments => EndpointAuth::Bearer,
        }
    }

    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Courses => "/api/user/courses".to_owned(),
            Self::Enroll => "/api/user/enroll".to_owned(),
            Self::Login => "/api/user/login".to_owned(),
            Self::Logout => "/api/user/logout".to_owned(),
            Self::Register => "/api/user/registration".to_owned(),
            Self::StudentCourses(student_id) => format!("/api/student/courses/{student_id}"),
            Self::TeacherStudents(teacher_id) => format!("/api/teacher/students/{teacher_id}"),
            Self::ManagerEnrollments => "/api/manager/enrollments".to_owned(),
        }
    }

    /// Absolute URL under `base_url`.
    #[must_use]
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", normalize_base_url(base_url), self.path())
    }
}

/// Trim whitespace and trailing slashes; empty input yields [`DEFAULT_BASE_URL`].
#[must_use]
pub fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_BASE_URL } else { trimmed }
}

/// Classify a response status for `endpoint`.
///
/// # Errors
///
/// Non-2xx statuses become [`ApiError::InvalidCredentials`] (login 401/403),
/// [`ApiError::UsernameTaken`] (registration 409) or [`ApiError::Status`].
pub fn check_status(endpoint: Endpoint, status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let err = match (endpoint, status) {
        (Endpoint::Login, 401 | 403) => ApiError::InvalidCredentials,
        (Endpoint::Register, 409) => ApiError::UsernameTaken,
        _ => ApiError::Status { status, body: body.to_owned() },
    };
    tracing::warn!(path = %endpoint.path(), status, "backend call failed");
    Err(err)
}

/// Decode a JSON response body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body is not valid JSON for `T`.
pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Turn a login response body into a [`Session`].
///
/// The backend answers an unauthenticated login with 200 and an empty body.
///
/// # Errors
///
/// Returns [`ApiError::InvalidCredentials`] for an empty body and
/// [`ApiError::Decode`] when the body is not a user with a token.
pub fn parse_login_body(body: &str) -> Result<Session, ApiError> {
    if body.trim().is_empty() {
        return Err(ApiError::InvalidCredentials);
    }
    parse_json(body)
}
