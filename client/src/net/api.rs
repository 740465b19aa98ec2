//! REST client for the enrollment backend.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Other builds: every call fails with a transport error, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics. Protected calls ask
//! the session provider for bearer headers first, so a signed-out visitor
//! gets `ApiError::AuthenticationRequired` before any request is sent.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use access::api::{parse_json, parse_login_body};
use access::{ApiError, AuthHeaders, Course, CourseStudent, Endpoint, NewUser, Session, User};
use leptos::prelude::*;

use crate::config::api_base_url;
use crate::state::session::SessionProvider;

/// Backend client bound to the application's session provider.
#[derive(Clone, Copy, Debug)]
pub struct ApiClient {
    base_url: &'static str,
    session: SessionProvider,
}

impl ApiClient {
    pub fn new(session: SessionProvider) -> Self {
        Self { base_url: api_base_url(), session }
    }

    /// All courses on offer. Public.
    pub async fn courses(&self) -> Result<Vec<Course>, ApiError> {
        let body = self.send(Endpoint::Courses, None, None).await?;
        parse_json(&body)
    }

    /// Enroll the signed-in user in `course`.
    pub async fn enroll(&self, course: Course) -> Result<(), ApiError> {
        let headers = self.session.auth_headers()?;
        let session = self.require_session()?;
        let payload = encode(&CourseStudent::enroll(&session, course))?;
        self.send(Endpoint::Enroll, Some(headers), Some(payload)).await?;
        Ok(())
    }

    /// Authenticate with username/password and publish the new session.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let headers = AuthHeaders::basic(username, password);
        let body = self.send(Endpoint::Login, Some(headers), None).await?;
        let session = parse_login_body(&body)?;
        log::info!("signed in as user {} ({})", session.id, session.role);
        self.session.sign_in(session.clone());
        Ok(session)
    }

    /// Notify the backend (best effort) and drop the local session.
    pub async fn logout(&self) {
        let headers = self.session.auth_headers().ok();
        if let Err(e) = self.send(Endpoint::Logout, headers, None).await {
            log::warn!("logout call failed: {e}");
        }
        self.session.sign_out();
    }

    /// Create a student account.
    pub async fn register(&self, user: &NewUser) -> Result<(), ApiError> {
        let payload = encode(user)?;
        self.send(Endpoint::Register, None, Some(payload)).await?;
        Ok(())
    }

    /// Courses the signed-in student is enrolled in.
    pub async fn my_courses(&self) -> Result<Vec<Course>, ApiError> {
        let headers = self.session.auth_headers()?;
        let id = self.require_session()?.id;
        let body = self.send(Endpoint::StudentCourses(id), Some(headers), None).await?;
        parse_json(&body)
    }

    /// Students enrolled in the signed-in teacher's courses.
    pub async fn my_students(&self) -> Result<Vec<User>, ApiError> {
        let headers = self.session.auth_headers()?;
        let id = self.require_session()?.id;
        let body = self.send(Endpoint::TeacherStudents(id), Some(headers), None).await?;
        parse_json(&body)
    }

    /// Every enrollment record. Manager only.
    pub async fn enrollments(&self) -> Result<Vec<CourseStudent>, ApiError> {
        let headers = self.session.auth_headers()?;
        let body = self.send(Endpoint::ManagerEnrollments, Some(headers), None).await?;
        parse_json(&body)
    }

    fn require_session(&self) -> Result<Session, ApiError> {
        self.session.get_untracked().ok_or(ApiError::AuthenticationRequired)
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        headers: Option<AuthHeaders>,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            use access::api::check_status;
            use access::{JSON_CONTENT_TYPE, Method};
            use gloo_net::http::Request;

            let url = endpoint.url(self.base_url);
            let mut request = match endpoint.method() {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            request = request.header(access::credentials::CONTENT_TYPE, JSON_CONTENT_TYPE);
            if let Some(headers) = &headers {
                for (name, value) in headers.pairs() {
                    request = request.header(name, value);
                }
            }
            let response = match body {
                Some(body) => request.body(body).map_err(transport)?.send().await,
                None => request.send().await,
            }
            .map_err(transport)?;
            let status = response.status();
            let text = response.text().await.map_err(transport)?;
            check_status(endpoint, status, &text)?;
            Ok(text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.base_url, endpoint, headers, body);
            Err(ApiError::Transport(OFFLINE.to_owned()))
        }
    }
}

#[cfg(not(feature = "csr"))]
const OFFLINE: &str = "not available outside the browser";

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn encode<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the client installed by `App`.
///
/// # Panics
///
/// Panics when called outside the `App` component tree.
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}
