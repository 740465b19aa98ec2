//! Backend operations bound to the persisted session.
//!
//! Mirrors the web client's service layer: identity comes only from the
//! session store, and protected calls fail with
//! `ApiError::AuthenticationRequired` before any request when signed out.

#[cfg(test)]
#[path = "school_test.rs"]
mod school_test;

use access::api::{parse_json, parse_login_body};
use access::{
    ApiError, AuthHeaders, Course, CourseStudent, Endpoint, NewUser, Session, SessionStore, User, messages,
};

use crate::error::CliError;
use crate::http::Backend;
use crate::storage::FileStorage;

pub struct SchoolClient {
    backend: Backend,
    store: SessionStore<FileStorage>,
}

impl SchoolClient {
    pub fn new(backend: Backend, store: SessionStore<FileStorage>) -> Self {
        Self { backend, store }
    }

    pub fn current(&self) -> Option<Session> {
        self.store.current()
    }

    pub async fn courses(&self) -> Result<Vec<Course>, CliError> {
        let body = self.backend.send(Endpoint::Courses, None, None).await?;
        Ok(parse_json(&body)?)
    }

    /// Enroll the signed-in user in the course with `course_id`.
    pub async fn enroll(&self, course_id: i64) -> Result<(), CliError> {
        let Some(session) = self.store.current() else {
            return Err(CliError::Refused(messages::SIGN_IN_TO_ENROLL));
        };
        let headers = AuthHeaders::for_session(Some(&session))?;
        let course = self
            .courses()
            .await?
            .into_iter()
            .find(|c| c.id == course_id)
            .ok_or(CliError::CourseNotFound(course_id))?;
        let payload = serde_json::to_string(&CourseStudent::enroll(&session, course))?;
        self.backend.send(Endpoint::Enroll, Some(&headers), Some(payload)).await?;
        Ok(())
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Session, CliError> {
        let headers = AuthHeaders::basic(username, password);
        let body = self.backend.send(Endpoint::Login, Some(&headers), None).await?;
        let session = parse_login_body(&body)?;
        self.store.set_current(&session)?;
        Ok(session)
    }

    /// Best-effort backend logout, then clear the stored session regardless.
    pub async fn logout(&self) -> Result<(), CliError> {
        let headers = AuthHeaders::from_store(&self.store).ok();
        if let Err(e) = self.backend.send(Endpoint::Logout, headers.as_ref(), None).await {
            tracing::warn!(error = %e, "logout call failed");
        }
        self.store.clear_current()?;
        Ok(())
    }

    pub async fn register(&self, user: &NewUser) -> Result<(), CliError> {
        let payload = serde_json::to_string(user)?;
        self.backend.send(Endpoint::Register, None, Some(payload)).await?;
        Ok(())
    }

    pub async fn my_courses(&self) -> Result<Vec<Course>, CliError> {
        let (headers, session) = self.authorized()?;
        let body = self.backend.send(Endpoint::StudentCourses(session.id), Some(&headers), None).await?;
        Ok(parse_json(&body)?)
    }

    pub async fn my_students(&self) -> Result<Vec<User>, CliError> {
        let (headers, session) = self.authorized()?;
        let body = self.backend.send(Endpoint::TeacherStudents(session.id), Some(&headers), None).await?;
        Ok(parse_json(&body)?)
    }

    pub async fn enrollments(&self) -> Result<Vec<CourseStudent>, CliError> {
        let (headers, _) = self.authorized()?;
        let body = self.backend.send(Endpoint::ManagerEnrollments, Some(&headers), None).await?;
        Ok(parse_json(&body)?)
    }

    fn authorized(&self) -> Result<(AuthHeaders, Session), ApiError> {
        let session = self.store.current().ok_or(ApiError::AuthenticationRequired)?;
        let headers = AuthHeaders::for_session(Some(&session))?;
        Ok((headers, session))
    }
}
