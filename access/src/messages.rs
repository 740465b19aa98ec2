//! User-facing status strings shared by the web and command-line clients.

pub const UNEXPECTED_ERROR: &str = "Unexpected error occurred.";
pub const SIGN_IN_TO_ENROLL: &str = "You should sign in to enroll a course";
pub const ENROLLED: &str = "Mission is completed.";
pub const INVALID_LOGIN: &str = "Username or password is incorrect.";
pub const USERNAME_TAKEN: &str = "Username is already exist.";
pub const SIGN_IN_REQUIRED: &str = "Please sign in to continue.";
pub const COURSE_NOT_FOUND: &str = "Course not found.";
