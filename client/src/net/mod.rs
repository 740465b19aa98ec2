//! Networking: REST calls to the enrollment backend.

pub mod api;
