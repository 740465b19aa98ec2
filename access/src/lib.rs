//! Session, route-gate, and credential core for the enrollment client.
//!
//! This crate owns the pieces shared by the browser `client` and the native
//! `cli`: the wire model, the persisted session slot, the static route table
//! with its role gate, and bearer-header construction. It has no browser or
//! async-runtime dependencies; storage is supplied by the caller through
//! [`SessionStorage`].

pub mod api;
pub mod credentials;
pub mod gate;
pub mod messages;
pub mod model;
pub mod routes;
pub mod store;

pub use api::{ApiError, Endpoint, EndpointAuth, Method};
pub use credentials::{AuthHeaders, JSON_CONTENT_TYPE};
pub use gate::{GateDecision, authorize};
pub use model::{Course, CourseStudent, NewUser, Role, Session, User};
pub use routes::{Navigation, Page, RouteAccess, RouteRule, RouteTable};
pub use store::{MemoryStorage, SESSION_STORAGE_KEY, SessionStorage, SessionStore, StorageError};
