//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data loading and delegates shared widgets to
//! `components`. Role checks happen in `util::guard`, never inside a page.

pub mod errors;
pub mod home;
pub mod login;
pub mod manager;
pub mod profile;
pub mod register;
pub mod student;
pub mod teacher;
