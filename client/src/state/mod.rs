//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Identity is the only cross-page state; page data is fetched per visit and
//! kept in page-local signals.

pub mod session;
