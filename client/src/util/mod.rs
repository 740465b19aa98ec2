//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, navigation guards) from
//! page logic so pages stay small and the rules stay testable.

pub mod guard;
pub mod storage;
