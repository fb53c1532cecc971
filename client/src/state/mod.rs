//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `user`) and provided as `RwSignal`
//! contexts from the root component.

pub mod auth;
pub mod user;
