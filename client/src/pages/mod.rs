//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Guarding happens in the route table, not in the pages.

pub mod home;
pub mod login;
pub mod signup;
pub mod user;
