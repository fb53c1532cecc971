//! Reusable view components.

pub mod require_auth;
pub mod review_list;
