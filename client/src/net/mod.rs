//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` adapts `gloo-net` to the `session` transport seam and assembles the
//! context-provided session client used by every page.

pub mod api;
