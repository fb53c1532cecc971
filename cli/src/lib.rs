//! Native command-line front end for the library session flow.
//!
//! Reuses the `session` core with a `reqwest` transport and a directory of
//! files standing in for browser storage, so a terminal session behaves like
//! the browser one: `login` persists a token, protected lookups go through
//! the same guard, `logout` clears it.

pub mod commands;
pub mod error;
pub mod file_storage;
pub mod transport;

pub use error::CliError;
pub use file_storage::FileStorage;
pub use transport::ReqwestTransport;
