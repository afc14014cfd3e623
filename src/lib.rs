// PRDatabase — Library root
//
// Re-exports the store, auth, records, export, shell, and CLI modules.

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod records;
pub mod shell;
pub mod store;

pub use error::{PrDatabaseError, Result};
