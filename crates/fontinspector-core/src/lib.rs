// Public fallible APIs in this crate share one concrete error contract (`InspectorError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod client;
pub(crate) mod config;
pub mod error;
pub mod extract;
pub(crate) mod fetch;
pub(crate) mod jsonl;
pub mod models;
pub(crate) mod paths;
pub mod state;

pub use client::FontInspector;
pub use error::{InspectorError, Result};
