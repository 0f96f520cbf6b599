//! # ShiftORL Shared Library
//!
//! Domain types and collaborators used by the ShiftORL site API.
//!
//! ## Module Organization
//!
//! - `forms`: Submitted form payloads and their validation rules
//! - `models`: Database models and their queries
//! - `db`: Connection pool and migrations
//! - `store`: Persistence interface with Postgres and in-memory backends
//! - `email`: Notification interface, Resend client and HTML templates
//! - `jobs`: Hard-coded job listing catalogue

pub mod db;
pub mod email;
pub mod forms;
pub mod jobs;
pub mod models;
pub mod store;

/// Current version of the ShiftORL shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
