//! # ShiftORL Site API Library
//!
//! This library provides the HTTP service behind the ShiftORL recruiting
//! site: form submissions, newsletter sign-up, blog reads and job listings.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `middleware`: Response middleware
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
