/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `contact`: Contact form submissions
/// - `application`: Job applications with resume upload
/// - `hire`: Employer hiring inquiries
/// - `subscriptions`: Newsletter sign-up
/// - `blog`: Blog index and articles
/// - `jobs`: Job listings

pub mod application;
pub mod blog;
pub mod contact;
pub mod health;
pub mod hire;
pub mod jobs;
pub mod subscriptions;
