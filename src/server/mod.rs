//! HTTP server for the exam generation API.
//!
//! - [`api`]: request/response types, route handlers and router

pub mod api;
