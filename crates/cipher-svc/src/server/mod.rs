//! Axum HTTP server, routing, and middleware.
//!
//! # Responsibilities
//! - Define the Axum router with all routes and shared middleware.
//! - Translate JSON requests into engine calls and engine errors into
//!   `{code, message}` bodies.

pub mod handlers;
pub mod middleware;
pub mod router;
