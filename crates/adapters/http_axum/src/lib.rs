//! # fastnomads-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for places (`/places/`, `/place/{id}`) and the
//!   liveness endpoint at `/`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and extractor rejections into JSON responses
//!
//! ## Dependency rule
//! Depends on `fastnomads-app` (for port traits and services) and
//! `fastnomads-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
