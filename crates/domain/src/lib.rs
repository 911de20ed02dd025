//! # fastnomads-domain
//!
//! Pure domain model for the fastnomads places API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Places** (points of interest with amenity flags and coordinates)
//! - Contain all invariant enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod place;
