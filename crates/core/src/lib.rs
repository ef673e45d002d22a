//! # Workplan Core
//!
//! Domain types and pure logic for the workplan scheduling service: employee
//! and schedule-entry models, status-code categorization, the monthly
//! attendance aggregator, and the memoizing statistics cache.
//!
//! Everything in this crate is synchronous and free of I/O; persistence and
//! the HTTP surface live in the `workplan-db` and `workplan-api` crates.

pub mod cache;
pub mod errors;
pub mod models;
pub mod stats;
