//! Application services.
//!
//! One use case: materialize a project from an intent.

pub mod materializer;

pub use materializer::{MaterializeReport, Materializer};
