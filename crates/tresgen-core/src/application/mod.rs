//! Application layer for tresgen.
//!
//! This layer contains:
//! - **Services**: the materialization pipeline ([`Materializer`])
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{MaterializeReport, Materializer};

pub use ports::{Filesystem, IntentCollector, TemplateSource};

pub use error::ApplicationError;
