//! tresgen core — domain and application layers.
//!
//! Hexagonal (ports and adapters) layout:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          tresgen-cli (binary)           │
//! │   collects the intent, drives the run   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application (Materializer)        │
//! │   the 7-step materialization pipeline   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Ports (Filesystem, TemplateSource)  │
//! │   implemented by tresgen-adapters       │
//! └──────────────────┬──────────────────────┘
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain (pure, no I/O)            │
//! │  name rules, catalog, manifest merge    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tresgen_core::{
//!     application::Materializer,
//!     domain::{ProjectIntent, TemplateKind},
//! };
//!
//! # fn adapters() -> (Box<dyn tresgen_core::application::Filesystem>,
//! #                   Box<dyn tresgen_core::application::TemplateSource>) { unimplemented!() }
//! let intent = ProjectIntent::builder()
//!     .name("demo-app").unwrap()
//!     .template(TemplateKind::Vue)
//!     .eslint(true)
//!     .build()
//!     .unwrap();
//!
//! let (filesystem, templates) = adapters();
//! let materializer = Materializer::new(filesystem, templates);
//! materializer.materialize(&intent, std::path::Path::new(".")).unwrap();
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        MaterializeReport, Materializer,
        ports::{Filesystem, IntentCollector, TemplateSource},
    };
    pub use crate::domain::{
        Manifest, PackageManager, ProjectIntent, ProjectIntentBuilder, TemplateKind,
    };
    pub use crate::error::{TresgenError, TresgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
