//! Content hydration for the Hibiscus landing site.
//!
//! The impure half of the hydration layer: fetches per-section content from
//! the admin API, runs it through `hibiscus-content`'s decode/merge/resolve
//! pipeline, and holds the result in per-section one-shot stores that the
//! rendering layer observes.
//!
//! ```text
//!   section mount
//!       │
//!       ▼
//!   spawn_hydration ─────spawns─────▶ ContentGateway::fetch_section
//!       │                                  │  {success, data} envelope,
//!       │ exposes default                  │  all failures → None
//!       │ while loading                    ▼
//!       │                             normalize_* (decode + merge + icons)
//!       ▼                                  │
//!   watch::Receiver ◀──── single write ────┘
//! ```
//!
//! Hydration never fails: every error path terminates in a complete,
//! renderable model built from the default catalog. Failures are logged,
//! not surfaced.

pub mod constants;
pub mod contact;
pub mod gateway;
pub mod pipeline;
pub mod store;

pub use contact::{ContactForm, SubmitOutcome, mailto_fallback, submit_contact};
pub use gateway::ContentGateway;
pub use pipeline::{Hydrator, PageStores};
pub use store::{Phase, SectionStore, spawn_hydration};
