//! Section content models and normalization for the Hibiscus landing site.
//!
//! This crate is the pure half of the hydration layer: typed per-section
//! content, the built-in default catalog, the defensive JSON decoder, the
//! defaults merger, and the icon resolver. It has **no internal
//! dependencies and no I/O** — everything here is deterministic and
//! unit-testable without a network.
//!
//! # Pipeline Overview
//!
//! ```text
//! raw envelope data (serde_json::Value, possibly partial or mangled)
//!     │
//!     ▼ decode      — unwrap fields that arrive JSON-encoded-as-strings
//!     ▼ merge       — fill every gap from the DefaultCatalog, field by field
//!     ▼ normalize   — resolve icon names to tokens, order services
//!     │
//!     ▼ complete, renderable section model
//! ```
//!
//! # Key Types
//!
//! | Type               | Purpose                                       |
//! |--------------------|-----------------------------------------------|
//! | [`Section`]        | Which page region (hero, about, …)            |
//! | [`HeroContent`]    | Hero copy, buttons, stats                     |
//! | [`AboutContent`]   | About copy, feature grid, stats               |
//! | [`ServiceCategory`]| One business unit and its services            |
//! | [`ContactContent`] | Contact copy, channels, social links          |
//! | [`DefaultCatalog`] | Complete built-in copy for every section      |
//! | [`Decoded`]        | Outcome of the bounded defensive decoder      |

pub mod about;
pub mod contact;
pub mod decode;
pub mod defaults;
pub mod hero;
pub mod icons;
pub mod merge;
pub mod normalize;
pub mod section;
pub mod services;

// Re-export primary types at crate root for convenience.
pub use about::{AboutContent, Feature};
pub use contact::{ContactContent, ContactInfo, SocialLinks};
pub use decode::{Decoded, MAX_DECODE_PASSES, decode_structural};
pub use defaults::DefaultCatalog;
pub use hero::{HeroContent, Stat};
pub use icons::{DEFAULT_ICON, resolve as resolve_icon};
pub use merge::{merge_about, merge_contact, merge_hero, merge_services};
pub use normalize::{normalize_about, normalize_contact, normalize_hero, normalize_services};
pub use section::{Section, UnknownSection};
pub use services::{Service, ServiceCategory};
