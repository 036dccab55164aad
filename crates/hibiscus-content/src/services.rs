//! Service catalog content.
//!
//! The services endpoint returns a list of business-unit categories, each
//! carrying its own list of services. Unlike the other sections the remote
//! payload is a top-level array, not an object.

use serde::{Deserialize, Serialize};

/// One business unit (Body Care, Travel, …) and its services.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub id: i64,
    pub title: String,
    /// Symbolic icon tag until normalization resolves it to a token.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub services: Vec<Service>,
}

/// One service inside a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// URL or asset path for the service card image.
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub is_coming_soon: bool,
    /// Inactive services are dropped during normalization.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Display position within the category, ascending.
    #[serde(default)]
    pub sort_order: i64,
}

fn default_active() -> bool {
    true
}
