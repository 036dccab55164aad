//! Hero section content.
//!
//! Field names match the admin API's snake_case wire format exactly, so the
//! same types serve as wire shapes and as the normalized model handed to the
//! renderer.

use serde::{Deserialize, Serialize};

/// Hero banner copy, call-to-action buttons, and headline stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub badge_text: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub primary_button_text: String,
    pub primary_button_link: String,
    pub secondary_button_text: String,
    pub secondary_button_link: String,
    /// URL or asset path. Empty on the wire means "use the bundled image".
    pub background_image: String,
    /// Headline statistics. Order is display order.
    pub stats: Vec<Stat>,
}

/// One headline statistic ("50+" / "Mitra Aktif").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}
