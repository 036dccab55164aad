//! About section content.

use serde::{Deserialize, Serialize};

use crate::hero::Stat;

/// About copy, the feature grid, and the company stats strip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub heading: String,
    pub description: String,
    /// Feature cards. Order is display order.
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
    /// URL or asset path. Empty on the wire means "use the bundled visual".
    pub image: String,
}

/// One feature card.
///
/// `icon` carries a symbolic name (`"Shield"`, `"Zap"`, …) on the wire and in
/// the default catalog; normalization replaces it with a renderable token via
/// [`crate::icons::resolve`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}
