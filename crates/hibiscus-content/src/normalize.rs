//! End-of-pipeline normalization: merge, then make everything renderable.
//!
//! The merger guarantees shape-completeness; this step guarantees
//! *renderability* — symbolic icon names become concrete tokens, inactive
//! services disappear, and services are put in display order. Output from
//! here goes straight to the rendering layer.

use serde_json::Value;

use crate::about::AboutContent;
use crate::contact::ContactContent;
use crate::defaults::DefaultCatalog;
use crate::hero::HeroContent;
use crate::icons;
use crate::merge;
use crate::services::ServiceCategory;

/// Normalized hero model. Hero content carries no symbolic names, so this is
/// merge alone — kept for pipeline symmetry.
pub fn normalize_hero(remote: Option<&Value>, catalog: &DefaultCatalog) -> HeroContent {
    merge::merge_hero(remote, &catalog.hero)
}

/// Normalized about model, feature icons resolved to tokens.
pub fn normalize_about(remote: Option<&Value>, catalog: &DefaultCatalog) -> AboutContent {
    let mut content = merge::merge_about(remote, &catalog.about);
    for feature in &mut content.features {
        feature.icon = icons::resolve(&feature.icon).to_string();
    }
    content
}

/// Normalized service catalog: category icons resolved, inactive services
/// dropped, services ordered by `sort_order` within each category.
///
/// If filtering empties every category (remote content that is all-inactive),
/// the default catalog is used instead — the section never renders hollow.
pub fn normalize_services(remote: Option<&Value>, catalog: &DefaultCatalog) -> Vec<ServiceCategory> {
    let merged = merge::merge_services(remote, &catalog.services);
    let normalized = tidy_categories(merged);
    if normalized.is_empty() {
        tidy_categories(catalog.services.clone())
    } else {
        normalized
    }
}

fn tidy_categories(categories: Vec<ServiceCategory>) -> Vec<ServiceCategory> {
    categories
        .into_iter()
        .filter_map(|mut category| {
            category.icon = icons::resolve(&category.icon).to_string();
            category.services.retain(|s| s.is_active);
            category.services.sort_by_key(|s| s.sort_order);
            (!category.services.is_empty()).then_some(category)
        })
        .collect()
}

/// Normalized contact model. Contact content carries no symbolic names, so
/// this is merge alone — kept for pipeline symmetry.
pub fn normalize_contact(remote: Option<&Value>, catalog: &DefaultCatalog) -> ContactContent {
    merge::merge_contact(remote, &catalog.contact)
}
