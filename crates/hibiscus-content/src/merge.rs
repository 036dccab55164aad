//! Field-by-field defaults merger.
//!
//! Combines a decoded remote payload (or nothing at all) with a section's
//! default content, producing a value that is always structurally complete:
//!
//! - scalar string fields: remote wins iff present and non-blank;
//! - ordered sequences: taken entirely from the remote payload iff the field
//!   defensively decodes to a non-empty, fully well-formed sequence, else
//!   entirely from the default — never merged element-by-element;
//! - nested objects (contact info, social links): recurse per sub-field.
//!
//! Every function here is pure and deterministic, never mutates its inputs,
//! and `merge_*(None, d) == d` holds exactly.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::about::{AboutContent, Feature};
use crate::contact::{ContactContent, SocialLinks};
use crate::decode::{Decoded, decode_structural};
use crate::hero::{HeroContent, Stat};
use crate::services::ServiceCategory;

/// Merge a hero payload with the default hero content.
pub fn merge_hero(remote: Option<&Value>, default: &HeroContent) -> HeroContent {
    let mut content = default.clone();
    let Some(obj) = as_object(remote) else {
        return content;
    };

    if let Some(v) = string_field(obj, "badge_text") {
        content.badge_text = v;
    }
    if let Some(v) = string_field(obj, "title") {
        content.title = v;
    }
    if let Some(v) = string_field(obj, "subtitle") {
        content.subtitle = v;
    }
    if let Some(v) = string_field(obj, "description") {
        content.description = v;
    }
    if let Some(v) = string_field(obj, "primary_button_text") {
        content.primary_button_text = v;
    }
    if let Some(v) = string_field(obj, "primary_button_link") {
        content.primary_button_link = v;
    }
    if let Some(v) = string_field(obj, "secondary_button_text") {
        content.secondary_button_text = v;
    }
    if let Some(v) = string_field(obj, "secondary_button_link") {
        content.secondary_button_link = v;
    }
    if let Some(v) = string_field(obj, "background_image") {
        content.background_image = v;
    }
    if let Some(stats) = sequence_field::<Stat>(obj, "stats") {
        content.stats = stats;
    }

    content
}

/// Merge an about payload with the default about content.
pub fn merge_about(remote: Option<&Value>, default: &AboutContent) -> AboutContent {
    let mut content = default.clone();
    let Some(obj) = as_object(remote) else {
        return content;
    };

    if let Some(v) = string_field(obj, "section_title") {
        content.section_title = v;
    }
    if let Some(v) = string_field(obj, "section_subtitle") {
        content.section_subtitle = v;
    }
    if let Some(v) = string_field(obj, "heading") {
        content.heading = v;
    }
    if let Some(v) = string_field(obj, "description") {
        content.description = v;
    }
    if let Some(v) = string_field(obj, "image") {
        content.image = v;
    }
    if let Some(features) = sequence_field::<Feature>(obj, "features") {
        content.features = features;
    }
    if let Some(stats) = sequence_field::<Stat>(obj, "stats") {
        content.stats = stats;
    }

    content
}

/// Merge a services payload (a top-level category array) with the default
/// catalog.
///
/// The category list is one sequence under the whole-unit rule: a payload
/// that fails to decode, is empty, or contains any malformed category yields
/// the default list in its entirety. A category whose own `services` list is
/// absent or empty counts as malformed — a renderable category always has at
/// least one service.
pub fn merge_services(remote: Option<&Value>, defaults: &[ServiceCategory]) -> Vec<ServiceCategory> {
    let Some(raw) = remote else {
        return defaults.to_vec();
    };
    let Some(decoded) = decode_structural(raw).into_value() else {
        return defaults.to_vec();
    };
    let Some(items) = decoded.as_array() else {
        return defaults.to_vec();
    };
    if items.is_empty() {
        return defaults.to_vec();
    }

    let mut categories = Vec::with_capacity(items.len());
    for item in items {
        match parse_category(item) {
            Some(category) => categories.push(category),
            None => return defaults.to_vec(),
        }
    }
    categories
}

/// Parse one remote category, defensively decoding its nested `services`
/// list (which has been observed string-encoded on its own).
fn parse_category(item: &Value) -> Option<ServiceCategory> {
    let obj = item.as_object()?;

    let mut owned = obj.clone();
    if let Some(decoded) = owned.get("services").map(decode_structural) {
        match decoded {
            Decoded::Value(v) => {
                owned.insert("services".to_string(), v);
            }
            Decoded::Absent => return None,
        }
    }

    let category: ServiceCategory = serde_json::from_value(Value::Object(owned)).ok()?;
    if category.services.is_empty() || category.title.trim().is_empty() {
        return None;
    }
    Some(category)
}

/// Merge a contact payload with the default contact content.
pub fn merge_contact(remote: Option<&Value>, default: &ContactContent) -> ContactContent {
    let mut content = default.clone();
    let Some(obj) = as_object(remote) else {
        return content;
    };

    if let Some(v) = string_field(obj, "section_title") {
        content.section_title = v;
    }
    if let Some(v) = string_field(obj, "section_subtitle") {
        content.section_subtitle = v;
    }
    if let Some(v) = string_field(obj, "heading") {
        content.heading = v;
    }
    if let Some(v) = string_field(obj, "description") {
        content.description = v;
    }
    if let Some(v) = string_field(obj, "map_embed") {
        content.map_embed = v;
    }

    if let Some(info) = object_field(obj, "contact_info") {
        if let Some(v) = string_field(&info, "email") {
            content.contact_info.email = v;
        }
        if let Some(v) = string_field(&info, "phone") {
            content.contact_info.phone = v;
        }
        if let Some(v) = string_field(&info, "address") {
            content.contact_info.address = v;
        }
    }

    if let Some(links) = object_field(obj, "social_links") {
        merge_social_links(&links, &mut content.social_links);
    }

    content
}

fn merge_social_links(obj: &Map<String, Value>, links: &mut SocialLinks) {
    if let Some(v) = string_field(obj, "instagram") {
        links.instagram = Some(v);
    }
    if let Some(v) = string_field(obj, "facebook") {
        links.facebook = Some(v);
    }
    if let Some(v) = string_field(obj, "whatsapp") {
        links.whatsapp = Some(v);
    }
    if let Some(v) = string_field(obj, "twitter") {
        links.twitter = Some(v);
    }
    if let Some(v) = string_field(obj, "linkedin") {
        links.linkedin = Some(v);
    }
}

// ── Field accessors ─────────────────────────────────────────────────────────

fn as_object(remote: Option<&Value>) -> Option<&Map<String, Value>> {
    remote.and_then(Value::as_object)
}

/// A present, non-blank string field. Blank counts as absent.
fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A whole sequence field: defensive decode, then strict deserialize, then
/// a non-empty check. Any failure means "use the default sequence".
fn sequence_field<T: DeserializeOwned>(obj: &Map<String, Value>, key: &str) -> Option<Vec<T>> {
    let decoded = decode_structural(obj.get(key)?).into_value()?;
    let parsed: Vec<T> = serde_json::from_value(decoded).ok()?;
    (!parsed.is_empty()).then_some(parsed)
}

/// A nested object field, defensively decoded.
fn object_field(obj: &Map<String, Value>, key: &str) -> Option<Map<String, Value>> {
    match decode_structural(obj.get(key)?).into_value()? {
        Value::Object(m) => Some(m),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DefaultCatalog;
    use serde_json::json;

    fn catalog() -> DefaultCatalog {
        DefaultCatalog::default()
    }

    #[test]
    fn test_absent_payload_yields_default_exactly() {
        let c = catalog();
        assert_eq!(merge_hero(None, &c.hero), c.hero);
        assert_eq!(merge_about(None, &c.about), c.about);
        assert_eq!(merge_services(None, &c.services), c.services);
        assert_eq!(merge_contact(None, &c.contact), c.contact);
    }

    #[test]
    fn test_malformed_payload_yields_default_exactly() {
        let c = catalog();
        for bad in [json!("not an object"), json!(42), json!([1, 2, 3]), json!({})] {
            assert_eq!(merge_hero(Some(&bad), &c.hero), c.hero, "payload {bad}");
        }
        for bad in [json!("garbage"), json!({"not": "an array"}), json!([])] {
            assert_eq!(merge_services(Some(&bad), &c.services), c.services, "payload {bad}");
        }
    }

    /// Partial hero payload with a stringly-encoded stats field: remote
    /// fields win, everything else stays default.
    #[test]
    fn test_hero_partial_payload_with_encoded_stats() {
        let c = catalog();
        let payload = json!({
            "title": "Raih Kesuksesan",
            "stats": "[{\"value\":\"10+\",\"label\":\"Mitra\"}]",
        });

        let merged = merge_hero(Some(&payload), &c.hero);
        assert_eq!(merged.title, "Raih Kesuksesan");
        assert_eq!(
            merged.stats,
            vec![Stat {
                value: "10+".to_string(),
                label: "Mitra".to_string()
            }]
        );
        // Every other field equals the default.
        assert_eq!(merged.badge_text, c.hero.badge_text);
        assert_eq!(merged.subtitle, c.hero.subtitle);
        assert_eq!(merged.description, c.hero.description);
        assert_eq!(merged.primary_button_text, c.hero.primary_button_text);
        assert_eq!(merged.background_image, c.hero.background_image);
    }

    #[test]
    fn test_blank_scalar_is_absent() {
        let c = catalog();
        let payload = json!({"title": "   ", "background_image": ""});
        let merged = merge_hero(Some(&payload), &c.hero);
        assert_eq!(merged.title, c.hero.title);
        assert_eq!(merged.background_image, c.hero.background_image);
    }

    #[test]
    fn test_empty_remote_sequence_falls_back_to_default() {
        let c = catalog();
        let merged = merge_hero(Some(&json!({"stats": []})), &c.hero);
        assert_eq!(merged.stats, c.hero.stats);

        let merged = merge_about(Some(&json!({"features": "[]"})), &c.about);
        assert_eq!(merged.features, c.about.features);
    }

    #[test]
    fn test_malformed_sequence_element_rejects_whole_sequence() {
        let c = catalog();
        // Second stat lacks a label — the whole remote list is rejected.
        let payload = json!({"stats": [{"value": "10+", "label": "Mitra"}, {"value": "5"}]});
        let merged = merge_hero(Some(&payload), &c.hero);
        assert_eq!(merged.stats, c.hero.stats);
    }

    #[test]
    fn test_merge_never_mutates_inputs() {
        let c = catalog();
        let payload = json!({"title": "Baru", "stats": []});
        let snapshot = payload.clone();
        let _ = merge_hero(Some(&payload), &c.hero);
        assert_eq!(payload, snapshot);
        assert_eq!(c.hero, catalog().hero);
    }

    /// Merging an already-merged section with its own default is a no-op.
    #[test]
    fn test_merge_is_idempotent() {
        let c = catalog();
        let payload = json!({
            "title": "Raih Kesuksesan",
            "stats": "[{\"value\":\"10+\",\"label\":\"Mitra\"}]",
        });
        let once = merge_hero(Some(&payload), &c.hero);
        let again = merge_hero(Some(&serde_json::to_value(&once).unwrap()), &c.hero);
        assert_eq!(once, again);

        let contact_payload = json!({"contact_info": {"email": "new@hibiscusefsya.com"}});
        let once = merge_contact(Some(&contact_payload), &c.contact);
        let again = merge_contact(Some(&serde_json::to_value(&once).unwrap()), &c.contact);
        assert_eq!(once, again);
    }

    #[test]
    fn test_contact_nested_merge_per_subfield() {
        let c = catalog();
        let payload = json!({
            "contact_info": {"email": "halo@hibiscusefsya.com"},
            "social_links": "{\"instagram\":\"https://instagram.com/hibiscusefsya\"}",
        });
        let merged = merge_contact(Some(&payload), &c.contact);

        assert_eq!(merged.contact_info.email, "halo@hibiscusefsya.com");
        // Untouched sub-fields keep their defaults.
        assert_eq!(merged.contact_info.phone, c.contact.contact_info.phone);
        assert_eq!(merged.contact_info.address, c.contact.contact_info.address);
        // Encoded social_links decodes and merges per channel.
        assert_eq!(
            merged.social_links.instagram.as_deref(),
            Some("https://instagram.com/hibiscusefsya")
        );
        assert_eq!(merged.social_links.whatsapp, c.contact.social_links.whatsapp);
    }

    #[test]
    fn test_services_taken_entirely_from_remote() {
        let c = catalog();
        let payload = json!([{
            "id": 9,
            "title": "Kuliner",
            "icon": "Sparkles",
            "services": [{"name": "Katering", "description": "Layanan katering"}],
        }]);
        let merged = merge_services(Some(&payload), &c.services);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].title, "Kuliner");
        assert_eq!(merged[0].services[0].name, "Katering");
        // serde defaults applied to omitted service fields
        assert!(merged[0].services[0].is_active);
        assert!(!merged[0].services[0].is_coming_soon);
    }

    #[test]
    fn test_services_category_with_encoded_service_list() {
        let c = catalog();
        let payload = json!([{
            "id": 1,
            "title": "Body Care",
            "services": "[{\"name\":\"Spa\",\"description\":\"Treatment spa\"}]",
        }]);
        let merged = merge_services(Some(&payload), &c.services);
        assert_eq!(merged[0].services[0].name, "Spa");
    }

    #[test]
    fn test_services_category_without_services_rejects_payload() {
        let c = catalog();
        let payload = json!([{"id": 1, "title": "Body Care", "services": []}]);
        assert_eq!(merge_services(Some(&payload), &c.services), c.services);
    }
}
