//! Symbolic icon name resolution.
//!
//! Content references icons by short symbolic names (the admin UI stores
//! lucide-style identifiers). Rendering needs a concrete token, so the
//! mapping here is total: unknown names resolve to [`DEFAULT_ICON`] rather
//! than an error or a blank glyph.

/// Token used for any symbolic name the mapping does not know.
pub const DEFAULT_ICON: &str = "💡";

/// Resolve a symbolic icon name to a renderable token.
///
/// Covers the feature icons and the service-category tags. Lookup never
/// fails — anything unrecognized gets [`DEFAULT_ICON`].
pub fn resolve(name: &str) -> &'static str {
    lookup(name).unwrap_or(DEFAULT_ICON)
}

/// Whether a symbolic name has its own entry in the mapping.
pub fn is_known(name: &str) -> bool {
    lookup(name).is_some()
}

fn lookup(name: &str) -> Option<&'static str> {
    match name.trim() {
        "Shield" => Some("🛡️"),
        "Users" => Some("🤝"),
        "Zap" => Some("⚡"),
        "Award" => Some("🏆"),
        "Star" => Some("⭐"),
        "Heart" => Some("❤️"),
        "Lightbulb" => Some("💡"),
        // Service category tags
        "Sparkles" => Some("✨"),
        "Plane" => Some("✈️"),
        "Shirt" => Some("👕"),
        "Calculator" => Some("🧮"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(resolve("Shield"), "🛡️");
        assert_eq!(resolve("Users"), "🤝");
        assert_eq!(resolve("Plane"), "✈️");
        assert_eq!(resolve(" Zap "), "⚡");
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(resolve("Unicorn"), DEFAULT_ICON);
        assert_eq!(resolve(""), DEFAULT_ICON);
    }

    #[test]
    fn test_is_known() {
        assert!(is_known("Shield"));
        assert!(is_known("Lightbulb"));
        assert!(!is_known("Unicorn"));
        assert!(!is_known(""));
    }
}
