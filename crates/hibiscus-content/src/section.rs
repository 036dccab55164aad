//! Page section identifiers.
//!
//! Each section owns one read endpoint on the admin API and one hydration
//! lifecycle. The set is closed — the page has exactly these four regions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One named region of the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    About,
    Services,
    Contact,
}

impl Section {
    /// All sections, in page order.
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Services,
        Section::Contact,
    ];

    /// Path of this section's read endpoint, relative to the API base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Section::Hero => "/hero.php",
            Section::About => "/about.php",
            Section::Services => "/services.php",
            Section::Contact => "/contact.php",
        }
    }

    /// Lowercase name for logs and CLI arguments.
    pub fn name(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known section.
#[derive(Debug, thiserror::Error)]
#[error("unknown section: {0:?} (expected hero, about, services, or contact)")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hero" => Ok(Section::Hero),
            "about" => Ok(Section::About),
            "services" => Ok(Section::Services),
            "contact" => Ok(Section::Contact),
            _ => Err(UnknownSection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(Section::Hero.endpoint(), "/hero.php");
        assert_eq!(Section::Contact.endpoint(), "/contact.php");
    }

    #[test]
    fn test_parse() {
        assert_eq!("hero".parse::<Section>().unwrap(), Section::Hero);
        assert_eq!(" Services ".parse::<Section>().unwrap(), Section::Services);
        assert!("footer".parse::<Section>().is_err());
    }
}
