//! Contact section content.

use serde::{Deserialize, Serialize};

/// Contact copy, channel values, and social links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub heading: String,
    pub description: String,
    pub contact_info: ContactInfo,
    pub social_links: SocialLinks,
    /// Raw iframe embed markup for the location map. May be empty.
    #[serde(default)]
    pub map_embed: String,
}

/// Direct contact channels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ContactInfo {
    /// `mailto:` href for the email channel.
    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` href for the phone channel, with spaces stripped.
    pub fn phone_href(&self) -> String {
        format!("tel:{}", self.phone.replace(' ', ""))
    }
}

/// Social media profile URLs. Every channel is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}
