//! Site-wide settings documents (hero slides, experience media, social links).
//!
//! The settings live in a single row keyed by [`SETTINGS_ID`]. Each document
//! is stored in its own JSON column so that updating one never rewrites the
//! others.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::validation::non_blank;

/// Fixed primary key of the singleton settings row.
pub const SETTINGS_ID: &str = "main_settings";

/// One slide of the landing-page hero carousel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSlide {
    #[serde(deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub headline: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub subheadline: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub cta: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub image_url: String,
}

/// `null` reads as an empty string, the same as a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Media shown in the "experience" section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceMedia {
    pub video_url: String,
    pub image_url: String,
}

impl ExperienceMedia {
    /// Overlay the supplied values on the current document.
    ///
    /// A blank or absent `video_url` keeps the stored one; `image_url` is only
    /// replaced when a new upload produced a path.
    pub fn merged(&self, video_url: Option<&str>, image_url: Option<&str>) -> Self {
        Self {
            video_url: non_blank(video_url)
                .map(str::to_string)
                .unwrap_or_else(|| self.video_url.clone()),
            image_url: image_url
                .map(str::to_string)
                .unwrap_or_else(|| self.image_url.clone()),
        }
    }
}

/// Social network profile links shown in the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub instagram: String,
    pub facebook: String,
    pub twitter: String,
    pub youtube: String,
}

/// Parse a hero update body. The body must be a JSON array of slides.
pub fn parse_hero_slides(body: serde_json::Value) -> Result<Vec<HeroSlide>, CoreError> {
    if !body.is_array() {
        return Err(CoreError::Validation("Invalid data format.".into()));
    }
    serde_json::from_value(body)
        .map_err(|e| CoreError::Validation(format!("Invalid data format: {e}")))
}

/// Parse a social links update body. The body must be a JSON object.
pub fn parse_social_links(body: serde_json::Value) -> Result<SocialLinks, CoreError> {
    if !body.is_object() {
        return Err(CoreError::Validation("Invalid data format.".into()));
    }
    serde_json::from_value(body)
        .map_err(|e| CoreError::Validation(format!("Invalid data format: {e}")))
}
