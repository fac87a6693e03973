//! The singleton settings row.

use divesite_core::settings::{ExperienceMedia, HeroSlide, SocialLinks};
use divesite_core::types::Timestamp;
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// The row from the `settings` table.
#[derive(Debug, Clone, FromRow)]
pub struct Setting {
    pub id: String,
    pub hero: Json<Vec<HeroSlide>>,
    pub experience: Json<ExperienceMedia>,
    pub social_links: Json<SocialLinks>,
    pub updated_at: Timestamp,
}

/// Public shape of the settings: the three documents, nothing else.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub hero: Vec<HeroSlide>,
    pub experience: ExperienceMedia,
    pub social_links: SocialLinks,
}

impl From<Setting> for SiteSettings {
    fn from(row: Setting) -> Self {
        Self {
            hero: row.hero.0,
            experience: row.experience.0,
            social_links: row.social_links.0,
        }
    }
}
