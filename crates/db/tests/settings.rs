//! Integration tests for the settings singleton.

use divesite_core::settings::{HeroSlide, SocialLinks};
use divesite_db::create_memory_pool;
use divesite_db::repositories::SettingRepo;

fn slide(id: &str, headline: &str) -> HeroSlide {
    HeroSlide {
        id: id.to_string(),
        headline: headline.to_string(),
        image_url: format!("/uploads/hero-{id}.jpg"),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_get_creates_default_row_once() {
    let pool = create_memory_pool().await.unwrap();

    let first = SettingRepo::get(&pool).await.unwrap();
    assert_eq!(first.id, "main_settings");
    assert!(first.hero.0.is_empty());
    assert_eq!(first.experience.0.video_url, "");
    assert_eq!(first.social_links.0, SocialLinks::default());

    SettingRepo::get(&pool).await.unwrap();
    let rows = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn test_hero_update_touches_only_hero() {
    let pool = create_memory_pool().await.unwrap();
    let links = SocialLinks {
        instagram: "https://instagram.com/reef".to_string(),
        ..Default::default()
    };
    SettingRepo::update_social_links(&pool, &links).await.unwrap();

    let slides = vec![slide("1", "Dive Menjangan"), slide("2", "Night dives")];
    let updated = SettingRepo::update_hero(&pool, &slides).await.unwrap();

    assert_eq!(updated.hero.0, slides);
    assert_eq!(updated.social_links.0, links);
}

#[tokio::test]
async fn test_experience_video_only_keeps_image_and_other_documents() {
    let pool = create_memory_pool().await.unwrap();
    SettingRepo::update_hero(&pool, &[slide("1", "Dive Menjangan")]).await.unwrap();
    SettingRepo::update_experience(&pool, None, Some("/uploads/experience-1-1.jpg"))
        .await
        .unwrap();

    let updated = SettingRepo::update_experience(&pool, Some("https://youtu.be/reef"), None)
        .await
        .unwrap();

    assert_eq!(updated.experience.0.video_url, "https://youtu.be/reef");
    assert_eq!(updated.experience.0.image_url, "/uploads/experience-1-1.jpg");
    assert_eq!(updated.hero.0.len(), 1);
}

#[tokio::test]
async fn test_blank_video_url_keeps_stored_value() {
    let pool = create_memory_pool().await.unwrap();
    SettingRepo::update_experience(&pool, Some("https://youtu.be/reef"), None)
        .await
        .unwrap();

    let updated = SettingRepo::update_experience(&pool, Some("  "), None)
        .await
        .unwrap();
    assert_eq!(updated.experience.0.video_url, "https://youtu.be/reef");
}
