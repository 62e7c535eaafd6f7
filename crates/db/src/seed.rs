//! In-process seed data served when the store has nothing to offer.
//!
//! Only social media posts have a server-side fallback: the feed on the home
//! page is served from here when the store is not configured, unreachable, or
//! holds no active posts.

use chrono::Utc;

use crate::models::social_media_post::SocialMediaPost;

/// The three hardcoded social posts, in display order.
pub fn social_media_posts() -> Vec<SocialMediaPost> {
    let now = Utc::now();
    let post = |id: i64, platform: &str, url: &str, ro: &str, ru: &str, en: &str| {
        SocialMediaPost {
            id,
            platform: platform.to_string(),
            url: url.to_string(),
            thumbnail_url: None,
            caption: Some(en.to_string()),
            caption_ro: Some(ro.to_string()),
            caption_ru: Some(ru.to_string()),
            caption_en: Some(en.to_string()),
            display_order: id as i32,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    };

    vec![
        post(
            1,
            "instagram",
            "https://www.instagram.com/p/smilecare-whitening/",
            "Rezultatul albirii profesionale în doar o ședință",
            "Результат профессионального отбеливания за один сеанс",
            "Professional whitening results in a single visit",
        ),
        post(
            2,
            "tiktok",
            "https://www.tiktok.com/@smilecare/video/implant-day",
            "O zi din viața echipei noastre de implantologie",
            "Один день из жизни нашей команды имплантологов",
            "A day with our implantology team",
        ),
        post(
            3,
            "instagram",
            "https://www.instagram.com/p/smilecare-kids/",
            "Primele vizite ale celor mici, fără frică",
            "Первые визиты малышей без страха",
            "Fear-free first visits for little ones",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_posts_in_display_order() {
        let posts = social_media_posts();
        let platforms: Vec<_> = posts.iter().map(|p| p.platform.as_str()).collect();
        let orders: Vec<_> = posts.iter().map(|p| p.display_order).collect();
        assert_eq!(platforms, ["instagram", "tiktok", "instagram"]);
        assert_eq!(orders, [1, 2, 3]);
        assert!(posts.iter().all(|p| p.is_active));
    }
}
