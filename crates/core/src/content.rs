//! Content types served by the site.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every kind of content the site renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    BlogPost,
    TeamMember,
    Testimonial,
    Service,
    GalleryMedia,
    SocialMediaPost,
}

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        ContentType::BlogPost,
        ContentType::TeamMember,
        ContentType::Testimonial,
        ContentType::Service,
        ContentType::GalleryMedia,
        ContentType::SocialMediaPost,
    ];

    /// URL path segment of the resource, e.g. `blog-posts`.
    pub fn resource(self) -> &'static str {
        match self {
            ContentType::BlogPost => "blog-posts",
            ContentType::TeamMember => "team-members",
            ContentType::Testimonial => "testimonials",
            ContentType::Service => "services",
            ContentType::GalleryMedia => "gallery",
            ContentType::SocialMediaPost => "social-media-posts",
        }
    }

    /// Human-readable singular name used in error messages.
    pub fn entity_name(self) -> &'static str {
        match self {
            ContentType::BlogPost => "Blog post",
            ContentType::TeamMember => "Team member",
            ContentType::Testimonial => "Testimonial",
            ContentType::Service => "Service",
            ContentType::GalleryMedia => "Gallery item",
            ContentType::SocialMediaPost => "Social media post",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resources_are_unique() {
        let mut resources: Vec<_> = ContentType::ALL.iter().map(|t| t.resource()).collect();
        resources.sort_unstable();
        resources.dedup();
        assert_eq!(resources.len(), ContentType::ALL.len());
    }

    #[test]
    fn entity_names_match_api_messages() {
        assert_eq!(ContentType::BlogPost.entity_name(), "Blog post");
        assert_eq!(ContentType::SocialMediaPost.entity_name(), "Social media post");
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&ContentType::TeamMember).unwrap();
        assert_eq!(json, "\"team-member\"");
    }
}
