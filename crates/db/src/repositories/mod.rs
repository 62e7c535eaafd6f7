//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod blog_post_repo;
pub mod service_repo;
pub mod social_media_post_repo;
pub mod team_member_repo;
pub mod testimonial_repo;

pub use blog_post_repo::BlogPostRepo;
pub use service_repo::ServiceRepo;
pub use social_media_post_repo::SocialMediaPostRepo;
pub use team_member_repo::TeamMemberRepo;
pub use testimonial_repo::TestimonialRepo;
