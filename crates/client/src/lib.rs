//! Content client for the SmileCare site.
//!
//! Fetches content lists from the internal API and the external CMS, picks
//! between fetched and bundled static records per content type, and turns
//! the effective records into localized view models.

pub mod adapter;
pub mod config;
pub mod fallback;
pub mod fetcher;
pub mod loader;
pub mod views;
