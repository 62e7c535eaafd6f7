//! Domain core for the SmileCare clinic site.
//!
//! Pure, I/O-free building blocks shared by the API server and the content
//! client: language codes, content records, the localized field resolver,
//! and the source selector that chooses between fetched and bundled content.

pub mod content;
pub mod error;
pub mod language;
pub mod localize;
pub mod record;
pub mod selection;
pub mod types;
