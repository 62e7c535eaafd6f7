//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!
//! JSON field names are camelCase (`titleRo`, `orderIndex`), columns are
//! snake_case.

use validator::ValidationError;

pub mod blog_post;
pub mod service;
pub mod social_media_post;
pub mod team_member;
pub mod testimonial;

/// True if any of the localized forms holds non-blank text.
pub(crate) fn any_text(forms: &[&Option<String>]) -> bool {
    forms
        .iter()
        .any(|form| form.as_deref().is_some_and(|s| !s.trim().is_empty()))
}

/// True if a patch provides at least one localized form and all of them
/// are blank. Forms left out of the patch keep their stored value.
pub(crate) fn blanks_every_provided(forms: &[&Option<String>]) -> bool {
    let mut provided = forms.iter().filter_map(|form| form.as_deref()).peekable();
    provided.peek().is_some() && provided.all(|s| s.trim().is_empty())
}

/// Shared error for a localized field whose every form is blank.
pub(crate) fn missing_localized(code: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some("at least one language variant must be provided".into());
    err
}
