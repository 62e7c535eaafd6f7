//! Request handlers, one module per content resource.
//!
//! Path identifiers are taken as raw strings and parsed here: an id that is
//! not a base-10 integer can never match a row, so it is reported as 404
//! like any other missing record.

pub mod blog_posts;
pub mod services;
pub mod social_media_posts;
pub mod team_members;
pub mod testimonials;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use smilecare_core::content::ContentType;
use smilecare_core::error::CoreError;
use smilecare_core::types::DbId;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Parse a numeric path identifier, mapping failures to 404.
pub(crate) fn parse_id(raw: &str, content_type: ContentType) -> AppResult<DbId> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| not_found(content_type))
}

pub(crate) fn not_found(content_type: ContentType) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: content_type.entity_name(),
    })
}

/// Unwrap and validate a JSON write body.
///
/// Malformed JSON, shape mismatches and validation failures all produce the
/// same generic 400 message; details go to the log only.
pub(crate) fn validated_body<T: Validate>(
    payload: Result<Json<T>, JsonRejection>,
    content_type: ContentType,
) -> AppResult<T> {
    let invalid = || {
        AppError::BadRequest(format!(
            "Invalid {} data",
            content_type.entity_name().to_lowercase()
        ))
    };

    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(resource = %content_type, error = %rejection, "Rejected write body");
        invalid()
    })?;

    body.validate().map_err(|errors| {
        tracing::debug!(resource = %content_type, error = %errors, "Write body failed validation");
        invalid()
    })?;

    Ok(body)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn ids_are_base_ten() {
        assert_eq!(parse_id("42", ContentType::BlogPost).unwrap(), 42);
        assert_matches!(
            parse_id("0x2a", ContentType::BlogPost),
            Err(AppError::Core(CoreError::NotFound { entity: "Blog post" }))
        );
        assert_matches!(parse_id("abc", ContentType::Service), Err(AppError::Core(_)));
        assert_matches!(parse_id("", ContentType::Service), Err(AppError::Core(_)));
    }
}
