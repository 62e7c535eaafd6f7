//! Bridging CMS field naming to the record shape the resolver expects.
//!
//! CMS blog documents name their localized fields `blogTitle*`,
//! `blogIntro*`, `blogContent*`, their image `blogImage` and their id
//! `_id`. Renamed fields never overwrite a field the record already has.

use smilecare_core::content::ContentType;
use smilecare_core::language::LanguageCode;
use smilecare_core::record::ContentRecord;

/// Localized base renames for CMS blog documents.
const BLOG_BASES: [(&str, &str); 3] = [
    ("blogTitle", "title"),
    ("blogIntro", "excerpt"),
    ("blogContent", "content"),
];

/// Plain field renames for CMS blog documents.
const BLOG_FIELDS: [(&str, &str); 1] = [("blogImage", "imageUrl")];

/// Adapt a fetched record of `content_type` in place.
pub fn adapt(content_type: ContentType, record: &mut ContentRecord) {
    match content_type {
        ContentType::BlogPost => adapt_blog_post(record),
        ContentType::GalleryMedia => rename(record, "_id", "id"),
        _ => {}
    }
}

/// Adapt every record of a fetched list.
pub fn adapt_all(content_type: ContentType, records: &mut [ContentRecord]) {
    for record in records {
        adapt(content_type, record);
    }
}

fn adapt_blog_post(record: &mut ContentRecord) {
    for (from, to) in BLOG_BASES {
        rename(record, from, to);
        for lang in LanguageCode::ALL {
            rename(
                record,
                &format!("{from}{}", lang.suffix()),
                &format!("{to}{}", lang.suffix()),
            );
        }
    }
    for (from, to) in BLOG_FIELDS {
        rename(record, from, to);
    }
    rename(record, "_id", "id");
}

/// Move `from` to `to` unless `to` is already set.
fn rename(record: &mut ContentRecord, from: &str, to: &str) {
    let fields = record.fields_mut();
    if fields.contains_key(to) {
        return;
    }
    if let Some(value) = fields.remove(from) {
        fields.insert(to.to_string(), value);
    }
}
