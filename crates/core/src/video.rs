//! Video metadata rules and ownership checks.
//!
//! Provides title / description / tag validation and the authorization
//! decisions used by the modify, status, submit, and delete endpoints.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum title length in characters (not bytes).
pub const MAX_TITLE_CHARS: usize = 50;

/// Maximum description length in characters.
pub const MAX_DESC_CHARS: usize = 200;

/// Maximum number of tags on a video.
pub const MAX_TAGS: usize = 10;

/// Maximum length of a single tag in characters.
pub const MAX_TAG_CHARS: usize = 20;

/// Maximum search keyword length in characters.
pub const MAX_KEYWORD_CHARS: usize = 50;

/// Separator used when tags are stored as a single column.
pub const TAG_SEPARATOR: char = ',';

/// Message returned to the client when a title is rejected.
pub const TITLE_ERROR: &str = "title must be 1-50 characters";

/// Default window during which repeat views from one IP are not counted.
pub const DEFAULT_CLICK_WINDOW_SECS: i64 = 30 * 60;

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate a video title: non-blank after trimming, at most
/// [`MAX_TITLE_CHARS`] characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_TITLE_CHARS {
        return Err(CoreError::Validation(TITLE_ERROR.to_string()));
    }
    Ok(())
}

/// Validate an optional description against [`MAX_DESC_CHARS`].
pub fn validate_description(desc: &str) -> Result<(), CoreError> {
    if desc.chars().count() > MAX_DESC_CHARS {
        return Err(CoreError::Validation(format!(
            "description must be at most {MAX_DESC_CHARS} characters"
        )));
    }
    Ok(())
}

/// Normalize a comma separated tag string.
///
/// Entries are trimmed, empties dropped, duplicates removed (first occurrence
/// wins). Fails if more than [`MAX_TAGS`] remain or any tag is longer than
/// [`MAX_TAG_CHARS`].
pub fn normalize_tags(raw: &str) -> Result<String, CoreError> {
    let mut tags: Vec<&str> = Vec::new();
    for tag in raw.split(TAG_SEPARATOR).map(str::trim) {
        if tag.is_empty() || tags.contains(&tag) {
            continue;
        }
        if tag.chars().count() > MAX_TAG_CHARS {
            return Err(CoreError::Validation(format!(
                "tag '{tag}' exceeds {MAX_TAG_CHARS} characters"
            )));
        }
        tags.push(tag);
    }
    if tags.len() > MAX_TAGS {
        return Err(CoreError::Validation(format!(
            "a video may carry at most {MAX_TAGS} tags"
        )));
    }
    Ok(tags.join(","))
}

/// Trim and validate search keywords.
pub fn normalize_keywords(keywords: &str) -> Result<String, CoreError> {
    let trimmed = keywords.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_KEYWORD_CHARS {
        return Err(CoreError::Validation(format!(
            "keywords must be 1-{MAX_KEYWORD_CHARS} characters"
        )));
    }
    Ok(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

/// Returns the standard "video does not exist" error.
///
/// Used both for genuinely missing rows and for callers who are not allowed
/// to know the video exists.
pub fn video_not_found(id: DbId) -> CoreError {
    CoreError::VideoNotFound(id)
}

/// Require that `caller` authored the video, hiding it otherwise.
pub fn ensure_author(caller: DbId, author: DbId, video_id: DbId) -> Result<(), CoreError> {
    if caller != author {
        return Err(video_not_found(video_id));
    }
    Ok(())
}

/// Require that an uploaded link is attributed to `caller`.
///
/// `link_owner` is the user recorded for the link in the upload cache, or
/// `None` if the link is unknown or expired.
pub fn ensure_link_owner(
    caller: DbId,
    link: &str,
    link_owner: Option<DbId>,
) -> Result<(), CoreError> {
    if link_owner != Some(caller) {
        return Err(CoreError::InvalidLink(link.to_string()));
    }
    Ok(())
}

/// Decide whether `caller` may apply a metadata edit to a video.
///
/// Non-authors always see the video as missing. Authors may keep the current
/// cover; a different cover must have been uploaded by them.
pub fn authorize_modification(
    caller: DbId,
    video_id: DbId,
    author: DbId,
    current_cover: &str,
    new_cover: &str,
    new_cover_owner: Option<DbId>,
) -> Result<(), CoreError> {
    ensure_author(caller, author, video_id)?;
    if new_cover != current_cover {
        ensure_link_owner(caller, new_cover, new_cover_owner)?;
    }
    Ok(())
}
