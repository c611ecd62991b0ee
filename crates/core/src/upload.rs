//! Rules for user uploads (cover images and video files).
//!
//! An upload is stored under a generated name and handed back to the client
//! as a link. The link is what later shows up as a video's `cover` or a
//! resource's `url`, so link formatting lives here next to the file rules.

use crate::error::CoreError;

/// Default lifetime of an upload link in the tracking cache.
pub const DEFAULT_UPLOAD_LINK_TTL_HOURS: i64 = 48;

/// Accepted cover image extensions (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Accepted video extensions (lowercase).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "mkv"];

/// Maximum image upload size (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Maximum video upload size (500 MiB).
pub const MAX_VIDEO_BYTES: usize = 500 * 1024 * 1024;

/// The two kinds of upload the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Video,
}

impl UploadKind {
    /// Value stored in `upload_links.kind` and used as the storage sub-directory.
    pub fn as_str(self) -> &'static str {
        match self {
            UploadKind::Image => "image",
            UploadKind::Video => "video",
        }
    }

    fn extensions(self) -> &'static [&'static str] {
        match self {
            UploadKind::Image => IMAGE_EXTENSIONS,
            UploadKind::Video => VIDEO_EXTENSIONS,
        }
    }

    fn max_bytes(self) -> usize {
        match self {
            UploadKind::Image => MAX_IMAGE_BYTES,
            UploadKind::Video => MAX_VIDEO_BYTES,
        }
    }
}

/// Lowercased extension of `file_name`, or an empty string if there is none.
pub fn extension_of(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
        _ => String::new(),
    }
}

/// File name without its extension, used as a default resource title.
pub fn stem_of(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}

/// Validate an upload's extension and size, returning the normalized extension.
pub fn validate_upload(kind: UploadKind, file_name: &str, size: usize) -> Result<String, CoreError> {
    let ext = extension_of(file_name);
    if !kind.extensions().contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "Unsupported {} format '.{ext}'. Supported: {:?}",
            kind.as_str(),
            kind.extensions(),
        )));
    }
    if size == 0 {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }
    if size > kind.max_bytes() {
        return Err(CoreError::Validation(format!(
            "{} exceeds the {} byte limit",
            kind.as_str(),
            kind.max_bytes()
        )));
    }
    Ok(ext)
}

/// Build the public link for a stored file.
///
/// `base_url` is trimmed of trailing slashes so both `/static` and
/// `/static/` produce `/static/image/abc.png`.
pub fn public_link(base_url: &str, kind: UploadKind, stored_name: &str) -> String {
    format!(
        "{}/{}/{stored_name}",
        base_url.trim_end_matches('/'),
        kind.as_str()
    )
}
