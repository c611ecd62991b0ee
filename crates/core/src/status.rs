//! Review status codes shared by videos and resources.
//!
//! Stored as `SMALLINT` in the `videos.status` and `resources.status` columns.

/// Approved by a reviewer; visible to the public.
pub const AUDIT_APPROVED: i16 = 0;

/// Metadata registered, not yet submitted.
pub const CREATED_VIDEO: i16 = 100;

/// Submitted by the author and waiting for a reviewer.
pub const WAITING_REVIEW: i16 = 500;

/// Rejected by a reviewer.
pub const REVIEW_FAILED: i16 = 2000;

/// Every status value accepted by the database check constraint.
pub const ALL_STATUSES: &[i16] = &[AUDIT_APPROVED, CREATED_VIDEO, WAITING_REVIEW, REVIEW_FAILED];

/// Human-readable label for a status code, used in log lines and views.
pub fn status_label(status: i16) -> &'static str {
    match status {
        AUDIT_APPROVED => "approved",
        CREATED_VIDEO => "created",
        WAITING_REVIEW => "waiting_review",
        REVIEW_FAILED => "review_failed",
        _ => "unknown",
    }
}

/// Whether an author may still attach new resources to a video in `status`.
///
/// Once a video is queued for review or approved its resource set is frozen.
pub fn accepts_resources(status: i16) -> bool {
    matches!(status, CREATED_VIDEO | REVIEW_FAILED)
}
