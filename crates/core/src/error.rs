use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The video is missing, or the caller may not know it exists.
    #[error("Video {0} does not exist")]
    VideoNotFound(DbId),

    #[error("Video {0} has no resources")]
    NoResources(DbId),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// An uploaded file link that is unknown, expired, or owned by someone else.
    #[error("Invalid file link: {0}")]
    InvalidLink(String),

    #[error("Partition {0} is not a sub-partition")]
    UnknownPartition(DbId),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
