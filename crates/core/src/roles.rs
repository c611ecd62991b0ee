//! Role names carried in the `role` claim of access tokens.

/// Regular account: uploads and manages its own videos.
pub const ROLE_USER: &str = "user";

/// Reviewer / administrator: may approve or reject submitted videos.
pub const ROLE_ADMIN: &str = "admin";
