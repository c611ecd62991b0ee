//! Pure domain logic for the video service.
//!
//! Nothing in this crate touches the database or the network. Handlers and
//! repositories call into it for validation rules, status codes, and the
//! ownership decisions that gate mutations.

pub mod error;
pub mod pagination;
pub mod roles;
pub mod status;
pub mod types;
pub mod upload;
pub mod video;
