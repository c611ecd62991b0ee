//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - Request payloads (`Deserialize`, validated with `validator`) where the
//!   HTTP shape differs from the insert shape

pub mod partition;
pub mod resource;
pub mod upload_link;
pub mod user;
pub mod video;
