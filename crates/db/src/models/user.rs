//! User entity model and the public author projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub avatar: String,
    pub sign: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a user. Accounts normally arrive from the auth service;
/// this exists for provisioning scripts and tests.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub avatar: String,
    pub sign: String,
    pub role: String,
}

/// Author information shown next to a public video.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserInfo {
    pub uid: DbId,
    pub name: String,
    pub avatar: String,
    pub sign: String,
}
