//! Repository for the `users` table.

use sqlx::PgPool;
use vidhub_core::types::DbId;

use crate::models::user::{CreateUser, User, UserInfo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, avatar, sign, role, created_at, updated_at";

/// Provides read access to users, plus an insert for provisioning.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, avatar, sign, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.avatar)
            .bind(&input.sign)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Public author information for display next to a video.
    pub async fn find_info(pool: &PgPool, id: DbId) -> Result<Option<UserInfo>, sqlx::Error> {
        sqlx::query_as::<_, UserInfo>(
            "SELECT id AS uid, username AS name, avatar, sign FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
