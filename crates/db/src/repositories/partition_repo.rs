//! Repository for the `partitions` table.

use sqlx::PgPool;
use vidhub_core::types::DbId;

use crate::models::partition::Partition;

const COLUMNS: &str = "id, content, parent_id, created_at";

pub struct PartitionRepo;

impl PartitionRepo {
    /// List every partition, parents first, then by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Partition>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM partitions
             ORDER BY parent_id NULLS FIRST, content"
        );
        sqlx::query_as::<_, Partition>(&query).fetch_all(pool).await
    }

    /// Whether `id` names a sub-partition (a partition with a parent).
    pub async fn is_subpartition(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM partitions WHERE id = $1 AND parent_id IS NOT NULL)",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }
}
