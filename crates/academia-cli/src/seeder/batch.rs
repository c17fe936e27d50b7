//! Multi-value INSERT shared by every seeder.

use sqlx::query_builder::Separated;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

/// Rows per INSERT statement. Keeps the bind count far below the Postgres limit.
pub const BATCH_SIZE: usize = 500;

/// A generated row that knows its target table and how to bind itself.
pub trait SeedRow: Sync {
    const TABLE: &'static str;
    const COLUMNS: &'static str;

    fn bind<'args>(&'args self, row: Separated<'_, 'args, Postgres, &'static str>);
}

/// Inserts `rows` in chunks inside a single transaction and returns the new ids
/// in insertion order.
pub async fn insert_batch<R: SeedRow>(db: &PgPool, rows: &[R]) -> anyhow::Result<Vec<Uuid>> {
    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(rows.len());

    for chunk in rows.chunks(BATCH_SIZE) {
        let mut builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("INSERT INTO {} ({}) ", R::TABLE, R::COLUMNS));
        builder.push_values(chunk, |row, seed| seed.bind(row));
        builder.push(" RETURNING id");

        let chunk_ids: Vec<Uuid> = builder.build_query_scalar().fetch_all(&mut *tx).await?;
        ids.extend(chunk_ids);
    }

    tx.commit().await?;
    Ok(ids)
}

/// Short random tag appended to generated names so repeated runs stay unique.
pub fn run_tag() -> String {
    let mut tag = Uuid::new_v4().simple().to_string();
    tag.truncate(6);
    tag
}
