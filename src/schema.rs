//! Songs table migration

use sqlx::{Pool, Sqlite};

use crate::error::Result;

/// Create the songs table and its search indexes if missing.
pub(crate) async fn run_migrations(pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            year INTEGER NOT NULL,
            genre TEXT NOT NULL,
            performer TEXT NOT NULL,
            duration INTEGER,
            album_id TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_songs_title ON songs(title);
        CREATE INDEX IF NOT EXISTS idx_songs_performer ON songs(performer);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
