//! Repository entry point - holds the connection pool
//! Delegates to ops modules for the actual queries

use std::path::Path;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use tracing::info;

use crate::error::Result;
use crate::models::{NewSong, Song, SongSummary};
use crate::{ops, schema};

/// Façade over the songs table; the pool is the only held state.
///
/// The pool is safe for concurrent use, so a repository can be cloned
/// and shared across in-flight operations freely.
#[derive(Debug, Clone)]
pub struct SongRepository {
    pool: Pool<Sqlite>,
}

impl SongRepository {
    /// Wrap an externally configured pool. The table is assumed to exist.
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Open (or create) a database file at the given path, run the
    /// migration, and wrap the resulting pool.
    pub async fn connect(db_path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await?;

        // WAL keeps concurrent reads from blocking on in-flight writes
        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await?;

        schema::run_migrations(&pool).await?;

        info!(path = %db_path.display(), "opened songs database");

        Ok(Self::new(pool))
    }

    /// Insert a new song; returns the generated id.
    pub async fn add_song(&self, song: NewSong) -> Result<String> {
        ops::add_song(&self.pool, song).await
    }

    /// Search song summaries by optional case-insensitive substring
    /// filters on title and performer. Both absent returns every row.
    pub async fn get_songs(
        &self,
        title: Option<&str>,
        performer: Option<&str>,
    ) -> Result<Vec<SongSummary>> {
        ops::get_songs(&self.pool, title, performer).await
    }

    /// Get the full record for one song.
    pub async fn get_song_by_id(&self, id: &str) -> Result<Song> {
        ops::get_song_by_id(&self.pool, id).await
    }

    /// Overwrite every mutable field of an existing song.
    pub async fn edit_song_by_id(&self, id: &str, song: NewSong) -> Result<()> {
        ops::edit_song_by_id(&self.pool, id, song).await
    }

    /// Delete a song. Deleting an id twice fails the second time.
    pub async fn delete_song_by_id(&self, id: &str) -> Result<()> {
        ops::delete_song_by_id(&self.pool, id).await
    }
}
