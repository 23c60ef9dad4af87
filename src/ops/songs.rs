//! Song CRUD operations

use sqlx::{Pool, Sqlite};

use crate::error::{Error, Result};
use crate::id;
use crate::models::{NewSong, Song, SongSummary};
use crate::query::SelectBuilder;

/// Insert a new song, returns the generated id
pub async fn add_song(pool: &Pool<Sqlite>, song: NewSong) -> Result<String> {
    let id = id::song_id();

    let inserted = sqlx::query_scalar::<_, String>(
        r#"
        INSERT INTO songs (id, title, year, genre, performer, duration, album_id)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&id)
    .bind(&song.title)
    .bind(song.year)
    .bind(&song.genre)
    .bind(&song.performer)
    .bind(song.duration)
    .bind(&song.album_id)
    .fetch_optional(pool)
    .await?;

    inserted.ok_or(Error::Invariant("insert returned no id"))
}

/// Search song summaries with optional substring filters.
/// Matching is case-insensitive on both ends of the value; row order is
/// whatever the store returns.
pub async fn get_songs(
    pool: &Pool<Sqlite>,
    title: Option<&str>,
    performer: Option<&str>,
) -> Result<Vec<SongSummary>> {
    let songs = SelectBuilder::new("SELECT id, title, performer FROM songs")
        .contains("title", title)
        .contains("performer", performer)
        .fetch_all(pool)
        .await?;
    Ok(songs)
}

/// Get the full record for one song by exact id
pub async fn get_song_by_id(pool: &Pool<Sqlite>, id: &str) -> Result<Song> {
    let song = sqlx::query_as::<_, Song>(
        "SELECT id, title, year, genre, performer, duration, album_id FROM songs WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    song.ok_or(Error::NotFound)
}

/// Overwrite every mutable column of an existing song
pub async fn edit_song_by_id(pool: &Pool<Sqlite>, id: &str, song: NewSong) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE songs
        SET title = ?, year = ?, genre = ?, performer = ?, duration = ?, album_id = ?
        WHERE id = ?
        "#,
    )
    .bind(&song.title)
    .bind(song.year)
    .bind(&song.genre)
    .bind(&song.performer)
    .bind(song.duration)
    .bind(&song.album_id)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound);
    }
    Ok(())
}

/// Delete a song by id
pub async fn delete_song_by_id(pool: &Pool<Sqlite>, id: &str) -> Result<()> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound);
    }
    Ok(())
}
