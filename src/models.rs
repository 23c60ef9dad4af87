//! Row models for the songs table
//! These map directly to the SQLite columns

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full song record, returned by single-record lookup
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Generated identifier (`song-` prefix plus random token), immutable
    pub id: String,
    /// Song title
    pub title: String,
    /// Year released
    pub year: i64,
    /// Genre
    pub genre: String,
    /// Performer name
    pub performer: String,
    /// Duration in seconds, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Owning album, when the song belongs to one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
}

/// Reduced (id, title, performer) projection, returned by search
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct SongSummary {
    pub id: String,
    pub title: String,
    pub performer: String,
}

/// Input for creating a song; edits take the same shape because they
/// replace every mutable column, never patch
#[derive(Debug, Clone)]
pub struct NewSong {
    pub title: String,
    pub year: i64,
    pub genre: String,
    pub performer: String,
    pub duration: Option<i64>,
    pub album_id: Option<String>,
}
