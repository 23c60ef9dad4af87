//! Data-access layer for a songs catalog
//! Uses SQLite via sqlx; all operations round-trip to the store

mod error;
mod id;
mod models;
mod ops;
mod query;
mod repository;
mod schema;

pub use error::{Error, Result};
pub use models::*;
pub use repository::SongRepository;
