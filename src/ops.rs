//! Database operations, one module per entity

mod songs;

pub use songs::*;
