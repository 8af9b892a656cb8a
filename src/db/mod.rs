//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool setup and the queries the handlers need

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{AdminTier, DbAdmin, DbWord, NewAdmin};
pub use schema::SQLITE_INIT;
pub use sqlite::{AdminStorage, SqlitePool, connect};
