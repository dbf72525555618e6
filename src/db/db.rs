//! Core database connection handling.
//!
//! `Db` opens the SQLite file, enables foreign keys, and brings the schema
//! up to date before handing out the connection. The default location lives
//! under the platform data directory; tests and embedders can point
//! [`Db::open`] at any path for an isolated store.

use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "taskdeck.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at its default platform location.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(&db_file_path)
    }

    /// Opens the database at an explicit path, applying pending migrations.
    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
