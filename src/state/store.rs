use rusqlite::{Connection, OptionalExtension};
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};

/// Key under which the gate result is persisted
pub const GATE_PASSED_KEY: &str = "gatePassed";

/// The Store is the gallery's small persistent key/value table.
/// It currently holds a single flag: whether the entry gate was ever passed.
pub struct Store {
    conn: Connection,
    db_path: Option<PathBuf>,
}

impl Store {
    /// Open the store in the user's data directory:
    /// - Linux: ~/.local/share/moments/moments.db
    /// - macOS: ~/Library/Application Support/moments/moments.db
    /// - Windows: %APPDATA%\moments\moments.db
    pub fn open_default() -> Result<Self> {
        let db_path = Self::default_path()?;

        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Self::open(&db_path)
    }

    /// Open or create a store at an explicit path
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        tracing::info!("📁 Store opened at: {}", db_path.display());

        let store = Store {
            conn,
            db_path: Some(db_path.to_path_buf()),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Session-only store, used when the on-disk one cannot be opened
    pub fn open_in_memory() -> Result<Self> {
        let store = Store {
            conn: Connection::open_in_memory()?,
            db_path: None,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn default_path() -> Result<PathBuf> {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .ok_or(GalleryError::NoDataDir)?;

        path.push("moments");
        path.push("moments.db");
        Ok(path)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key     TEXT PRIMARY KEY,
                value   TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Location of the database file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    /// True only when the flag holds exactly "true"
    pub fn gate_passed(&self) -> Result<bool> {
        Ok(self.get(GATE_PASSED_KEY)?.as_deref() == Some("true"))
    }

    /// Record a successful gate check. Safe to call repeatedly.
    pub fn mark_gate_passed(&self) -> Result<()> {
        self.set(GATE_PASSED_KEY, "true")
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("db_path", &self.db_path)
            .finish()
    }
}
