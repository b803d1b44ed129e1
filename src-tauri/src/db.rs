use rusqlite::{Connection, Result};
use std::path::Path;
use std::sync::Mutex;
use tauri::{AppHandle, Manager};

use crate::error::{AppError, AppResult};

pub struct Database {
    pub conn: Mutex<Connection>,
}

impl Database {
    pub fn new(app_handle: &AppHandle) -> AppResult<Self> {
        let app_dir = app_handle
            .path()
            .app_data_dir()
            .map_err(|e| AppError::Internal(format!("Failed to get app data dir: {}", e)))?;

        std::fs::create_dir_all(&app_dir)?;

        Ok(Self::open(&app_dir.join("hbs_admin.db"))?)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    pub fn initialize(&self) -> AppResult<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        conn.execute_batch(
            "
            -- One signed-in account per portal ('admin' or 'vendor')
            CREATE TABLE IF NOT EXISTS sessions (
                portal TEXT PRIMARY KEY,
                profile TEXT NOT NULL,
                created_at TEXT NOT NULL,
                expires_at TEXT NOT NULL
            );
            ",
        )?;

        Ok(())
    }
}

pub trait DatabaseExt {
    fn db(&self) -> &Database;
}

impl DatabaseExt for AppHandle {
    fn db(&self) -> &Database {
        self.state::<Database>().inner()
    }
}
