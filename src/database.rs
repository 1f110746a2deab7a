use crate::model::NationalityPrediction;
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;

/// SQLite store for saved nationality predictions.
///
/// Each operation opens its own `Database` and drops it when done.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("Cannot open database {}", path.display()))?;
        Ok(Self { conn })
    }

    /// Open the file (creating it if absent) and make sure the table exists.
    pub fn initialize(path: &Path) -> Result<()> {
        let db = Self::open(path)?;
        db.init_tables()
    }

    fn init_tables(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS NationalityResults (
                     Id INTEGER PRIMARY KEY AUTOINCREMENT,
                     Name TEXT NOT NULL,
                     CountryCode TEXT NOT NULL,
                     Probability REAL NOT NULL
                 );",
            )
            .context("Failed to create NationalityResults table")?;
        Ok(())
    }

    /// Append one prediction row. Returns the assigned id.
    pub fn insert_prediction(&self, name: &str, country_code: &str, probability: f64) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO NationalityResults (Name, CountryCode, Probability) VALUES (?1, ?2, ?3)",
                params![name, country_code, probability],
            )
            .context("Failed to save prediction")?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All saved rows in insertion order.
    pub fn all_predictions(&self) -> Result<Vec<NationalityPrediction>> {
        let mut stmt = self.conn.prepare(
            "SELECT Id, Name, CountryCode, Probability FROM NationalityResults ORDER BY Id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(NationalityPrediction {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    country_code: row.get(2)?,
                    probability: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to read saved predictions")?;
        Ok(rows)
    }
}
