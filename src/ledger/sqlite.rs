//! SQLite-backed append-only emission ledger.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};

use crate::types::{CategoryTotal, EmissionDraft, EmissionRecord, RecordId};

use super::{EmissionLedger, LedgerError, LedgerResult, check_finite};

/// SQLite implementation of [`crate::ledger::EmissionLedger`].
///
/// Holds only the database path. Every operation opens its own connection
/// and closes it before returning, so each append or query is a separate
/// atomic unit against the file.
#[derive(Debug, Clone)]
pub struct SqliteLedger {
    path: PathBuf,
}

impl SqliteLedger {
    /// Points a ledger at `path` without touching the filesystem.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates the ledger at `path` and runs [`EmissionLedger::initialize`].
    pub fn open(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let mut ledger = Self::new(path);
        ledger.initialize()?;
        Ok(ledger)
    }

    /// Database file backing this ledger.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> LedgerResult<Connection> {
        Ok(Connection::open(&self.path)?)
    }
}

impl EmissionLedger for SqliteLedger {
    fn initialize(&mut self) -> LedgerResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = self.connect()?;
        conn.execute_batch(include_str!("schema.sql"))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        log::info!("emission ledger ready at {}", self.path.display());
        Ok(())
    }

    fn append(&mut self, draft: &EmissionDraft) -> LedgerResult<RecordId> {
        check_finite(draft)?;
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO emissions(category, activity, amount, emission) VALUES (?1, ?2, ?3, ?4)",
            params![draft.category, draft.activity, draft.amount, draft.emission],
        )?;
        let id = to_record_id(conn.last_insert_rowid())?;
        log::debug!(
            "appended record {id}: {}/{} amount={} emission={}",
            draft.category,
            draft.activity,
            draft.amount,
            draft.emission
        );
        Ok(id)
    }

    fn totals_by_category(&self) -> LedgerResult<Vec<CategoryTotal>> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT category, SUM(emission) FROM emissions GROUP BY category")?;

        let rows = stmt.query_map([], |row| {
            Ok(CategoryTotal {
                category: row.get(0)?,
                total: row.get(1)?,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        log::debug!("totals query returned {} categories", out.len());
        Ok(out)
    }

    fn records(&self) -> LedgerResult<Vec<EmissionRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, category, activity, amount, emission FROM emissions ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            Ok((
                id,
                EmissionDraft {
                    category: row.get(1)?,
                    activity: row.get(2)?,
                    amount: row.get(3)?,
                    emission: row.get(4)?,
                },
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (id, draft) = row?;
            out.push(EmissionRecord::from_draft(to_record_id(id)?, draft));
        }
        Ok(out)
    }
}

fn to_record_id(rowid: i64) -> LedgerResult<RecordId> {
    RecordId::try_from(rowid)
        .map_err(|_| LedgerError::Message(format!("invalid record id in store: {rowid}")))
}
