//! SQLite-backed service record store.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension, Row};

use seva_agent_core::{Error, RecordSource, Result, ServiceRecord};

/// Schema for the services table. Column order matches the record layout
/// used by the data loaders; list fields are JSON arrays.
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS services (
        id TEXT PRIMARY KEY,
        name_en TEXT,
        name_ta TEXT,
        description_en TEXT,
        description_ta TEXT,
        department TEXT,
        department_ta TEXT,
        requirements TEXT,
        requirements_ta TEXT,
        procedure TEXT,
        procedure_ta TEXT,
        fees TEXT,
        fees_ta TEXT,
        processing_time TEXT,
        contact TEXT,
        url TEXT
    )";

const SELECT_COLUMNS: &str = "id, name_en, name_ta, description_en, description_ta, \
     department, department_ta, requirements, requirements_ta, procedure, procedure_ta, \
     fees, fees_ta, processing_time, contact, url";

/// Thread-safe SQLite wrapper for the services table.
///
/// The connection is wrapped in a Mutex since rusqlite's Connection is not
/// Sync; reads are short and the corpus is small.
pub struct ServiceStore {
    conn: Mutex<Connection>,
}

impl ServiceStore {
    /// Open (or create) a store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)
            .map_err(|e| Error::Storage(format!("failed to open database: {e}")))?;

        conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")
            .map_err(|e| Error::Storage(format!("failed to set pragmas: {e}")))?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;

        tracing::info!(path = %path.display(), "Service store opened");

        Ok(store)
    }

    /// Open an in-memory store (for tests and loaders).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::Storage(format!("failed to open in-memory db: {e}")))?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(SCHEMA, [])
            .map_err(|e| Error::Storage(format!("failed to create schema: {e}")))?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| Error::Storage(format!("database lock poisoned: {e}")))
    }

    /// Fetch a single record by id. A stored row that fails validation
    /// (unparseable JSON lists, missing required bilingual fields) is a
    /// `MalformedRecord` error so the caller can flag it and fall back
    /// instead of rendering it.
    pub fn get_record(&self, id: &str) -> Result<Option<ServiceRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(&format!("SELECT {SELECT_COLUMNS} FROM services WHERE id = ?1"))
            .map_err(|e| Error::Storage(e.to_string()))?;

        let row: Option<RawRow> = stmt
            .query_row(params![id], |row| RawRow::from_row(row))
            .optional()
            .map_err(|e| Error::Storage(e.to_string()))?;

        match row {
            Some(raw) => Ok(Some(raw.into_record()?)),
            None => Ok(None),
        }
    }

    /// All valid records. Malformed rows are skipped with a warning rather
    /// than failing the whole load.
    pub fn list_records(&self) -> Result<Vec<ServiceRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(&format!("SELECT {SELECT_COLUMNS} FROM services ORDER BY rowid"))
            .map_err(|e| Error::Storage(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| RawRow::from_row(row))
            .map_err(|e| Error::Storage(e.to_string()))?;

        let mut records = Vec::new();
        for raw in rows {
            let raw = raw.map_err(|e| Error::Storage(e.to_string()))?;
            let id = raw.id.clone();
            match raw.into_record() {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(record_id = %id, error = %err, "Skipping malformed record");
                },
            }
        }

        Ok(records)
    }

    /// Insert or replace a record. Used by data loaders and tests.
    pub fn insert_record(&self, record: &ServiceRecord) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO services VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
            params![
                record.id,
                record.name_en,
                record.name_ta,
                record.description_en,
                record.description_ta,
                record.department,
                record.department_ta,
                serde_json::to_string(&record.requirements)?,
                serde_json::to_string(&record.requirements_ta)?,
                serde_json::to_string(&record.procedure)?,
                serde_json::to_string(&record.procedure_ta)?,
                record.fees,
                record.fees_ta,
                record.processing_time,
                record.contact,
                record.url,
            ],
        )
        .map_err(|e| Error::Storage(e.to_string()))?;
        Ok(())
    }

    /// Insert a raw row bypassing validation. Test/loader escape hatch for
    /// exercising the malformed-record path.
    pub fn insert_raw(&self, id: &str, requirements_json: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO services VALUES (?1, 'Name', 'பெயர்', 'Desc', 'விளக்கம்', \
             'Dept', 'துறை', ?2, '[]', '[]', '[]', 'Free', 'இலவசம்', NULL, '1800', 'https://x')",
            params![id, requirements_json],
        )
        .map_err(|e| Error::Storage(e.to_string()))?;
        Ok(())
    }

    pub fn record_count(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM services", [], |row| row.get(0))
            .map_err(|e| Error::Storage(e.to_string()))?;
        Ok(count as usize)
    }
}

impl RecordSource for ServiceStore {
    fn get_record(&self, id: &str) -> Result<Option<ServiceRecord>> {
        ServiceStore::get_record(self, id)
    }
}

/// Row as stored, before JSON fields are parsed and validated.
struct RawRow {
    id: String,
    name_en: Option<String>,
    name_ta: Option<String>,
    description_en: Option<String>,
    description_ta: Option<String>,
    department: Option<String>,
    department_ta: Option<String>,
    requirements: Option<String>,
    requirements_ta: Option<String>,
    procedure: Option<String>,
    procedure_ta: Option<String>,
    fees: Option<String>,
    fees_ta: Option<String>,
    processing_time: Option<String>,
    contact: Option<String>,
    url: Option<String>,
}

impl RawRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name_en: row.get(1)?,
            name_ta: row.get(2)?,
            description_en: row.get(3)?,
            description_ta: row.get(4)?,
            department: row.get(5)?,
            department_ta: row.get(6)?,
            requirements: row.get(7)?,
            requirements_ta: row.get(8)?,
            procedure: row.get(9)?,
            procedure_ta: row.get(10)?,
            fees: row.get(11)?,
            fees_ta: row.get(12)?,
            processing_time: row.get(13)?,
            contact: row.get(14)?,
            url: row.get(15)?,
        })
    }

    fn into_record(self) -> Result<ServiceRecord> {
        let id = self.id;

        let required = |field: &str, value: Option<String>| -> Result<String> {
            match value {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(Error::MalformedRecord {
                    id: id.clone(),
                    reason: format!("missing required field '{field}'"),
                }),
            }
        };

        let json_list = |field: &str, value: Option<String>| -> Result<Vec<String>> {
            let raw = value.unwrap_or_else(|| "[]".to_string());
            serde_json::from_str(&raw).map_err(|e| Error::MalformedRecord {
                id: id.clone(),
                reason: format!("field '{field}' is not a JSON string array: {e}"),
            })
        };

        Ok(ServiceRecord {
            name_en: required("name_en", self.name_en)?,
            name_ta: required("name_ta", self.name_ta)?,
            description_en: required("description_en", self.description_en)?,
            description_ta: required("description_ta", self.description_ta)?,
            department: self.department.unwrap_or_default(),
            department_ta: self.department_ta.unwrap_or_default(),
            requirements: json_list("requirements", self.requirements)?,
            requirements_ta: json_list("requirements_ta", self.requirements_ta)?,
            procedure: json_list("procedure", self.procedure)?,
            procedure_ta: json_list("procedure_ta", self.procedure_ta)?,
            fees: self.fees.unwrap_or_default(),
            fees_ta: self.fees_ta.unwrap_or_default(),
            processing_time: self.processing_time.filter(|t| !t.trim().is_empty()),
            contact: self.contact.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            id,
        })
    }
}
