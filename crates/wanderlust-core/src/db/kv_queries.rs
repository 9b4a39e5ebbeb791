//! Key-value reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

impl super::Database {
    /// Reads the value stored under `key`.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read value")
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value, now])
            .db_context("Failed to write value")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::super::Database;

    #[test]
    fn test_set_then_get() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut db = Database::new(temp_dir.path().join("kv.db")).expect("Failed to open db");

        assert_eq!(db.get_value("missing").unwrap(), None);

        db.set_value("k", "[\"1\"]").unwrap();
        assert_eq!(db.get_value("k").unwrap().as_deref(), Some("[\"1\"]"));

        db.set_value("k", "[]").unwrap();
        assert_eq!(db.get_value("k").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("kv.db");
        {
            let mut db = Database::new(&path).expect("Failed to open db");
            db.set_value("savedDestinations", "[\"3\"]").unwrap();
        }
        let db = Database::new(&path).expect("Failed to reopen db");
        assert_eq!(
            db.get_value("savedDestinations").unwrap().as_deref(),
            Some("[\"3\"]")
        );
    }
}
