use rusqlite::OptionalExtension;

use super::{ObserverId, ObserverRegistry, PreferenceError, PreferenceObserver, PreferenceStore, PreferenceValue};
use crate::services::database::Database;

/// Preference store backed by the `preferences` table.
///
/// Values are kept as text next to their kind; doubles are written with the
/// round-tripping `Display` form so they read back bit-exact.
pub struct SqlitePreferenceStore<'a> {
    db: &'a Database,
    observers: ObserverRegistry,
}

impl<'a> SqlitePreferenceStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self {
            db,
            observers: ObserverRegistry::new(),
        }
    }

    /// All stored keys, sorted
    pub fn keys(&self) -> Result<Vec<String>, PreferenceError> {
        let conn = self.db.connection();
        let mut stmt = conn.prepare("SELECT key FROM preferences ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}

fn value_to_row(value: &PreferenceValue) -> String {
    match value {
        PreferenceValue::Bool(flag) => String::from(if *flag { "1" } else { "0" }),
        other => other.to_string(),
    }
}

fn row_to_value(key: &str, kind: String, value: String) -> Result<PreferenceValue, PreferenceError> {
    let parsed = match kind.as_str() {
        "bool" => match value.as_str() {
            "1" => Some(PreferenceValue::Bool(true)),
            "0" => Some(PreferenceValue::Bool(false)),
            _ => None,
        },
        "int" => value.parse().ok().map(PreferenceValue::Int),
        "double" => value.parse().ok().map(PreferenceValue::Double),
        "text" => return Ok(PreferenceValue::Text(value)),
        _ => None,
    };

    parsed.ok_or_else(|| PreferenceError::Corrupt {
        key: key.to_string(),
        kind,
        value,
    })
}

impl PreferenceStore for SqlitePreferenceStore<'_> {
    fn get(&self, key: &str) -> Result<Option<PreferenceValue>, PreferenceError> {
        let row: Option<(String, String)> = self
            .db
            .connection()
            .query_row(
                "SELECT kind, value FROM preferences WHERE key = ?1",
                [key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        row.map(|(kind, value)| row_to_value(key, kind, value))
            .transpose()
    }

    fn set(&self, key: &str, value: PreferenceValue) -> Result<(), PreferenceError> {
        self.db.connection().execute(
            "INSERT INTO preferences (key, kind, value, updated_at)
             VALUES (?1, ?2, ?3, CURRENT_TIMESTAMP)
             ON CONFLICT(key) DO UPDATE SET
                 kind = excluded.kind,
                 value = excluded.value,
                 updated_at = CURRENT_TIMESTAMP",
            (key, value.kind(), value_to_row(&value)),
        )?;

        log::debug!("Preference '{}' set to {}", key, value);
        self.observers.notify(key, Some(&value));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        let deleted = self
            .db
            .connection()
            .execute("DELETE FROM preferences WHERE key = ?1", [key])?;

        if deleted > 0 {
            log::debug!("Preference '{}' removed", key);
            self.observers.notify(key, None);
        }
        Ok(())
    }

    fn observe(&self, key: &str, observer: PreferenceObserver) -> ObserverId {
        self.observers.register(key, observer)
    }

    fn unobserve(&self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }
}
