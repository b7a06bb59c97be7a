// Test fixtures - reusable test data
// Provides consistent dates and databases across integration tests

#![allow(dead_code)]

use appearance_prefs::services::database::Database;
use chrono::{DateTime, TimeZone, Utc};
use std::path::{Path, PathBuf};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// The reference epoch, 2001-01-01 at midnight UTC
    pub fn reference_epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap()
    }

    /// May 25, 2023 at 09:41:07 UTC
    pub fn may_25_2023() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 5, 25, 9, 41, 7).unwrap()
    }

    /// Feb 29, 2024 at noon UTC (leap year)
    pub fn leap_day_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap()
    }

    /// Jul 20, 1969 at 20:17:40 UTC, well before the reference epoch
    pub fn moon_landing() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 40).unwrap()
    }
}

/// Path of a database file inside `dir`
pub fn database_path(dir: &Path) -> PathBuf {
    dir.join("preferences.db")
}

/// Open a database at `path` with the schema in place
pub fn open_database(path: &Path) -> Database {
    let db = Database::new(path.to_str().unwrap()).expect("Failed to open database");
    db.initialize_schema().expect("Failed to initialize schema");
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_dates_are_ordered() {
        assert!(dates::moon_landing() < dates::reference_epoch());
        assert!(dates::reference_epoch() < dates::may_25_2023());
        assert!(dates::may_25_2023() < dates::leap_day_2024());
    }
}
