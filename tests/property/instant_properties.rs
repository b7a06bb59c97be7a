// Property-based tests for the instant string encoding
// Random offsets must survive encode/decode unchanged

use appearance_prefs::models::instant::Instant;
use appearance_prefs::services::database::Database;
use appearance_prefs::services::preferences::{instant_binding, SqlitePreferenceStore};
use proptest::prelude::*;

proptest! {
    /// Property: any finite offset round-trips exactly through its text
    #[test]
    fn prop_finite_offsets_round_trip(offset in proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL | proptest::num::f64::ZERO) {
        let instant = Instant::from_offset(offset);
        let decoded = Instant::decode(&instant.encode());
        prop_assert_eq!(decoded.offset().to_bits(), offset.to_bits());
    }

    /// Property: millisecond timestamps within a few centuries of the epoch
    /// round-trip through the SQLite store
    #[test]
    fn prop_store_round_trip(millis in -10_000_000_000_000i64..10_000_000_000_000i64) {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        let store = SqlitePreferenceStore::new(&db);
        let binding = instant_binding("When");

        let instant = Instant::from_offset(millis as f64 / 1000.0);
        binding.set(&store, &instant).unwrap();
        prop_assert_eq!(binding.get(&store), instant);
    }

    /// Property: text that is not a number always decodes to the epoch
    #[test]
    fn prop_non_numeric_text_is_epoch(text in "[a-zA-Z ,;:/-]{0,24}") {
        prop_assume!(text.parse::<f64>().is_err());
        prop_assert_eq!(Instant::decode(&text), Instant::REFERENCE);
    }
}
