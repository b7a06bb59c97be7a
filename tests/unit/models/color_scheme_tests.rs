// Compatibility tests for the persisted color scheme ordinals
// Stored ordinals must keep meaning the same scheme across versions

use appearance_prefs::models::color_scheme::{ColorSchemeChoice, ForcedMode, COLOR_SCHEME_KEY};
use appearance_prefs::services::color_scheme::ColorSchemeService;
use appearance_prefs::services::preferences::{
    MemoryPreferenceStore, PreferenceStore, PreferenceValue,
};
use test_case::test_case;

#[test]
fn test_key_name_is_stable() {
    assert_eq!(COLOR_SCHEME_KEY, "ColorSchemeAutomatic");
}

#[test_case(0, ColorSchemeChoice::Automatic ; "zero is automatic")]
#[test_case(1, ColorSchemeChoice::Light ; "one is light")]
#[test_case(2, ColorSchemeChoice::Dark ; "two is dark")]
#[test_case(3, ColorSchemeChoice::Automatic ; "three falls back to automatic")]
#[test_case(-7, ColorSchemeChoice::Automatic ; "negative falls back to automatic")]
fn test_previously_stored_ordinal(ordinal: i64, expected: ColorSchemeChoice) {
    let store = MemoryPreferenceStore::new();
    store
        .set(COLOR_SCHEME_KEY, PreferenceValue::Int(ordinal))
        .unwrap();

    assert_eq!(ColorSchemeService::new(&store).current(), expected);
}

#[test]
fn test_every_state_reachable_from_every_state() {
    let store = MemoryPreferenceStore::new();
    let service = ColorSchemeService::new(&store);

    for from in ColorSchemeChoice::ALL {
        for to in ColorSchemeChoice::ALL {
            service.select(from).unwrap();
            service.select(to).unwrap();
            assert_eq!(service.current(), to, "{} -> {}", from, to);
        }
    }
}

#[test]
fn test_only_automatic_defers_to_the_system() {
    let forced: Vec<_> = ColorSchemeChoice::ALL
        .iter()
        .map(|choice| choice.preferred_mode())
        .collect();

    assert_eq!(forced, vec![None, Some(ForcedMode::Light), Some(ForcedMode::Dark)]);
}

#[test]
fn test_serde_names() {
    #[derive(serde::Serialize)]
    struct Wrapper {
        scheme: ColorSchemeChoice,
    }

    let text = toml::to_string(&Wrapper { scheme: ColorSchemeChoice::Dark }).unwrap();
    assert_eq!(text.trim(), "scheme = \"dark\"");
}
