//! Settings persistence tests
//!
//! Signature gating, record layout in storage and the menu actions that
//! edit settings through `ConfigHost`.

use rust_morse_input::config::{
    ConfigError, ConfigFault, RamStorage, CONFIG_SIGNATURE, RECORD_LEN,
};
use rust_morse_input::{Config, ConfigHost, ConfigStore, Language, LoadOutcome, MenuAction};

fn image_with(record: &[u8]) -> RamStorage<16> {
    let mut bytes = [0xFF; 16];
    bytes[..record.len()].copy_from_slice(record);
    RamStorage::from_bytes(bytes)
}

#[test]
fn test_fresh_store_has_factory_settings() {
    let store = ConfigStore::new(RamStorage::<16>::new());
    assert_eq!(*store.config(), Config::DEFAULT);
    assert!(!store.config().beep);
    assert!(store.config().capitalize);
    assert_eq!(store.config().language, Language::English);
}

#[test]
fn test_load_from_erased_storage_keeps_defaults() {
    let mut store = ConfigStore::new(RamStorage::<16>::new());
    assert_eq!(store.load(), Ok(LoadOutcome::Defaults));
    assert_eq!(*store.config(), Config::DEFAULT);
}

#[test]
fn test_foreign_signature_leaves_settings_untouched() {
    let mut store = ConfigStore::new(image_with(b"YYY\0\x01\x00\x01"));
    store.config_mut().beep = true;
    let before = *store.config();

    assert_eq!(store.load(), Ok(LoadOutcome::Defaults));
    assert_eq!(*store.config(), before);
}

#[test]
fn test_valid_record_is_adopted() {
    let mut store = ConfigStore::new(image_with(b"XXX\0\x01\x00\x01"));

    assert_eq!(store.load(), Ok(LoadOutcome::Loaded));
    assert_eq!(
        *store.config(),
        Config {
            beep: true,
            capitalize: false,
            language: Language::Russian,
        }
    );
}

#[test]
fn test_nonzero_flag_bytes_read_as_true() {
    let mut store = ConfigStore::new(image_with(b"XXX\0\x07\xFF\x00"));
    store.load().unwrap();
    assert!(store.config().beep);
    assert!(store.config().capitalize);
}

#[test]
fn test_unknown_language_code_survives_round_trip() {
    let mut store = ConfigStore::new(image_with(b"XXX\0\x00\x01\x05"));
    store.load().unwrap();
    assert_eq!(store.config().language, Language::Other(5));
    assert_eq!(store.config().language.name(), "");

    store.save().unwrap();
    assert_eq!(store.storage().as_bytes()[6], 5);
}

#[test]
fn test_save_writes_record_at_base() {
    let mut store = ConfigStore::new(RamStorage::<16>::new());
    store.set_config(Config {
        beep: true,
        capitalize: false,
        language: Language::Russian,
    });
    store.save().unwrap();

    let bytes = store.into_inner();
    let bytes = bytes.as_bytes();
    assert_eq!(&bytes[..4], &CONFIG_SIGNATURE);
    assert_eq!(&bytes[4..RECORD_LEN], &[1, 0, 1]);
    assert!(bytes[RECORD_LEN..].iter().all(|b| *b == 0xFF), "only the record is written");
}

#[test]
fn test_save_then_load_in_new_handle() {
    let mut store = ConfigStore::new(RamStorage::<16>::new());
    store.config_mut().beep = true;
    store.config_mut().language = Language::Russian;
    store.save().unwrap();

    let mut reopened = ConfigStore::new(store.into_inner());
    assert_eq!(reopened.load(), Ok(LoadOutcome::Loaded));
    assert!(reopened.config().beep);
    assert!(reopened.config().capitalize);
    assert_eq!(reopened.config().language, Language::Russian);
}

#[test]
fn test_record_at_custom_base() {
    let mut store = ConfigStore::with_base(RamStorage::<16>::new(), 8);
    store.config_mut().capitalize = false;
    store.save().unwrap();

    let bytes = *store.storage().as_bytes();
    assert_eq!(&bytes[..8], &[0xFF; 8]);
    assert_eq!(&bytes[8..12], &CONFIG_SIGNATURE);

    let mut reopened = ConfigStore::with_base(RamStorage::from_bytes(bytes), 8);
    assert_eq!(reopened.load(), Ok(LoadOutcome::Loaded));
    assert!(!reopened.config().capitalize);
}

#[test]
fn test_storage_too_small() {
    let mut store = ConfigStore::new(RamStorage::<4>::new());
    let expected = ConfigError::TooSmall {
        capacity: 4,
        required: RECORD_LEN,
    };

    assert_eq!(store.load(), Err(expected));
    assert_eq!(store.save(), Err(expected));
    assert_eq!(expected.fault(), ConfigFault::TooSmall);
}

#[test]
fn test_base_past_end_is_too_small() {
    let mut store = ConfigStore::with_base(RamStorage::<16>::new(), 12);
    assert_eq!(
        store.save(),
        Err(ConfigError::TooSmall {
            capacity: 16,
            required: 19,
        })
    );
}

#[test]
fn test_base_at_end_of_address_space_is_too_small() {
    let mut store = ConfigStore::with_base(RamStorage::<16>::new(), u32::MAX - 2);

    assert!(matches!(
        store.save(),
        Err(ConfigError::TooSmall { capacity: 16, .. })
    ));
    assert!(matches!(
        store.load(),
        Err(ConfigError::TooSmall { capacity: 16, .. })
    ));
    assert_eq!(store.storage().as_bytes(), &[0xFF; 16]);
}

#[test]
fn test_config_report() {
    let report = format!("{}", Config::DEFAULT);
    assert_eq!(
        report,
        "[CONFIG]\n  Is beep........: 0\n  Is capitalize..: 1\n  Language.......: English\n"
    );
}

#[test]
fn test_menu_actions_edit_and_persist() {
    let mut store = ConfigStore::new(RamStorage::<16>::new());

    MenuAction::ToggleBeep.perform(&mut store).unwrap();
    MenuAction::ToggleCapitalize.perform(&mut store).unwrap();
    MenuAction::CycleLanguage.perform(&mut store).unwrap();
    assert_eq!(
        *ConfigHost::config(&store),
        Config {
            beep: true,
            capitalize: false,
            language: Language::Russian,
        }
    );

    // Nothing hits storage until Save
    assert_eq!(store.storage().as_bytes(), &[0xFF; 16]);

    MenuAction::Save.perform(&mut store).unwrap();
    assert_eq!(&store.storage().as_bytes()[..RECORD_LEN], b"XXX\0\x01\x00\x01");
}

#[test]
fn test_cycle_language_wraps() {
    let mut store = ConfigStore::new(RamStorage::<16>::new());
    store.config_mut().language = Language::Other(9);

    MenuAction::CycleLanguage.perform(&mut store).unwrap();
    assert_eq!(store.config().language, Language::English);
    MenuAction::CycleLanguage.perform(&mut store).unwrap();
    MenuAction::CycleLanguage.perform(&mut store).unwrap();
    assert_eq!(store.config().language, Language::English);
}

#[test]
fn test_host_save_reports_fault() {
    let mut store = ConfigStore::new(RamStorage::<2>::new());
    assert_eq!(MenuAction::Save.perform(&mut store), Err(ConfigFault::TooSmall));
    assert_eq!(ConfigHost::load(&mut store), Err(ConfigFault::TooSmall));
}
