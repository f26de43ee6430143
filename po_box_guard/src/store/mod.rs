use crate::settings::GuardSettings;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::warn;

/// Name of the single configuration record holding the guard's flags.
pub const SETTINGS_KEY: &str = "po_box_guard_settings";

/// The host platform's key-value settings API.
///
/// One record per key, each record a string-to-string props blob. The host is
/// responsible for durability across restarts; this crate only reads a record
/// per validation call and writes one per admin save. `Send + Sync` so a
/// single store instance can serve concurrent checkout requests.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<HashMap<String, String>>;
    fn set(&self, key: &str, props: HashMap<String, String>);
}

/// In-process store for hosts without their own settings backend, and for
/// tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<HashMap<String, String>> {
        self.records
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, props: HashMap<String, String>) {
        self.records
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), props);
    }
}

/// Reads the guard's settings snapshot for a validation call.
///
/// This path never fails: an absent record means the guard was never
/// configured and both flags take their defaults, and a malformed record is
/// logged and likewise replaced by defaults. Checkout must not be blocked by
/// operator-side data problems; strict parsing belongs to the admin save
/// path.
pub fn load_settings(store: &dyn SettingsStore) -> GuardSettings {
    match store.get(SETTINGS_KEY) {
        None => GuardSettings::default(),
        Some(props) => GuardSettings::from_props(&props).unwrap_or_else(|e| {
            warn!(
                "Stored settings record '{}' is malformed ({}); falling back to defaults",
                SETTINGS_KEY, e
            );
            GuardSettings::default()
        }),
    }
}
