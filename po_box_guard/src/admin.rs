//! Schema-only admin surface.
//!
//! Rendering belongs to the host platform; this module only describes the
//! two checkboxes and handles saves. `settings_form` gives a host everything
//! it needs to draw the page, `save_settings` validates and persists a
//! submission.

use crate::errors::GuardError;
use crate::settings::{GuardSettings, settings_def};
use crate::store::{SETTINGS_KEY, SettingsStore};
use std::collections::HashMap;
use tracing::debug;

/// One checkbox of the settings page, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsField {
    pub name: &'static str,
    pub label: &'static str,
    pub documentation: &'static str,
    pub checked: bool,
}

/// Describes the settings page: one entry per flag, carrying the currently
/// stored state (defaults when the record was never saved).
pub fn settings_form(store: &dyn SettingsStore) -> Vec<SettingsField> {
    let current = crate::store::load_settings(store);
    let props = current.to_props();

    settings_def()
        .flag_keys()
        .values()
        .map(|key| SettingsField {
            name: key.name,
            label: key.label,
            documentation: key.documentation,
            checked: props
                .get(key.name)
                .map(|v| v == "true")
                .unwrap_or(key.default_value),
        })
        .collect()
}

/// Persists a submitted settings form.
///
/// A key missing from `submitted` means its checkbox was unticked, so the
/// flag is stored as off. A malformed value is rejected and nothing is
/// written. Returns the snapshot that was saved.
pub fn save_settings(
    store: &dyn SettingsStore,
    submitted: &HashMap<String, String>,
) -> Result<GuardSettings, GuardError> {
    let settings = GuardSettings::from_props(submitted)?;
    store.set(SETTINGS_KEY, settings.to_props());
    debug!(
        "Saved settings record '{}': shipping={}, billing={}",
        SETTINGS_KEY, settings.disable_shipping_po_box, settings.disable_billing_po_box
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{DISABLE_BILLING_PO_BOX, DISABLE_SHIPPING_PO_BOX};
    use crate::store::MemoryStore;

    #[test]
    fn test_form_shows_defaults_before_first_save() {
        let store = MemoryStore::new();

        let form = settings_form(&store);

        assert_eq!(form.len(), 2);
        assert_eq!(form[0].name, DISABLE_SHIPPING_PO_BOX);
        assert_eq!(form[1].name, DISABLE_BILLING_PO_BOX);
        assert!(form.iter().all(|field| !field.checked));
        assert!(form.iter().all(|field| !field.label.is_empty()));
    }

    #[test]
    fn test_form_reflects_saved_state() {
        let store = MemoryStore::new();
        let mut submitted = HashMap::new();
        submitted.insert(DISABLE_BILLING_PO_BOX.to_string(), "true".to_string());
        save_settings(&store, &submitted).unwrap();

        let form = settings_form(&store);

        assert!(!form[0].checked);
        assert!(form[1].checked);
    }

    #[test]
    fn test_unticked_checkbox_turns_flag_off() {
        let store = MemoryStore::new();
        let mut both = HashMap::new();
        both.insert(DISABLE_SHIPPING_PO_BOX.to_string(), "true".to_string());
        both.insert(DISABLE_BILLING_PO_BOX.to_string(), "true".to_string());
        save_settings(&store, &both).unwrap();

        // Second submission omits the billing key: its checkbox was unticked.
        let mut shipping_only = HashMap::new();
        shipping_only.insert(DISABLE_SHIPPING_PO_BOX.to_string(), "true".to_string());
        let saved = save_settings(&store, &shipping_only).unwrap();

        assert!(saved.disable_shipping_po_box);
        assert!(!saved.disable_billing_po_box);
        assert_eq!(crate::store::load_settings(&store), saved);
    }

    #[test]
    fn test_malformed_submission_writes_nothing() {
        let store = MemoryStore::new();
        let mut good = HashMap::new();
        good.insert(DISABLE_SHIPPING_PO_BOX.to_string(), "true".to_string());
        save_settings(&store, &good).unwrap();

        let mut bad = HashMap::new();
        bad.insert(DISABLE_SHIPPING_PO_BOX.to_string(), "maybe".to_string());
        let result = save_settings(&store, &bad);

        assert!(matches!(result, Err(GuardError::InvalidFlag { .. })));
        // The previously saved record is untouched.
        assert!(crate::store::load_settings(&store).disable_shipping_po_box);
    }
}
