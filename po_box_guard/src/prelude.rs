//! The `po_box_guard` prelude.

pub use crate::address::{AddressType, field_label};
pub use crate::admin::{SettingsField, save_settings, settings_form};
pub use crate::checkout::{
    AddressData, ErrorSink, VALIDATION_CODE, ValidationError, ValidationErrors, validate_addresses,
};
pub use crate::errors::GuardError;
pub use crate::hooks::{
    AFTER_CHECKOUT_VALIDATION, HookRegistry, ValidationHook, register_po_box_guard,
};
pub use crate::rules::{
    AddressRule,
    po_box::{PoBoxRule, contains_po_box},
};
pub use crate::settings::{
    DISABLE_BILLING_PO_BOX, DISABLE_SHIPPING_PO_BOX, FlagKey, GuardSettings, SettingsDef,
    settings_def,
};
pub use crate::store::{MemoryStore, SETTINGS_KEY, SettingsStore, load_settings};
