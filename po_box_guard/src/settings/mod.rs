use crate::address::AddressType;
use crate::errors::GuardError;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Settings key gating the PO Box check on shipping address lines.
pub const DISABLE_SHIPPING_PO_BOX: &str = "disable_shipping_po_box";
/// Settings key gating the PO Box check on billing address lines.
pub const DISABLE_BILLING_PO_BOX: &str = "disable_billing_po_box";

/// Metadata for a single settings flag: everything an admin surface needs to
/// render and document its checkbox.
#[derive(Debug, Clone)]
pub struct FlagKey {
    pub name: &'static str,
    pub label: &'static str,
    pub documentation: &'static str,
    pub default_value: bool,
}

/// The schema of the guard's stored settings record.
///
/// An `IndexMap` preserves declaration order, so an admin form generated from
/// this schema lists the flags in the order they are defined here: shipping
/// first, then billing.
#[derive(Debug)]
pub struct SettingsDef {
    flag_keys: IndexMap<&'static str, FlagKey>,
}

impl SettingsDef {
    pub fn find_key(&self, name: &str) -> Option<&FlagKey> {
        self.flag_keys.get(name)
    }

    pub fn flag_keys(&self) -> &IndexMap<&'static str, FlagKey> {
        &self.flag_keys
    }
}

static SETTINGS_DEF: Lazy<SettingsDef> = Lazy::new(|| {
    let mut flag_keys = IndexMap::with_capacity(2);
    flag_keys.insert(
        DISABLE_SHIPPING_PO_BOX,
        FlagKey {
            name: DISABLE_SHIPPING_PO_BOX,
            label: "Reject PO Box shipping addresses",
            documentation: "When enabled, checkout is blocked if either shipping \
                address line contains a PO Box address.",
            default_value: false,
        },
    );
    flag_keys.insert(
        DISABLE_BILLING_PO_BOX,
        FlagKey {
            name: DISABLE_BILLING_PO_BOX,
            label: "Reject PO Box billing addresses",
            documentation: "When enabled, checkout is blocked if either billing \
                address line contains a PO Box address.",
            default_value: false,
        },
    );
    SettingsDef { flag_keys }
});

/// The static two-flag schema.
pub fn settings_def() -> &'static SettingsDef {
    &SETTINGS_DEF
}

/// The guard's settings snapshot, read once per validation call.
///
/// Both flags default to `false`: an address type is only subject to the
/// PO Box check after an admin explicitly turns it on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuardSettings {
    pub disable_shipping_po_box: bool,
    pub disable_billing_po_box: bool,
}

impl GuardSettings {
    /// Parses the stored key-value record into a settings snapshot.
    ///
    /// A key absent from `props` takes its schema default. A present but
    /// malformed value is an `InvalidFlag` error; only `true`/`false`
    /// (any casing, surrounding whitespace ignored) are accepted.
    pub fn from_props(props: &HashMap<String, String>) -> Result<Self, GuardError> {
        Ok(Self {
            disable_shipping_po_box: parse_flag(props, DISABLE_SHIPPING_PO_BOX)?,
            disable_billing_po_box: parse_flag(props, DISABLE_BILLING_PO_BOX)?,
        })
    }

    /// Serializes the snapshot back into the stored key-value form.
    /// Both keys are always written, so a saved record never relies on
    /// absent-key defaulting.
    pub fn to_props(&self) -> HashMap<String, String> {
        HashMap::from([
            (
                DISABLE_SHIPPING_PO_BOX.to_string(),
                self.disable_shipping_po_box.to_string(),
            ),
            (
                DISABLE_BILLING_PO_BOX.to_string(),
                self.disable_billing_po_box.to_string(),
            ),
        ])
    }

    /// Whether the given address type is subject to the PO Box check.
    pub fn is_enabled(&self, address_type: AddressType) -> bool {
        match address_type {
            AddressType::Shipping => self.disable_shipping_po_box,
            AddressType::Billing => self.disable_billing_po_box,
        }
    }
}

fn parse_flag(props: &HashMap<String, String>, name: &'static str) -> Result<bool, GuardError> {
    let default = SETTINGS_DEF
        .find_key(name)
        .map(|key| key.default_value)
        .unwrap_or(false);

    match props.get(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .to_lowercase()
            .parse()
            .map_err(|_| GuardError::InvalidFlag {
                name: name.to_string(),
                message: format!("'{}' is not a boolean", raw),
            }),
    }
}
