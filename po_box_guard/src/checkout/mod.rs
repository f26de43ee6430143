use crate::address::{AddressType, field_label};
use crate::rules::AddressRule;
use crate::rules::po_box::PoBoxRule;
use crate::settings::GuardSettings;
use std::collections::HashMap;
use tracing::debug;

/// Submitted checkout fields, keyed by field name. Owned by the host
/// pipeline; read-only here.
pub type AddressData = HashMap<String, String>;

/// Error code attached to every rejection this crate appends.
pub const VALIDATION_CODE: &str = "validation";

/// Append-only sink of `(code, message)` validation failures, owned by the
/// host checkout pipeline. This crate only ever appends.
pub trait ErrorSink {
    fn add(&mut self, code: &str, message: String);
}

/// A single accumulated validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub code: String,
    pub message: String,
}

/// Vec-backed `ErrorSink` for hosts without their own collector, and for
/// tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[ValidationError] {
        &self.entries
    }

    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }
}

impl ErrorSink for ValidationErrors {
    fn add(&mut self, code: &str, message: String) {
        self.entries.push(ValidationError {
            code: code.to_string(),
            message,
        });
    }
}

/// Checks the submitted address lines against the PO Box rule and appends one
/// error per offending field.
///
/// Address types run in fixed order (shipping, then billing); a type whose
/// settings flag is off is skipped entirely. Within a type, line 1 is checked
/// before line 2, and absent or blank values are skipped. Every enabled,
/// non-empty field is checked — a match never short-circuits the rest — so
/// the customer sees all offending fields at once.
///
/// This function never fails and mutates nothing but `errors`.
pub fn validate_addresses(
    data: &AddressData,
    errors: &mut dyn ErrorSink,
    settings: &GuardSettings,
) {
    let rule = PoBoxRule;

    for address_type in AddressType::ALL {
        if !settings.is_enabled(address_type) {
            debug!("PO Box check disabled for {} address", address_type.as_str());
            continue;
        }

        for field in address_type.fields() {
            let Some(value) = data.get(&field) else {
                continue;
            };
            if value.trim().is_empty() {
                continue;
            }

            if rule.matches(value) {
                debug!("PO Box address detected in field '{}'", field);
                errors.add(VALIDATION_CODE, rule.message(&field_label(&field)));
            }
        }
    }
}
