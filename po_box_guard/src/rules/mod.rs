use std::fmt::Display;

pub(crate) mod po_box;

/// A trait for any address-rejection rule.
/// It must be `Send + Sync` so rules can live in static cells or be shared
/// between concurrent checkout requests.
/// The `box_clone` method is a standard pattern for making trait objects cloneable.
pub trait AddressRule: Display + Send + Sync {
    /// The core predicate. Returns `true` when the field value violates the rule.
    fn matches(&self, value: &str) -> bool;

    /// The customer-facing message for a field (identified by its human label)
    /// that violated the rule.
    fn message(&self, label: &str) -> String;

    fn box_clone(&self) -> Box<dyn AddressRule>;
}

/// Implement `Clone` for any `Box<dyn AddressRule>`.
impl Clone for Box<dyn AddressRule> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}
