use crate::rules::AddressRule;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{self, Display};

/// Case-insensitive, word-bounded detection of PO Box phrasing.
///
/// Covers the "p/o" spellings ("PO Box", "P.O. Box", "p.o.box", "PO  Box")
/// and the "post" spellings ("Post Box", "Post Office Box", "postbox").
/// The boundaries on both ends keep ordinary street text like "Boxwood Lane"
/// or "123 Outpost Ave" from triggering.
static PO_BOX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:p\.?\s*o\.?\s*box|post\s*(?:office)?\s*box)\b")
        .expect("PO Box pattern is a valid regex")
});

/// Returns `true` when `text` contains PO Box phrasing.
pub fn contains_po_box(text: &str) -> bool {
    PO_BOX_RE.is_match(text)
}

/// The rule rejecting PO Box addresses in free-text address lines.
#[derive(Clone, Debug, Default)]
pub struct PoBoxRule;

impl PoBoxRule {
    /// Factory returning the rule as a trait object, for hosts that hold
    /// rules behind the `AddressRule` seam.
    pub fn boxed() -> Box<dyn AddressRule> {
        Box::new(Self)
    }
}

impl AddressRule for PoBoxRule {
    fn matches(&self, value: &str) -> bool {
        contains_po_box(value)
    }

    fn message(&self, label: &str) -> String {
        format!(
            "{} field contains a PO Box address. We do not accept PO Box addresses. \
            Please provide a physical street address.",
            label
        )
    }

    fn box_clone(&self) -> Box<dyn AddressRule> {
        Box::new(self.clone())
    }
}

impl Display for PoBoxRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no PO Box addresses")
    }
}
