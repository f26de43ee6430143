/// One of the two checkout address blocks, each with two free-text lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressType {
    Shipping,
    Billing,
}

impl AddressType {
    /// Evaluation order is fixed: shipping first, then billing.
    pub const ALL: [AddressType; 2] = [AddressType::Shipping, AddressType::Billing];

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::Shipping => "shipping",
            AddressType::Billing => "billing",
        }
    }

    /// The submitted field names for this address type, in check order:
    /// line 1, then line 2.
    pub fn fields(&self) -> [String; 2] {
        [
            format!("{}_address_1", self.as_str()),
            format!("{}_address_2", self.as_str()),
        ]
    }
}

/// Derives the human-readable label for a submitted field name.
///
/// Underscores and the line digits `1`/`2` become spaces, each remaining word
/// is title-cased, and surplus whitespace is dropped:
/// `shipping_address_1` -> "Shipping Address".
pub fn field_label(field_name: &str) -> String {
    let spaced: String = field_name
        .chars()
        .map(|c| if c == '_' || c == '1' || c == '2' { ' ' } else { c })
        .collect();

    spaced
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
