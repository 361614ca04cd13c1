//! Barcode type
//!
//! A ticket barcode: a symbology kind (e.g. `EAN-13`) paired with the
//! encoded value. Two barcodes are the same barcode when both parts match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A barcode printed on a ticket.
///
/// Barcodes are what make a ticket unique on the marketplace: the listing
/// rules reject a barcode that is already for sale, so the same physical
/// ticket cannot be listed twice by different people.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Barcode {
    kind: String,
    value: String,
}

impl Barcode {
    /// Create a barcode from a symbology kind and its encoded value.
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// The symbology kind, e.g. `EAN-13`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The encoded value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}
