//! Document kinds and keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of business document handled by the API.
///
/// The discriminant is the `tipo` value used by the attachment store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Budget ("presupuesto", table `cot013`).
    Budget,
    /// Purchase order ("orden de compra", table `adq004`).
    PurchaseOrder,
}

impl DocumentKind {
    /// Returns the attachment-store discriminator.
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::Budget => 1,
            Self::PurchaseOrder => 2,
        }
    }

    /// Parses an attachment-store discriminator.
    #[must_use]
    pub const fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::Budget),
            2 => Some(Self::PurchaseOrder),
            _ => None,
        }
    }

    /// Human-readable name, as used in API messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Budget => "presupuesto",
            Self::PurchaseOrder => "orden de compra",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Composite key of a legacy document: location code plus number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentKey {
    /// Location code (`Loc_cod`).
    pub location: i16,
    /// Document number (`pre_nro` / `ocp_nro`).
    pub number: i64,
}

impl DocumentKey {
    /// Creates a key.
    #[must_use]
    pub const fn new(location: i16, number: i64) -> Self {
        Self { location, number }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.location, self.number)
    }
}
