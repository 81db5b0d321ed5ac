//! Purchase order ("orden de compra") listing rules and amounts.

/// `ocp_pdt` codes excluded from the pending listing.
pub const UNLISTED_STATUS_CODES: [&str; 2] = ["N", " "];

/// Name shown when the supplier row is missing.
pub const UNKNOWN_SUPPLIER: &str = "Desconocido";

/// Monetary columns of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderAmounts {
    /// Net amount (`ocp_net`).
    pub net: i64,
    /// VAT (`ocp_iva`).
    pub iva: i64,
    /// Additional tax (`ocp_ila`).
    pub ila: i64,
}

impl OrderAmounts {
    /// Net plus both taxes.
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.net.saturating_add(self.iva).saturating_add(self.ila)
    }
}

/// Returns the supplier name to display.
#[must_use]
pub fn supplier_name(name: Option<&str>) -> String {
    name.map(str::trim_end)
        .filter(|n| !n.is_empty())
        .unwrap_or(UNKNOWN_SUPPLIER)
        .to_string()
}
