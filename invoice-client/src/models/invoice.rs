use serde::{Deserialize, Serialize};
use indexmap::IndexMap;

/// Body of a `POST /generateInvoice/{invoiceNumber}` request.
///
/// Values are carried as opaque strings. No arithmetic or cross-field
/// consistency is checked here; the rendering service owns that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    pub invoice_number: String,
    pub items: Vec<LineItem>,
    /// Template substitution values, keyed by placeholder name (e.g. `CUSTOMER_NAME`).
    /// Serialized in insertion order.
    pub placeholders: IndexMap<String, String>,
}

/// One row of the invoice table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct LineItem {
    pub item_no: String,
    pub item_description: String,
    /// Harmonized System Nomenclature code.
    pub item_hsn: String,
    pub item_qty: String,
    pub item_unit_price: String,
    pub item_total_price: String,
    pub item_cgst: String,
    pub item_sgst: String,
    pub item_igst: String,
    pub item_tax: String,
    pub item_total: String,
}
