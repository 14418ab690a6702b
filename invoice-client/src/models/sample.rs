use super::{InvoiceRequest, LineItem};
use indexmap::IndexMap;

pub const SAMPLE_INVOICE_NUMBER: &str = "123456";

/// Fixed sample invoice used to exercise the rendering service.
pub fn sample_invoice() -> InvoiceRequest {
    let items = vec![
        LineItem {
            item_no: "1".into(),
            item_description: "Description 1".into(),
            item_hsn: "123456".into(),
            item_qty: "1".into(),
            item_unit_price: "10".into(),
            item_total_price: "10".into(),
            item_cgst: "1".into(),
            item_sgst: "1".into(),
            item_igst: "0".into(),
            item_tax: "2".into(),
            item_total: "12".into(),
        },
        LineItem {
            item_no: "2".into(),
            item_description: "Description 2".into(),
            item_hsn: "654321".into(),
            item_qty: "2".into(),
            item_unit_price: "5".into(),
            item_total_price: "10".into(),
            item_cgst: "0.5".into(),
            item_sgst: "0.5".into(),
            item_igst: "0".into(),
            item_tax: "1".into(),
            item_total: "11".into(),
        },
    ];

    let placeholders: IndexMap<String, String> = [
        ("INVOICE_DATE", "2024-05-24"),
        ("CUSTOMER_NAME", "John Doe"),
        ("CUSTOMER_ADDRESS", "123 Main St, Anytown, USA"),
        ("CUSTOMER_PHONE", "+91 999999999"),
        ("CUSTOMER_EMAIL", "john.doe@example.com"),
        ("AMT_BEFORE_TAX", "123"),
        ("SUBTOTAL", "1245"),
        ("PAYMENT_METHOD", "Card"),
        ("TOTAL_CGST", "231"),
        ("TOTAL_SGST", "142"),
        ("TOTAL_IGST", "123123"),
        ("TOTAL_TAX", "1442"),
        ("GRAND_TOTAL", "2342"),
        (
            "AMT_IN_WORDS",
            "Two Thousand Three Hundred Forty Two Rupees Only",
        ),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    InvoiceRequest {
        invoice_number: SAMPLE_INVOICE_NUMBER.to_string(),
        items,
        placeholders,
    }
}
