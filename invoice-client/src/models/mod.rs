//! Request payload models for the invoice rendering service.

mod invoice;
mod sample;

pub use invoice::{InvoiceRequest, LineItem};
pub use sample::{sample_invoice, SAMPLE_INVOICE_NUMBER};
