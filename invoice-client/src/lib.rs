//! Client for the invoice rendering service.
//!
//! Builds the sample invoice request, posts it to `/generateInvoice/{invoiceNumber}`
//! and hands back the raw response. Optionally fetches the rendered PDF.

pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;
pub mod utils;

pub use error::{ClientError, Result};
pub use models::{sample_invoice, InvoiceRequest, LineItem, SAMPLE_INVOICE_NUMBER};
pub use services::{InvoiceClient, InvoiceResponse};
