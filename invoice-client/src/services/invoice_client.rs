//! HTTP client for the invoice rendering service.
//!
//! The generate call returns whatever the service sends back, whatever the status.
//! Only transport failures are errors.

use crate::error::{ClientError, Result};
use crate::models::InvoiceRequest;
use crate::utils::safe_file_name;
use reqwest::{Client, StatusCode, Url};
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct InvoiceClient {
    client: Client,
    base_url: Url,
}

/// Raw reply from `POST /generateInvoice/{invoiceNumber}`.
#[derive(Debug, Clone)]
pub struct InvoiceResponse {
    pub status: StatusCode,
    pub body: String,
}

impl InvoiceClient {
    /// Create a client rooted at `base_url` (e.g. `http://localhost:9200`).
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", base_url.as_ref(), e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/generateInvoice/{invoice_number}`, with the number percent-encoded
    /// as a single path segment.
    pub fn generate_invoice_url(&self, invoice_number: &str) -> Result<Url> {
        self.endpoint(&["generateInvoice", invoice_number])
    }

    /// Where the service publishes the rendered PDF for `invoice_number`.
    pub fn invoice_pdf_url(&self, invoice_number: &str) -> Result<Url> {
        let file_name = format!("{}.pdf", safe_file_name(invoice_number));
        self.endpoint(&["invoices", &file_name])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Post the invoice to the rendering service.
    ///
    /// The path segment is taken from `request.invoice_number`.
    pub async fn generate_invoice(&self, request: &InvoiceRequest) -> Result<InvoiceResponse> {
        let url = self.generate_invoice_url(&request.invoice_number)?;

        tracing::info!(
            url = %url,
            invoice_number = %request.invoice_number,
            items = request.items.len(),
            "Sending invoice generation request"
        );

        let response = self.client.post(url).json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, body = %body, "generateInvoice response");
        if !status.is_success() {
            tracing::warn!(status = %status, "Invoice service returned a non-success status");
        }

        Ok(InvoiceResponse { status, body })
    }

    /// Fetch the rendered PDF into `dir`, returning the written path.
    ///
    /// An invoice number with no characters would map to a bare `.pdf` file, so it is rejected.
    pub async fn download_pdf(&self, invoice_number: &str, dir: &Path) -> Result<PathBuf> {
        if invoice_number.is_empty() {
            return Err(ClientError::EmptyInvoiceNumber);
        }
        let url = self.invoice_pdf_url(invoice_number)?;

        tracing::info!(url = %url, "Downloading rendered invoice");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!(status = %status, body = %body, "Invoice PDF download failed");
            return Err(ClientError::UnexpectedStatus { status, body });
        }

        let bytes = response.bytes().await?;

        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(format!("{}.pdf", safe_file_name(invoice_number)));
        tokio::fs::write(&path, &bytes).await?;

        tracing::info!(path = %path.display(), size = bytes.len(), "Invoice PDF saved");
        Ok(path)
    }
}
