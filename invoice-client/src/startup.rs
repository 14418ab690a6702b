use crate::config::Config;
use crate::error::Result;
use crate::models::InvoiceRequest;
use crate::services::InvoiceClient;
use std::io::Write;
use std::path::PathBuf;

/// Send `invoice` to the configured service and write the raw reply to `out`.
///
/// When `download_dir` is configured the rendered PDF is fetched afterwards and
/// its path returned.
pub async fn run<W: Write>(
    config: &Config,
    invoice: &InvoiceRequest,
    out: &mut W,
) -> Result<Option<PathBuf>> {
    let client = InvoiceClient::new(&config.base_url)?;

    let response = client.generate_invoice(invoice).await?;
    writeln!(out, "{}", response.body)?;
    out.flush()?;

    match config.download_dir.as_deref() {
        Some(dir) => {
            let path = client.download_pdf(&invoice.invoice_number, dir).await?;
            tracing::info!(path = %path.display(), "Rendered invoice available");
            Ok(Some(path))
        }
        None => Ok(None),
    }
}
