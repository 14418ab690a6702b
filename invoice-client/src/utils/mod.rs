// Utils module

/// Make an invoice number safe to use as a file name.
///
/// Every character outside `[A-Za-z0-9]` becomes `_`, and the result is lower-cased.
/// This matches the naming the service uses for rendered PDFs.
pub fn safe_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
