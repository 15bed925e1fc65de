//! Fiscal document detection.

/// Title printed on every constancia.
pub const FISCAL_MARKER: &str = "CONSTANCIA DE SITUACIÓN FISCAL";

/// True if the raw (unnormalized) text contains [`FISCAL_MARKER`] verbatim.
pub fn is_fiscal_document(raw: &str) -> bool {
    raw.contains(FISCAL_MARKER)
}
