// ToUnicode-aware page text through pdf-extract
use std::panic;

/// Per-page text decoded through each font's ToUnicode CMap.
///
/// lopdf's own text extraction only knows the simple built-in encodings and
/// gives nothing usable for Type0/Identity-H fonts, which is how most
/// producers embed Cyrillic. Returns `None` when pdf-extract cannot read the
/// document; the caller then relies on lopdf alone.
pub fn unicode_pages(bytes: &[u8]) -> Option<Vec<String>> {
    // pdf-extract panics on some malformed fonts instead of returning an error
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes)) {
        Ok(Ok(pages)) => Some(pages),
        Ok(Err(e)) => {
            log::warn!("pdf-extract could not read document: {}", e);
            None
        }
        Err(_) => {
            log::warn!("pdf-extract panicked while reading document");
            None
        }
    }
}

/// Letters of the Russian alphabet in either case, ё included.
pub fn cyrillic_letter_count(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё'))
        .count()
}

/// Pick whichever page text carries more Cyrillic, preferring lopdf on a tie.
pub fn richer_text(lopdf_text: String, unicode_text: Option<&str>) -> String {
    match unicode_text {
        Some(text) if cyrillic_letter_count(text) > cyrillic_letter_count(&lopdf_text) => {
            text.to_string()
        }
        _ => lopdf_text,
    }
}
