// lopdf helper - Pure Rust PDF text access
use lopdf::Document;
use std::fs;
use std::path::Path;

use super::unicode_text::{richer_text, unicode_pages};
use super::PageSource;
use crate::error::{Error, Result};

/// Load a PDF document using lopdf
pub fn load_pdf(path: &Path) -> Result<Document> {
    Document::load(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Number of pages in the document at `path`
pub fn page_count(path: &Path) -> Result<usize> {
    Ok(load_pdf(path)?.get_pages().len())
}

/// Page text backed by a fully loaded lopdf document, with ToUnicode-decoded
/// text from pdf-extract used wherever it recovers more Cyrillic.
pub struct LopdfSource {
    document: Document,
    unicode_pages: Option<Vec<String>>,
}

impl LopdfSource {
    pub fn open(path: &Path) -> Result<Self> {
        let load_err = |source| Error::Load {
            path: path.to_path_buf(),
            source,
        };
        let bytes = fs::read(path).map_err(|e| load_err(lopdf::Error::from(e)))?;
        let document = Document::load_mem(&bytes).map_err(load_err)?;
        log::info!(
            "Loaded {} ({} pages)",
            path.display(),
            document.get_pages().len()
        );
        Ok(Self::with_unicode_text(document, &bytes))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let document = Document::load_mem(bytes).map_err(|source| Error::Load {
            path: "<memory>".into(),
            source,
        })?;
        Ok(Self::with_unicode_text(document, bytes))
    }

    fn with_unicode_text(document: Document, bytes: &[u8]) -> Self {
        let unicode_pages = unicode_pages(bytes);
        if let Some(pages) = &unicode_pages {
            let expected = document.get_pages().len();
            if pages.len() != expected {
                log::warn!(
                    "pdf-extract returned {} pages, lopdf found {}",
                    pages.len(),
                    expected
                );
            }
        }
        Self {
            document,
            unicode_pages,
        }
    }

    fn unicode_page(&self, page: u32) -> Option<&str> {
        let index = (page as usize).checked_sub(1)?;
        self.unicode_pages
            .as_ref()
            .and_then(|pages| pages.get(index))
            .map(String::as_str)
    }
}

impl PageSource for LopdfSource {
    fn page_numbers(&self) -> Vec<u32> {
        // get_pages is keyed by 1-based page number, so keys come out in document order
        self.document.get_pages().into_keys().collect()
    }

    fn page_text(&self, page: u32) -> Result<String> {
        let unicode = self.unicode_page(page);
        match self.document.extract_text(&[page]) {
            Ok(text) => Ok(richer_text(text, unicode)),
            Err(e) => match unicode {
                Some(text) => {
                    log::debug!("lopdf failed on page {} ({}), using pdf-extract text", page, e);
                    Ok(text.to_string())
                }
                None => Err(Error::PageText { page, source: e }),
            },
        }
    }
}
