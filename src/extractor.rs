//! The word extraction pipeline.
//!
//! Pages are read in document order and their Cyrillic tokens accumulated in a
//! [`WordCollection`]. Only after every page has been read is the collection
//! sorted and the output file opened, so a document that fails to load never
//! touches the destination.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::output::write_words;
use crate::pdf_extraction::{LopdfSource, PageSource};
use crate::words::{WordCollection, DEFAULT_MIN_WORD_LEN};

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub words_written: usize,
    pub output: PathBuf,
    pub pages_total: usize,
    /// Pages whose text held no Cyrillic tokens
    pub pages_empty: usize,
    /// Pages dropped after a text extraction error
    pub pages_skipped: usize,
}

#[derive(Debug, Clone)]
pub struct WordExtractor {
    min_word_len: usize,
    skip_unreadable_pages: bool,
}

impl Default for WordExtractor {
    fn default() -> Self {
        Self {
            min_word_len: DEFAULT_MIN_WORD_LEN,
            skip_unreadable_pages: false,
        }
    }
}

impl WordExtractor {
    pub fn new(config: &Config) -> Self {
        Self {
            min_word_len: config.min_word_len,
            skip_unreadable_pages: config.skip_unreadable_pages,
        }
    }

    pub fn min_word_len(mut self, len: usize) -> Self {
        self.min_word_len = len;
        self
    }

    pub fn skip_unreadable_pages(mut self, skip: bool) -> Self {
        self.skip_unreadable_pages = skip;
        self
    }

    /// Collect the words of every page in `source`, then write them to `output`.
    pub fn run<S: PageSource + ?Sized>(&self, source: &S, output: &Path) -> Result<RunSummary> {
        let pages = source.page_numbers();
        let mut words = WordCollection::new();
        let mut pages_empty = 0;
        let mut pages_skipped = 0;

        for &page in &pages {
            let text = match source.page_text(page) {
                Ok(text) => text,
                Err(e) if self.skip_unreadable_pages => {
                    log::warn!("Skipping page {}: {}", page, e);
                    pages_skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let found = words.add_text(&text);
            if found == 0 {
                pages_empty += 1;
            }
            log::debug!("Page {}: {} tokens, {} unique so far", page, found, words.len());
        }

        let sorted = words.into_sorted(self.min_word_len);
        let words_written = write_words(output, &sorted)?;

        let summary = RunSummary {
            words_written,
            output: output.to_path_buf(),
            pages_total: pages.len(),
            pages_empty,
            pages_skipped,
        };
        log::info!(
            "Wrote {} words from {} pages ({} empty, {} skipped)",
            summary.words_written,
            summary.pages_total,
            summary.pages_empty,
            summary.pages_skipped
        );
        Ok(summary)
    }
}

/// Open the configured PDF and write its word list to the configured output.
pub fn extract_file(config: &Config) -> Result<RunSummary> {
    let source = LopdfSource::open(&config.input)?;
    WordExtractor::new(config).run(&source, &config.output)
}
