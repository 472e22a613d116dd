// PDF extraction module
pub mod lopdf_helper;
pub mod unicode_text;

pub use lopdf_helper::{page_count, LopdfSource};

use crate::error::Result;

/// A document viewed as an ordered run of pages that each yield plain text.
pub trait PageSource {
    /// Page numbers in document order.
    fn page_numbers(&self) -> Vec<u32>;

    /// Plain text of one page. Pages without a text layer give an empty string.
    fn page_text(&self, page: u32) -> Result<String>;
}
