// cyrwords - Cyrillic word list extraction from PDF dictionaries
pub mod config;
pub mod error;
pub mod extractor;
pub mod output;
pub mod pdf_extraction;
pub mod words;

pub use config::Config;
pub use error::{Error, Result};
pub use extractor::{extract_file, RunSummary, WordExtractor};
pub use pdf_extraction::{LopdfSource, PageSource};
pub use words::WordCollection;
