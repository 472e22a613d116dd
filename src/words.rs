// Cyrillic word tokens collected across a document
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Shortest token kept in the written word list.
pub const DEFAULT_MIN_WORD_LEN: usize = 2;

lazy_static! {
    // Lowercase Cyrillic а..я plus ё, which sits outside that range
    static ref CYRILLIC_WORD: Regex = Regex::new(r"[а-яё]+").unwrap();
}

/// Iterate the maximal runs of lowercase Cyrillic letters in `text`.
///
/// The text is expected to be lowercased already; uppercase letters act as
/// separators here.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    CYRILLIC_WORD.find_iter(text).map(|m| m.as_str())
}

/// Unique word tokens gathered from every page of one document.
#[derive(Debug, Default)]
pub struct WordCollection {
    words: HashSet<String>,
}

impl WordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase `text` and add each Cyrillic token in it.
    ///
    /// Returns the number of tokens matched, duplicates included.
    pub fn add_text(&mut self, text: &str) -> usize {
        let lowered = text.to_lowercase();
        let mut seen = 0;
        for token in tokenize(&lowered) {
            seen += 1;
            self.words.insert(token.to_string());
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sort once in code-point order, dropping tokens shorter than `min_len` chars.
    pub fn into_sorted(self, min_len: usize) -> Vec<String> {
        let mut words: Vec<String> = self
            .words
            .into_iter()
            .filter(|w| w.chars().count() >= min_len)
            .collect();
        words.sort_unstable();
        words
    }
}
