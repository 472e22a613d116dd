// Word list output file
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Create or truncate `path` and write one word per line.
///
/// Parent directories must already exist. A failure partway through can leave
/// a truncated file behind.
pub fn write_words<S: AsRef<str>>(path: &Path, words: &[S]) -> Result<usize> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for word in words {
        writer
            .write_all(word.as_ref().as_bytes())
            .and_then(|_| writer.write_all(LINE_ENDING.as_bytes()))
            .map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    Ok(words.len())
}
