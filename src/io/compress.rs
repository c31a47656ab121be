//! Opening SD files, with transparent gzip decompression.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use super::error::Error;

/// Returns `true` if the path carries a `.gz` extension (any case).
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s.eq_ignore_ascii_case("gz"))
}

/// Opens `path` as a buffered line source, decompressing `.gz` files.
pub fn open_file(path: &Path) -> Result<Box<dyn BufRead>, Error> {
    let file = File::open(path)?;

    if is_gzip_path(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
