// crates/engine/src/scanner.rs
use crate::error::EngineError;
use crate::table::FrequencyTable;
use crate::tokenizer::{self, DEFAULT_MIN_CHARS};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// What a single file contributed, plus the failure that cut it short, if any.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub table: FrequencyTable,
    pub error: Option<EngineError>,
}

/// Reads one file line by line into a private [`FrequencyTable`].
#[derive(Debug, Clone, Copy)]
pub struct FileScanner {
    min_chars: usize,
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CHARS)
    }
}

impl FileScanner {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Scan the file at `path`.
    ///
    /// Failures are logged and returned alongside whatever was counted: an
    /// unopenable file yields an empty table, a read error keeps the counts
    /// gathered before it.
    pub fn scan(&self, path: &Path) -> ScanOutcome {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) => {
                let err = EngineError::FileOpen {
                    path: path.to_path_buf(),
                    source,
                };
                log::warn!("{err}");
                return ScanOutcome {
                    table: FrequencyTable::new(),
                    error: Some(err),
                };
            }
        };
        // the reader owns the handle, so it is closed on every return path
        self.scan_reader(BufReader::new(file), path)
    }

    /// Line loop shared by [`FileScanner::scan`] and tests.
    pub fn scan_reader<R: BufRead>(&self, mut reader: R, path: &Path) -> ScanOutcome {
        let mut table = FrequencyTable::new();
        let mut line_buf = Vec::new();
        let mut lines = 0;

        loop {
            line_buf.clear();
            match reader.read_until(b'\n', &mut line_buf) {
                Ok(0) => break,
                Ok(_) => {
                    lines += 1;
                    // lossy so that stray non-UTF8 bytes act as separators
                    let line = String::from_utf8_lossy(&line_buf);
                    self.count_line(line.trim(), &mut table);
                }
                Err(source) => {
                    let err = EngineError::FileRead {
                        path: path.to_path_buf(),
                        lines,
                        source,
                    };
                    log::warn!("{err}");
                    return ScanOutcome {
                        table,
                        error: Some(err),
                    };
                }
            }
        }

        log::debug!(
            "scanned {}: {lines} lines, {} distinct words",
            path.display(),
            table.len()
        );
        ScanOutcome { table, error: None }
    }

    fn count_line(&self, line: &str, table: &mut FrequencyTable) {
        for word in tokenizer::words(line) {
            let folded = tokenizer::fold(word);
            if tokenizer::is_countable(&folded, self.min_chars) {
                table.increment(&folded);
            }
        }
    }
}
