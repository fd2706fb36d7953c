//! CSV implementation of the grid source port.
//!
//! Mazes are usually drawn in a spreadsheet and exported as CSV. The file has
//! no header row and rows may have different lengths.

use std::path::{Path, PathBuf};

use crate::{Result, error::Error, ports::GridSource};

/// Grid source backed by a CSV file on disk.
///
/// # Examples
///
/// ```no_run
/// use maze_sarsa::adapters::CsvGridSource;
/// use maze_sarsa::maze::MazeEnvironment;
/// use maze_sarsa::ports::GridSource;
///
/// let source = CsvGridSource::new("data/cliff.csv");
/// let env = MazeEnvironment::from_grid(&source.read_grid()?)?;
/// # Ok::<(), maze_sarsa::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvGridSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvGridSource {
    /// Create a comma-delimited source for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Use a different field delimiter (e.g. `b'\t'` for TSV exports).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse CSV text already held in memory.
    pub fn parse_str(&self, contents: &str) -> Result<Vec<Vec<String>>> {
        read_records(self.reader_builder().from_reader(contents.as_bytes()))
    }

    fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter);
        builder
    }
}

impl GridSource for CsvGridSource {
    fn read_grid(&self) -> Result<Vec<Vec<String>>> {
        let file = std::fs::File::open(&self.path).map_err(|source| Error::Io {
            operation: format!("open grid file {}", self.path.display()),
            source,
        })?;
        read_records(self.reader_builder().from_reader(file))
    }
}

fn read_records<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_ragged_rows() {
        let source = CsvGridSource::new("unused.csv");
        let rows = source.parse_str("S,,G\nW\n,,,EOG\n").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["S", "", "G"]);
        assert_eq!(rows[1], vec!["W"]);
        assert_eq!(rows[2], vec!["", "", "", "EOG"]);
    }

    #[test]
    fn test_tab_delimiter() {
        let source = CsvGridSource::new("unused.tsv").with_delimiter(b'\t');
        let rows = source.parse_str("S\tG\n\t\tEOG\n").unwrap();
        assert_eq!(rows[1], vec!["", "", "EOG"]);
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "S,1,G,").unwrap();
        writeln!(file, ",,,EOG").unwrap();
        let rows = CsvGridSource::new(file.path()).read_grid().unwrap();
        assert_eq!(rows[0], vec!["S", "1", "G", ""]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = CsvGridSource::new("/nonexistent/maze.csv")
            .read_grid()
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/maze.csv"));
    }
}
