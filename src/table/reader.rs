use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::table::Table;
use crate::utils::errors::ReadWriteError;

/// Parses a tab-separated file into a [`Table`]
///
/// The first line must be the header with the column names. Empty lines
/// are skipped, every other line must have one value per column.
///
/// # Examples
///
/// ```rust
/// use txgaps::table::Reader;
///
/// let data = "seqname\tstart\tend\tstrand\nchr1\t11\t20\t+\n";
/// let table = Reader::new(data.as_bytes()).table().unwrap();
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.value(0, "end"), Some("20"));
/// ```
pub struct Reader<R> {
    inner: BufReader<R>,
}

impl Reader<File> {
    /// Creates a Reader instance that reads from a File
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReadWriteError> {
        match File::open(path.as_ref()) {
            Ok(file) => Ok(Self::new(file)),
            Err(err) => Err(ReadWriteError::new(err)),
        }
    }
}

impl<R: std::io::Read> Reader<R> {
    /// Creates a new generic Reader for any `std::io::Read` object
    ///
    /// Use this method when you want to read from stdin or from
    /// a remote source, e.g. via HTTP
    pub fn new(reader: R) -> Self {
        Reader {
            inner: BufReader::new(reader),
        }
    }

    /// Creates a new Reader instance with a known capcity
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Reader {
            inner: BufReader::with_capacity(capacity, reader),
        }
    }

    /// Reads all lines into a [`Table`]
    pub fn table(&mut self) -> Result<Table, ReadWriteError> {
        let mut lines = (&mut self.inner).lines();
        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(ReadWriteError::from("the input does not contain a header")),
        };
        let mut table = Table::new(header.trim_end_matches('\r').split('\t'));

        for (idx, line) in lines.enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            table.push_row(line.split('\t')).map_err(|err| {
                ReadWriteError::from(format!("line {}: {}", idx + 2, err))
            })?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_table() {
        let data = "seqname\tstart\tend\tstrand\ttranscript\r\nchr1\t11\t20\t+\tA\r\n\nchr1\t31\t40\t+\tA\n";
        let table = Reader::new(data.as_bytes()).table().unwrap();
        assert_eq!(
            table.columns(),
            &["seqname", "start", "end", "strand", "transcript"]
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(1, "start"), Some("31"));
        assert_eq!(table.value(0, "transcript"), Some("A"));
    }

    #[test]
    fn test_wrong_number_of_values() {
        let data = "seqname\tstart\tend\tstrand\nchr1\t11\t20\n";
        let err = Reader::new(data.as_bytes()).table().unwrap_err();
        assert!(err.to_string().starts_with("line 2:"));
    }

    #[test]
    fn test_empty_input() {
        assert!(Reader::new("".as_bytes()).table().is_err());
    }
}
