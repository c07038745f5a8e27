use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::table::Table;
use crate::utils::errors::{ReadWriteError, TxError};

/// Writes a [`Table`] as tab-separated values into a `BufWriter`
///
/// # Examples
///
/// ```rust
/// use txgaps::table::{Table, Writer};
///
/// let mut table = Table::new(["seqname", "start", "end", "strand"]);
/// table.push_row(["chr1", "11", "20", "-"]).unwrap();
///
/// let output = Vec::new(); // substitute this with proper IO (io::stdout())
/// let mut writer = Writer::new(output);
/// writer.write_table(&table).unwrap();
///
/// assert_eq!(
///     writer.into_inner().unwrap(),
///     b"seqname\tstart\tend\tstrand\nchr1\t11\t20\t-\n"
/// );
/// ```
pub struct Writer<W: std::io::Write> {
    inner: BufWriter<W>,
}

impl Writer<File> {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReadWriteError> {
        match File::create(path.as_ref()) {
            Ok(file) => Ok(Self::new(file)),
            Err(err) => Err(ReadWriteError::new(err)),
        }
    }
}

impl<W: std::io::Write> Writer<W> {
    /// Creates a new generic Writer for any `std::io::Write` object
    ///
    /// Use this method when you want to write to stdout or
    /// a remote source, e.g. via HTTP
    pub fn new(writer: W) -> Self {
        Writer {
            inner: BufWriter::new(writer),
        }
    }

    pub fn with_capacity(capacity: usize, writer: W) -> Self {
        Writer {
            inner: BufWriter::with_capacity(capacity, writer),
        }
    }

    pub fn flush(&mut self) -> Result<(), TxError> {
        match self.inner.flush() {
            Ok(res) => Ok(res),
            Err(err) => Err(TxError::from(err.to_string())),
        }
    }

    pub fn into_inner(self) -> Result<W, TxError> {
        match self.inner.into_inner() {
            Ok(res) => Ok(res),
            Err(err) => Err(TxError::from(err.to_string())),
        }
    }

    /// Writes the header and all rows of the table
    pub fn write_table(&mut self, table: &Table) -> Result<(), std::io::Error> {
        self.write_line(table.columns())?;
        for row in table.rows() {
            self.write_line(row)?;
        }
        Ok(())
    }

    fn write_line(&mut self, values: &[String]) -> Result<(), std::io::Error> {
        self.inner.write_all(values.join("\t").as_bytes())?;
        self.inner.write_all("\n".as_bytes())
    }
}
