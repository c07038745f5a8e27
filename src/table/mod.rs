//! A generic table of exons and introns
//!
//! [`Table`] is the interface to plotting layers and other tools that work
//! with column-based data. Each row is one interval. The columns `seqname`,
//! `start`, `end` and `strand` are required, an optional `type` column
//! specifies whether the row is an exon or an intron. All other columns are
//! passed through unchanged.
//!
//! Tables can be read from and written to tab-separated files.
//!
//! ```rust
//! use txgaps::table::{shorten_gaps_table, Reader, Writer};
//!
//! let exons = "seqname\tstart\tend\tstrand\ttranscript
//! chr1\t100\t200\t+\tA
//! chr1\t1000\t1100\t+\tA
//! ";
//! let introns = "seqname\tstart\tend\tstrand\ttranscript
//! chr1\t200\t1000\t+\tA
//! ";
//!
//! let exons = Reader::new(exons.as_bytes()).table().unwrap();
//! let introns = Reader::new(introns.as_bytes()).table().unwrap();
//!
//! let rescaled = shorten_gaps_table(&exons, &introns, Some("transcript"), 100).unwrap();
//!
//! let mut writer = Writer::new(Vec::new());
//! writer.write_table(&rescaled).unwrap();
//! assert_eq!(
//!     String::from_utf8(writer.into_inner().unwrap()).unwrap(),
//!     "seqname\tstart\tend\tstrand\ttype\ttranscript
//! chr1\t2\t102\t+\texon\tA
//! chr1\t102\t203\t+\tintron\tA
//! chr1\t203\t303\t+\texon\tA
//! "
//! );
//! ```
mod reader;
mod writer;

pub use crate::table::reader::Reader;
pub use crate::table::writer::Writer;

use std::str::FromStr;

use crate::models::{Feature, GenomicRange, Interval, IntervalBuilder, Strand};
use crate::rescale::ShortenGaps;
use crate::utils::errors::TxError;

const SEQNAME: &str = "seqname";
const START: &str = "start";
const END: &str = "end";
const STRAND: &str = "strand";
const TYPE: &str = "type";

/// Columns that every table of intervals must contain
pub const REQUIRED_COLUMNS: [&str; 4] = [SEQNAME, START, END, STRAND];

/// Rows of string values with named columns
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given columns
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(columns: I) -> Self {
        Table {
            columns: columns.into_iter().map(|c| c.into()).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row, which must have one value per column
    pub fn push_row<S: Into<String>, I: IntoIterator<Item = S>>(
        &mut self,
        row: I,
    ) -> Result<(), TxError> {
        let row: Vec<String> = row.into_iter().map(|v| v.into()).collect();
        if row.len() != self.columns.len() {
            return Err(TxError::new(format!(
                "row has {} values, but the table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns the value of `column` in row `row`
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|values| values[idx].as_str())
    }

    /// Converts every row into an [`Interval`]
    ///
    /// If the table has no `type` column, all intervals are of type
    /// `feature`. `table` is used in error messages to identify the table.
    ///
    /// Empty values of passthrough columns are treated as missing and are
    /// not added as attributes.
    pub fn to_intervals(&self, feature: Feature, table: &str) -> Result<Vec<Interval>, TxError> {
        let required = REQUIRED_COLUMNS
            .iter()
            .map(|name| {
                self.column_index(name).ok_or_else(|| {
                    TxError::new(format!("{} is missing required column '{}'", table, name))
                })
            })
            .collect::<Result<Vec<usize>, TxError>>()?;
        let type_idx = self.column_index(TYPE);

        let mut intervals = Vec::with_capacity(self.rows.len());
        for (line, row) in self.rows.iter().enumerate() {
            let row_error =
                |err: TxError| TxError::new(format!("{} row {}: {}", table, line + 1, err));

            let mut builder = IntervalBuilder::new()
                .seqname(row[required[0]].as_str())
                .start(row[required[1]].parse::<u32>().map_err(|e| row_error(e.into()))?)
                .end(row[required[2]].parse::<u32>().map_err(|e| row_error(e.into()))?)
                .strand(Strand::from_str(&row[required[3]]).map_err(row_error)?)
                .feature(match type_idx {
                    Some(idx) => Feature::from_str(&row[idx]).map_err(row_error)?,
                    None => feature,
                });

            for (idx, value) in row.iter().enumerate() {
                if required.contains(&idx) || Some(idx) == type_idx || value.is_empty() {
                    continue;
                }
                builder = builder.attribute(self.columns[idx].as_str(), value.as_str());
            }
            intervals.push(builder.build().map_err(row_error)?);
        }
        Ok(intervals)
    }

    /// Creates a table from intervals
    ///
    /// The table contains the columns `seqname`, `start`, `end`, `strand`
    /// and `type`, followed by all attributes. Attribute columns are ordered
    /// by `column_order` first, remaining attributes follow in order of
    /// their first appearance.
    pub fn from_intervals(intervals: &[Interval], column_order: &[String]) -> Table {
        let mut attributes: Vec<&str> = Vec::new();
        for column in column_order {
            if REQUIRED_COLUMNS.contains(&column.as_str())
                || column == TYPE
                || attributes.contains(&column.as_str())
            {
                continue;
            }
            if intervals.iter().any(|i| i.attribute(column).is_some()) {
                attributes.push(column);
            }
        }
        for interval in intervals {
            for key in interval.attributes().keys() {
                if !attributes.contains(&key.as_str()) {
                    attributes.push(key);
                }
            }
        }

        let mut table = Table::new(REQUIRED_COLUMNS.iter().chain([TYPE].iter()).copied());
        table.columns.extend(attributes.iter().map(|a| a.to_string()));
        for interval in intervals {
            let mut row = vec![
                interval.seqname().to_string(),
                interval.start().to_string(),
                interval.end().to_string(),
                interval.strand().to_string(),
                interval.feature().to_string(),
            ];
            row.extend(
                attributes
                    .iter()
                    .map(|key| interval.attribute(key).unwrap_or_default().to_string()),
            );
            table.rows.push(row);
        }
        table
    }
}

/// Shortens the gaps between exons of a table of exons and a table of introns
///
/// This is the table-based variant of
/// [`shorten_gaps`](`crate::rescale::shorten_gaps`). If `group_var` is
/// specified, both tables must contain this column. The rescaled table keeps
/// all passthrough columns of both input tables.
pub fn shorten_gaps_table(
    exons: &Table,
    introns: &Table,
    group_var: Option<&str>,
    target_gap_width: u32,
) -> Result<Table, TxError> {
    let mut shortener = ShortenGaps::new().target_gap_width(target_gap_width);
    if let Some(group_var) = group_var {
        for (table, name) in [(exons, "exons"), (introns, "introns")] {
            if table.column_index(group_var).is_none() {
                return Err(TxError::new(format!(
                    "{} is missing group column '{}'",
                    name, group_var
                )));
            }
        }
        shortener = shortener.group_var(group_var);
    }

    let rescaled = shortener.run(
        &exons.to_intervals(Feature::Exon, "exons")?,
        &introns.to_intervals(Feature::Intron, "introns")?,
    )?;

    let mut column_order = exons.columns().to_vec();
    column_order.extend(introns.columns().iter().cloned());
    Ok(Table::from_intervals(&rescaled, &column_order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::transcripts::{standard_exons, standard_introns};

    fn exon_table() -> Table {
        let mut table = Table::new(["transcript", "seqname", "start", "end", "strand", "score"]);
        table
            .push_row(["A", "chr1", "100", "200", "+", "0.5"])
            .unwrap();
        table
            .push_row(["A", "chr1", "300", "400", "+", ""])
            .unwrap();
        table
    }

    #[test]
    fn test_push_row_length() {
        let mut table = Table::new(["a", "b"]);
        assert!(table.push_row(["1"]).is_err());
        assert!(table.push_row(["1", "2"]).is_ok());
        assert_eq!(table.value(0, "b"), Some("2"));
        assert_eq!(table.value(1, "b"), None);
    }

    #[test]
    fn test_to_intervals() {
        let intervals = exon_table().to_intervals(Feature::Exon, "exons").unwrap();
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].attribute("score"), Some("0.5"));
        assert_eq!(intervals[0].attribute("transcript"), Some("A"));
        assert_eq!(intervals[1].attribute("score"), None);
        assert!(intervals[1].is_exon());
        assert_eq!((intervals[1].start(), intervals[1].end()), (300, 400));
    }

    #[test]
    fn test_missing_column() {
        let table = Table::new(["seqname", "start", "strand"]);
        let err = table.to_intervals(Feature::Exon, "exons").unwrap_err();
        assert_eq!(err.message(), "exons is missing required column 'end'");
    }

    #[test]
    fn test_invalid_values() {
        let mut table = Table::new(["seqname", "start", "end", "strand"]);
        table.push_row(["chr1", "1", "10", "x"]).unwrap();
        let err = table.to_intervals(Feature::Exon, "exons").unwrap_err();
        assert!(err.message().starts_with("exons row 1: invalid strand"));

        let mut table = Table::new(["seqname", "start", "end", "strand"]);
        table.push_row(["chr1", "1", "ten", "+"]).unwrap();
        assert!(table.to_intervals(Feature::Exon, "exons").is_err());
    }

    #[test]
    fn test_type_column() {
        let mut table = Table::new(["seqname", "start", "end", "strand", "type"]);
        table.push_row(["chr1", "200", "300", "+", "exon"]).unwrap();
        let introns = table.to_intervals(Feature::Intron, "introns").unwrap();
        assert!(introns[0].is_exon());

        let err = shorten_gaps_table(&exon_table(), &table, None, 10).unwrap_err();
        assert!(err.message().starts_with("introns must only contain type 'intron'"));
    }

    #[test]
    fn test_from_intervals_column_order() {
        let mut intervals = standard_exons();
        intervals.append(&mut standard_introns());
        let table = Table::from_intervals(&intervals, &["transcript".to_string()]);
        assert_eq!(
            table.columns(),
            &["seqname", "start", "end", "strand", "type", "transcript", "gene"]
        );
        assert_eq!(table.len(), 5);
        assert_eq!(table.rows()[3][4], "intron");
        assert_eq!(table.rows()[3][6], "Test-Gene");
    }

    #[test]
    fn test_shorten_gaps_table_passthrough() {
        let mut introns = Table::new(["seqname", "start", "end", "strand", "transcript"]);
        introns.push_row(["chr1", "200", "300", "+", "A"]).unwrap();

        let rescaled = shorten_gaps_table(&exon_table(), &introns, Some("transcript"), 10).unwrap();
        assert_eq!(
            rescaled.columns(),
            &["seqname", "start", "end", "strand", "type", "transcript", "score"]
        );
        assert_eq!(
            rescaled.rows(),
            &[
                vec!["chr1", "2", "102", "+", "exon", "A", "0.5"],
                vec!["chr1", "102", "113", "+", "intron", "A", ""],
                vec!["chr1", "113", "213", "+", "exon", "A", ""],
            ]
        );
    }

    #[test]
    fn test_shorten_gaps_table_missing_group() {
        let introns = Table::new(["seqname", "start", "end", "strand"]);
        let err = shorten_gaps_table(&exon_table(), &introns, Some("transcript"), 10).unwrap_err();
        assert_eq!(err.message(), "introns is missing group column 'transcript'");
    }
}
