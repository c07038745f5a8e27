use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Feature, GenomicRange, Strand};
use crate::utils::errors::TxError;

/// An exon or intron of a transcript
///
/// Coordinates are 1-based and fully closed (`start <= end`). Besides the
/// genomic location, an `Interval` carries arbitrary attributes, such as the
/// transcript or gene name. Attributes are never modified by the rescaling.
///
/// Introns use the exon-adjacent boundary convention: an intron starts at
/// the last position of the upstream exon and ends at the first position of
/// the downstream exon.
///
/// # Examples
///
/// ```rust
/// use txgaps::models::{Feature, GenomicRange, IntervalBuilder, Strand};
///
/// let exon = IntervalBuilder::exon()
///     .seqname("chr1")
///     .start(11)
///     .end(20)
///     .strand(Strand::Plus)
///     .attribute("transcript", "tx-1")
///     .build()
///     .unwrap();
///
/// assert_eq!(exon.width(), 10);
/// assert_eq!(exon.feature(), Feature::Exon);
/// assert_eq!(exon.attribute("transcript"), Some("tx-1"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    seqname: String,
    start: u32,
    end: u32,
    strand: Strand,
    #[serde(rename = "type")]
    feature: Feature,
    attributes: BTreeMap<String, String>,
}

impl Interval {
    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn is_exon(&self) -> bool {
        self.feature == Feature::Exon
    }

    pub fn is_intron(&self) -> bool {
        self.feature == Feature::Intron
    }

    /// Returns the value of the attribute `key`, if present
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|value| value.as_str())
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Adds or replaces an attribute
    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Returns a copy of the interval at new coordinates
    ///
    /// Location, type and attributes are kept.
    pub fn relocate(&self, start: u32, end: u32) -> Result<Interval, TxError> {
        check_coordinates(start, end)?;
        Ok(Interval {
            seqname: self.seqname.clone(),
            start,
            end,
            strand: self.strand,
            feature: self.feature,
            attributes: self.attributes.clone(),
        })
    }
}

impl GenomicRange for Interval {
    fn seqname(&self) -> &str {
        &self.seqname
    }

    fn start(&self) -> u32 {
        self.start
    }

    fn end(&self) -> u32 {
        self.end
    }

    fn strand(&self) -> Strand {
        self.strand
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}:{}-{} ({})",
            self.feature, self.seqname, self.start, self.end, self.strand
        )
    }
}

fn check_coordinates(start: u32, end: u32) -> Result<(), TxError> {
    if start == 0 {
        return Err(TxError::new("coordinates are 1-based, start must be >= 1"));
    }
    if start > end {
        return Err(TxError::new(format!(
            "invalid interval {}-{}: start must not be larger than end",
            start, end
        )));
    }
    Ok(())
}

/// Builds an [`Interval`]
///
/// `seqname`, `start`, `end` and `strand` are mandatory. The interval type
/// defaults to [`Feature::Exon`], use [`IntervalBuilder::intron`] or
/// [`IntervalBuilder::feature`] to create introns.
///
/// # Examples
///
/// ```rust
/// use txgaps::models::{Feature, IntervalBuilder, Strand};
///
/// let intron = IntervalBuilder::intron()
///     .seqname("chr1")
///     .start(20)
///     .end(31)
///     .strand(Strand::Minus)
///     .build()
///     .unwrap();
/// assert_eq!(intron.feature(), Feature::Intron);
///
/// // start must not be larger than end
/// assert!(IntervalBuilder::exon()
///     .seqname("chr1")
///     .start(31)
///     .end(20)
///     .strand(Strand::Minus)
///     .build()
///     .is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct IntervalBuilder {
    seqname: Option<String>,
    start: Option<u32>,
    end: Option<u32>,
    strand: Option<Strand>,
    feature: Option<Feature>,
    attributes: BTreeMap<String, String>,
}

impl IntervalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exon() -> Self {
        Self::new().feature(Feature::Exon)
    }

    pub fn intron() -> Self {
        Self::new().feature(Feature::Intron)
    }

    pub fn seqname<S: Into<String>>(mut self, seqname: S) -> Self {
        self.seqname = Some(seqname.into());
        self
    }

    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: u32) -> Self {
        self.end = Some(end);
        self
    }

    pub fn strand(mut self, strand: Strand) -> Self {
        self.strand = Some(strand);
        self
    }

    pub fn feature(mut self, feature: Feature) -> Self {
        self.feature = Some(feature);
        self
    }

    pub fn attribute<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Interval, TxError> {
        let seqname = self
            .seqname
            .ok_or_else(|| TxError::new("missing seqname"))?;
        let start = self.start.ok_or_else(|| TxError::new("missing start"))?;
        let end = self.end.ok_or_else(|| TxError::new("missing end"))?;
        let strand = self.strand.ok_or_else(|| TxError::new("missing strand"))?;
        check_coordinates(start, end)?;

        Ok(Interval {
            seqname,
            start,
            end,
            strand,
            feature: self.feature.unwrap_or(Feature::Exon),
            attributes: self.attributes,
        })
    }
}
