use serde::{Deserialize, Serialize};

use crate::models::Strand;

/// Common accessors and set operations of 1-based, fully closed genomic ranges
///
/// Two ranges can only overlap, contain or equal each other if they are
/// located on the same sequence and the same strand.
pub trait GenomicRange {
    fn seqname(&self) -> &str;
    fn start(&self) -> u32;
    fn end(&self) -> u32;
    fn strand(&self) -> Strand;

    /// Number of positions covered by the range
    ///
    /// Empty ranges (`end == start - 1`) have a width of 0
    fn width(&self) -> u32 {
        self.end().saturating_add(1).saturating_sub(self.start())
    }

    fn is_empty(&self) -> bool {
        self.width() == 0
    }

    /// Returns true if both ranges are on the same sequence and strand
    fn same_location<R: GenomicRange + ?Sized>(&self, other: &R) -> bool {
        self.seqname() == other.seqname() && self.strand() == other.strand()
    }

    /// Returns true if the ranges share at least one position
    ///
    /// # Examples
    ///
    /// ```rust
    /// use txgaps::models::{GenomicRange, Region, Strand};
    ///
    /// let a = Region::new("chr1", 10, 20, Strand::Plus);
    /// assert!(a.overlaps(&Region::new("chr1", 20, 30, Strand::Plus)));
    /// assert!(!a.overlaps(&Region::new("chr1", 21, 30, Strand::Plus)));
    /// assert!(!a.overlaps(&Region::new("chr1", 15, 30, Strand::Minus)));
    /// ```
    fn overlaps<R: GenomicRange + ?Sized>(&self, other: &R) -> bool {
        self.same_location(other)
            && !self.is_empty()
            && !other.is_empty()
            && self.start() <= other.end()
            && other.start() <= self.end()
    }

    /// Returns true if `other` lies completely within `self`, boundaries inclusive
    ///
    /// # Examples
    ///
    /// ```rust
    /// use txgaps::models::{GenomicRange, Region, Strand};
    ///
    /// let intron = Region::new("chr1", 10, 50, Strand::Plus);
    /// assert!(intron.contains(&Region::new("chr1", 10, 20, Strand::Plus)));
    /// assert!(intron.contains(&intron));
    /// assert!(!intron.contains(&Region::new("chr1", 40, 51, Strand::Plus)));
    /// ```
    fn contains<R: GenomicRange + ?Sized>(&self, other: &R) -> bool {
        self.same_location(other) && self.start() <= other.start() && other.end() <= self.end()
    }

    /// Returns true if both ranges have identical coordinates
    fn same_range<R: GenomicRange + ?Sized>(&self, other: &R) -> bool {
        self.same_location(other) && self.start() == other.start() && self.end() == other.end()
    }
}

impl<T: GenomicRange + ?Sized> GenomicRange for &T {
    fn seqname(&self) -> &str {
        (**self).seqname()
    }

    fn start(&self) -> u32 {
        (**self).start()
    }

    fn end(&self) -> u32 {
        (**self).end()
    }

    fn strand(&self) -> Strand {
        (**self).strand()
    }
}

/// A plain genomic range without any additional annotation
///
/// `Region`s are used for derived ranges, such as the covering set of
/// all exons, the gaps in between them or introns in true-gap representation.
/// Unlike [`Interval`](`crate::models::Interval`), a `Region` can be empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    seqname: String,
    start: u32,
    end: u32,
    strand: Strand,
}

impl Region {
    pub fn new<S: Into<String>>(seqname: S, start: u32, end: u32, strand: Strand) -> Self {
        Region {
            seqname: seqname.into(),
            start,
            end,
            strand,
        }
    }

    /// Creates a `Region` with the location and coordinates of any other range
    pub fn from_range<R: GenomicRange + ?Sized>(range: &R) -> Self {
        Region::new(range.seqname(), range.start(), range.end(), range.strand())
    }
}

impl GenomicRange for Region {
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

/// Merges overlapping and adjacent ranges into a minimal set of disjoint ranges
///
/// Ranges are only merged with ranges on the same sequence and strand. The
/// result is sorted by sequence, strand and start. Empty ranges are ignored.
///
/// ```text
/// Input     ----XXXXXX----XXXX------------XXXXXX---XXXX
///           -------XXX------------XXXX--XXXXX------XXXX
/// Reduced   ----OOOOOO----OOOO----OOOO--OOOOOOOO---OOOO
/// ```
///
/// # Examples
///
/// ```rust
/// use txgaps::models::{union_reduce, GenomicRange, Region, Strand};
///
/// let exons = vec![
///     Region::new("chr1", 30, 40, Strand::Plus),
///     Region::new("chr1", 1, 10, Strand::Plus),
///     Region::new("chr1", 5, 15, Strand::Plus),
///     Region::new("chr1", 16, 20, Strand::Plus),
/// ];
/// let reduced = union_reduce(&exons);
/// assert_eq!(reduced.len(), 2);
/// assert_eq!((reduced[0].start(), reduced[0].end()), (1, 20));
/// assert_eq!((reduced[1].start(), reduced[1].end()), (30, 40));
/// ```
pub fn union_reduce<R: GenomicRange>(ranges: &[R]) -> Vec<Region> {
    let mut sorted: Vec<&R> = ranges.iter().filter(|r| !r.is_empty()).collect();
    sorted.sort_by(|a, b| {
        a.seqname()
            .cmp(b.seqname())
            .then(a.strand().cmp(&b.strand()))
            .then(a.start().cmp(&b.start()))
            .then(a.end().cmp(&b.end()))
    });

    let mut reduced: Vec<Region> = Vec::with_capacity(sorted.len());
    for range in sorted {
        if let Some(last) = reduced.last_mut() {
            if last.same_location(range) && range.start() <= last.end.saturating_add(1) {
                last.end = last.end.max(range.end());
                continue;
            }
        }
        reduced.push(Region::from_range(range));
    }
    reduced
}

/// Returns all positions of `ranges` that are not covered by `other`
///
/// Both inputs are reduced first, so they do not need to be sorted
/// or disjoint.
///
/// # Examples
///
/// ```rust
/// use txgaps::models::{set_difference, GenomicRange, Region, Strand};
///
/// let query = vec![Region::new("chr1", 1, 100, Strand::Plus)];
/// let reference = vec![Region::new("chr1", 20, 30, Strand::Plus)];
/// let diff = set_difference(&query, &reference);
/// assert_eq!((diff[0].start(), diff[0].end()), (1, 19));
/// assert_eq!((diff[1].start(), diff[1].end()), (31, 100));
/// ```
pub fn set_difference<R: GenomicRange, O: GenomicRange>(ranges: &[R], other: &[O]) -> Vec<Region> {
    let other = union_reduce(other);
    let mut difference = Vec::new();
    for region in union_reduce(ranges) {
        let mut cursor = region.start;
        for cut in other.iter().filter(|cut| cut.overlaps(&region)) {
            if cut.start > cursor {
                difference.push(Region::new(
                    region.seqname.as_str(),
                    cursor,
                    cut.start - 1,
                    region.strand,
                ));
            }
            cursor = cursor.max(cut.end.saturating_add(1));
        }
        if cursor <= region.end {
            difference.push(Region::new(
                region.seqname.as_str(),
                cursor,
                region.end,
                region.strand,
            ));
        }
    }
    difference
}
