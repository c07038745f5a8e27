//! Gaps between the exons of a gene and how they are shortened
//!
//! A gap is a maximal region within the span of all exons that is not
//! covered by any exon. Gaps are computed from the exons of all transcripts
//! together, so that every transcript is shortened in the same way and the
//! transcripts stay aligned to each other.
//!
//! ```text
//! Transcript 1   ----XXXXXX----XXXX------------XXXXXX---XXXX
//! Transcript 2   ----XXXXXX------------XXXX----XXXXXX---XXXX
//! Gaps           ----------GGGG----GGGG----GGGG------GGG----
//! ```
//!
//! The module is split into three steps:
//! 1. [`extract_gaps`] computes the gaps from the exons
//! 2. [`map_gaps`] relates introns (or transcript start gaps) to the gaps
//! 3. [`shortened_width`] computes the new width of every intron
mod mapper;
mod shortener;

pub use crate::gaps::mapper::{map_gaps, relate, GapRelation};
pub use crate::gaps::shortener::{shorten, shortened_width};

use log::debug;

use crate::models::{union_reduce, GenomicRange, Region};
use crate::utils::errors::TxError;

/// Returns all gaps between the exons, sorted by start
///
/// All exons must be located on the same sequence and strand, otherwise
/// an error is returned. Overlapping exons (e.g. from different transcripts)
/// are merged before the gaps are computed. A single exon or a set of
/// contiguous exons does not have any gaps.
///
/// # Examples
///
/// ```rust
/// use txgaps::gaps::extract_gaps;
/// use txgaps::models::{GenomicRange, Region, Strand};
///
/// let exons = vec![
///     Region::new("chr1", 1, 10, Strand::Plus),
///     Region::new("chr1", 21, 30, Strand::Plus),
///     Region::new("chr1", 25, 40, Strand::Plus),
///     Region::new("chr1", 61, 70, Strand::Plus),
/// ];
/// let gaps = extract_gaps(&exons).unwrap();
/// assert_eq!(gaps.len(), 2);
/// assert_eq!((gaps[0].start(), gaps[0].end()), (11, 20));
/// assert_eq!((gaps[1].start(), gaps[1].end()), (41, 60));
/// ```
pub fn extract_gaps<R: GenomicRange>(exons: &[R]) -> Result<Vec<Region>, TxError> {
    check_single_location(exons)?;

    let covered = union_reduce(exons);
    let gaps: Vec<Region> = covered
        .windows(2)
        .map(|pair| {
            Region::new(
                pair[0].seqname(),
                pair[0].end() + 1,
                pair[1].start() - 1,
                pair[0].strand(),
            )
        })
        .collect();

    debug!(
        "{} gaps between {} covered regions",
        gaps.len(),
        covered.len()
    );
    Ok(gaps)
}

/// Ensures that all exons belong to the same sequence and strand
fn check_single_location<R: GenomicRange>(exons: &[R]) -> Result<(), TxError> {
    let first = match exons.first() {
        Some(exon) => exon,
        None => return Ok(()),
    };
    if let Some(other) = exons.iter().find(|exon| exon.seqname() != first.seqname()) {
        return Err(TxError::new(format!(
            "exons must have a single seqname, found '{}' and '{}'",
            first.seqname(),
            other.seqname()
        )));
    }
    if let Some(other) = exons.iter().find(|exon| exon.strand() != first.strand()) {
        return Err(TxError::new(format!(
            "exons must have a single strand, found '{}' and '{}'",
            first.strand(),
            other.strand()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Strand;

    fn plus(start: u32, end: u32) -> Region {
        Region::new("chr1", start, end, Strand::Plus)
    }

    #[test]
    fn test_single_exon() {
        assert!(extract_gaps(&[plus(10, 100)]).unwrap().is_empty());
    }

    #[test]
    fn test_no_exons() {
        assert!(extract_gaps::<Region>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_contiguous_exons() {
        let gaps = extract_gaps(&[plus(10, 100), plus(101, 200), plus(50, 150)]).unwrap();
        assert!(gaps.is_empty());
    }

    #[test]
    fn test_gaps_keep_location() {
        let exons = vec![
            Region::new("chrX", 300, 400, Strand::Minus),
            Region::new("chrX", 100, 200, Strand::Minus),
        ];
        let gaps = extract_gaps(&exons).unwrap();
        assert_eq!(gaps, vec![Region::new("chrX", 201, 299, Strand::Minus)]);
    }

    #[test]
    fn test_multiple_seqnames() {
        let exons = vec![plus(1, 10), Region::new("chr2", 20, 30, Strand::Plus)];
        let err = extract_gaps(&exons).unwrap_err();
        assert!(err.message().contains("single seqname"));
    }

    #[test]
    fn test_multiple_strands() {
        let exons = vec![plus(1, 10), Region::new("chr1", 20, 30, Strand::Minus)];
        let err = extract_gaps(&exons).unwrap_err();
        assert!(err.message().contains("single strand"));
    }
}
