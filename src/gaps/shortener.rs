use crate::gaps::GapRelation;
use crate::models::{GenomicRange, Region};

/// Returns the width of a candidate after all its gaps are shortened
///
/// - `Equal`: the candidate is shortened to at most `target_gap_width`
/// - `PureWithin`: every contained gap is shortened to at most `target_gap_width`
///   and the candidate loses the sum of these reductions. Exons of other
///   transcripts within the candidate keep their width.
/// - `None`: the width is unchanged
///
/// The returned width is never larger than `width`.
///
/// # Examples
///
/// ```rust
/// use txgaps::gaps::{shortened_width, GapRelation};
/// use txgaps::models::{Region, Strand};
///
/// let gaps = vec![
///     Region::new("chr1", 101, 300, Strand::Plus),
///     Region::new("chr1", 401, 430, Strand::Plus),
/// ];
///
/// assert_eq!(shortened_width(200, &GapRelation::Equal(0), &gaps, 50), 50);
/// assert_eq!(shortened_width(30, &GapRelation::Equal(1), &gaps, 50), 30);
///
/// // intron 101-430 contains an exon (301-400) of another transcript
/// let within = GapRelation::PureWithin(vec![0, 1]);
/// assert_eq!(shortened_width(330, &within, &gaps, 50), 180);
/// ```
pub fn shortened_width(
    width: u32,
    relation: &GapRelation,
    gaps: &[Region],
    target_gap_width: u32,
) -> u32 {
    match relation {
        GapRelation::Equal(_) => width.min(target_gap_width),
        GapRelation::PureWithin(indices) => {
            let reduction: u32 = indices
                .iter()
                .map(|idx| gaps[*idx].width().saturating_sub(target_gap_width))
                .sum();
            width.saturating_sub(reduction)
        }
        GapRelation::None => width,
    }
}

/// Returns the shortened width of every candidate
///
/// `relations` must be the output of [`map_gaps`](`crate::gaps::map_gaps`)
/// for the same candidates and gaps.
pub fn shorten<R: GenomicRange>(
    candidates: &[R],
    relations: &[GapRelation],
    gaps: &[Region],
    target_gap_width: u32,
) -> Vec<u32> {
    candidates
        .iter()
        .zip(relations)
        .map(|(candidate, relation)| {
            shortened_width(candidate.width(), relation, gaps, target_gap_width)
        })
        .collect()
}
