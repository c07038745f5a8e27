use log::trace;

use crate::models::{GenomicRange, Region};

/// How an intron (or transcript start gap) relates to the gaps between exons
///
/// The indices refer to the position of the gap in the gap vector returned
/// by [`extract_gaps`](`crate::gaps::extract_gaps`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GapRelation {
    /// The candidate is identical to one gap
    Equal(usize),
    /// The candidate contains one or more gaps, but is not identical to any
    /// of them. This happens when exons of other transcripts lie within the
    /// candidate.
    PureWithin(Vec<usize>),
    /// The candidate does not contain any gap
    None,
}

impl GapRelation {
    /// Returns the indices of all gaps within the candidate
    pub fn gap_indices(&self) -> &[usize] {
        match self {
            GapRelation::Equal(idx) => std::slice::from_ref(idx),
            GapRelation::PureWithin(indices) => indices,
            GapRelation::None => &[],
        }
    }
}

/// Classifies a single candidate against the gaps
///
/// `gaps` must be sorted by start and must not overlap each other,
/// as returned from [`extract_gaps`](`crate::gaps::extract_gaps`).
///
/// # Examples
///
/// ```rust
/// use txgaps::gaps::{relate, GapRelation};
/// use txgaps::models::{Region, Strand};
///
/// let gaps = vec![
///     Region::new("chr1", 11, 20, Strand::Plus),
///     Region::new("chr1", 41, 60, Strand::Plus),
/// ];
///
/// let intron = Region::new("chr1", 11, 20, Strand::Plus);
/// assert_eq!(relate(&intron, &gaps), GapRelation::Equal(0));
///
/// let intron = Region::new("chr1", 11, 60, Strand::Plus);
/// assert_eq!(relate(&intron, &gaps), GapRelation::PureWithin(vec![0, 1]));
///
/// let intron = Region::new("chr1", 12, 20, Strand::Plus);
/// assert_eq!(relate(&intron, &gaps), GapRelation::None);
/// ```
pub fn relate<R: GenomicRange>(candidate: &R, gaps: &[Region]) -> GapRelation {
    if candidate.is_empty() {
        return GapRelation::None;
    }

    let first = gaps.partition_point(|gap| gap.start() < candidate.start());
    let contained: Vec<usize> = (first..gaps.len())
        .take_while(|idx| gaps[*idx].end() <= candidate.end())
        .filter(|idx| candidate.contains(&gaps[*idx]))
        .collect();

    if contained.is_empty() {
        GapRelation::None
    } else if contained.len() == 1 && candidate.same_range(&gaps[contained[0]]) {
        GapRelation::Equal(contained[0])
    } else {
        GapRelation::PureWithin(contained)
    }
}

/// Classifies every candidate against the gaps
///
/// The returned relations have the same order as the candidates.
pub fn map_gaps<R: GenomicRange>(candidates: &[R], gaps: &[Region]) -> Vec<GapRelation> {
    candidates
        .iter()
        .map(|candidate| {
            let relation = relate(candidate, gaps);
            trace!(
                "{}:{}-{} => {:?}",
                candidate.seqname(),
                candidate.start(),
                candidate.end(),
                relation
            );
            relation
        })
        .collect()
}
