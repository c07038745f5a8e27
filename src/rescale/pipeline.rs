use std::collections::BTreeMap;

use log::{debug, warn};

use crate::gaps::{extract_gaps, map_gaps, shorten};
use crate::models::{transcript_start_gaps, Feature, GenomicRange, Interval, Region};
use crate::rescale::{rescale_transcript, Segment};
use crate::utils::errors::TxError;
use crate::utils::{group_intervals, group_of};

/// Gaps wider than this are shortened, unless specified otherwise
pub const DEFAULT_TARGET_GAP_WIDTH: u32 = 100;

/// Shortens the gaps between exons to improve the visualization of transcripts
///
/// Introns and the distance from the leftmost exon to the start of each
/// transcript are compressed towards `target_gap_width`. Exons keep their
/// width. The returned intervals contain all exons and introns, placed on a
/// new coordinate axis. These coordinates are only meaningful for plotting
/// and do not correspond to genomic positions.
///
/// # Examples
///
/// ```rust
/// use txgaps::models::GenomicRange;
/// use txgaps::rescale::ShortenGaps;
/// use txgaps::tests::transcripts::{two_transcripts_exons, two_transcripts_introns};
///
/// let exons = two_transcripts_exons();
/// let introns = two_transcripts_introns();
///
/// let rescaled = ShortenGaps::new()
///     .group_var("transcript")
///     .target_gap_width(50)
///     .run(&exons, &introns)
///     .unwrap();
///
/// assert_eq!(rescaled.len(), exons.len() + introns.len());
/// // exons keep their width
/// assert!(rescaled.iter().filter(|i| i.is_exon()).all(|i| i.width() == 101));
/// ```
#[derive(Clone, Debug)]
pub struct ShortenGaps {
    group_var: Option<String>,
    target_gap_width: u32,
}

impl Default for ShortenGaps {
    fn default() -> Self {
        ShortenGaps {
            group_var: None,
            target_gap_width: DEFAULT_TARGET_GAP_WIDTH,
        }
    }
}

impl ShortenGaps {
    pub fn new() -> Self {
        Self::default()
    }

    /// The attribute that identifies the transcript of each exon and intron
    ///
    /// Without a `group_var`, all exons and introns are treated as
    /// one single transcript.
    pub fn group_var<S: Into<String>>(mut self, group_var: S) -> Self {
        self.group_var = Some(group_var.into());
        self
    }

    /// The maximum width of a gap after shortening
    pub fn target_gap_width(mut self, width: u32) -> Self {
        self.target_gap_width = width;
        self
    }

    /// Rescales all exons and introns
    ///
    /// The output is ordered by transcript group and then by position.
    /// All exons must be located on the same seqname and strand.
    pub fn run(&self, exons: &[Interval], introns: &[Interval]) -> Result<Vec<Interval>, TxError> {
        if self.target_gap_width == 0 {
            return Err(TxError::new("target_gap_width must be a positive integer"));
        }
        if exons.is_empty() {
            return Err(TxError::new("exons must contain at least one interval"));
        }
        check_feature(exons, Feature::Exon, "exons")?;
        check_feature(introns, Feature::Intron, "introns")?;

        let group_var = self.group_var.as_deref();
        let exon_groups = group_intervals(exons, group_var, "exons")?;
        let gaps = extract_gaps(exons)?;

        let true_introns = introns
            .iter()
            .map(true_gap)
            .collect::<Result<Vec<Region>, TxError>>()?;
        if let Some(intron) = introns.iter().find(|intron| !intron.same_location(&exons[0])) {
            warn!(
                "{} is not located on {} ({}) and will not be shortened",
                intron,
                exons[0].seqname(),
                exons[0].strand()
            );
        }
        let intron_relations = map_gaps(&true_introns, &gaps);
        let intron_widths = shorten(
            &true_introns,
            &intron_relations,
            &gaps,
            self.target_gap_width,
        );

        let offsets = self.offsets(&exon_groups, &gaps);

        let mut transcripts: BTreeMap<&str, Vec<Segment>> = BTreeMap::new();
        for (group, group_exons) in &exon_groups {
            transcripts.insert(
                *group,
                group_exons.iter().copied().map(Segment::exon).collect(),
            );
        }
        for ((intron, region), width) in introns.iter().zip(&true_introns).zip(intron_widths) {
            let group = group_of(intron, group_var, "introns")?;
            match transcripts.get_mut(group) {
                Some(segments) => segments.push(Segment::intron(
                    intron,
                    region.start(),
                    region.end(),
                    width,
                )),
                None => {
                    return Err(TxError::new(format!(
                        "{} belongs to transcript '{}', which has no exons",
                        intron, group
                    )))
                }
            }
        }

        let mut rescaled = Vec::with_capacity(exons.len() + introns.len());
        for (group, segments) in transcripts {
            let offset = offsets.get(group).copied().ok_or_else(|| {
                TxError::new(format!("no unique start offset for transcript '{}'", group))
            })?;
            debug!("transcript '{}' is placed at offset {}", group, offset);
            rescaled.append(&mut rescale_transcript(group, segments, offset)?);
        }
        debug!(
            "rescaled {} exons and {} introns",
            exons.len(),
            introns.len()
        );
        Ok(rescaled)
    }

    /// Returns the position on the new axis after which each transcript starts
    ///
    /// A single transcript starts right after position 1. Multiple
    /// transcripts are moved by their shortened start gap, so that they stay
    /// aligned to each other.
    fn offsets<'a>(
        &self,
        exon_groups: &BTreeMap<&'a str, Vec<&'a Interval>>,
        gaps: &[Region],
    ) -> BTreeMap<&'a str, u32> {
        if exon_groups.len() == 1 {
            return exon_groups.keys().map(|group| (*group, 1)).collect();
        }

        let start_gaps = transcript_start_gaps(exon_groups);
        let regions: Vec<&Region> = start_gaps.iter().map(|gap| gap.region()).collect();
        let relations = map_gaps(&regions, gaps);
        let widths = shorten(&regions, &relations, gaps, self.target_gap_width);

        exon_groups
            .keys()
            .zip(widths)
            .map(|(group, width)| (*group, width))
            .collect()
    }
}

/// Shortens the gaps between exons, see [`ShortenGaps`]
///
/// # Examples
///
/// ```rust
/// use txgaps::models::GenomicRange;
/// use txgaps::rescale::shorten_gaps;
/// use txgaps::tests::transcripts::{standard_exons, standard_introns};
///
/// let rescaled = shorten_gaps(&standard_exons(), &standard_introns(), None, 50).unwrap();
/// let coordinates: Vec<(u32, u32)> = rescaled.iter().map(|i| (i.start(), i.end())).collect();
/// assert_eq!(
///     coordinates,
///     vec![(2, 102), (102, 153), (153, 253), (253, 304), (304, 404)]
/// );
/// ```
pub fn shorten_gaps(
    exons: &[Interval],
    introns: &[Interval],
    group_var: Option<&str>,
    target_gap_width: u32,
) -> Result<Vec<Interval>, TxError> {
    let mut shortener = ShortenGaps::new().target_gap_width(target_gap_width);
    if let Some(group_var) = group_var {
        shortener = shortener.group_var(group_var);
    }
    shortener.run(exons, introns)
}

/// Converts a numeric gap width into a valid `target_gap_width`
///
/// Fractional values are truncated with a warning. Values below 1 and
/// non-finite values are rejected.
///
/// # Examples
///
/// ```rust
/// use txgaps::rescale::coerce_gap_width;
///
/// assert_eq!(coerce_gap_width(100.0).unwrap(), 100);
/// assert_eq!(coerce_gap_width(49.9).unwrap(), 49);
/// assert!(coerce_gap_width(0.5).is_err());
/// assert!(coerce_gap_width(-10.0).is_err());
/// ```
pub fn coerce_gap_width(value: f64) -> Result<u32, TxError> {
    if !value.is_finite() || value < 1.0 || value > u32::MAX as f64 {
        return Err(TxError::new(format!(
            "target_gap_width must be a positive integer, got {}",
            value
        )));
    }
    let width = value.trunc();
    if width != value {
        warn!(
            "target_gap_width {} is not an integer and is truncated to {}",
            value, width
        );
    }
    Ok(width as u32)
}

/// Ensures all intervals of a table have the expected type
fn check_feature(intervals: &[Interval], expected: Feature, table: &str) -> Result<(), TxError> {
    match intervals.iter().find(|i| i.feature() != expected) {
        Some(interval) => Err(TxError::new(format!(
            "{} must only contain type '{}', found {}",
            table, expected, interval
        ))),
        None => Ok(()),
    }
}

/// Returns the intron without its exon boundaries
///
/// Introns between two adjacent exons are empty in true-gap representation.
fn true_gap(intron: &Interval) -> Result<Region, TxError> {
    if intron.width() < 2 {
        return Err(TxError::new(format!(
            "{} is too short, introns must include the adjacent exon boundaries",
            intron
        )));
    }
    Ok(Region::new(
        intron.seqname(),
        intron.start() + 1,
        intron.end() - 1,
        intron.strand(),
    ))
}
