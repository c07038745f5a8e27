//! Places shortened exons and introns on a new coordinate axis
//!
//! Every transcript is laid out separately. Its exons and introns are
//! sorted by their genomic position and placed next to each other, so that
//! each interval occupies exactly its (shortened) width on the new axis:
//!
//! ```text
//! Genomic     XXXXXX-------------------XXXX------XXXXXX
//! Rescaled    XXXXXX-----XXXX-----XXXXXX
//! ```
//!
//! The whole transcript is then moved by an offset that aligns it with the
//! other transcripts of the gene.
mod pipeline;

pub use crate::rescale::pipeline::{
    coerce_gap_width, shorten_gaps, ShortenGaps, DEFAULT_TARGET_GAP_WIDTH,
};

use crate::models::{GenomicRange, Interval};
use crate::utils::errors::TxError;

/// An exon or intron of one transcript, prepared for rescaling
///
/// Introns are stored in true-gap representation, i.e. without the
/// exon boundaries. `width` is the shortened width, which can be smaller
/// than the genomic width of the segment.
#[derive(Clone, Debug)]
pub(crate) struct Segment<'a> {
    interval: &'a Interval,
    start: u32,
    end: u32,
    width: u32,
}

impl<'a> Segment<'a> {
    /// Exons are never shortened
    pub(crate) fn exon(interval: &'a Interval) -> Self {
        Segment {
            interval,
            start: interval.start(),
            end: interval.end(),
            width: interval.width(),
        }
    }

    /// `start` and `end` are the true-gap coordinates of the intron
    pub(crate) fn intron(interval: &'a Interval, start: u32, end: u32, width: u32) -> Self {
        Segment {
            interval,
            start,
            end,
            width,
        }
    }
}

/// Rescales all exons and introns of one transcript
///
/// The segments are placed contiguously on a new axis, starting at
/// `offset + 1`. Introns are converted back to the exon-adjacent boundary
/// convention, so they share their first and last position with the
/// neighbouring exons.
///
/// Segments that overlap each other in genomic coordinates cannot be placed
/// consistently and cause an error.
pub(crate) fn rescale_transcript(
    group: &str,
    mut segments: Vec<Segment>,
    offset: u32,
) -> Result<Vec<Interval>, TxError> {
    segments.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));

    for pair in segments.windows(2) {
        if pair[1].start <= pair[0].end {
            return Err(TxError::new(format!(
                "{} and {} of transcript '{}' overlap and would produce overlapping rescaled coordinates",
                pair[0].interval, pair[1].interval, group
            )));
        }
    }

    let mut rescaled = Vec::with_capacity(segments.len());
    let mut cumulative_width = 0;
    for segment in segments {
        cumulative_width += segment.width;
        let end = cumulative_width + offset;
        let start = end + 1 - segment.width;

        let interval = if segment.interval.is_intron() {
            segment.interval.relocate(start - 1, end + 1)
        } else {
            segment.interval.relocate(start, end)
        };
        rescaled.push(interval.map_err(|err| {
            TxError::new(format!(
                "unable to rescale {} of transcript '{}': {}",
                segment.interval, group, err
            ))
        })?);
    }
    Ok(rescaled)
}
