use std::collections::BTreeMap;

use crate::models::{GenomicRange, Interval, Region};

/// The distance from the leftmost exon of all transcripts to the
/// first exon of one transcript
///
/// ```text
/// Transcript 1   ----XXXXXX----XXXX------------XXXXXX---XXXX
/// Transcript 2   ----------------------XXXX----XXXXXX---XXXX
/// Start gap 2    ----SSSSSSSSSSSSSSSSSS
/// ```
///
/// The start gap of a transcript that starts at the leftmost position is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptStartGap {
    group: String,
    region: Region,
}

impl TranscriptStartGap {
    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn width(&self) -> u32 {
        self.region.width()
    }
}

/// Creates one [`TranscriptStartGap`] for every group of exons
///
/// Groups without any exon do not get a start gap.
pub fn transcript_start_gaps(groups: &BTreeMap<&str, Vec<&Interval>>) -> Vec<TranscriptStartGap> {
    let global_start = match groups.values().flatten().map(|exon| exon.start()).min() {
        Some(start) => start,
        None => return vec![],
    };

    groups
        .iter()
        .filter_map(|(group, exons)| {
            let first = exons.iter().min_by_key(|exon| exon.start())?;
            Some(TranscriptStartGap {
                group: group.to_string(),
                region: Region::new(
                    first.seqname(),
                    global_start,
                    first.start() - 1,
                    first.strand(),
                ),
            })
        })
        .collect()
}
