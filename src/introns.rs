//! Derive introns and exon numbers from the exons of transcripts
//!
//! [`to_intron`] creates the introns in the boundary convention that
//! [`shorten_gaps`](`crate::rescale::shorten_gaps`) expects: every intron
//! starts at the last position of its upstream exon and ends at the first
//! position of its downstream exon.
//!
//! ```text
//! Exons      XXXXXX-----------XXXX-------XXXXXX
//! Introns         IIIIIIIIIIIII   IIIIIIIII
//! ```

use std::collections::BTreeMap;

use log::warn;

use crate::models::{GenomicRange, Interval, IntervalBuilder, Strand};
use crate::utils::errors::TxError;
use crate::utils::{group_intervals, group_of};

/// Name of the attribute that [`add_exon_number`] adds
pub const EXON_NUMBER: &str = "exon_number";

/// Returns the introns between consecutive exons of each transcript
///
/// Without a `group_var`, all exons are considered to belong to the same
/// transcript. The introns carry the `group_var` attribute of their exons.
/// Exons that overlap each other are not separated by an intron.
///
/// # Examples
///
/// ```rust
/// use txgaps::introns::to_intron;
/// use txgaps::models::GenomicRange;
/// use txgaps::tests::transcripts::two_transcripts_exons;
///
/// let introns = to_intron(&two_transcripts_exons(), Some("transcript")).unwrap();
/// let coordinates: Vec<(u32, u32)> = introns.iter().map(|i| (i.start(), i.end())).collect();
/// assert_eq!(coordinates, vec![(200, 300), (400, 500), (400, 500), (600, 1000)]);
/// assert_eq!(introns[3].attribute("transcript"), Some("B"));
/// ```
pub fn to_intron(exons: &[Interval], group_var: Option<&str>) -> Result<Vec<Interval>, TxError> {
    let mut introns = Vec::new();
    for (group, mut group_exons) in group_intervals(exons, group_var, "exons")? {
        group_exons.sort_by_key(|exon| (exon.start(), exon.end()));
        for pair in group_exons.windows(2) {
            let (upstream, downstream) = (pair[0], pair[1]);
            if downstream.start() <= upstream.end() {
                warn!(
                    "{} and {} overlap, no intron is created between them",
                    upstream, downstream
                );
                continue;
            }
            let mut builder = IntervalBuilder::intron()
                .seqname(upstream.seqname())
                .start(upstream.end())
                .end(downstream.start())
                .strand(upstream.strand());
            if let Some(key) = group_var {
                builder = builder.attribute(key, group);
            }
            introns.push(builder.build()?);
        }
    }
    Ok(introns)
}

/// Adds the attribute `exon_number` to every exon
///
/// Exons are numbered per transcript in the direction of transcription,
/// i.e. descending genomic position for transcripts on the minus strand.
/// The exons are returned in their input order.
///
/// # Examples
///
/// ```rust
/// use txgaps::introns::{add_exon_number, EXON_NUMBER};
/// use txgaps::tests::transcripts::two_transcripts_exons;
///
/// let exons = add_exon_number(&two_transcripts_exons(), Some("transcript")).unwrap();
/// let numbers: Vec<&str> = exons.iter().map(|ex| ex.attribute(EXON_NUMBER).unwrap()).collect();
/// assert_eq!(numbers, vec!["1", "2", "3", "1", "2", "3"]);
/// ```
pub fn add_exon_number(
    exons: &[Interval],
    group_var: Option<&str>,
) -> Result<Vec<Interval>, TxError> {
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, exon) in exons.iter().enumerate() {
        groups
            .entry(group_of(exon, group_var, "exons")?)
            .or_default()
            .push(idx);
    }

    let mut numbered = exons.to_vec();
    for mut order in groups.into_values() {
        order.sort_by_key(|idx| (exons[*idx].start(), exons[*idx].end()));
        if order.iter().any(|idx| exons[*idx].strand() == Strand::Minus) {
            order.reverse();
        }
        for (number, idx) in order.into_iter().enumerate() {
            numbered[idx].set_attribute(EXON_NUMBER, (number + 1).to_string());
        }
    }
    Ok(numbered)
}
