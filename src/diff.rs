//! Differences between the exons of transcripts and a reference transcript
//!
//! ```text
//! Reference      ----XXXXXX----XXXX------------XXXXXX---XXXX
//! Transcript     ----XXXXXX--------------XXXX----XXXXXX-XXXX
//! in_ref         --------------OOOO--------------O----------
//! not_in_ref     ------------------------OOOO--------OO-----
//! ```

use crate::models::{set_difference, GenomicRange, Interval, IntervalBuilder, Region};
use crate::utils::errors::TxError;
use crate::utils::group_intervals;

/// Name of the attribute that describes the kind of difference
pub const DIFF_TYPE: &str = "diff_type";

/// Positions that are only part of the reference
pub const IN_REF: &str = "in_ref";

/// Positions that are only part of the transcript
pub const NOT_IN_REF: &str = "not_in_ref";

/// Returns the regions where each transcript differs from the reference exons
///
/// For every transcript, the result contains the exonic regions missing from
/// the reference (`diff_type = "not_in_ref"`) and the reference regions
/// missing from the transcript (`diff_type = "in_ref"`). The differences
/// carry the `group_var` attribute of their transcript.
///
/// # Examples
///
/// ```rust
/// use txgaps::diff::{to_diff, DIFF_TYPE};
/// use txgaps::models::GenomicRange;
/// use txgaps::tests::transcripts::{standard_exons, two_transcripts_exons};
///
/// let diffs = to_diff(&two_transcripts_exons(), &standard_exons(), Some("transcript")).unwrap();
///
/// // transcript A is identical to the reference
/// assert!(diffs.iter().all(|d| d.attribute("transcript") == Some("B")));
///
/// let found: Vec<(u32, u32, &str)> = diffs
///     .iter()
///     .map(|d| (d.start(), d.end(), d.attribute(DIFF_TYPE).unwrap()))
///     .collect();
/// assert_eq!(found, vec![(1000, 1100, "not_in_ref"), (100, 200, "in_ref")]);
/// ```
pub fn to_diff(
    exons: &[Interval],
    ref_exons: &[Interval],
    group_var: Option<&str>,
) -> Result<Vec<Interval>, TxError> {
    let mut diffs = Vec::new();
    for (group, group_exons) in group_intervals(exons, group_var, "exons")? {
        for (regions, diff_type) in [
            (set_difference(&group_exons, ref_exons), NOT_IN_REF),
            (set_difference(ref_exons, &group_exons), IN_REF),
        ] {
            for region in regions {
                diffs.push(diff_interval(&region, diff_type, group_var, group)?);
            }
        }
    }
    Ok(diffs)
}

fn diff_interval(
    region: &Region,
    diff_type: &str,
    group_var: Option<&str>,
    group: &str,
) -> Result<Interval, TxError> {
    let mut builder = IntervalBuilder::exon()
        .seqname(region.seqname())
        .start(region.start())
        .end(region.end())
        .strand(region.strand())
        .attribute(DIFF_TYPE, diff_type);
    if let Some(key) = group_var {
        builder = builder.attribute(key, group);
    }
    builder.build()
}
