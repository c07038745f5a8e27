//! Helper functions shared by the different modules
pub mod errors;

use std::collections::BTreeMap;

use crate::models::{GenomicRange, Interval};
use crate::utils::errors::TxError;

/// Group key used when no grouping attribute is specified
pub(crate) const SINGLE_GROUP: &str = "";

/// Returns the transcript group of an interval
///
/// Without a `group_var`, every interval belongs to the same
/// anonymous group.
pub(crate) fn group_of<'a>(
    interval: &'a Interval,
    group_var: Option<&str>,
    table: &str,
) -> Result<&'a str, TxError> {
    let key = match group_var {
        None => return Ok(SINGLE_GROUP),
        Some(key) => key,
    };
    match interval.attribute(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(TxError::new(format!(
            "{} at {}:{}-{} has no value for group column '{}'",
            table,
            interval.seqname(),
            interval.start(),
            interval.end(),
            key
        ))),
    }
}

/// Splits intervals by their transcript group
///
/// The groups are returned in sorted order, the intervals of each
/// group keep their input order.
pub(crate) fn group_intervals<'a>(
    intervals: &'a [Interval],
    group_var: Option<&str>,
    table: &str,
) -> Result<BTreeMap<&'a str, Vec<&'a Interval>>, TxError> {
    let mut groups: BTreeMap<&str, Vec<&Interval>> = BTreeMap::new();
    for interval in intervals {
        let group = group_of(interval, group_var, table)?;
        groups.entry(group).or_default().push(interval);
    }
    Ok(groups)
}
