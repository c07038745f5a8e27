//! The data model of exons, introns and the ranges derived from them
//!
//! - [`Interval`]: An exon or intron, together with arbitrary attributes
//! - [`Region`]: A plain genomic range, e.g. a gap between exons
//! - [`TranscriptStartGap`]: The distance from the leftmost exon to the start of a transcript
//!
//! All coordinates are 1-based and fully closed.
mod feature;
mod interval;
mod region;
mod start_gap;
mod strand;

pub use crate::models::feature::Feature;
pub use crate::models::interval::{Interval, IntervalBuilder};
pub use crate::models::region::{set_difference, union_reduce, GenomicRange, Region};
pub use crate::models::start_gap::{transcript_start_gaps, TranscriptStartGap};
pub use crate::models::strand::Strand;
