use crate::models::{Feature, Interval, IntervalBuilder, Strand};

fn interval(feature: Feature, start: u32, end: u32, transcript: &str) -> Interval {
    IntervalBuilder::new()
        .feature(feature)
        .seqname("chr1")
        .start(start)
        .end(end)
        .strand(Strand::Plus)
        .attribute("transcript", transcript)
        .attribute("gene", "Test-Gene")
        .build()
        .unwrap()
}

/// Exons of a single transcript `A`
///
/// ```text
///  100-200    300-400    500-600
/// XXXXXXXXX--XXXXXXXXX--XXXXXXXXX
/// ```
pub fn standard_exons() -> Vec<Interval> {
    vec![
        interval(Feature::Exon, 100, 200, "A"),
        interval(Feature::Exon, 300, 400, "A"),
        interval(Feature::Exon, 500, 600, "A"),
    ]
}

/// Introns of [`standard_exons`]
pub fn standard_introns() -> Vec<Interval> {
    vec![
        interval(Feature::Intron, 200, 300, "A"),
        interval(Feature::Intron, 400, 500, "A"),
    ]
}

/// Exons of two transcripts `A` and `B`
///
/// Transcript `B` starts at the second exon of `A` and has an
/// additional exon at 1000-1100
pub fn two_transcripts_exons() -> Vec<Interval> {
    let mut exons = standard_exons();
    exons.append(&mut vec![
        interval(Feature::Exon, 300, 400, "B"),
        interval(Feature::Exon, 500, 600, "B"),
        interval(Feature::Exon, 1000, 1100, "B"),
    ]);
    exons
}

/// Introns of [`two_transcripts_exons`]
pub fn two_transcripts_introns() -> Vec<Interval> {
    let mut introns = standard_introns();
    introns.append(&mut vec![
        interval(Feature::Intron, 400, 500, "B"),
        interval(Feature::Intron, 600, 1000, "B"),
    ]);
    introns
}

/// A gene with `n` transcripts that each skip a different exon
///
/// All transcripts share a common set of `n + 1` exons of 100bp,
/// separated by introns of 1000bp. Transcript `i` skips exon `i`.
pub fn skipping_transcripts(n: u32) -> (Vec<Interval>, Vec<Interval>) {
    let mut exons = Vec::new();
    let mut introns = Vec::new();
    for tx in 0..n {
        let name = format!("tx-{}", tx);
        let mut previous_end: Option<u32> = None;
        for idx in 0..=n {
            if idx == tx {
                continue;
            }
            let start = 1 + idx * 1100;
            let end = start + 99;
            if let Some(previous_end) = previous_end {
                introns.push(interval(Feature::Intron, previous_end, start, &name));
            }
            exons.push(interval(Feature::Exon, start, end, &name));
            previous_end = Some(end);
        }
    }
    (exons, introns)
}
