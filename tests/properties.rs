use txgaps::gaps::{extract_gaps, relate, GapRelation};
use txgaps::models::{Feature, GenomicRange, Interval, IntervalBuilder, Strand};
use txgaps::shorten_gaps;
use txgaps::tests::transcripts::{
    standard_exons, standard_introns, two_transcripts_exons, two_transcripts_introns,
};

fn interval(feature: Feature, seqname: &str, start: u32, end: u32, tx: &str) -> Interval {
    IntervalBuilder::new()
        .feature(feature)
        .seqname(seqname)
        .start(start)
        .end(end)
        .strand(Strand::Plus)
        .attribute("transcript", tx)
        .build()
        .unwrap()
}

fn exon(start: u32, end: u32, tx: &str) -> Interval {
    interval(Feature::Exon, "chr1", start, end, tx)
}

fn intron(start: u32, end: u32, tx: &str) -> Interval {
    interval(Feature::Intron, "chr1", start, end, tx)
}

fn coordinates(intervals: &[Interval]) -> Vec<(u32, u32)> {
    intervals.iter().map(|i| (i.start(), i.end())).collect()
}

/// Exons and introns in the order of the rescaled output
fn sorted_input(exons: &[Interval], introns: &[Interval]) -> Vec<Interval> {
    let mut all: Vec<Interval> = exons.iter().chain(introns).cloned().collect();
    all.sort_by(|a, b| {
        (a.attribute("transcript"), a.start(), a.end())
            .cmp(&(b.attribute("transcript"), b.start(), b.end()))
    });
    all
}

#[test]
fn rescaled_widths_never_grow() {
    let exons = two_transcripts_exons();
    let introns = two_transcripts_introns();
    let rescaled = shorten_gaps(&exons, &introns, Some("transcript"), 50).unwrap();
    let input = sorted_input(&exons, &introns);

    assert_eq!(rescaled.len(), input.len());
    for (original, shortened) in input.iter().zip(&rescaled) {
        assert_eq!(original.feature(), shortened.feature());
        assert_eq!(original.attribute("transcript"), shortened.attribute("transcript"));
        assert!(shortened.width() <= original.width());
        if original.is_exon() {
            assert_eq!(shortened.width(), original.width());
        }
    }
}

#[test]
fn equal_gaps_are_capped() {
    let exons = two_transcripts_exons();
    let introns = two_transcripts_introns();
    let gaps = extract_gaps(&exons).unwrap();
    let rescaled = shorten_gaps(&exons, &introns, Some("transcript"), 50).unwrap();

    for (original, shortened) in sorted_input(&exons, &introns)
        .iter()
        .zip(&rescaled)
        .filter(|(original, _)| original.is_intron())
    {
        let gap = original.relocate(original.start() + 1, original.end() - 1).unwrap();
        assert!(matches!(relate(&gap, &gaps), GapRelation::Equal(_)));
        // both widths include the two exon boundaries
        assert_eq!(shortened.width() - 2, (gap.width()).min(50));
    }
}

#[test]
fn short_gaps_are_only_translated() {
    let exons = standard_exons();
    let introns = standard_introns();
    let rescaled = shorten_gaps(&exons, &introns, None, 100).unwrap();
    let input = sorted_input(&exons, &introns);

    let shift = input[0].start() - rescaled[0].start();
    for (original, shortened) in input.iter().zip(&rescaled) {
        assert_eq!(shortened.start() + shift, original.start());
        assert_eq!(shortened.end() + shift, original.end());
    }
}

#[test]
fn contained_gaps_are_reduced() {
    let exons = vec![
        exon(100, 200, "A"),
        exon(1000, 1100, "A"),
        exon(100, 200, "B"),
        exon(500, 600, "B"),
        exon(1000, 1100, "B"),
    ];
    let introns = vec![
        intron(200, 1000, "A"),
        intron(200, 500, "B"),
        intron(600, 1000, "B"),
    ];
    let gaps = extract_gaps(&exons).unwrap();
    assert_eq!(
        gaps.iter().map(|g| (g.start(), g.end())).collect::<Vec<(u32, u32)>>(),
        vec![(201, 499), (601, 999)]
    );

    let true_gap = exon(201, 999, "A");
    assert_eq!(relate(&true_gap, &gaps), GapRelation::PureWithin(vec![0, 1]));

    let rescaled = shorten_gaps(&exons, &introns, Some("transcript"), 50).unwrap();
    let expected = 799 - (299 - 50) - (399 - 50);
    assert_eq!(rescaled[1].width() - 2, expected);
    assert!(rescaled[1].is_intron());

    // transcripts stay aligned at their last exon
    assert_eq!(coordinates(&rescaled[2..3]), coordinates(&rescaled[rescaled.len() - 1..]));
}

#[test]
fn transcripts_without_introns_are_translated() {
    let exons = vec![exon(100, 200, "A"), exon(201, 300, "A")];
    let rescaled = shorten_gaps(&exons, &[], None, 100).unwrap();
    assert_eq!(coordinates(&rescaled), vec![(2, 102), (103, 202)]);

    let single = vec![exon(5000, 5100, "A")];
    let rescaled = shorten_gaps(&single, &[], Some("transcript"), 100).unwrap();
    assert_eq!(coordinates(&rescaled), vec![(2, 102)]);
}

#[test]
fn intron_is_shortened_to_target_width() {
    let exons = vec![exon(101, 201, "A"), exon(299, 399, "A")];
    let introns = vec![intron(201, 299, "A")];
    let rescaled = shorten_gaps(&exons, &introns, None, 50).unwrap();

    assert_eq!(coordinates(&rescaled), vec![(2, 102), (102, 153), (153, 253)]);
    assert_eq!(rescaled[0].width(), 101);
    assert_eq!(rescaled[2].width(), 101);
    // without the exon boundaries
    assert_eq!((rescaled[1].end() - 1) - (rescaled[1].start() + 1) + 1, 50);
}

#[test]
fn later_transcripts_are_offset_by_shortened_start_gap() {
    let exons = vec![
        exon(1, 100, "A"),
        exon(300, 400, "A"),
        exon(1000, 1100, "B"),
        exon(1200, 1300, "B"),
    ];
    let introns = vec![intron(100, 300, "A"), intron(1100, 1200, "B")];
    let rescaled = shorten_gaps(&exons, &introns, Some("transcript"), 100).unwrap();

    assert_eq!(
        coordinates(&rescaled),
        vec![
            (1, 100),
            (100, 201),
            (201, 301),
            (402, 502),
            (502, 602),
            (602, 702),
        ]
    );
    // B starts right after A and the capped gap between them
    assert!(rescaled[3].start() < 1000);
    assert_eq!(rescaled[3].start(), rescaled[2].end() + 100 + 1);
}

#[test]
fn multiple_seqnames_are_rejected() {
    let exons = vec![
        exon(100, 200, "A"),
        interval(Feature::Exon, "chr2", 300, 400, "A"),
    ];
    let err = shorten_gaps(&exons, &[], None, 100).unwrap_err();
    assert!(err.message().contains("single seqname"));
}

#[test]
fn exons_in_introns_are_rejected() {
    let exons = vec![exon(100, 200, "A"), exon(300, 400, "A")];
    let introns = vec![exon(200, 300, "A")];
    let err = shorten_gaps(&exons, &introns, None, 100).unwrap_err();
    assert!(err.message().starts_with("introns must only contain type 'intron'"));
}
