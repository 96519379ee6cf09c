//! Report projection and HTML rendering of decoded entries.

use chrono::NaiveDate;
use mite_core::entities::{
    Changelog, ChangelogEntry, Entry, Enzyme, EnzymeAux, Evidence, Reaction, ReactionEx,
    ReactionSmarts, Release,
};
use mite_core::enums::{EvidenceCode, Quality, Status, TailoringFunction};
use mite_export::{HtmlRenderer, Renderer, to_document, to_report};
use pretty_assertions::assert_eq;

fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

fn sample_entry() -> Entry {
    let enzyme = Enzyme::new(
        "aviG6".into(),
        Some("putative methyltransferase".into()),
        vec!["genpept:AAK83186.1".into()],
        vec![EnzymeAux::new("AbcD".into(), None, vec!["mibig:BGC0000026".into()]).unwrap()],
        vec!["pubmed:15489167".into()],
    )
    .unwrap();
    let methylation = Reaction::new(
        vec![TailoringFunction::Methylation],
        Some(ReactionSmarts::new("[#6:1]-[#8:2]>>[#6:1]-[#8:2]-[#6]".into(), true).unwrap()),
        vec![ReactionEx::new("CO".into(), vec!["COC".into()], true, false).unwrap()],
        vec![
            Evidence::new(
                vec![EvidenceCode::KnockOutStudies],
                vec!["pubmed:15489167".into()],
            )
            .unwrap(),
        ],
    );
    let tagged_only = Reaction::new(
        vec![TailoringFunction::Oxidation, TailoringFunction::Methylation],
        None,
        Vec::new(),
        Vec::new(),
    );
    let changelog = Changelog::new(vec![
        Release::new(
            "1.0".into(),
            date("2024-07-30"),
            vec![ChangelogEntry::new(
                vec!["AAAAAAAAAAAAAAAAAAAAAAAA".into()],
                vec!["BBBBBBBBBBBBBBBBBBBBBBBB".into()],
                date("2024-03-21"),
                "Initial entry.".into(),
            )],
        )
        .unwrap(),
    ]);

    Entry::new(
        "MITE0000000".into(),
        Status::Active,
        Quality::High,
        Vec::new(),
        changelog,
        enzyme,
        vec![methylation, tagged_only],
    )
    .unwrap()
}

#[test]
fn document_is_the_canonical_encoding() {
    let entry = sample_entry();
    let document = to_document(&entry).unwrap();

    assert_eq!(document["accession"], "MITE0000000");
    assert_eq!(document["reactions"][0]["reactionSMARTS"]["isIterative"], true);
    assert!(document["reactions"][1].get("reactionSMARTS").is_none());
    assert!(document.get("retirementReasons").is_none());
}

#[test]
fn report_pairs_structures_with_evidence() {
    let report = to_report(&sample_entry());

    assert_eq!(report.status, "active");
    assert_eq!(report.tailoring, vec!["Methylation", "Oxidation"]);
    assert_eq!(report.enzyme.auxiliary[0].name, "AbcD");

    let first = &report.reactions[0];
    assert_eq!(first.number, 1);
    assert_eq!(first.smarts.as_deref(), Some("[#6:1]-[#8:2]>>[#6:1]-[#8:2]-[#6]"));
    assert!(first.is_iterative);
    assert_eq!(first.examples[0].products, vec!["COC"]);
    assert_eq!(first.evidence[0].codes, vec!["Knock-out studies"]);

    let second = &report.reactions[1];
    assert_eq!(second.smarts, None);
    assert!(!second.is_iterative);

    assert_eq!(report.releases[0].date, "2024-07-30");
    assert_eq!(report.releases[0].changes[0].comment, "Initial entry.");
}

#[test]
fn html_page_escapes_structures() {
    let html = HtmlRenderer.render(&to_report(&sample_entry())).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>MITE0000000</title>"));
    assert!(html.contains("<h2>Enzyme: aviG6</h2>"));
    assert!(html.contains("[#6:1]-[#8:2]&gt;&gt;[#6:1]-[#8:2]-[#6]"));
    assert!(html.contains("Reaction SMARTS (iterative)"));
    assert!(html.contains("<h2>Reaction 2</h2>"));
    assert!(html.contains("Knock-out studies (pubmed:15489167)"));
    assert!(!html.contains(">>"));
    assert!(html.trim_end().ends_with("</html>"));
}
