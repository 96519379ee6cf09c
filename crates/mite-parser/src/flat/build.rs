//! Bottom-up construction of entities from the leaf tree.
//!
//! Nodes only exist when at least one populated leaf sits beneath them, so
//! empty instances never reach a constructor. Constructor errors are
//! re-anchored to the flat key prefix of the instance that produced them.

use std::collections::BTreeMap;

use mite_core::entities::{
    Changelog, ChangelogEntry, Entry, Enzyme, EnzymeAux, Evidence, Reaction, ReactionEx,
    ReactionSmarts, Release,
};
use mite_core::enums::TailoringFunction;
use mite_core::errors::DecodeError;

use super::SubmissionContext;
use super::tree::Node;

pub(crate) fn entry(mut root: Node, context: &SubmissionContext) -> Result<Entry, DecodeError> {
    let (index, submission) =
        single(root.take_group("enzymes"), "enzymes", "enzyme submission")?;
    let (enzyme, reactions) = submission_parts(submission, &format!("enzymes-{index}"))?;

    let releases = releases(root.take_group("changelog"))?;
    let changelog = if releases.is_empty() {
        context.changelog.clone()
    } else {
        Changelog::new(releases)
    };

    Entry::new(
        context.accession.clone(),
        context.status,
        context.quality,
        context.retirement_reasons.clone(),
        changelog,
        enzyme,
        reactions,
    )
}

/// Exactly one instance of a group.
fn single(
    mut instances: BTreeMap<usize, Node>,
    path: &str,
    what: &str,
) -> Result<(usize, Node), DecodeError> {
    match instances.len() {
        0 => Err(DecodeError::missing(path)),
        1 => instances
            .pop_first()
            .ok_or_else(|| DecodeError::missing(path)),
        count => Err(DecodeError::mismatch(
            path,
            &format!("one {what}"),
            &format!("{count} instances"),
        )),
    }
}

fn submission_parts(
    mut submission: Node,
    prefix: &str,
) -> Result<(Enzyme, Vec<Reaction>), DecodeError> {
    let mut enzymes = submission.take_group("enzyme");
    let Some((main_index, main)) = enzymes.pop_first() else {
        return Err(DecodeError::missing(format!("{prefix}-enzyme-0-name")));
    };

    let auxiliary = enzymes
        .into_iter()
        .map(|(index, node)| enzyme_aux(node, &format!("{prefix}-enzyme-{index}")))
        .collect::<Result<Vec<_>, _>>()?;
    let enzyme = enzyme(main, auxiliary, &format!("{prefix}-enzyme-{main_index}"))?;

    let reactions = submission
        .take_group("reactions")
        .into_iter()
        .map(|(index, node)| reaction(node, &format!("{prefix}-reactions-{index}")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((enzyme, reactions))
}

fn enzyme(
    mut node: Node,
    auxiliary: Vec<EnzymeAux>,
    prefix: &str,
) -> Result<Enzyme, DecodeError> {
    Enzyme::new(
        node.take_text("name").unwrap_or_default(),
        node.take_text("description"),
        node.take_list("databaseIds"),
        auxiliary,
        node.take_list("references"),
    )
    .map_err(|error| error.at_flat(prefix))
}

fn enzyme_aux(mut node: Node, prefix: &str) -> Result<EnzymeAux, DecodeError> {
    if node.has_leaf("references") {
        return Err(DecodeError::bad_path(
            format!("{prefix}-references"),
            "auxiliary enzymes carry no references",
        ));
    }
    EnzymeAux::new(
        node.take_text("name").unwrap_or_default(),
        node.take_text("description"),
        node.take_list("databaseIds"),
    )
    .map_err(|error| error.at_flat(prefix))
}

fn reaction(mut node: Node, prefix: &str) -> Result<Reaction, DecodeError> {
    let tailoring: Vec<TailoringFunction> = node
        .take_group("tailoring")
        .into_values()
        .filter_map(|mut tailoring| tailoring.take_tailoring("function"))
        .collect();

    let (smarts, smarts_evidence) =
        reaction_smarts(node.take_group("reaction_smarts"), prefix)?;
    let mut evidence = Vec::new();
    merge_evidence(&mut evidence, smarts_evidence);

    let mut examples = Vec::new();
    for (index, mut validated) in node.take_group("validated_reactions") {
        let validated_prefix = format!("{prefix}-validated_reactions-{index}");
        let records = evidence_list(
            validated.take_group("evidence_val"),
            &format!("{validated_prefix}-evidence_val"),
        )?;
        merge_evidence(&mut evidence, records);
        examples.push(reaction_ex(validated, &validated_prefix)?);
    }

    Ok(Reaction::new(tailoring, smarts, examples, evidence))
}

/// The reaction definition, if drawn, with the evidence attached to it.
fn reaction_smarts(
    group: BTreeMap<usize, Node>,
    prefix: &str,
) -> Result<(Option<ReactionSmarts>, Vec<Evidence>), DecodeError> {
    if group.is_empty() {
        return Ok((None, Vec::new()));
    }
    let smarts_path = format!("{prefix}-reaction_smarts");
    let (index, mut node) = single(group, &smarts_path, "reaction SMARTS")?;
    let smarts_prefix = format!("{smarts_path}-{index}");

    let evidence = evidence_list(
        node.take_group("evidence_sm"),
        &format!("{smarts_prefix}-evidence_sm"),
    )?;
    let smarts = ReactionSmarts::new(
        node.take_text("reactionSMARTS").unwrap_or_default(),
        node.take_flag("isIterative"),
    )
    .map_err(|error| error.at_flat(&smarts_prefix))?;
    Ok((Some(smarts), evidence))
}

fn reaction_ex(mut node: Node, prefix: &str) -> Result<ReactionEx, DecodeError> {
    let products = node.take_items("product_substructure");
    if products.is_empty() {
        return Err(DecodeError::missing(format!("{prefix}-product_substructure-0")));
    }
    ReactionEx::new(
        node.take_text("substrate_substructure").unwrap_or_default(),
        products,
        node.take_flag("isBalanced"),
        node.take_flag("isIntermediate"),
    )
    .map_err(|error| match error {
        DecodeError::MissingField { path } if path == "substrate" => {
            DecodeError::missing(format!("{prefix}-substrate_substructure"))
        }
        other => other.at_flat(prefix),
    })
}

/// Append records in order, skipping exact duplicates.
fn merge_evidence(evidence: &mut Vec<Evidence>, records: Vec<Evidence>) {
    for record in records {
        if !evidence.contains(&record) {
            evidence.push(record);
        }
    }
}

fn evidence_list(
    group: BTreeMap<usize, Node>,
    prefix: &str,
) -> Result<Vec<Evidence>, DecodeError> {
    group
        .into_iter()
        .map(|(index, mut node)| {
            Evidence::new(node.take_codes("evidenceCode"), node.take_list("references"))
                .map_err(|error| error.at_flat(&format!("{prefix}-{index}")))
        })
        .collect()
}

fn releases(group: BTreeMap<usize, Node>) -> Result<Vec<Release>, DecodeError> {
    group
        .into_iter()
        .map(|(index, mut node)| {
            let prefix = format!("changelog-{index}");
            let date = node
                .take_date("date")
                .ok_or_else(|| DecodeError::missing(format!("{prefix}-date")))?;
            let entries = node
                .take_group("entries")
                .into_iter()
                .map(|(entry_index, entry)| {
                    changelog_entry(entry, &format!("{prefix}-entries-{entry_index}"))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Release::new(node.take_text("version").unwrap_or_default(), date, entries)
                .map_err(|error| error.at_flat(&prefix))
        })
        .collect()
}

fn changelog_entry(mut node: Node, prefix: &str) -> Result<ChangelogEntry, DecodeError> {
    let date = node
        .take_date("date")
        .ok_or_else(|| DecodeError::missing(format!("{prefix}-date")))?;
    Ok(ChangelogEntry::new(
        node.take_list("contributors"),
        node.take_list("reviewers"),
        date,
        node.take_text("comment").unwrap_or_default(),
    ))
}
