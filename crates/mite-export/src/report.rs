//! Render-oriented projection of an entry.
//!
//! Vocabulary values are flattened to their labels and dates to ISO strings,
//! so templates never need to know the entity types.

use mite_core::entities::{Entry, Enzyme, EnzymeAux, Reaction, Release};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub accession: String,
    pub status: String,
    pub quality: String,
    pub retirement_reasons: Vec<String>,
    pub enzyme: EnzymeCard,
    /// Every tailoring function the entry's reactions perform, first-seen order.
    pub tailoring: Vec<String>,
    pub reactions: Vec<ReactionCard>,
    pub releases: Vec<ReleaseCard>,
}

/// The enzyme together with its auxiliary enzymes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnzymeCard {
    pub name: String,
    pub description: Option<String>,
    pub database_ids: Vec<String>,
    pub references: Vec<String>,
    pub auxiliary: Vec<AuxiliaryCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuxiliaryCard {
    pub name: String,
    pub description: Option<String>,
    pub database_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionCard {
    /// 1-based position in the entry.
    pub number: usize,
    pub tailoring: Vec<String>,
    pub smarts: Option<String>,
    pub is_iterative: bool,
    pub examples: Vec<ExampleCard>,
    pub evidence: Vec<EvidenceCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleCard {
    pub substrate: String,
    pub products: Vec<String>,
    pub is_balanced: bool,
    pub is_intermediate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceCard {
    pub codes: Vec<String>,
    pub references: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseCard {
    pub version: String,
    pub date: String,
    pub changes: Vec<ChangeCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeCard {
    pub contributors: Vec<String>,
    pub reviewers: Vec<String>,
    pub date: String,
    pub comment: String,
}

/// Project an entry for rendering.
#[must_use]
pub fn to_report(entry: &Entry) -> Report {
    Report {
        accession: entry.accession.clone(),
        status: entry.status.to_string(),
        quality: entry.quality.to_string(),
        retirement_reasons: entry.retirement_reasons.clone(),
        enzyme: enzyme_card(&entry.enzyme),
        tailoring: labels(entry.tailoring_functions()),
        reactions: entry
            .reactions
            .iter()
            .enumerate()
            .map(|(index, reaction)| reaction_card(index + 1, reaction))
            .collect(),
        releases: entry.changelog.releases.iter().map(release_card).collect(),
    }
}

fn labels<T: ToString>(values: impl IntoIterator<Item = T>) -> Vec<String> {
    values.into_iter().map(|value| value.to_string()).collect()
}

fn enzyme_card(enzyme: &Enzyme) -> EnzymeCard {
    EnzymeCard {
        name: enzyme.name.clone(),
        description: enzyme.description.clone(),
        database_ids: enzyme.database_ids.clone(),
        references: enzyme.references.clone(),
        auxiliary: enzyme.auxiliary_enzymes.iter().map(auxiliary_card).collect(),
    }
}

fn auxiliary_card(aux: &EnzymeAux) -> AuxiliaryCard {
    AuxiliaryCard {
        name: aux.name.clone(),
        description: aux.description.clone(),
        database_ids: aux.database_ids.clone(),
    }
}

fn reaction_card(number: usize, reaction: &Reaction) -> ReactionCard {
    let smarts = reaction.reaction_smarts.as_ref();
    ReactionCard {
        number,
        tailoring: labels(&reaction.tailoring),
        smarts: smarts.map(|smarts| smarts.reaction_smarts.clone()),
        is_iterative: smarts.is_some_and(|smarts| smarts.is_iterative),
        examples: reaction
            .reactions
            .iter()
            .map(|example| ExampleCard {
                substrate: example.substrate.clone(),
                products: example.products.clone(),
                is_balanced: example.is_balanced,
                is_intermediate: example.is_intermediate,
            })
            .collect(),
        evidence: reaction
            .evidence
            .iter()
            .map(|evidence| EvidenceCard {
                codes: labels(&evidence.evidence_code),
                references: evidence.references.clone(),
            })
            .collect(),
    }
}

fn release_card(release: &Release) -> ReleaseCard {
    ReleaseCard {
        version: release.version.clone(),
        date: release.date.to_string(),
        changes: release
            .entries
            .iter()
            .map(|change| ChangeCard {
                contributors: change.contributors.clone(),
                reviewers: change.reviewers.clone(),
                date: change.date.to_string(),
                comment: change.comment.clone(),
            })
            .collect(),
    }
}
