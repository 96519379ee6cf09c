//! Flat-form path grammar.
//!
//! A path is `<group>-<index>` repeated, ending in a leaf name, optionally
//! followed by an index for list-valued leaves. Each entity shape owns a
//! closed table of the tokens it accepts; anything else is rejected, except at
//! the root where unknown tokens are portal control fields (`submit`) and are
//! discarded.

use std::fmt;

use mite_core::errors::DecodeError;

use crate::leaf::LeafKind;

/// Entity shape the parser is positioned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    Root,
    Submission,
    Enzyme,
    Reaction,
    Tailoring,
    ReactionSmarts,
    ValidatedReaction,
    Evidence,
    Release,
    ChangelogEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// Repeated child entity; must be followed by an index.
    Group(Shape),
    Leaf(LeafKind),
    /// List element addressed by index (`product_substructure-0`).
    IndexedLeaf(LeafKind),
}

type Table = &'static [(&'static str, Token)];

const ROOT: Table = &[
    ("enzymes", Token::Group(Shape::Submission)),
    ("changelog", Token::Group(Shape::Release)),
];

const SUBMISSION: Table = &[
    ("enzyme", Token::Group(Shape::Enzyme)),
    ("reactions", Token::Group(Shape::Reaction)),
    ("comment", Token::Leaf(LeafKind::Ignored)),
];

const ENZYME: Table = &[
    ("name", Token::Leaf(LeafKind::Text)),
    ("description", Token::Leaf(LeafKind::Text)),
    ("databaseIds", Token::Leaf(LeafKind::List)),
    ("references", Token::Leaf(LeafKind::List)),
];

const REACTION: Table = &[
    ("tailoring", Token::Group(Shape::Tailoring)),
    ("reaction_smarts", Token::Group(Shape::ReactionSmarts)),
    ("validated_reactions", Token::Group(Shape::ValidatedReaction)),
    ("description", Token::Leaf(LeafKind::Ignored)),
];

const TAILORING: Table = &[
    ("function", Token::Leaf(LeafKind::Tailoring)),
    ("details", Token::Leaf(LeafKind::Ignored)),
];

const REACTION_SMARTS: Table = &[
    ("reactionSMARTS", Token::Leaf(LeafKind::Text)),
    ("isIterative", Token::Leaf(LeafKind::Flag)),
    ("evidence_sm", Token::Group(Shape::Evidence)),
    ("databaseIds", Token::Leaf(LeafKind::Ignored)),
];

const VALIDATED_REACTION: Table = &[
    ("substrate_substructure", Token::Leaf(LeafKind::Text)),
    ("product_substructure", Token::IndexedLeaf(LeafKind::Text)),
    ("isBalanced", Token::Leaf(LeafKind::Flag)),
    ("isIntermediate", Token::Leaf(LeafKind::Flag)),
    ("evidence_val", Token::Group(Shape::Evidence)),
    ("isAuthentic", Token::Leaf(LeafKind::Ignored)),
    ("description", Token::Leaf(LeafKind::Ignored)),
    ("databaseIds", Token::Leaf(LeafKind::Ignored)),
];

const EVIDENCE: Table = &[
    ("evidenceCode", Token::Leaf(LeafKind::EvidenceCodes)),
    ("references", Token::Leaf(LeafKind::List)),
];

const RELEASE: Table = &[
    ("version", Token::Leaf(LeafKind::Text)),
    ("date", Token::Leaf(LeafKind::Date)),
    ("entries", Token::Group(Shape::ChangelogEntry)),
];

const CHANGELOG_ENTRY: Table = &[
    ("contributors", Token::Leaf(LeafKind::List)),
    ("reviewers", Token::Leaf(LeafKind::List)),
    ("date", Token::Leaf(LeafKind::Date)),
    ("comment", Token::Leaf(LeafKind::Text)),
];

impl Shape {
    const fn table(self) -> Table {
        match self {
            Self::Root => ROOT,
            Self::Submission => SUBMISSION,
            Self::Enzyme => ENZYME,
            Self::Reaction => REACTION,
            Self::Tailoring => TAILORING,
            Self::ReactionSmarts => REACTION_SMARTS,
            Self::ValidatedReaction => VALIDATED_REACTION,
            Self::Evidence => EVIDENCE,
            Self::Release => RELEASE,
            Self::ChangelogEntry => CHANGELOG_ENTRY,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "form",
            Self::Submission => "enzyme submission",
            Self::Enzyme => "enzyme",
            Self::Reaction => "reaction",
            Self::Tailoring => "tailoring",
            Self::ReactionSmarts => "reaction SMARTS",
            Self::ValidatedReaction => "validated reaction",
            Self::Evidence => "evidence",
            Self::Release => "changelog release",
            Self::ChangelogEntry => "changelog entry",
        }
    }

    fn lookup(self, token: &str) -> Option<(&'static str, Token)> {
        self.table()
            .iter()
            .find(|(name, _)| *name == token)
            .copied()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<group>-<index>` hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    pub group: &'static str,
    pub index: usize,
}

/// A fully parsed flat key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FlatPath {
    pub steps: Vec<Step>,
    pub leaf: &'static str,
    pub leaf_index: Option<usize>,
    pub kind: LeafKind,
}

/// Parse a dash-delimited key. `Ok(None)` marks a discarded control token.
pub(crate) fn parse(key: &str) -> Result<Option<FlatPath>, DecodeError> {
    let tokens: Vec<&str> = key.split('-').collect();
    let mut shape = Shape::Root;
    let mut steps = Vec::new();
    let mut position = 0;

    loop {
        let Some(token) = tokens.get(position) else {
            return Err(DecodeError::bad_path(
                key,
                format!("path ends inside {shape} without a field name"),
            ));
        };

        let Some((name, kind)) = shape.lookup(token) else {
            if shape == Shape::Root {
                return Ok(None);
            }
            return Err(DecodeError::bad_path(
                key,
                format!("'{token}' is not a field of {shape}"),
            ));
        };

        match kind {
            Token::Group(child) => {
                let index = parse_index(key, name, tokens.get(position + 1).copied())?;
                steps.push(Step { group: name, index });
                shape = child;
                position += 2;
            }
            Token::Leaf(kind) => {
                expect_end(key, name, &tokens, position + 1)?;
                return Ok(Some(FlatPath {
                    steps,
                    leaf: name,
                    leaf_index: None,
                    kind,
                }));
            }
            Token::IndexedLeaf(kind) => {
                let index = parse_index(key, name, tokens.get(position + 1).copied())?;
                expect_end(key, name, &tokens, position + 2)?;
                return Ok(Some(FlatPath {
                    steps,
                    leaf: name,
                    leaf_index: Some(index),
                    kind,
                }));
            }
        }
    }
}

fn parse_index(key: &str, group: &str, token: Option<&str>) -> Result<usize, DecodeError> {
    let Some(token) = token else {
        return Err(DecodeError::bad_path(
            key,
            format!("'{group}' must be followed by an index"),
        ));
    };
    token.parse::<usize>().map_err(|_| {
        DecodeError::bad_path(
            key,
            format!("expected a numeric index after '{group}', found '{token}'"),
        )
    })
}

fn expect_end(key: &str, leaf: &str, tokens: &[&str], end: usize) -> Result<(), DecodeError> {
    if tokens.len() == end {
        Ok(())
    } else {
        Err(DecodeError::bad_path(
            key,
            format!("unexpected tokens after field '{leaf}'"),
        ))
    }
}
