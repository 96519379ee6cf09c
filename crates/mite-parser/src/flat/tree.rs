//! Index-partitioned tree of converted leaves.
//!
//! Each group hop partitions by its numeric index; `BTreeMap` keeps instances
//! in numeric order whatever the input order was. Re-assigning a fully
//! qualified path overwrites the earlier value (last write wins).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use mite_core::enums::{EvidenceCode, TailoringFunction};

use super::grammar::FlatPath;
use crate::leaf::Leaf;

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Node {
    leaves: BTreeMap<&'static str, Leaf>,
    items: BTreeMap<&'static str, BTreeMap<usize, Leaf>>,
    groups: BTreeMap<&'static str, BTreeMap<usize, Node>>,
}

impl Node {
    pub fn insert(&mut self, path: &FlatPath, leaf: Leaf) {
        let mut node = self;
        for step in &path.steps {
            node = node
                .groups
                .entry(step.group)
                .or_default()
                .entry(step.index)
                .or_default();
        }

        match path.leaf_index {
            None => {
                node.leaves.insert(path.leaf, leaf);
            }
            Some(index) => {
                node.items.entry(path.leaf).or_default().insert(index, leaf);
            }
        }
    }

    /// Remove a repeated group, instances ordered by index.
    pub fn take_group(&mut self, name: &str) -> BTreeMap<usize, Self> {
        self.groups.remove(name).unwrap_or_default()
    }

    pub fn has_leaf(&self, name: &str) -> bool {
        self.leaves.contains_key(name)
    }

    pub fn take_text(&mut self, name: &str) -> Option<String> {
        match self.leaves.remove(name) {
            Some(Leaf::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn take_list(&mut self, name: &str) -> Vec<String> {
        match self.leaves.remove(name) {
            Some(Leaf::List(items)) => items,
            _ => Vec::new(),
        }
    }

    /// Absent flags read as `false`.
    pub fn take_flag(&mut self, name: &str) -> bool {
        matches!(self.leaves.remove(name), Some(Leaf::Flag(true)))
    }

    pub fn take_date(&mut self, name: &str) -> Option<NaiveDate> {
        match self.leaves.remove(name) {
            Some(Leaf::Date(date)) => Some(date),
            _ => None,
        }
    }

    pub fn take_tailoring(&mut self, name: &str) -> Option<TailoringFunction> {
        match self.leaves.remove(name) {
            Some(Leaf::Tailoring(function)) => Some(function),
            _ => None,
        }
    }

    pub fn take_codes(&mut self, name: &str) -> Vec<EvidenceCode> {
        match self.leaves.remove(name) {
            Some(Leaf::EvidenceCodes(codes)) => codes,
            _ => Vec::new(),
        }
    }

    /// Remove an indexed text list, elements ordered by index.
    pub fn take_items(&mut self, name: &str) -> Vec<String> {
        self.items
            .remove(name)
            .unwrap_or_default()
            .into_values()
            .filter_map(|leaf| match leaf {
                Leaf::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }
}
