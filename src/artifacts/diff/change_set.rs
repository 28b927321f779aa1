use crate::artifacts::diff::edit_graph::EditGraph;
use crate::artifacts::diff::source::{Source, SourcePair};
use crate::artifacts::diff::unified::UnifiedDiff;
use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    /// Lines only present on the revised side
    Insert,
    /// Lines only present on the original side
    Delete,
    /// Original lines replaced by revised lines
    Change,
}

/// A changed region, as half-open ranges on both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Change {
    pub change_type: ChangeType,
    pub org_from: usize,
    pub org_to: usize,
    pub rev_from: usize,
    pub rev_to: usize,
}

impl Change {
    pub fn org_len(&self) -> usize {
        self.org_to - self.org_from
    }

    pub fn rev_len(&self) -> usize {
        self.rev_to - self.rev_from
    }
}

/// One row of the aligned listing of both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a, T> {
    Both { i: usize, j: usize, text: &'a T },
    Org { i: usize, text: &'a T },
    Rev { j: usize, text: &'a T },
}

/// The outcome of one diff run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet<S> {
    source: SourcePair<S>,
    changes: Vec<Change>,
}

impl<S: Source> ChangeSet<S> {
    /// Diffs both sides of `source`
    pub fn run(source: SourcePair<S>) -> Self {
        let graph = EditGraph::solve(&source);
        let changes = build_changes(&graph);

        debug_log!(
            "change set: {} changes from {} path nodes",
            changes.len(),
            graph.len()
        );

        ChangeSet { source, changes }
    }

    pub fn source(&self) -> &SourcePair<S> {
        &self.source
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of deleted plus inserted elements
    pub fn edit_distance(&self) -> usize {
        self.changes
            .iter()
            .map(|change| change.org_len() + change.rev_len())
            .sum()
    }

    /// Walks both sides in order, pairing the unchanged elements
    ///
    /// Inside a changed region every original line comes before the revised
    /// lines replacing it.
    pub fn lines(&self) -> impl Iterator<Item = Line<'_, S::Item>> + '_ {
        let org = self.source.org();
        let rev = self.source.rev();
        let changes = &self.changes;
        let (mut i, mut j, mut next) = (0, 0, 0);

        std::iter::from_fn(move || {
            while let Some(change) = changes.get(next) {
                if i < change.org_from || j < change.rev_from {
                    break;
                }
                if i < change.org_to {
                    i += 1;
                    return Some(Line::Org {
                        i: i - 1,
                        text: org.at(i - 1),
                    });
                }
                if j < change.rev_to {
                    j += 1;
                    return Some(Line::Rev {
                        j: j - 1,
                        text: rev.at(j - 1),
                    });
                }
                next += 1;
            }

            if i < org.size() && j < rev.size() {
                i += 1;
                j += 1;
                Some(Line::Both {
                    i: i - 1,
                    j: j - 1,
                    text: org.at(i - 1),
                })
            } else {
                None
            }
        })
    }

    /// Unified diff text with `context` common lines around each change
    pub fn unified_form_text(&self, context: isize) -> anyhow::Result<Vec<String>>
    where
        S::Item: Display,
    {
        Ok(UnifiedDiff::new(self, context)?.lines())
    }

    /// Every line of both sides, marked with `"  "`, `"- "` or `"+ "`
    pub fn unify_texts(&self) -> Vec<String>
    where
        S::Item: Display,
    {
        self.lines()
            .map(|line| match line {
                Line::Both { text, .. } => format!("  {text}"),
                Line::Org { text, .. } => format!("- {text}"),
                Line::Rev { text, .. } => format!("+ {text}"),
            })
            .collect()
    }

    /// Same as `unify_texts`, prefixed with the line numbers of both sides
    pub fn unify_texts_with_numbers(&self) -> Vec<String>
    where
        S::Item: Display,
    {
        let width = self.source.size_max().to_string().len().max(4);
        let blank = " ".repeat(width);

        self.lines()
            .map(|line| match line {
                Line::Both { i, j, text } => {
                    format!(" {:0width$}  {:0width$} :    {text}", i + 1, j + 1)
                }
                Line::Org { i, text } => format!(" {:0width$}  {blank} : -  {text}", i + 1),
                Line::Rev { j, text } => format!(" {blank}  {:0width$} : +  {text}", j + 1),
            })
            .collect()
    }
}

/// Turns the solved path into forward ordered changes
///
/// # Panics
///
/// Panics if a snake node shows up where only step nodes are expected.
fn build_changes(graph: &EditGraph) -> Vec<Change> {
    let mut changes = Vec::new();

    let mut path = graph.node(graph.end());
    if path.snake {
        path = graph.node(path.prev.expect("a snake node always follows a step node"));
    }

    while let Some(prev_id) = path.prev {
        let prev = graph.node(prev_id);
        if prev.j < 0 {
            break;
        }
        if path.snake {
            panic!("illegal diff path: unexpected snake at ({}, {})", path.i, path.j);
        }

        let change_type = if prev.i == path.i && prev.j != path.j {
            ChangeType::Insert
        } else if prev.i != path.i && prev.j == path.j {
            ChangeType::Delete
        } else {
            ChangeType::Change
        };

        changes.push(Change::new(
            change_type,
            prev.i as usize,
            path.i as usize,
            prev.j as usize,
            path.j as usize,
        ));

        path = prev;
        if path.snake {
            path = graph.node(path.prev.expect("a snake node always follows a step node"));
        }
    }

    changes.reverse();
    changes
}
