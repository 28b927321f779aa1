use crate::artifacts::diff::change_set::{Change, ChangeSet, ChangeType};
use crate::artifacts::diff::hunk_gatherer::{GatherHunks, Gathered};
use crate::artifacts::diff::source::Source;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit<'a, T> {
    Delete { value: &'a T },
    Insert { value: &'a T },
    Equal { value: &'a T },
}

impl<T: Display> Display for Edit<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edit::Delete { value } => write!(f, "-{value}"),
            Edit::Insert { value } => write!(f, "+{value}"),
            Edit::Equal { value } => write!(f, " {value}"),
        }
    }
}

/// A context-padded block of edits; starts are 0-based
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<'a, T> {
    org_start: usize,
    org_size: usize,
    rev_start: usize,
    rev_size: usize,
    edits: Vec<Edit<'a, T>>,
}

impl<'a, T> Hunk<'a, T> {
    pub fn org_start(&self) -> usize {
        self.org_start
    }

    pub fn org_size(&self) -> usize {
        self.org_size
    }

    pub fn rev_start(&self) -> usize {
        self.rev_start
    }

    pub fn rev_size(&self) -> usize {
        self.rev_size
    }

    pub fn edits(&self) -> &[Edit<'a, T>] {
        &self.edits
    }

    /// The `@@ -a,b +c,d @@` line
    ///
    /// An empty side is numbered after the line preceding it, as `diff -u` does.
    pub fn header(&self) -> String {
        let position = |start: usize, size: usize| if size == 0 { start } else { start + 1 };

        format!(
            "@@ -{},{} +{},{} @@",
            position(self.org_start, self.org_size),
            self.org_size,
            position(self.rev_start, self.rev_size),
            self.rev_size
        )
    }
}

/// Renders a `ChangeSet` as unified diff text
#[derive(Debug)]
pub struct UnifiedDiff<'c, S> {
    change_set: &'c ChangeSet<S>,
    context: usize,
}

impl<'c, S: Source> UnifiedDiff<'c, S> {
    pub fn new(change_set: &'c ChangeSet<S>, context: isize) -> anyhow::Result<Self> {
        if context < 0 {
            anyhow::bail!("context size must not be negative, got {}", context);
        }

        Ok(UnifiedDiff {
            change_set,
            context: context as usize,
        })
    }

    /// Changes grouped by hunk, neighbours closer than the context merged
    fn groups(&self) -> Vec<&'c [Change]> {
        let changes = self.change_set.changes();
        if changes.is_empty() {
            return Vec::new();
        }

        let upper = self.change_set.source().org().size().max(1);
        let anchor = |change: &Change| change.org_from.min(upper - 1);
        let anchors = changes.iter().flat_map(|change| match change.change_type {
            ChangeType::Insert => anchor(change)..anchor(change) + 1,
            ChangeType::Delete | ChangeType::Change => change.org_from..change.org_to,
        });

        let gatherer = anchors
            .gather_hunks(self.context as isize, upper)
            .expect("context and upper bound are validated");

        let mut groups = Vec::new();
        let mut first = 0;
        let mut next = 0;
        for gathered in gatherer {
            match gathered {
                Gathered::Separator => {
                    if next > first {
                        groups.push(&changes[first..next]);
                        first = next;
                    }
                }
                Gathered::Position(position) => {
                    while next < changes.len() && anchor(&changes[next]) <= position {
                        next += 1;
                    }
                }
            }
        }
        groups.push(&changes[first..]);

        groups
    }

    pub fn hunks(&self) -> Vec<Hunk<'c, S::Item>> {
        let org = self.change_set.source().org();
        let rev = self.change_set.source().rev();

        self.groups()
            .into_iter()
            .map(|group| {
                let (first, last) = (group[0], group[group.len() - 1]);

                let leading = first.org_from.min(self.context);
                let trailing = (org.size() - last.org_to).min(self.context);
                let (org_start, rev_start) = (first.org_from - leading, first.rev_from - leading);
                let (org_end, rev_end) = (last.org_to + trailing, last.rev_to + trailing);

                let mut edits = Vec::new();
                let mut i = org_start;
                for change in group {
                    edits.extend(
                        (i..change.org_from).map(move |k| Edit::Equal { value: org.at(k) }),
                    );
                    edits.extend(
                        (change.org_from..change.org_to)
                            .map(move |k| Edit::Delete { value: org.at(k) }),
                    );
                    edits.extend(
                        (change.rev_from..change.rev_to)
                            .map(move |k| Edit::Insert { value: rev.at(k) }),
                    );
                    i = change.org_to;
                }
                edits.extend((i..org_end).map(move |k| Edit::Equal { value: org.at(k) }));

                Hunk {
                    org_start,
                    org_size: org_end - org_start,
                    rev_start,
                    rev_size: rev_end - rev_start,
                    edits,
                }
            })
            .collect()
    }

    /// File headers, when the sources are named, followed by every hunk
    pub fn lines(&self) -> Vec<String>
    where
        S::Item: Display,
    {
        let source = self.change_set.source();
        let mut lines = Vec::new();

        if source.named() {
            lines.push(format!("--- {}", source.org().name()));
            lines.push(format!("+++ {}", source.rev().name()));
        }

        for hunk in self.hunks() {
            lines.push(hunk.header());
            lines.extend(hunk.edits().iter().map(ToString::to_string));
        }

        lines
    }
}
