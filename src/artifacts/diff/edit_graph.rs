//! Myers' O(ND) search for a shortest edit path
//!
//! The edit graph is never materialized. For each edit distance `d` the
//! furthest reaching node of every diagonal `k = i - j` in `-d..=d` is kept in
//! a table, and every node links back to the node it was reached from. The
//! links form a path that `ChangeSet` later walks from the end to the start.
//!
//! Nodes live in an arena owned by the `EditGraph`; a link is an index into
//! that arena. Two kinds of nodes exist:
//!
//! - a *step* node is the point right after a single insertion (down move) or
//!   deletion (right move). Its link skips over directly preceding step nodes
//!   so that adjacent edits collapse into a single change region.
//! - a *snake* node is the end of a run of matching elements. Its link is the
//!   step node where the run started.

use crate::artifacts::diff::source::{Source, SourcePair};

/// Index of a node inside the arena
pub type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub i: isize,
    pub j: isize,
    pub snake: bool,
    pub prev: Option<NodeId>,
}

impl Node {
    fn is_bootstrap(&self) -> bool {
        self.i < 0 || self.j < 0
    }
}

#[derive(Debug, Clone)]
pub struct EditGraph {
    nodes: Vec<Node>,
    end: NodeId,
}

impl EditGraph {
    /// Searches the shortest edit path between both sides of `source`
    ///
    /// # Panics
    ///
    /// Panics if no path is found within `n + m + 1` iterations, which would
    /// mean the search itself is broken.
    pub fn solve<S: Source>(source: &SourcePair<S>) -> Self {
        let n = source.org().size() as isize;
        let m = source.rev().size() as isize;

        let max = n + m + 1;
        let mid = max;
        // the bootstrap node sits at (0, -1), one step above the origin
        let mut nodes = vec![Node {
            i: 0,
            j: -1,
            snake: true,
            prev: None,
        }];
        let mut diagonal: Vec<NodeId> = vec![ROOT; (2 * max + 1) as usize];

        for d in 0..max {
            for k in (-d..=d).step_by(2) {
                let mk = (mid + k) as usize;

                let down =
                    k == -d || (k != d && nodes[diagonal[mk - 1]].i < nodes[diagonal[mk + 1]].i);
                let (mut i, prev) = if down {
                    (nodes[diagonal[mk + 1]].i, diagonal[mk + 1])
                } else {
                    (nodes[diagonal[mk - 1]].i + 1, diagonal[mk - 1])
                };
                let mut j = i - k;

                let step = nodes.len();
                nodes.push(Node {
                    i,
                    j,
                    snake: false,
                    prev: anchor_of(&nodes, prev),
                });

                while i < n && j < m && source.equals_at(i as usize, j as usize) {
                    i += 1;
                    j += 1;
                }

                diagonal[mk] = if i != nodes[step].i {
                    nodes.push(Node {
                        i,
                        j,
                        snake: true,
                        prev: Some(step),
                    });
                    nodes.len() - 1
                } else {
                    step
                };

                if i >= n && j >= m {
                    debug_log!(
                        "edit graph: distance {} reached ({}, {}) with {} nodes",
                        d,
                        i,
                        j,
                        nodes.len()
                    );
                    return EditGraph {
                        nodes,
                        end: diagonal[mk],
                    };
                }
            }
        }

        panic!("could not find a diff path within {max} iterations");
    }

    pub fn end(&self) -> NodeId {
        self.end
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Follows `id` back through step nodes to the nearest snake node
///
/// Returns `None` when the chain reaches the bootstrap node, and the first
/// step node when it has no predecessor at all.
fn anchor_of(nodes: &[Node], mut id: NodeId) -> Option<NodeId> {
    loop {
        let node = &nodes[id];
        if node.is_bootstrap() {
            return None;
        }
        match node.prev {
            Some(prev) if !node.snake => id = prev,
            _ => return Some(id),
        }
    }
}
