//! Ordered log of node visits produced by one search.

use std::fmt;
use std::slice;

use crate::board::Coord;
use crate::reversi_move::Move;

use super::score::{Score, Window};

/// Identifies a node by the move that led to it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NodeLabel {
    Root,
    Pass,
    Cell(Coord),
}

impl From<&Move> for NodeLabel {
    fn from(reversi_move: &Move) -> Self {
        match reversi_move.coord() {
            Some(coord) => NodeLabel::Cell(coord),
            None => NodeLabel::Pass,
        }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeLabel::Root => write!(f, "root"),
            NodeLabel::Pass => write!(f, "pass"),
            NodeLabel::Cell(coord) => write!(f, "{}", coord),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TraceEntry {
    pub label: NodeLabel,
    pub depth: i32,
    pub value: Score,
    pub alpha: Score,
    pub beta: Score,
}

impl TraceEntry {
    pub fn new(label: NodeLabel, depth: i32, value: Score, window: Window) -> Self {
        Self {
            label,
            depth,
            value,
            alpha: window.alpha,
            beta: window.beta,
        }
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.label, self.depth, self.value, self.alpha, self.beta
        )
    }
}

/// Append-only; entries are never removed or reordered.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn record(&mut self, label: NodeLabel, depth: i32, value: Score, window: Window) {
        self.entries.push(TraceEntry::new(label, depth, value, window));
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, TraceEntry> {
        self.entries.iter()
    }

    /// Each entry rendered as `label,depth,value,alpha,beta`.
    pub fn lines(&self) -> Vec<String> {
        self.iter().map(|entry| entry.to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEntry;
    type IntoIter = slice::Iter<'a, TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
