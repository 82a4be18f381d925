//! Bounded multiset of directed edges, keyed by source node.
//!
//! Every population member uses each source exactly once, so a population
//! of at most `K` members contributes at most `K` distinct destinations per
//! source. Each source therefore owns a fixed block of `K` slots holding its
//! destinations in ascending order next to their occurrence counts, plus an
//! active-length counter. Lookup is a binary search (O(log K)); insert and
//! delete shift the tail of the block (O(K)).

use std::fmt;

use tracing::error;

use crate::error::{EdaError, Result};

/// Source of a directed edge: the virtual start of a sequence, or a node.
///
/// The virtual start is never a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Source {
    /// Beginning of the sequence.
    Start,
    /// A regular node id.
    Node(usize),
}

impl From<usize> for Source {
    fn from(node: usize) -> Self {
        Source::Node(node)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Start => write!(f, "start"),
            Source::Node(node) => write!(f, "{node}"),
        }
    }
}

/// Iterates the edges of a walk over `permutation` that begins at the
/// virtual start.
pub fn walk_edges(permutation: &[usize]) -> impl Iterator<Item = (Source, usize)> + '_ {
    std::iter::once(Source::Start)
        .chain(permutation.iter().map(|&node| Source::Node(node)))
        .zip(permutation.iter().copied())
}

/// Per-source sorted destination → count table, at most `K` destinations
/// per source.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedEdgeMultiset {
    length: usize,
    capacity: usize,
    destinations: Vec<u32>,
    counts: Vec<u32>,
    active: Vec<usize>,
}

impl BoundedEdgeMultiset {
    /// Creates an empty multiset for node ids `0..length` with `capacity`
    /// destination slots per source.
    ///
    /// # Panics
    /// Panics if `length` exceeds `u32::MAX` or `(length + 1) * capacity`
    /// overflows `usize`.
    pub fn new(length: usize, capacity: usize) -> Self {
        assert!(
            u32::try_from(length).is_ok(),
            "length {length} does not fit u32 destination ids"
        );
        let sources = length + 1;
        let slots = sources
            .checked_mul(capacity)
            .unwrap_or_else(|| panic!("{sources} sources x {capacity} slots overflows usize"));
        Self {
            length,
            capacity,
            destinations: vec![0; slots],
            counts: vec![0; slots],
            active: vec![0; sources],
        }
    }

    /// Number of node ids `L`.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Per-source destination capacity `K`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forgets every edge.
    pub fn clear(&mut self) {
        self.destinations.fill(0);
        self.counts.fill(0);
        self.active.fill(0);
    }

    /// Occurrence count of edge `from -> to`; 0 when untracked.
    pub fn get_count(&self, from: Source, to: usize) -> u32 {
        let Some(row) = self.row(from) else {
            return 0;
        };
        match self.search(row, to) {
            Ok(slot) => self.counts[slot],
            Err(_) => 0,
        }
    }

    /// Number of distinct destinations currently tracked for `from`.
    pub fn distinct_destinations(&self, from: Source) -> usize {
        self.row(from).map_or(0, |row| self.active[row])
    }

    /// Iterates `(destination, count)` pairs for `from` in ascending
    /// destination order.
    pub fn destinations(&self, from: Source) -> impl Iterator<Item = (usize, u32)> + '_ {
        let range = match self.row(from) {
            Some(row) => {
                let start = row * self.capacity;
                start..start + self.active[row]
            }
            None => 0..0,
        };
        range.map(move |slot| (self.destinations[slot] as usize, self.counts[slot]))
    }

    /// Records one more occurrence of `from -> to`.
    ///
    /// Fails with [`EdaError::NodeOutOfRange`] for ids outside `0..L` and
    /// with [`EdaError::CapacityExceeded`] when `from` already tracks `K`
    /// other destinations.
    pub fn add_edge(&mut self, from: Source, to: usize) -> Result<()> {
        if to >= self.length {
            return Err(EdaError::NodeOutOfRange {
                node: to,
                length: self.length,
            });
        }
        let Some(row) = self.row(from) else {
            let node = match from {
                Source::Node(node) => node,
                Source::Start => 0,
            };
            return Err(EdaError::NodeOutOfRange {
                node,
                length: self.length,
            });
        };
        match self.search(row, to) {
            Ok(slot) => {
                self.counts[slot] += 1;
            }
            Err(slot) => {
                let used = self.active[row];
                if used == self.capacity {
                    return Err(EdaError::CapacityExceeded {
                        from,
                        to,
                        capacity: self.capacity,
                    });
                }
                let end = row * self.capacity + used;
                self.destinations.copy_within(slot..end, slot + 1);
                self.counts.copy_within(slot..end, slot + 1);
                self.destinations[slot] = to as u32;
                self.counts[slot] = 1;
                self.active[row] = used + 1;
            }
        }
        Ok(())
    }

    /// Retracts one occurrence of `from -> to`, deleting the slot when its
    /// count drops to zero.
    ///
    /// An untracked edge means the caller's add/remove pairing is broken;
    /// this returns [`EdaError::MissingEdge`] and the owner must be
    /// discarded.
    pub fn remove_edge(&mut self, from: Source, to: usize) -> Result<()> {
        let found = self
            .row(from)
            .and_then(|row| self.search(row, to).ok().map(|slot| (row, slot)));
        let Some((row, slot)) = found else {
            error!(%from, to, "retracting an untracked edge");
            return Err(EdaError::MissingEdge { from, to });
        };

        self.counts[slot] -= 1;
        if self.counts[slot] == 0 {
            let last = row * self.capacity + self.active[row] - 1;
            self.destinations.copy_within(slot + 1..=last, slot);
            self.counts.copy_within(slot + 1..=last, slot);
            self.destinations[last] = 0;
            self.counts[last] = 0;
            self.active[row] -= 1;
        }
        Ok(())
    }

    /// Adds every edge of the walk over `permutation` starting at the
    /// virtual start.
    ///
    /// Atomic: if any insert fails, the edges already added are retracted
    /// before the error is returned.
    pub fn add_permutation(&mut self, permutation: &[usize]) -> Result<()> {
        for (added, (from, to)) in walk_edges(permutation).enumerate() {
            if let Err(err) = self.add_edge(from, to) {
                for (from, to) in walk_edges(permutation).take(added) {
                    self.remove_edge(from, to)?;
                }
                return Err(err);
            }
        }
        Ok(())
    }

    /// Retracts every edge [`add_permutation`](Self::add_permutation) would
    /// add for `permutation`.
    pub fn remove_permutation(&mut self, permutation: &[usize]) -> Result<()> {
        for (from, to) in walk_edges(permutation) {
            self.remove_edge(from, to)?;
        }
        Ok(())
    }

    fn row(&self, from: Source) -> Option<usize> {
        match from {
            Source::Start => Some(0),
            Source::Node(node) if node < self.length => Some(node + 1),
            Source::Node(_) => None,
        }
    }

    /// Binary search of `to` within the active block of `row`; returns the
    /// absolute slot, found or insertion point.
    fn search(&self, row: usize, to: usize) -> std::result::Result<usize, usize> {
        let start = row * self.capacity;
        let block = &self.destinations[start..start + self.active[row]];
        let Ok(to) = u32::try_from(to) else {
            return Err(start + block.len());
        };
        block
            .binary_search(&to)
            .map(|i| start + i)
            .map_err(|i| start + i)
    }
}
