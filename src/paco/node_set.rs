//! Set of not-yet-placed node ids with O(1) removal and random draw.
//!
//! Backed by a dense array of available ids plus an inverse index map
//! (`positions[id]` is the slot of `id` in the dense array). Removing an
//! id moves the last active element into the freed slot, so every
//! operation except [`NodeSet::fill`] is O(1).

use rand::seq::SliceRandom;
use rand::Rng;

/// Available node ids out of the domain `0..L`.
///
/// Invariant: for every available id, `nodes[positions[id]] == id`, and
/// `nodes[..len]` is exactly the set of available ids. The enumeration order
/// is unspecified and changes after every removal.
#[derive(Debug, Clone)]
pub struct NodeSet {
    nodes: Vec<usize>,
    positions: Vec<Option<usize>>,
    len: usize,
}

impl NodeSet {
    /// Creates an empty set over the domain `0..domain_len`.
    ///
    /// Call [`fill`](Self::fill) before use.
    pub fn new(domain_len: usize) -> Self {
        Self {
            nodes: (0..domain_len).collect(),
            positions: vec![None; domain_len],
            len: 0,
        }
    }

    /// Size `L` of the id domain.
    pub fn domain_len(&self) -> usize {
        self.nodes.len()
    }

    /// Makes every id in `0..L` available again, in uniformly random order.
    pub fn fill<R: Rng>(&mut self, rng: &mut R) {
        for (slot, node) in self.nodes.iter_mut().enumerate() {
            *node = slot;
        }
        self.nodes.shuffle(rng);
        for (slot, &node) in self.nodes.iter().enumerate() {
            self.positions[node] = Some(slot);
        }
        self.len = self.nodes.len();
    }

    /// Number of available ids.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `id` is still available. Ids outside the domain never are.
    pub fn is_available(&self, id: usize) -> bool {
        matches!(self.positions.get(id), Some(Some(_)))
    }

    /// Returns the id at dense slot `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn get_at(&self, index: usize) -> usize {
        assert!(index < self.len, "slot {index} out of range 0..{}", self.len);
        self.nodes[index]
    }

    /// Iterates the available ids in current slot order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes[..self.len].iter().copied()
    }

    /// Removes `id` from the set.
    ///
    /// # Panics
    /// Panics if `id` is not available. Callers must check
    /// [`is_available`](Self::is_available) when in doubt.
    pub fn delete_node(&mut self, id: usize) {
        let slot = self
            .positions
            .get(id)
            .copied()
            .flatten()
            .unwrap_or_else(|| panic!("node {id} is not available"));
        self.remove_slot(slot);
    }

    /// Removes and returns a uniformly random available id, or `None` if
    /// the set is empty.
    pub fn delete_random<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let slot = rng.random_range(0..self.len);
        Some(self.remove_slot(slot))
    }

    /// Removes and returns the id in the last active slot, or `None` if the
    /// set is empty.
    ///
    /// Which id that is carries no meaning; use it only when the choice is
    /// forced (a single id left).
    pub fn delete_last(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        Some(self.remove_slot(self.len - 1))
    }

    fn remove_slot(&mut self, slot: usize) -> usize {
        let last = self.len - 1;
        let removed = self.nodes[slot];
        let moved = self.nodes[last];
        self.nodes.swap(slot, last);
        self.positions[moved] = Some(slot);
        self.positions[removed] = None;
        self.len = last;
        removed
    }
}
