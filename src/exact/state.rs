//! Search-state primitives: visited bitmask, state key, frontier entry.

use std::cmp::Ordering;

/// Largest instance the `u32` bitmask can represent.
pub const MAX_EXACT_CITIES: usize = 31;

/// Bitmask over cities; bit `i` set means city `i` has been visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VisitedSet(u32);

impl VisitedSet {
    pub fn empty() -> Self {
        Self(0)
    }

    /// Set containing only `city`.
    pub fn single(city: usize) -> Self {
        Self(1 << city)
    }

    /// Set containing every city in `0..n`.
    pub fn full(n: usize) -> Self {
        debug_assert!(n <= MAX_EXACT_CITIES);
        Self((1u32 << n) - 1)
    }

    #[inline]
    pub fn contains(self, city: usize) -> bool {
        self.0 & (1 << city) != 0
    }

    /// Copy of this set with `city` added.
    #[inline]
    pub fn with(self, city: usize) -> Self {
        Self(self.0 | (1 << city))
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Cities in `0..n` not yet in the set, ascending.
    pub fn missing(self, n: usize) -> impl Iterator<Item = usize> {
        (0..n).filter(move |&c| !self.contains(c))
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

/// Canonical deduplication key: `(current city, visited set)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchState {
    pub current: usize,
    pub visited: VisitedSet,
}

/// Parent-pointer node used to rebuild the path of a frontier entry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PathNode {
    pub city: usize,
    pub parent: Option<usize>,
}

/// Rebuilds the visiting order ending at `node` from the arena.
pub(crate) fn unwind_path(arena: &[PathNode], node: usize) -> Vec<usize> {
    let mut order = Vec::new();
    let mut cursor = Some(node);
    while let Some(idx) = cursor {
        order.push(arena[idx].city);
        cursor = arena[idx].parent;
    }
    order.reverse();
    order
}

/// Frontier entry for [`std::collections::BinaryHeap`].
///
/// Ordering looks only at `priority` (lower first) and, on ties, prefers
/// the larger accumulated `cost` so deeper states are tried first. The
/// state and path payload never take part in comparisons.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    pub priority: f64,
    pub cost: f64,
    pub state: SearchState,
    pub node: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| self.cost.total_cmp(&other.cost))
    }
}
