use std::cmp::Ordering;

use crate::search::models::{NodeId, SearchNode};

/// Min-heap entry: lowest `f` first, then lowest `g`, then the earliest admitted node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierEntry {
    pub f: u32,
    pub g: u32,
    pub node: NodeId,
}

impl FrontierEntry {
    pub fn new(id: NodeId, node: &SearchNode) -> Self {
        FrontierEntry {
            f: node.f,
            g: node.g,
            node: id,
        }
    }
}

// BinaryHeap is a max-heap, so every comparison is reversed
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
