use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Board, Direction};
use crate::search::tree::SearchTree;

/// Index of a node in the search tree arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Interned board id, two nodes with the same cells share one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub state: StateId,
    /// pushes from the start
    pub g: u32,
    /// `g + h`. `u32::MAX` only for a start board that is already deadlocked
    pub f: u32,
    pub parent: Option<NodeId>,
    pub direction: Option<Direction>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    GoalFound,
    FrontierExhausted,
    ExpansionLimitReached,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_explored: usize,
    pub nodes_generated: usize,
    pub deadlocks_pruned: usize,
    pub frontier_peak: usize,
    pub elapsed: Duration,
}

#[derive(Clone, Debug)]
pub struct Solution {
    pub moves: Vec<Direction>,
    pub pushes: u32,
    pub final_board: Board,
}

pub struct SearchOutcome {
    pub termination: Termination,
    pub solution: Option<Solution>,
    pub stats: SearchStats,
    pub tree: SearchTree,
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Moves from start to goal, empty when unsolved
    pub fn moves(&self) -> &[Direction] {
        self.solution
            .as_ref()
            .map(|s| s.moves.as_slice())
            .unwrap_or(&[])
    }

    /// 0 when unsolved
    pub fn push_count(&self) -> u32 {
        self.solution.as_ref().map(|s| s.pushes).unwrap_or(0)
    }

    pub fn nodes_explored(&self) -> usize {
        self.stats.nodes_explored
    }

    pub fn elapsed(&self) -> Duration {
        self.stats.elapsed
    }
}
