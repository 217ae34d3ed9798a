use serde::{Deserialize, Serialize};

use crate::core::{step, Board, GameUpdate};
use crate::search::models::{SearchOutcome, Solution, Termination};

/// Plain-data view of a finished search, for whatever prints or stores it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub solved: bool,
    pub termination: Termination,
    /// one `U`/`D`/`L`/`R` per move
    pub moves: String,
    pub pushes: u32,
    pub nodes_explored: usize,
    pub nodes_generated: usize,
    pub elapsed_ms: u64,
}

impl SolveReport {
    pub fn new(outcome: &SearchOutcome) -> Self {
        SolveReport {
            solved: outcome.is_solved(),
            termination: outcome.termination,
            moves: outcome.moves().iter().map(|d| d.to_char()).collect(),
            pushes: outcome.push_count(),
            nodes_explored: outcome.nodes_explored(),
            nodes_generated: outcome.stats.nodes_generated,
            elapsed_ms: outcome.elapsed().as_millis() as u64,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Solution {
    /// Every board from `start` through the goal, or `None` if a move does not apply to `start`
    pub fn replay(&self, start: &Board) -> Option<Vec<Board>> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        boards.push(start.clone());
        for &direction in &self.moves {
            let current = boards.last()?;
            let GameUpdate::NextState(next, _) = step(current, direction) else {
                return None;
            };
            boards.push(next);
        }
        Some(boards)
    }
}
