use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use tracing::{debug, info};

use crate::config::SolverConfig;
use crate::core::{estimate, successors, Board, Estimate, Targets};
use crate::search::frontier::FrontierEntry;
use crate::search::models::{
    NodeId, SearchNode, SearchOutcome, SearchStats, Solution, StateId, Termination,
};
use crate::search::tree::SearchTree;

/// A* over push count, from `start` until a goal board is expanded, the frontier runs dry
/// or `config.max_expansions` nodes have been expanded.
pub fn solve(start: &Board, config: &SolverConfig) -> SearchOutcome {
    let timer = Instant::now();
    let targets = Targets::from_board(start);

    let mut tree = SearchTree::new();
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut closed: HashSet<StateId> = HashSet::new();
    let mut best_g: HashMap<StateId, u32> = HashMap::new();
    let mut stats = SearchStats::default();

    let start_estimate = estimate(start, &targets);
    info!(
        event = "solve_start",
        height = start.height(),
        width = start.width(),
        boxes = start.boxes().len(),
        targets = targets.len(),
        estimate = ?start_estimate,
    );
    if start_estimate.is_infeasible() {
        debug!(event = "start_deadlocked");
    }

    let start_state = tree.upsert_state(start.clone());
    best_g.insert(start_state, 0);
    let root = SearchNode {
        state: start_state,
        g: 0,
        f: start_estimate.cost().unwrap_or(u32::MAX),
        parent: None,
        direction: None,
    };
    let root_id = tree.push(root);
    frontier.push(FrontierEntry::new(root_id, &root));
    stats.frontier_peak = 1;

    let mut goal: Option<NodeId> = None;
    let termination = loop {
        if stats.nodes_explored >= config.max_expansions {
            break Termination::ExpansionLimitReached;
        }
        let Some(entry) = frontier.pop() else {
            break Termination::FrontierExhausted;
        };
        let Some(&current) = tree.node(entry.node) else {
            continue;
        };
        // stale entry left behind by a later, cheaper path to the same board
        if !closed.insert(current.state) {
            continue;
        }
        stats.nodes_explored += 1;

        if config.progress_interval > 0 && stats.nodes_explored % config.progress_interval == 0 {
            debug!(
                event = "search_progress",
                nodes_explored = stats.nodes_explored,
                frontier = frontier.len(),
                states = tree.state_count(),
                f = current.f,
                g = current.g,
            );
        }

        let Some(board) = tree.board(current.state) else {
            continue;
        };
        if board.is_goal() {
            goal = Some(entry.node);
            break Termination::GoalFound;
        }

        for successor in successors(board) {
            stats.nodes_generated += 1;
            let known = tree.state_id(&successor.board);
            if known.is_some_and(|id| closed.contains(&id)) {
                continue;
            }

            let g = current.g + successor.change.cost();
            let improves = known
                .and_then(|id| best_g.get(&id))
                .is_none_or(|&best| g < best);
            if !improves {
                continue;
            }

            let successor_estimate = estimate(&successor.board, &targets);
            let state = tree.upsert_state(successor.board);
            best_g.insert(state, g);

            let Estimate::Cost(h) = successor_estimate else {
                stats.deadlocks_pruned += 1;
                continue;
            };
            let child = SearchNode {
                state,
                g,
                f: g + h,
                parent: Some(entry.node),
                direction: Some(successor.direction),
            };
            let child_id = tree.push(child);
            frontier.push(FrontierEntry::new(child_id, &child));
        }
        stats.frontier_peak = stats.frontier_peak.max(frontier.len());
    };

    let solution = goal.and_then(|id| extract_solution(&tree, id));
    stats.elapsed = timer.elapsed();

    info!(
        event = "solve_end",
        termination = ?termination,
        pushes = ?solution.as_ref().map(|s| s.pushes),
        moves = ?solution.as_ref().map(|s| s.moves.len()),
        nodes_explored = stats.nodes_explored,
        nodes_generated = stats.nodes_generated,
        frontier = frontier.len(),
        duration_ms = stats.elapsed.as_millis() as u64,
    );

    SearchOutcome {
        termination,
        solution,
        stats,
        tree,
    }
}

fn extract_solution(tree: &SearchTree, goal: NodeId) -> Option<Solution> {
    let node = tree.node(goal)?;
    let final_board = tree.board(node.state)?.clone();
    Some(Solution {
        moves: tree.path_to(goal),
        pushes: node.g,
        final_board,
    })
}
