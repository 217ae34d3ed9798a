use crate::core::board::{Board, Targets};
use crate::core::models::Vec2;

/// Lower bound on the pushes still needed, or proof that the board can never be solved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Estimate {
    Cost(u32),
    Infeasible,
}

impl Estimate {
    pub fn cost(&self) -> Option<u32> {
        match self {
            Estimate::Cost(cost) => Some(*cost),
            Estimate::Infeasible => None,
        }
    }

    pub fn is_infeasible(&self) -> bool {
        *self == Estimate::Infeasible
    }
}

/// Optimal box-to-target matching under Manhattan distance plus the distance from the player
/// to the nearest box. Corner-deadlocked boards short-circuit to `Infeasible`.
pub fn estimate(board: &Board, targets: &Targets) -> Estimate {
    if has_deadlock(board) {
        return Estimate::Infeasible;
    }
    let Some(assignment) = min_assignment_cost(board.boxes(), targets.as_slice()) else {
        return Estimate::Infeasible;
    };
    Estimate::Cost(assignment + player_to_nearest_box(board))
}

pub fn has_deadlock(board: &Board) -> bool {
    board.boxes().iter().any(|&pos| {
        let on_target = board.get(&pos).is_some_and(|cell| cell.is_target());
        !on_target && is_corner_deadlock(board, pos)
    })
}

/// a box is stuck if it sits against two perpendicular walls and both cells on the open sides
/// of that corner are blocked too. Only the first matching corner is considered.
fn is_corner_deadlock(board: &Board, pos: Vec2) -> bool {
    let at = |i: i32, j: i32| pos + Vec2 { i, j };

    let wall_left = board.is_wall(&at(0, -1));
    let wall_right = board.is_wall(&at(0, 1));
    let wall_up = board.is_wall(&at(-1, 0));
    let wall_down = board.is_wall(&at(1, 0));

    if wall_left && wall_up {
        return board.is_blocked(&at(0, 1)) && board.is_blocked(&at(1, 0));
    }
    if wall_right && wall_up {
        return board.is_blocked(&at(0, -1)) && board.is_blocked(&at(1, 0));
    }
    if wall_left && wall_down {
        return board.is_blocked(&at(0, 1)) && board.is_blocked(&at(-1, 0));
    }
    if wall_right && wall_down {
        return board.is_blocked(&at(0, -1)) && board.is_blocked(&at(-1, 0));
    }
    false
}

/// Minimum total Manhattan distance over every injective assignment of boxes to targets.
///
/// Exhaustive: the work grows as `T! / (T - B)!` for `B` boxes and `T` targets, which is fine
/// for hand-sized puzzles only. Any minimum-cost bipartite matching can replace it without
/// changing the result. Returns `None` when there are more boxes than targets.
pub fn min_assignment_cost(boxes: &[Vec2], targets: &[Vec2]) -> Option<u32> {
    if boxes.len() > targets.len() {
        return None;
    }
    let mut used = vec![false; targets.len()];
    Some(assign_from(boxes, targets, &mut used, 0))
}

fn assign_from(boxes: &[Vec2], targets: &[Vec2], used: &mut [bool], cost: u32) -> u32 {
    let Some((first, rest)) = boxes.split_first() else {
        return cost;
    };

    let mut best = u32::MAX;
    for (index, target) in targets.iter().enumerate() {
        if used[index] {
            continue;
        }
        used[index] = true;
        best = best.min(assign_from(rest, targets, used, cost + first.manhattan(target)));
        used[index] = false;
    }
    best
}

pub fn player_to_nearest_box(board: &Board) -> u32 {
    let player = board.player();
    board
        .boxes()
        .iter()
        .map(|b| player.manhattan(b))
        .min()
        .unwrap_or(0)
}
