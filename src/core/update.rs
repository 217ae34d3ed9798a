use crate::core::board::Board;
use crate::core::models::{Cell, Direction, GameChangeType};

#[derive(Debug)]
pub enum GameUpdate {
    NextState(Board, GameChangeType),
    Error(&'static str),
}

/// A board reachable from another by exactly one player action
#[derive(Debug, Clone)]
pub struct Successor {
    pub direction: Direction,
    pub board: Board,
    pub change: GameChangeType,
}

pub fn step(board: &Board, direction: Direction) -> GameUpdate {
    let dir = direction.offset();
    let player = board.player();
    let next = player + dir;

    let Some(dest) = board.get(&next) else {
        return GameUpdate::Error("Cannot move out of bounds");
    };
    if dest == Cell::Wall {
        return GameUpdate::Error("Cannot walk into a wall");
    }

    let pushing = dest.is_box();
    let mut new_grid = board.grid().clone();
    let mut boxes = board.boxes().to_vec();

    if pushing {
        let beyond_pos = next + dir;
        let Some(beyond) = board.get(&beyond_pos) else {
            return GameUpdate::Error("Cannot push block out of bounds");
        };
        if !beyond.is_walkable() {
            return GameUpdate::Error("Cannot push block");
        }

        new_grid[&beyond_pos] = beyond.with_box();
        // Player steps into the old box spot below
        new_grid[&next] = dest.vacated();

        if let Some(moved) = boxes.iter_mut().find(|b| **b == next) {
            *moved = beyond_pos;
        }
        boxes.sort_unstable();
    } else if !dest.is_walkable() {
        return GameUpdate::Error("Cannot walk there");
    }

    new_grid[&player] = new_grid[&player].vacated();
    new_grid[&next] = new_grid[&next].with_player();

    let change = if pushing {
        GameChangeType::PlayerAndBoxMove
    } else {
        GameChangeType::PlayerMove
    };
    GameUpdate::NextState(Board::from_parts(new_grid, next, boxes), change)
}

/// Every legal single action from `board`, in Up, Down, Left, Right order
pub fn successors(board: &Board) -> Vec<Successor> {
    Direction::ALL
        .iter()
        .filter_map(|&direction| match step(board, direction) {
            GameUpdate::NextState(board, change) => Some(Successor {
                direction,
                board,
                change,
            }),
            GameUpdate::Error(_) => None,
        })
        .collect()
}
