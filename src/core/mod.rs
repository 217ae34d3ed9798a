mod board;
mod bounded_grid;
mod bounds;
mod heuristics;
mod models;
mod update;

pub use board::{Board, Targets};
pub use heuristics::{estimate, has_deadlock, min_assignment_cost, player_to_nearest_box, Estimate};
pub use models::{Cell, Direction, GameChangeType, Vec2};
pub use update::{step, successors, GameUpdate, Successor};
