use std::hash::{Hash, Hasher};

use crate::core::bounded_grid::BoundedGrid;
use crate::core::models::{Cell, Vec2};
use crate::error::InvalidBoardError;

/// One search state: the full cell grid plus the player and box positions derived from it.
///
/// Equality and hashing only look at the cells, the derived fields are a pure function of them.
#[derive(Clone, Debug)]
pub struct Board {
    grid: BoundedGrid<Cell>,
    player: Vec2,
    boxes: Vec<Vec2>,
}

impl Board {
    /// Builds a board from rows of cells, padding short rows with floor.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Board, InvalidBoardError> {
        if rows.iter().all(|row| row.is_empty()) {
            return Err(InvalidBoardError::Empty);
        }
        Board::from_grid(BoundedGrid::from_rows(rows, Cell::Floor))
    }

    fn from_grid(grid: BoundedGrid<Cell>) -> Result<Board, InvalidBoardError> {
        let mut player: Option<Vec2> = None;
        let mut boxes = Vec::new();
        for (pos, cell) in grid.iter() {
            if cell.is_player() {
                if let Some(first) = player {
                    return Err(InvalidBoardError::MultiplePlayers { first, second: pos });
                }
                player = Some(pos);
            } else if cell.is_box() {
                boxes.push(pos);
            }
        }
        let player = player.ok_or(InvalidBoardError::MissingPlayer)?;

        Ok(Board { grid, player, boxes })
    }

    /// Used by the move generator, which already knows where everything ended up.
    /// `boxes` must be sorted the same way a row-major scan of `grid` would produce them.
    pub(crate) fn from_parts(grid: BoundedGrid<Cell>, player: Vec2, boxes: Vec<Vec2>) -> Board {
        debug_assert!(grid[&player].is_player());
        debug_assert!(boxes.windows(2).all(|w| w[0] < w[1]));
        Board { grid, player, boxes }
    }

    pub fn height(&self) -> i32 {
        self.grid.size().height
    }

    pub fn width(&self) -> i32 {
        self.grid.size().width
    }

    pub fn get(&self, pos: &Vec2) -> Option<Cell> {
        self.grid.get(pos).copied()
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn boxes(&self) -> &[Vec2] {
        &self.boxes
    }

    pub(crate) fn grid(&self) -> &BoundedGrid<Cell> {
        &self.grid
    }

    pub fn cells(&self) -> impl Iterator<Item = (Vec2, Cell)> + '_ {
        self.grid.iter().map(|(pos, &cell)| (pos, cell))
    }

    pub fn boxes_on_targets(&self) -> usize {
        self.boxes
            .iter()
            .filter(|b| self.grid[b] == Cell::BoxOnTarget)
            .count()
    }

    /// A board with no boxes is never solved
    pub fn is_goal(&self) -> bool {
        !self.boxes.is_empty() && self.boxes_on_targets() == self.boxes.len()
    }

    /// Walls, with everything outside the grid treated as wall
    pub fn is_wall(&self, pos: &Vec2) -> bool {
        match self.get(pos) {
            None | Some(Cell::Wall) => true,
            Some(_) => false,
        }
    }

    /// Cells a box can never be pushed into: walls, the outside and other boxes
    pub fn is_blocked(&self, pos: &Vec2) -> bool {
        match self.get(pos) {
            None | Some(Cell::Wall) => true,
            Some(cell) => cell.is_box(),
        }
    }
}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

impl Eq for Board {}
impl PartialEq<Self> for Board {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

/// Target positions of the initial board. They never move, so they are extracted once per search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Targets {
    positions: Vec<Vec2>,
}

impl Targets {
    pub fn from_board(board: &Board) -> Targets {
        let positions = board
            .cells()
            .filter(|(_, cell)| cell.is_target())
            .map(|(pos, _)| pos)
            .collect();
        Targets { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.positions.iter()
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.positions.contains(pos)
    }

    pub fn as_slice(&self) -> &[Vec2] {
        &self.positions
    }
}
