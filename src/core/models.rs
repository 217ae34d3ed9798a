use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Floor,
    Target,
    Player,
    PlayerOnTarget,
    Box,
    BoxOnTarget,
}

impl Cell {
    pub fn is_player(&self) -> bool {
        matches!(self, Cell::Player | Cell::PlayerOnTarget)
    }

    pub fn is_box(&self) -> bool {
        matches!(self, Cell::Box | Cell::BoxOnTarget)
    }

    /// True for every cell that was a target in the original grid, whatever stands on it now
    pub fn is_target(&self) -> bool {
        matches!(self, Cell::Target | Cell::PlayerOnTarget | Cell::BoxOnTarget)
    }

    pub fn is_walkable(&self) -> bool {
        matches!(self, Cell::Floor | Cell::Target)
    }

    /// The cell left behind once the player or box standing here moves away
    pub fn vacated(&self) -> Cell {
        if self.is_target() { Cell::Target } else { Cell::Floor }
    }

    pub fn with_player(&self) -> Cell {
        if self.is_target() { Cell::PlayerOnTarget } else { Cell::Player }
    }

    pub fn with_box(&self) -> Cell {
        if self.is_target() { Cell::BoxOnTarget } else { Cell::Box }
    }
}

/// Grid coordinate, `i` is the row and `j` the column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl Vec2 {
    pub fn manhattan(&self, other: &Vec2) -> u32 {
        self.i.abs_diff(other.i) + self.j.abs_diff(other.j)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn offset(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

impl GameChangeType {
    /// Pushes are the unit of path cost, walking is free
    pub fn cost(&self) -> u32 {
        match self {
            GameChangeType::PlayerMove => 0,
            GameChangeType::PlayerAndBoxMove => 1,
        }
    }
}
