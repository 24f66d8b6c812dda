use core::fmt;

/// Classification of a single grid cell. Every variant maps onto exactly one character of the
/// grid alphabet, see [Cell::from_char] and [Cell::to_char].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Obstacle,
    Start,
    Goal,
    /// A cell on the reconstructed path.
    PathMark,
}

impl Cell {
    pub const EMPTY_CHAR: char = ' ';
    pub const OBSTACLE_CHAR: char = '|';
    pub const START_CHAR: char = 'S';
    pub const GOAL_CHAR: char = 'G';
    pub const PATH_CHAR: char = '.';

    /// Parses a grid character. Path marks are accepted so that rendered output can be read back.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            Self::EMPTY_CHAR => Some(Cell::Empty),
            Self::OBSTACLE_CHAR => Some(Cell::Obstacle),
            Self::START_CHAR => Some(Cell::Start),
            Self::GOAL_CHAR => Some(Cell::Goal),
            Self::PATH_CHAR => Some(Cell::PathMark),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => Self::EMPTY_CHAR,
            Cell::Obstacle => Self::OBSTACLE_CHAR,
            Cell::Start => Self::START_CHAR,
            Cell::Goal => Self::GOAL_CHAR,
            Cell::PathMark => Self::PATH_CHAR,
        }
    }

    /// Everything but an obstacle can be stepped on.
    pub fn is_passable(self) -> bool {
        self != Cell::Obstacle
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_round_trips() {
        for c in [' ', '|', 'S', 'G', '.'] {
            let cell = Cell::from_char(c).unwrap();
            assert_eq!(cell.to_char(), c);
        }
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(Cell::from_char('#'), None);
        assert_eq!(Cell::from_char('s'), None);
    }

    #[test]
    fn only_obstacles_block() {
        assert!(!Cell::Obstacle.is_passable());
        for cell in [Cell::Empty, Cell::Start, Cell::Goal, Cell::PathMark] {
            assert!(cell.is_passable());
        }
    }
}
