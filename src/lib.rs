//! # grid_path_planning
//!
//! Shortest path planning on small character grids using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic. Movement is
//! 4-directional with unit cost. A grid is written as text rows where `S` marks the start, `G`
//! the goal and `|` an obstacle; a found path is stamped onto the grid as `.` cells.
//!
//! ```
//! use grid_path_planning::{plan, PlanningGrid, SearchOutcome};
//!
//! let mut grid = PlanningGrid::from_rows(&["S| ", "  G"]).unwrap();
//! let outcome = plan(&mut grid).unwrap();
//! assert!(matches!(outcome, SearchOutcome::Found(ref path) if path.cost == 3));
//! assert_eq!(grid.to_string(), "S| \n..G\n");
//! ```
//!
//! Connected components of the passable cells are tracked as well, so callers can check
//! reachability without running a search.
pub mod astar;
pub mod cell;
pub mod error;
pub mod planning_grid;

pub use astar::{
    find_path, find_path_with_context, plan, report, Path, SearchContext, SearchNode,
    SearchOutcome, NO_PATH_MESSAGE,
};
pub use cell::Cell;
pub use error::GridError;
pub use planning_grid::PlanningGrid;

/// Sentinel for positions without a known route, larger than any reachable path cost.
pub const INFINITE_COST: i32 = i32::MAX;
/// Inline capacity of neighbourhood vectors, one slot per direction.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Number of cells in each row of [DEMO_LAYOUT].
pub const DEMO_WIDTH: usize = 10;
/// Number of rows in [DEMO_LAYOUT].
pub const DEMO_HEIGHT: usize = 7;
/// The layout planned by the demo binary.
pub const DEMO_LAYOUT: [&str; DEMO_HEIGHT] = [
    " S   |    ",
    "   ||     ",
    "     |    ",
    "   | |  G ",
    " |   |    ",
    "    ||||  ",
    "||        ",
];
