use crate::cell::Cell;
use crate::error::{GridError, Result};
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use core::str::FromStr;
use grid_util::grid::{SimpleValueGrid, ValueGrid};
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Offsets of the 4-neighbourhood in expansion order: left, right, up, down.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// [PlanningGrid] holds the [Cell] of every position in a [SimpleValueGrid] together with the
/// connected components of the passable cells, maintained in a [UnionFind] structure.
/// Implements [ValueGrid] by building on the cell grid.
#[derive(Clone, Debug)]
pub struct PlanningGrid {
    pub grid: SimpleValueGrid<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PlanningGrid {
    fn default() -> PlanningGrid {
        PlanningGrid::new(0, 0, Cell::Empty)
    }
}

impl PlanningGrid {
    /// Builds a grid from equally wide text rows, see [Cell::from_char] for the alphabet.
    /// Connected components are generated before returning.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<PlanningGrid> {
        let width = rows
            .first()
            .map(|row| row.as_ref().chars().count())
            .ok_or(GridError::Empty)?;
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut planning_grid = PlanningGrid::new(width, rows.len(), Cell::Empty);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or(GridError::UnknownCell { ch, x, y })?;
                planning_grid.grid.set(x as i32, y as i32, cell);
            }
        }
        planning_grid.generate_components();
        Ok(planning_grid)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Point> {
        iproduct!(0..self.height() as i32, 0..self.width() as i32).map(|(y, x)| Point::new(x, y))
    }

    /// Cell at an in-bounds position.
    pub fn cell(&self, pos: Point) -> Cell {
        self.grid.get(pos.x, pos.y)
    }

    /// Position of the first cell holding `marker` in row-major order.
    pub fn locate(&self, marker: Cell) -> Option<Point> {
        self.positions().find(|p| self.cell(*p) == marker)
    }

    /// Resolves the start and goal, requiring each marker to be present exactly once.
    pub fn endpoints(&self) -> Result<(Point, Point)> {
        Ok((
            self.unique_marker(Cell::Start)?,
            self.unique_marker(Cell::Goal)?,
        ))
    }

    fn unique_marker(&self, marker: Cell) -> Result<Point> {
        let mut found = self.positions().filter(|p| self.cell(*p) == marker);
        let first = found
            .next()
            .ok_or(GridError::MissingMarker(marker.to_char()))?;
        match found.next() {
            Some(second) => Err(GridError::DuplicateMarker {
                marker: marker.to_char(),
                first,
                second,
            }),
            None => Ok(first),
        }
    }

    pub fn in_bounds(&self, pos: Point) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width()
            && (pos.y as usize) < self.height()
    }

    pub fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos) && self.cell(pos).is_passable()
    }

    /// The in-bounds, passable cells of the 4-neighbourhood of `point`.
    pub fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        NEUMANN_OFFSETS
            .iter()
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    fn index(&self, pos: &Point) -> usize {
        pos.y as usize * self.width() + pos.x as usize
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.can_move_to(*start) && self.can_move_to(*goal) {
            !self
                .components
                .equiv(self.index(start), self.index(goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable 4-neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let w = self.width() as i32;
        let h = self.height() as i32;
        self.components = UnionFind::new(self.width() * self.height());
        self.components_dirty = false;
        for (y, x) in iproduct!(0..h, 0..w) {
            let point = Point::new(x, y);
            if !self.can_move_to(point) {
                continue;
            }
            let parent_ix = self.index(&point);
            for n in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                if self.can_move_to(n) {
                    let ix = self.index(&n);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }

    /// The rendered rows, identical to the lines of the [Display](fmt::Display) output.
    pub fn rows(&self) -> Vec<String> {
        (0..self.height() as i32)
            .map(|y| {
                (0..self.width() as i32)
                    .map(|x| self.grid.get(x, y).to_char())
                    .collect()
            })
            .collect()
    }
}

impl FromStr for PlanningGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<PlanningGrid> {
        PlanningGrid::from_rows(&s.lines().collect::<Vec<_>>())
    }
}

impl fmt::Display for PlanningGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl ValueGrid<Cell> for PlanningGrid {
    fn new(width: usize, height: usize, default_value: Cell) -> Self {
        let mut planning_grid = PlanningGrid {
            grid: SimpleValueGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        planning_grid.generate_components();
        planning_grid
    }
    fn get(&self, x: i32, y: i32) -> Cell {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Flags the components as dirty if the passability of the
    /// cell changes.
    fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if self.grid.get(x, y).is_passable() != cell.is_passable() {
            self.components_dirty = true;
        }
        self.grid.set(x, y, cell);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
