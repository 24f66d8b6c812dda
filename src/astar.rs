//! A* search over a [PlanningGrid] with 4-directional unit-cost moves.
//!
//! The frontier is a [BinaryHeap] of [SearchNode]s. Superseded entries are not removed when a
//! cheaper route to a position is found; instead they are recognised and skipped when popped by
//! comparing against the best-cost table.
use crate::cell::Cell;
use crate::error::{GridError, Result};
use crate::planning_grid::PlanningGrid;
use crate::INFINITE_COST;
use grid_util::grid::{SimpleValueGrid, ValueGrid};
use grid_util::point::Point;
use itertools::iproduct;
use log::{debug, info, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Manhattan distance, the heuristic for 4-directional unit-cost movement.
pub fn manhattan(p1: &Point, p2: &Point) -> i32 {
    p1.manhattan_distance(p2)
}

/// A frontier entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub position: Point,
    /// Accumulated cost from the start.
    pub cost: i32,
    /// Estimated remaining cost to the goal.
    pub heuristic: i32,
}

impl SearchNode {
    pub fn priority(&self) -> i32 {
        self.cost + self.heuristic
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on priority so the max-heap pops the smallest estimate first. Ties go to the
        // node with the larger accumulated cost, which is closer to the goal.
        match other.priority().cmp(&self.priority()) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// A reconstructed path, from start to goal inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub points: Vec<Point>,
    pub cost: i32,
}

/// Result of a search that ran to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Path),
    /// The frontier emptied before the goal was reached.
    Exhausted,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::Exhausted => None,
        }
    }
}

/// The state of a single search: the frontier plus the best-cost and predecessor tables, both
/// indexed by coordinate. A context can be reused across searches to keep its allocations.
#[derive(Clone, Debug)]
pub struct SearchContext {
    frontier: BinaryHeap<SearchNode>,
    best_cost: SimpleValueGrid<i32>,
    predecessor: SimpleValueGrid<Option<Point>>,
    expansions: usize,
}

impl SearchContext {
    pub fn new(width: usize, height: usize) -> SearchContext {
        SearchContext {
            frontier: BinaryHeap::new(),
            best_cost: SimpleValueGrid::new(width, height, INFINITE_COST),
            predecessor: SimpleValueGrid::new(width, height, None),
            expansions: 0,
        }
    }

    pub fn for_grid(grid: &PlanningGrid) -> SearchContext {
        SearchContext::new(grid.width(), grid.height())
    }

    /// Clears the frontier and tables, resizing them when the grid size changed.
    fn prepare(&mut self, width: usize, height: usize) {
        self.frontier.clear();
        self.expansions = 0;
        if self.best_cost.width() == width && self.best_cost.height() == height {
            for (y, x) in iproduct!(0..height as i32, 0..width as i32) {
                self.best_cost.set(x, y, INFINITE_COST);
                self.predecessor.set(x, y, None);
            }
        } else {
            self.best_cost = SimpleValueGrid::new(width, height, INFINITE_COST);
            self.predecessor = SimpleValueGrid::new(width, height, None);
        }
    }

    fn in_bounds(&self, pos: &Point) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.best_cost.width()
            && (pos.y as usize) < self.best_cost.height()
    }

    /// Lowest cost found so far from the start of the last search, [None] if never reached or
    /// outside the searched grid.
    pub fn best_cost(&self, pos: &Point) -> Option<i32> {
        if !self.in_bounds(pos) {
            return None;
        }
        let cost = self.best_cost.get(pos.x, pos.y);
        (cost != INFINITE_COST).then_some(cost)
    }

    pub fn predecessor(&self, pos: &Point) -> Option<Point> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.predecessor.get(pos.x, pos.y)
    }

    /// Number of nodes expanded by the last search, stale frontier entries excluded.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Runs A* from `start` to `goal` without touching the grid. `on_pop` sees every node taken
    /// off the frontier that is not stale, in pop order. Returns the cost of the goal if reached,
    /// or [GridError::OutOfBounds] if either endpoint lies outside the grid.
    pub fn astar<F>(
        &mut self,
        grid: &PlanningGrid,
        start: Point,
        goal: Point,
        mut on_pop: F,
    ) -> Result<Option<i32>>
    where
        F: FnMut(&SearchNode),
    {
        for p in [start, goal] {
            if !grid.in_bounds(p) {
                return Err(GridError::OutOfBounds(p));
            }
        }
        self.prepare(grid.width(), grid.height());
        self.best_cost.set(start.x, start.y, 0);
        self.frontier.push(SearchNode {
            position: start,
            cost: 0,
            heuristic: manhattan(&start, &goal),
        });
        while let Some(node) = self.frontier.pop() {
            let current = node.position;
            // The same position may have been pushed several times as cheaper routes were
            // found; only the entry matching the best cost is expanded.
            if node.cost > self.best_cost.get(current.x, current.y) {
                continue;
            }
            on_pop(&node);
            if current == goal {
                debug!("Reached {} after {} expansions", goal, self.expansions);
                return Ok(Some(node.cost));
            }
            self.expansions += 1;
            let new_cost = node.cost + 1;
            for neighbour in grid.neighborhood_points(&current) {
                if new_cost < self.best_cost.get(neighbour.x, neighbour.y) {
                    self.best_cost.set(neighbour.x, neighbour.y, new_cost);
                    self.predecessor
                        .set(neighbour.x, neighbour.y, Some(current));
                    self.frontier.push(SearchNode {
                        position: neighbour,
                        cost: new_cost,
                        heuristic: manhattan(&neighbour, &goal),
                    });
                }
            }
        }
        debug!("Frontier exhausted after {} expansions", self.expansions);
        Ok(None)
    }

    /// Follows the predecessors of the last search from `goal` back to `start`, returning the
    /// positions in start-to-goal order.
    pub fn reverse_path(&self, start: Point, goal: Point) -> Vec<Point> {
        let mut path: Vec<Point> = std::iter::successors(Some(goal), |current| {
            if *current == start {
                None
            } else {
                self.predecessor(current)
            }
        })
        .collect();
        path.reverse();
        path
    }

    /// Walks the predecessors from `goal` to `start`, marking every cell but the start as a path
    /// cell, then stamps both endpoints back onto the grid.
    pub(crate) fn reconstruct(&self, grid: &mut PlanningGrid, start: Point, goal: Point) -> Path {
        let points = self.reverse_path(start, goal);
        for p in points.iter().filter(|p| **p != start) {
            grid.grid.set(p.x, p.y, Cell::PathMark);
        }
        grid.grid.set(start.x, start.y, Cell::Start);
        grid.grid.set(goal.x, goal.y, Cell::Goal);
        Path {
            cost: points.len() as i32 - 1,
            points,
        }
    }
}

/// Computes a shortest path from `start` to `goal` and marks it on the grid. The grid is left
/// untouched if no path exists.
pub fn find_path(grid: &mut PlanningGrid, start: Point, goal: Point) -> Result<SearchOutcome> {
    let mut context = SearchContext::for_grid(grid);
    find_path_with_context(&mut context, grid, start, goal)
}

/// Like [find_path], reusing the tables of `context`.
pub fn find_path_with_context(
    context: &mut SearchContext,
    grid: &mut PlanningGrid,
    start: Point,
    goal: Point,
) -> Result<SearchOutcome> {
    info!("Computing path from {} to {}", start, goal);
    match context.astar(grid, start, goal, |_| {})? {
        Some(cost) => {
            let path = context.reconstruct(grid, start, goal);
            debug_assert_eq!(path.cost, cost);
            info!("Found path of cost {}", cost);
            Ok(SearchOutcome::Found(path))
        }
        None => {
            warn!("{} is not reachable from {}", goal, start);
            Ok(SearchOutcome::Exhausted)
        }
    }
}

/// Locates the start and goal markers and runs [find_path] between them.
pub fn plan(grid: &mut PlanningGrid) -> Result<SearchOutcome> {
    let (start, goal) = grid.endpoints()?;
    find_path(grid, start, goal)
}

/// Printed ahead of the grid when the search exhausted.
pub const NO_PATH_MESSAGE: &str = "No path found!";

/// The program output for a finished search: the grid rows, preceded by [NO_PATH_MESSAGE] if no
/// path was found.
pub fn report(outcome: &SearchOutcome, grid: &PlanningGrid) -> String {
    match outcome {
        SearchOutcome::Found(_) => grid.to_string(),
        SearchOutcome::Exhausted => format!("{}\n{}", NO_PATH_MESSAGE, grid),
    }
}
