//! The [`Grid`] type, a fixed-size 2D array of [`Cell`]s with a start and
//! a goal.
//!
//! The grid is plain owned data: whoever drives a search owns it, and
//! observers read it between steps. Start and goal are stored as
//! coordinates; a cell's [`Role`] is derived from them.

use std::fmt;

use crate::cell::{Cell, Classification, Occupancy, Role};
use crate::geom::{Bounds, Point};

/// A 2D grid of [`Cell`]s plus the designated start and goal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Bounds,
    start: Option<Point>,
    goal: Option<Point>,
}

impl Grid {
    /// Create a new grid of the given dimensions, all cells free, with no
    /// start or goal.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Bounds::new(width, height);
        Self {
            cells: vec![Cell::default(); bounds.len()],
            bounds,
            start: None,
            goal: None,
        }
    }

    /// Parse a grid from text: `#` blocked, `.` free, `S` start, `G` goal.
    ///
    /// Every line must have the same width. Leading and trailing blank
    /// lines are ignored.
    pub fn from_ascii(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect();
        let lines: Vec<&str> = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => lines[..=last].to_vec(),
            None => Vec::new(),
        };
        let width = lines.first().map_or(0, |l| l.chars().count());
        if lines.iter().any(|l| l.chars().count() != width) {
            return Err(GridError::InconsistentSize(text.to_string()));
        }

        let mut grid = Grid::new(width as i32, lines.len() as i32);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match ch {
                    '.' => {}
                    '#' => {
                        if let Some(cell) = grid.cell_mut(pos) {
                            cell.occupancy = Occupancy::Blocked;
                        }
                    }
                    'S' => {
                        if grid.start.is_some() {
                            return Err(GridError::DuplicateMarker { ch, pos });
                        }
                        grid.start = Some(pos);
                    }
                    'G' => {
                        if grid.goal.is_some() {
                            return Err(GridError::DuplicateMarker { ch, pos });
                        }
                        grid.goal = Some(pos);
                    }
                    _ => return Err(GridError::InvalidRune { ch, pos }),
                }
            }
        }
        Ok(grid)
    }

    /// Render occupancy and roles in the [`from_ascii`](Grid::from_ascii)
    /// format.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height() as usize);
        for p in self.bounds {
            let ch = match (self.role(p), self.is_blocked(p)) {
                (Role::Start, _) => 'S',
                (Role::Goal, _) => 'G',
                (Role::None, true) => '#',
                (Role::None, false) => '.',
            };
            out.push(ch);
            if p.x == self.bounds.width() - 1 {
                out.push('\n');
            }
        }
        out
    }

    /// Extent of the grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.bounds.index(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`.
    #[inline]
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.bounds.index(p).map(move |i| &mut self.cells[i])
    }

    /// Read the cell at `p`. Returns `Cell::BLOCKED` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Cell {
        self.cell(p).copied().unwrap_or(Cell::BLOCKED)
    }

    /// Whether `p` is blocked. Points outside the grid count as blocked.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.cell(p).is_none_or(Cell::is_blocked)
    }

    /// Whether `p` is inside the grid and free.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        !self.is_blocked(p)
    }

    /// Set or clear a wall at `p`.
    ///
    /// Start and goal cells are never blocked. Returns whether the cell
    /// changed.
    pub fn set_blocked(&mut self, p: Point, blocked: bool) -> bool {
        if self.role(p) != Role::None {
            return false;
        }
        let occupancy = if blocked {
            Occupancy::Blocked
        } else {
            Occupancy::Free
        };
        match self.cell_mut(p) {
            Some(cell) if cell.occupancy != occupancy => {
                cell.occupancy = occupancy;
                true
            }
            _ => false,
        }
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.occupancy = Occupancy::Free;
        }
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Designate the start. Validity (bounds, walls, overlap with the goal)
    /// is checked when a search is initialized.
    pub fn set_start(&mut self, p: Point) {
        self.start = Some(p);
    }

    /// Designate the goal. See [`set_start`](Grid::set_start).
    pub fn set_goal(&mut self, p: Point) {
        self.goal = Some(p);
    }

    /// Role of the cell at `p`. Start wins if start and goal coincide.
    #[inline]
    pub fn role(&self, p: Point) -> Role {
        if self.start == Some(p) {
            Role::Start
        } else if self.goal == Some(p) {
            Role::Goal
        } else {
            Role::None
        }
    }

    /// Classification of the cell at `p` (`Unvisited` outside the grid).
    #[inline]
    pub fn classification(&self, p: Point) -> Classification {
        self.cell(p).map_or(Classification::Unvisited, |c| c.class)
    }

    /// Reclassify the cell at `p`. Start and goal cells keep their
    /// classification.
    #[inline]
    pub fn classify(&mut self, p: Point, class: Classification) {
        if self.role(p) != Role::None {
            return;
        }
        if let Some(cell) = self.cell_mut(p) {
            cell.class = class;
        }
    }

    /// Restore every cell's scratch and classification to defaults,
    /// keeping occupancy, start and goal.
    pub fn clear_search(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear_search();
        }
    }

    /// Number of cells currently holding `class`.
    pub fn count(&self, class: Classification) -> usize {
        self.cells.iter().filter(|c| c.class == class).count()
    }

    /// Row-major iterator over `(Point, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.bounds.points().zip(self.cells.iter())
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A cell whose classification changed between two snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameCell {
    pub pos: Point,
    pub class: Classification,
}

/// A set of classification changes (a diff frame).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
}

impl Frame {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Compute the classification changes from `prev` to `curr`.
///
/// Both grids are expected to have the same size; only the overlap is
/// compared.
pub fn compute_frame(prev: &Grid, curr: &Grid) -> Frame {
    let bounds = curr.bounds();
    let cells = bounds
        .points()
        .filter_map(|p| {
            let class = curr.classification(p);
            (prev.contains(p) && prev.classification(p) != class)
                .then_some(FrameCell { pos: p, class })
        })
        .collect();
    Frame {
        cells,
        width: bounds.width(),
        height: bounds.height(),
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when parsing a textual grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character other than `#`, `.`, `S` or `G` was found.
    InvalidRune { ch: char, pos: Point },
    /// A second start or goal marker was found.
    DuplicateMarker { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "grid: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos } => write!(
                f,
                "grid contains invalid rune \u{201c}{ch}\u{201d} at {pos}"
            ),
            Self::DuplicateMarker { ch, pos } => write!(
                f,
                "grid contains a second \u{201c}{ch}\u{201d} marker at {pos}"
            ),
        }
    }
}

impl std::error::Error for GridError {}
