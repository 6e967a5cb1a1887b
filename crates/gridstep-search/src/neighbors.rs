use std::f64::consts::SQRT_2;

use gridstep_core::{Grid, Point};

/// Cost of an orthogonal move.
pub const ORTHOGONAL_COST: f64 = 1.0;

/// Cost of a diagonal move.
pub const DIAGONAL_COST: f64 = SQRT_2;

// Expansion order is load-bearing: it is the tie-break for every search
// without an explicit priority.
const ORTHOGONAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

const DIAGONAL: [Point; 4] = [
    Point::new(1, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// A passable neighbor together with the cost of moving onto it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    pub to: Point,
    pub cost: f64,
}

/// Cost of a single hop between adjacent points.
#[inline]
pub fn hop_cost(from: Point, to: Point) -> f64 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

/// Cached neighbor computation helper.
///
/// Enumerates the passable neighbors of a grid point in the fixed order
/// up, right, down, left, then (with diagonals) up-right, down-right,
/// down-left, up-left.
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: Vec<Move>,
    diagonal: bool,
}

impl Neighbors {
    /// Create a helper for 4-connected (`diagonal == false`) or
    /// 8-connected movement.
    pub fn new(diagonal: bool) -> Self {
        Self {
            buf: Vec::with_capacity(8),
            diagonal,
        }
    }

    /// Return the in-bounds, non-blocked neighbors of `p`.
    pub fn of(&mut self, grid: &Grid, p: Point) -> &[Move] {
        self.buf.clear();
        let diagonals: &[Point] = if self.diagonal { &DIAGONAL } else { &[] };
        for (d, cost) in ORTHOGONAL
            .iter()
            .map(|d| (d, ORTHOGONAL_COST))
            .chain(diagonals.iter().map(|d| (d, DIAGONAL_COST)))
        {
            let to = p + *d;
            if grid.is_passable(to) {
                self.buf.push(Move { to, cost });
            }
        }
        &self.buf
    }
}
