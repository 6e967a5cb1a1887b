//! Wall layouts for generated grids. Both generators put the start in the
//! top-left corner and the goal in the bottom-right one.

use gridstep_core::{Grid, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A `width`×`height` grid with roughly `density` of its cells walled.
pub fn scatter(width: i32, height: i32, density: f64, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(width, height);
    for p in grid.bounds() {
        if rng.random_bool(density) {
            grid.set_blocked(p, true);
        }
    }
    place_endpoints(&mut grid);
    grid
}

/// A recursive-division maze.
///
/// Walls only ever run along odd rows and columns and every gap sits on an
/// even one, so later walls never close an earlier gap and all open cells
/// stay connected.
pub fn recursive_division(width: i32, height: i32, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(width, height);
    divide(&mut grid, &mut rng, Point::new(0, 0), width, height);
    place_endpoints(&mut grid);
    grid
}

/// Split the open chamber at `origin` with one wall that has a single gap,
/// then recurse into both halves. `origin` has even coordinates.
fn divide<R: Rng>(grid: &mut Grid, rng: &mut R, origin: Point, width: i32, height: i32) {
    let horizontal = match (width >= 3, height >= 3) {
        (false, false) => return,
        (true, false) => false,
        (false, true) => true,
        (true, true) if width == height => rng.random_bool(0.5),
        (true, true) => height > width,
    };
    if horizontal {
        let wall = origin.y + 1 + 2 * rng.random_range(0..(height - 1) / 2);
        let gap = origin.x + 2 * rng.random_range(0..(width + 1) / 2);
        for x in origin.x..origin.x + width {
            if x != gap {
                grid.set_blocked(Point::new(x, wall), true);
            }
        }
        let below = Point::new(origin.x, wall + 1);
        divide(grid, rng, origin, width, wall - origin.y);
        divide(grid, rng, below, width, origin.y + height - below.y);
    } else {
        let wall = origin.x + 1 + 2 * rng.random_range(0..(width - 1) / 2);
        let gap = origin.y + 2 * rng.random_range(0..(height + 1) / 2);
        for y in origin.y..origin.y + height {
            if y != gap {
                grid.set_blocked(Point::new(wall, y), true);
            }
        }
        let right = Point::new(wall + 1, origin.y);
        divide(grid, rng, origin, wall - origin.x, height);
        divide(grid, rng, right, origin.x + width - right.x, height);
    }
}

fn place_endpoints(grid: &mut Grid) {
    let start = Point::new(0, 0);
    let goal = Point::new(grid.width() - 1, grid.height() - 1);
    grid.set_blocked(start, false);
    grid.set_blocked(goal, false);
    grid.set_start(start);
    grid.set_goal(goal);
}
