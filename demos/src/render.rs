use gridstep_core::{Cell, Classification, Grid, Point, Role};

/// Character shown for one cell.
pub fn glyph(role: Role, cell: &Cell) -> char {
    match role {
        Role::Start => return 'S',
        Role::Goal => return 'G',
        Role::None => {}
    }
    if cell.is_blocked() {
        return '#';
    }
    match cell.class {
        Classification::Unvisited => '.',
        Classification::Frontier => '+',
        Classification::Visited => 'o',
        Classification::Current => '@',
        Classification::Path => '*',
        Classification::VisitedFromStart => 's',
        Classification::VisitedFromGoal => 'g',
    }
}

/// Render every cell's classification, one line per row.
pub fn frame(grid: &Grid) -> String {
    let mut out = String::with_capacity(((grid.width() + 1) * grid.height()) as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            out.push(glyph(grid.role(p), &grid.at(p)));
        }
        out.push('\n');
    }
    out
}
