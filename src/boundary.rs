use crate::grid::Grid;

/// Sign convention used when filling a field's ghost cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Scalars (density, pressure): ghost cells copy their interior neighbour.
    None,
    /// Horizontal velocity: negated at the left and right walls.
    MirrorX,
    /// Vertical velocity: negated at the bottom and top walls.
    MirrorY,
}

impl Boundary {
    fn x_sign(self) -> f32 {
        if self == Boundary::MirrorX { -1.0 } else { 1.0 }
    }

    fn y_sign(self) -> f32 {
        if self == Boundary::MirrorY { -1.0 } else { 1.0 }
    }
}

/// Refresh every ghost cell of `field` from the interior.
///
/// Edges mirror (or copy) the adjacent interior row/column; each corner is the mean of
/// its two edge neighbours, so edges are written before corners.
pub fn set_boundary(grid: &Grid, kind: Boundary, field: &mut [f32]) {
    let n = grid.n();
    let sx = kind.x_sign();
    let sy = kind.y_sign();

    for i in 1..=n {
        field[grid.index(0, i)] = sx * field[grid.index(1, i)];
        field[grid.index(n + 1, i)] = sx * field[grid.index(n, i)];
        field[grid.index(i, 0)] = sy * field[grid.index(i, 1)];
        field[grid.index(i, n + 1)] = sy * field[grid.index(i, n)];
    }

    field[grid.index(0, 0)] = 0.5 * (field[grid.index(1, 0)] + field[grid.index(0, 1)]);
    field[grid.index(0, n + 1)] =
        0.5 * (field[grid.index(1, n + 1)] + field[grid.index(0, n)]);
    field[grid.index(n + 1, 0)] =
        0.5 * (field[grid.index(n, 0)] + field[grid.index(n + 1, 1)]);
    field[grid.index(n + 1, n + 1)] =
        0.5 * (field[grid.index(n, n + 1)] + field[grid.index(n + 1, n)]);
}
