use crate::boundary::{Boundary, set_boundary};
use crate::grid::Grid;

/// Semi-Lagrangian transport of `previous` along `(u, v)` into `dest`.
///
/// Each interior cell is traced back by `dt * n * velocity` grid units and resampled
/// bilinearly. The backtrace is clamped to `[0.5, n + 0.5]` so the four sampled corners
/// stay inside the ghost-bordered grid.
pub fn advect(
    grid: &Grid,
    dt: f32,
    dest: &mut [f32],
    previous: &[f32],
    u: &[f32],
    v: &[f32],
    kind: Boundary,
) {
    let n = grid.n();
    let dt0 = dt * n as f32;
    let upper = n as f32 + 0.5;

    for i in 1..=n {
        for j in 1..=n {
            let idx = grid.index(i, j);
            let (i0, j0, s1, t1) = backtrace(dt0, upper, i, j, u[idx], v[idx]);
            let (i1, j1) = (i0 + 1, j0 + 1);
            let s0 = 1.0 - s1;
            let t0 = 1.0 - t1;

            dest[idx] = s0
                * (t0 * previous[grid.index(i0, j0)] + t1 * previous[grid.index(i0, j1)])
                + s1 * (t0 * previous[grid.index(i1, j0)] + t1 * previous[grid.index(i1, j1)]);
        }
    }

    set_boundary(grid, kind, dest);
}

/// Base corner and fractional offsets of the clamped departure point of cell `(i, j)`.
#[inline]
fn backtrace(dt0: f32, upper: f32, i: usize, j: usize, u: f32, v: f32) -> (usize, usize, f32, f32) {
    let x = (i as f32 - dt0 * u).clamp(0.5, upper);
    let y = (j as f32 - dt0 * v).clamp(0.5, upper);
    let i0 = x as usize;
    let j0 = y as usize;
    (i0, j0, x - i0 as f32, y - j0 as f32)
}
