use crate::boundary::{Boundary, set_boundary};
use crate::grid::{Grid, RELAXATION_ITERATIONS};

/// Implicit (backward Euler) diffusion of `previous` into `current`.
///
/// Solves `current = previous + a * laplacian(current)` with `a = rate * dt * n^2` using
/// in-place Gauss-Seidel sweeps: cells later in a sweep read neighbours already updated
/// in the same sweep. Ghost cells are refreshed after every sweep.
pub fn diffuse(
    grid: &Grid,
    current: &mut [f32],
    previous: &[f32],
    rate: f32,
    dt: f32,
    kind: Boundary,
) {
    let n = grid.n();
    let nf = n as f32;
    let a = rate * dt * nf * nf;
    let denominator = 1.0 + 4.0 * a;

    for _ in 0..RELAXATION_ITERATIONS {
        for i in 1..=n {
            for j in 1..=n {
                let idx = grid.index(i, j);
                current[idx] = (previous[idx]
                    + a * (current[grid.index(i + 1, j)]
                        + current[grid.index(i, j + 1)]
                        + current[grid.index(i - 1, j)]
                        + current[grid.index(i, j - 1)]))
                    / denominator;
            }
        }
        set_boundary(grid, kind, current);
    }
}
