use crate::boundary::{Boundary, set_boundary};
use crate::grid::{Grid, RELAXATION_ITERATIONS};

/// Remove the divergent part of `(u, v)`.
///
/// `div` and `pressure` are scratch buffers. Only their interior cells are initialised
/// here; the pressure ghost cells keep whatever the buffer held until the first sweep's
/// boundary refresh.
pub fn project(grid: &Grid, u: &mut [f32], v: &mut [f32], div: &mut [f32], pressure: &mut [f32]) {
    let n = grid.n();
    let h = grid.cell_size();

    for i in 1..=n {
        for j in 1..=n {
            let idx = grid.index(i, j);
            div[idx] = -0.5
                * h
                * (u[grid.index(i + 1, j)] - u[grid.index(i - 1, j)]
                    + v[grid.index(i, j + 1)]
                    - v[grid.index(i, j - 1)]);
            pressure[idx] = 0.0;
        }
    }

    for _ in 0..RELAXATION_ITERATIONS {
        for i in 1..=n {
            for j in 1..=n {
                pressure[grid.index(i, j)] = (div[grid.index(i, j)]
                    + pressure[grid.index(i - 1, j)]
                    + pressure[grid.index(i + 1, j)]
                    + pressure[grid.index(i, j - 1)]
                    + pressure[grid.index(i, j + 1)])
                    / 4.0;
            }
        }
        set_boundary(grid, Boundary::None, pressure);
    }

    for i in 1..=n {
        for j in 1..=n {
            let idx = grid.index(i, j);
            u[idx] -= 0.5 * (pressure[grid.index(i + 1, j)] - pressure[grid.index(i - 1, j)]) / h;
            v[idx] -= 0.5 * (pressure[grid.index(i, j + 1)] - pressure[grid.index(i, j - 1)]) / h;
        }
    }

    set_boundary(grid, Boundary::MirrorX, u);
    set_boundary(grid, Boundary::MirrorY, v);
}

/// Discrete divergence at interior cell `(i, j)`, in the projector's central-difference form.
pub fn divergence_at(grid: &Grid, u: &[f32], v: &[f32], i: usize, j: usize) -> f32 {
    0.5 * (u[grid.index(i + 1, j)] - u[grid.index(i - 1, j)] + v[grid.index(i, j + 1)]
        - v[grid.index(i, j - 1)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divergence_free_field_is_untouched() {
        let grid = Grid::new(6);
        let mut u = vec![0.0; grid.size()];
        let mut v = vec![0.0; grid.size()];
        let mut div = vec![0.0; grid.size()];
        let mut pressure = vec![0.0; grid.size()];

        project(&grid, &mut u, &mut v, &mut div, &mut pressure);

        assert!(u.iter().chain(&v).all(|&x| x == 0.0));
        assert!(pressure.iter().all(|&p| p == 0.0));
    }
}
