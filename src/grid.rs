use glam::Vec2;

/// Number of Gauss-Seidel sweeps used by both the diffuser and the pressure solve.
pub const RELAXATION_ITERATIONS: usize = 20;

/// Square simulation grid with `n` interior cells per axis and a one-cell ghost border.
///
/// Cell `(i, j)` lives at `i + j * (n + 2)`; `i` runs along x, `j` along y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    n: usize,
}

impl Grid {
    pub(crate) fn new(n: usize) -> Self {
        Self { n }
    }

    /// Interior resolution.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Edge length including both ghost cells.
    pub fn edge(&self) -> usize {
        self.n + 2
    }

    /// Length of every field buffer.
    pub fn size(&self) -> usize {
        self.edge() * self.edge()
    }

    /// Side of one cell in the unit-square domain.
    pub fn cell_size(&self) -> f32 {
        1.0 / self.n as f32
    }

    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(
            i <= self.n + 1 && j <= self.n + 1,
            "cell ({i}, {j}) outside grid of edge {}",
            self.edge()
        );
        i + j * self.edge()
    }

    /// Inverse of [`Grid::index`].
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.edge(), index / self.edge())
    }

    pub fn is_interior(&self, i: usize, j: usize) -> bool {
        (1..=self.n).contains(&i) && (1..=self.n).contains(&j)
    }

    /// Interior cell containing a point of the unit square, origin bottom-left.
    ///
    /// Points outside the square land on the nearest interior cell.
    pub fn cell_at(&self, pos: Vec2) -> usize {
        let n = self.n as f32;
        let to_cell = |t: f32| ((t * n + 1.0).max(1.0) as usize).min(self.n);
        self.index(to_cell(pos.x), to_cell(pos.y))
    }

    /// Centre of cell `(i, j)` in unit-square coordinates; ghost cells fall just outside.
    pub fn cell_center(&self, i: usize, j: usize) -> Vec2 {
        let h = self.cell_size();
        Vec2::new((i as f32 - 0.5) * h, (j as f32 - 0.5) * h)
    }
}
