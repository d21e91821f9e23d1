use glam::Vec2;

use crate::advect::advect;
use crate::boundary::Boundary;
use crate::config::SolverConfig;
use crate::diffuse::diffuse;
use crate::error::{MAX_RESOLUTION, SolverError};
use crate::field::BufferPair;
use crate::grid::Grid;
use crate::project::project;
use crate::source::add_source;

/// Stable fluids solver state: three buffer pairs on one fixed grid.
///
/// Forcing is staged into the `previous` buffers with the `inject_*` methods and merged
/// by the next [`StableFluid::tick`], which leaves the staging buffers zeroed again.
#[derive(Debug, Clone)]
pub struct StableFluid {
    grid: Grid,
    velocity_x: BufferPair,
    velocity_y: BufferPair,
    density: BufferPair,
}

impl StableFluid {
    pub fn new(n: usize) -> Result<Self, SolverError> {
        if n == 0 || n > MAX_RESOLUTION {
            return Err(SolverError::InvalidResolution(n));
        }
        let grid = Grid::new(n);
        let size = grid.size();
        log::debug!("allocating {n}x{n} stable fluid grid ({size} cells per field)");

        Ok(Self {
            grid,
            velocity_x: BufferPair::zeroed(size),
            velocity_y: BufferPair::zeroed(size),
            density: BufferPair::zeroed(size),
        })
    }

    pub fn from_config(config: &SolverConfig) -> Result<Self, SolverError> {
        config.validate()?;
        Self::new(config.resolution)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn density(&self) -> &[f32] {
        &self.density.current
    }

    pub fn velocity_x(&self) -> &[f32] {
        &self.velocity_x.current
    }

    pub fn velocity_y(&self) -> &[f32] {
        &self.velocity_y.current
    }

    pub fn velocity_at(&self, i: usize, j: usize) -> Vec2 {
        let idx = self.grid.index(i, j);
        Vec2::new(self.velocity_x.current[idx], self.velocity_y.current[idx])
    }

    /// Stage a raw velocity impulse at `cell`; it is scaled by `dt` on the next tick.
    pub fn inject_velocity_impulse(&mut self, cell: usize, impulse: Vec2) -> Result<(), SolverError> {
        self.check_cell(cell)?;
        self.velocity_x.previous[cell] += impulse.x;
        self.velocity_y.previous[cell] += impulse.y;
        Ok(())
    }

    /// Stage a raw density source at `cell`; it is scaled by `dt` on the next tick.
    pub fn inject_density_source(&mut self, cell: usize, amount: f32) -> Result<(), SolverError> {
        self.check_cell(cell)?;
        self.density.previous[cell] += amount;
        Ok(())
    }

    /// Advance velocity, then density, by one timestep.
    pub fn tick(&mut self, dt: f32, diffusion: f32) -> Result<(), SolverError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SolverError::InvalidTimestep(dt));
        }
        if !diffusion.is_finite() || diffusion < 0.0 {
            return Err(SolverError::InvalidDiffusion(diffusion));
        }
        log::trace!("tick dt={dt} diffusion={diffusion}");

        self.update_velocity(dt, diffusion);
        self.update_density(dt, diffusion);
        self.clear_sources();
        Ok(())
    }

    /// Drop any staged forcing without touching the running fields.
    pub fn clear_sources(&mut self) {
        self.velocity_x.clear_previous();
        self.velocity_y.clear_previous();
        self.density.clear_previous();
    }

    pub fn clear(&mut self) {
        log::debug!("clearing all fields");
        self.velocity_x.clear();
        self.velocity_y.clear();
        self.density.clear();
    }

    fn check_cell(&self, cell: usize) -> Result<(), SolverError> {
        let size = self.grid.size();
        if cell >= size {
            return Err(SolverError::CellOutOfRange { index: cell, size });
        }
        Ok(())
    }

    fn update_velocity(&mut self, dt: f32, diffusion: f32) {
        let grid = &self.grid;
        let u = &mut self.velocity_x;
        let v = &mut self.velocity_y;

        add_source(dt, &mut u.current, &u.previous);
        add_source(dt, &mut v.current, &v.previous);

        u.swap();
        diffuse(grid, &mut u.current, &u.previous, diffusion, dt, Boundary::MirrorX);
        v.swap();
        diffuse(grid, &mut v.current, &v.previous, diffusion, dt, Boundary::MirrorY);

        project(grid, &mut u.current, &mut v.current, &mut v.previous, &mut u.previous);

        // Self-advection: the projected velocity, now in the previous buffers, is both
        // the transported quantity and the flow.
        u.swap();
        v.swap();
        advect(grid, dt, &mut u.current, &u.previous, &u.previous, &v.previous, Boundary::MirrorX);
        advect(grid, dt, &mut v.current, &v.previous, &u.previous, &v.previous, Boundary::MirrorY);

        project(grid, &mut u.current, &mut v.current, &mut v.previous, &mut u.previous);
    }

    fn update_density(&mut self, dt: f32, diffusion: f32) {
        let grid = &self.grid;
        let d = &mut self.density;

        add_source(dt, &mut d.current, &d.previous);
        d.swap();
        diffuse(grid, &mut d.current, &d.previous, diffusion, dt, Boundary::None);
        d.swap();
        advect(
            grid,
            dt,
            &mut d.current,
            &d.previous,
            &self.velocity_x.current,
            &self.velocity_y.current,
            Boundary::None,
        );
    }
}
