use crate::project::divergence_at;
use crate::solver::StableFluid;

/// Interior-only summary statistics of one solver state.
#[derive(Debug, Clone)]
pub struct FluidMetrics {
    pub frame: usize,
    pub total_mass: f32,
    pub max_density: f32,
    pub kinetic_energy: f32,
    pub max_speed: f32,
    /// Mean absolute divergence per interior cell.
    pub divergence: f32,
    /// Mean absolute vorticity per interior cell.
    pub vorticity: f32,
}

impl FluidMetrics {
    pub fn analyze(fluid: &StableFluid, frame: usize) -> Self {
        let grid = fluid.grid();
        let n = grid.n();
        let density = fluid.density();
        let u = fluid.velocity_x();
        let v = fluid.velocity_y();

        let mut total_mass = 0.0;
        let mut max_density = f32::MIN;
        let mut kinetic_energy = 0.0;
        let mut max_speed: f32 = 0.0;
        let mut total_divergence = 0.0;
        let mut total_vorticity = 0.0;

        for j in 1..=n {
            for i in 1..=n {
                let idx = grid.index(i, j);
                let speed_sq = u[idx] * u[idx] + v[idx] * v[idx];

                total_mass += density[idx];
                max_density = max_density.max(density[idx]);
                kinetic_energy += 0.5 * speed_sq;
                max_speed = max_speed.max(speed_sq.sqrt());
                total_divergence += divergence_at(grid, u, v, i, j).abs();

                let curl = 0.5
                    * (v[grid.index(i + 1, j)] - v[grid.index(i - 1, j)] - u[grid.index(i, j + 1)]
                        + u[grid.index(i, j - 1)]);
                total_vorticity += curl.abs();
            }
        }

        let cells = (n * n) as f32;
        Self {
            frame,
            total_mass,
            max_density,
            kinetic_energy,
            max_speed,
            divergence: total_divergence / cells,
            vorticity: total_vorticity / cells,
        }
    }

    pub fn log_summary(&self) {
        log::info!(
            "frame {}: mass={:.6} max_density={:.6} kinetic={:.6} max_speed={:.6} divergence={:.6} vorticity={:.6}",
            self.frame,
            self.total_mass,
            self.max_density,
            self.kinetic_energy,
            self.max_speed,
            self.divergence,
            self.vorticity
        );
    }
}

#[derive(Debug, Default)]
pub struct MetricsRecorder {
    pub history: Vec<FluidMetrics>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_frame(&mut self, fluid: &StableFluid, frame: usize) -> &FluidMetrics {
        self.history.push(FluidMetrics::analyze(fluid, frame));
        &self.history[self.history.len() - 1]
    }

    pub fn log_trends(&self) {
        let (Some(first), Some(last)) = (self.history.first(), self.history.last()) else {
            return;
        };
        if self.history.len() < 2 {
            return;
        }

        log::info!(
            "mass {:.6} -> {:.6} ({:+.3}%)",
            first.total_mass,
            last.total_mass,
            percent_change(first.total_mass, last.total_mass)
        );
        log::info!(
            "kinetic energy {:.6} -> {:.6} ({:+.3}%)",
            first.kinetic_energy,
            last.kinetic_energy,
            percent_change(first.kinetic_energy, last.kinetic_energy)
        );
        log::info!(
            "divergence {:.6} -> {:.6}",
            first.divergence,
            last.divergence
        );
    }
}

fn percent_change(from: f32, to: f32) -> f32 {
    (to - from) / from.abs().max(0.001) * 100.0
}
