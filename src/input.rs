use glam::Vec2;

use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::solver::StableFluid;

/// Turns discrete pointer presses into staged solver forcing.
///
/// Positions are viewport pixels with the origin at the bottom-left. A velocity press
/// stages `force * (last - current)`, the pixel displacement since the previous press
/// rather than a continuous drag, and both kinds of press move the remembered position.
#[derive(Debug, Clone)]
pub struct PointerInput {
    force: f32,
    source: f32,
    last: Vec2,
}

impl PointerInput {
    pub fn new(force: f32, source: f32) -> Self {
        Self {
            force,
            source,
            last: Vec2::ZERO,
        }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.force, config.source)
    }

    pub fn last_position(&self) -> Vec2 {
        self.last
    }

    /// Impulse a velocity press at `pos` would stage, without recording the press.
    pub fn impulse_for(&self, pos: Vec2) -> Vec2 {
        self.force * (self.last - pos)
    }

    pub fn press_velocity(
        &mut self,
        fluid: &mut StableFluid,
        pos: Vec2,
        viewport: Vec2,
    ) -> Result<Vec2, SolverError> {
        let cell = fluid.grid().cell_at(pos / viewport);
        let impulse = self.impulse_for(pos);
        fluid.inject_velocity_impulse(cell, impulse)?;
        self.last = pos;
        Ok(impulse)
    }

    pub fn press_density(
        &mut self,
        fluid: &mut StableFluid,
        pos: Vec2,
        viewport: Vec2,
    ) -> Result<(), SolverError> {
        let cell = fluid.grid().cell_at(pos / viewport);
        fluid.inject_density_source(cell, self.source)?;
        self.last = pos;
        Ok(())
    }
}
