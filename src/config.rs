use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{MAX_RESOLUTION, SolverError};

/// Which field the viewer and exporter draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Density,
    Velocity,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            View::Density => View::Velocity,
            View::Velocity => View::Density,
        }
    }
}

/// Simulation parameters shared by the desktop viewer and the headless runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Interior cells per axis.
    pub resolution: usize,
    /// Fixed timestep per frame.
    pub dt: f32,
    /// Shared by velocity and density.
    pub diffusion: f32,
    /// Multiplier applied to the pointer displacement of a velocity impulse.
    pub force: f32,
    /// Density staged by one source click.
    pub source: f32,
    pub view: View,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            resolution: 64,
            dt: 0.1,
            diffusion: 0.0,
            force: 5.0,
            source: 100.0,
            view: View::Density,
        }
    }
}

impl SolverConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SolverError> {
        if self.resolution == 0 || self.resolution > MAX_RESOLUTION {
            return Err(SolverError::InvalidResolution(self.resolution));
        }
        if !self.dt.is_finite() || self.dt < 0.0 {
            return Err(SolverError::InvalidTimestep(self.dt));
        }
        if !self.diffusion.is_finite() || self.diffusion < 0.0 {
            return Err(SolverError::InvalidDiffusion(self.diffusion));
        }
        Ok(())
    }
}
