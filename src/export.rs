use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::View;
use crate::render::Renderer;
use crate::solver::StableFluid;

pub struct ImageExporter {
    renderer: Renderer,
}

impl ImageExporter {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            renderer: Renderer::new(width, height),
        }
    }

    pub fn export_density_png(&self, fluid: &StableFluid, path: &Path) -> anyhow::Result<()> {
        let img = self.renderer.render_density(fluid);
        img.save(path)
            .with_context(|| format!("writing density image {}", path.display()))?;
        Ok(())
    }

    pub fn export_velocity_png(&self, fluid: &StableFluid, path: &Path) -> anyhow::Result<()> {
        let img = self.renderer.render_velocity(fluid);
        img.save(path)
            .with_context(|| format!("writing velocity image {}", path.display()))?;
        Ok(())
    }

    pub fn export_view_png(&self, fluid: &StableFluid, view: View, path: &Path) -> anyhow::Result<()> {
        match view {
            View::Density => self.export_density_png(fluid, path),
            View::Velocity => self.export_velocity_png(fluid, path),
        }
    }

    /// Tick `steps` times, writing `<prefix>_frame_NNNN.png` after each tick.
    pub fn export_frame_sequence(
        &self,
        fluid: &mut StableFluid,
        dt: f32,
        diffusion: f32,
        steps: usize,
        output_dir: &Path,
        prefix: &str,
    ) -> anyhow::Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(steps);
        for i in 0..steps {
            fluid.tick(dt, diffusion)?;

            let path = output_dir.join(format!("{prefix}_frame_{i:04}.png"));
            self.export_density_png(fluid, &path)?;
            written.push(path);
        }
        log::info!("wrote {} frames to {}", written.len(), output_dir.display());
        Ok(written)
    }
}
