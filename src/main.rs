use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use glam::Vec2;
use stamfluid::{DesktopApp, ImageExporter, MetricsRecorder, PointerInput, SolverConfig, StableFluid};

#[derive(Parser, Debug)]
#[command(name = "stamfluid", about = "Real-time stable fluids simulation")]
struct Cli {
    /// JSON file with solver parameters
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the interior grid resolution
    #[arg(long)]
    resolution: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run without a window and write PNG frames plus metrics
    Headless {
        #[arg(long, default_value_t = 20)]
        frames: usize,

        #[arg(long, default_value = ".")]
        output: PathBuf,

        /// Output image edge in pixels
        #[arg(long, default_value_t = 512)]
        image_size: u32,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    if let Some(resolution) = cli.resolution {
        config.resolution = resolution;
    }
    config.validate()?;

    match cli.command {
        Some(Command::Headless {
            frames,
            output,
            image_size,
        }) => run_headless(&config, frames, &output, image_size),
        None => run_gui_app(config),
    }
}

fn run_headless(config: &SolverConfig, frames: usize, output: &std::path::Path, image_size: u32) -> anyhow::Result<()> {
    log::info!(
        "headless run: {}x{} grid, {frames} frames, dt={}",
        config.resolution,
        config.resolution,
        config.dt
    );
    std::fs::create_dir_all(output)
        .with_context(|| format!("creating output directory {}", output.display()))?;

    let mut simulation = StableFluid::from_config(config)?;
    let mut pointer = PointerInput::from_config(config);
    let exporter = ImageExporter::new(image_size, image_size);
    let mut recorder = MetricsRecorder::new();

    // A density source in the lower middle, then a press further up so the impulse
    // (previous minus current position) pushes the fluid down and to the left.
    let viewport = Vec2::splat(image_size as f32);
    pointer.press_density(&mut simulation, viewport * Vec2::new(0.5, 0.3), viewport)?;
    pointer.press_velocity(&mut simulation, viewport * Vec2::new(0.55, 0.45), viewport)?;

    recorder.record_frame(&simulation, 0).log_summary();
    for frame in 1..=frames {
        simulation.tick(config.dt, config.diffusion)?;

        let path = output.join(format!("frame_{frame:04}.png"));
        exporter.export_view_png(&simulation, config.view, &path)?;

        let metrics = recorder.record_frame(&simulation, frame);
        if frame % 5 == 0 {
            metrics.log_summary();
        }
    }

    recorder.log_trends();
    log::info!("wrote {frames} frames to {}", output.display());
    Ok(())
}

fn run_gui_app(config: SolverConfig) -> anyhow::Result<()> {
    let app = DesktopApp::new(config)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([680.0, 740.0])
            .with_title("stamfluid - Stable Fluids"),
        ..Default::default()
    };

    eframe::run_native("stamfluid", options, Box::new(|_cc| Box::new(app)))
        .map_err(|err| anyhow::anyhow!("viewer exited with error: {err}"))
}
