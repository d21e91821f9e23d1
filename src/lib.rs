//! Stable fluids solver on a fixed square grid, with a desktop viewer and PNG export

pub mod advect;
pub mod analysis;
pub mod boundary;
pub mod config;
pub mod desktop;
pub mod diffuse;
pub mod error;
pub mod export;
pub mod field;
pub mod grid;
pub mod input;
pub mod project;
pub mod render;
pub mod solver;
pub mod source;

pub use analysis::{FluidMetrics, MetricsRecorder};
pub use boundary::{Boundary, set_boundary};
pub use config::{SolverConfig, View};
pub use desktop::DesktopApp;
pub use error::SolverError;
pub use export::ImageExporter;
pub use field::BufferPair;
pub use grid::{Grid, RELAXATION_ITERATIONS};
pub use input::PointerInput;
pub use render::Renderer;
pub use solver::StableFluid;
