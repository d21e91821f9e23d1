/// Precondition violations rejected at the solver's entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    InvalidResolution(usize),
    InvalidTimestep(f32),
    InvalidDiffusion(f32),
    CellOutOfRange { index: usize, size: usize },
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::InvalidResolution(n) => {
                write!(f, "grid resolution must be between 1 and {MAX_RESOLUTION}, got {n}")
            }
            SolverError::InvalidTimestep(dt) => {
                write!(f, "timestep must be finite and non-negative, got {dt}")
            }
            SolverError::InvalidDiffusion(rate) => {
                write!(f, "diffusion rate must be finite and non-negative, got {rate}")
            }
            SolverError::CellOutOfRange { index, size } => {
                write!(f, "cell index {index} outside field of {size} cells")
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Largest accepted interior resolution; keeps `(n + 2)^2` cells well inside memory.
pub const MAX_RESOLUTION: usize = 4096;
