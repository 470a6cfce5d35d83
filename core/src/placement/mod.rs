//! Label position relaxation.

pub mod solver;

pub use solver::{
    relax_positions, relax_positions_with_result, PlacementError, RelaxConfig, RelaxResult,
};
