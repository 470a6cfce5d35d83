//! Force-directed relaxation of label positions.
//!
//! Each label is a particle that repels every other label and is tethered
//! to its original anchor by a linear spring. Running the system for a
//! fixed number of damped steps spreads crowded labels apart while keeping
//! each one near the feature it annotates.

use crate::geometry::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuning parameters for [`relax_positions`].
///
/// Parameters are taken at face value; there is no validation and no
/// convergence check. The update is only contractive while
/// `attraction_strength * damping < 2`, so combinations past that line
/// oscillate or diverge. The defaults are drawing-scale values tuned for
/// labels tens of units apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelaxConfig {
    /// Number of integration steps. Always runs to the end; zero is a no-op.
    pub iterations: usize,
    /// Strength of the inverse-square push between every pair.
    pub repulsion_strength: f64,
    /// Strength of the spring pulling each item back to its anchor.
    pub attraction_strength: f64,
    /// Scale applied to the accumulated force before each position update.
    pub damping: f64,
    /// Floor on the pair distance used by the repulsion term, so near
    /// pileups produce a strong finite push instead of blowing up.
    pub min_distance: f64,
}

impl Default for RelaxConfig {
    fn default() -> Self {
        RelaxConfig {
            iterations: 100,
            repulsion_strength: 100.0,
            attraction_strength: 10.0,
            damping: 0.9,
            min_distance: 5.0,
        }
    }
}

#[derive(Debug, Error, Clone)]
pub enum PlacementError {
    #[error("no positions to relax")]
    EmptyPositions,
}

/// Outcome of a relaxation run, with the figures worth logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelaxResult {
    /// Relaxed positions, parallel to the input slice.
    pub positions: Vec<Point2>,
    /// Steps actually run (always the configured count).
    pub iterations: usize,
    pub item_count: usize,
    /// Largest single move applied during the final step. Near zero means
    /// the system had settled by the time the run ended.
    pub max_step: f64,
    /// Largest final distance between an item and its anchor.
    pub max_displacement: f64,
}

/// Relaxes `original` into a spread-out arrangement and returns the new
/// positions, parallel to the input.
///
/// The input slice doubles as the anchor set: every item is pulled back
/// toward its own starting position for the whole run. Identical input and
/// config always produce bit-identical output. An empty input has no
/// meaningful answer and is rejected.
pub fn relax_positions(
    original: &[Point2],
    config: &RelaxConfig,
) -> Result<Vec<Point2>, PlacementError> {
    Ok(relax_positions_with_result(original, config)?.positions)
}

/// Same relaxation as [`relax_positions`], with run metadata attached.
pub fn relax_positions_with_result(
    original: &[Point2],
    config: &RelaxConfig,
) -> Result<RelaxResult, PlacementError> {
    if original.is_empty() {
        return Err(PlacementError::EmptyPositions);
    }

    let n = original.len();
    let mut positions: Vec<Point2> = original.to_vec();
    let mut max_step = 0.0_f64;

    for _ in 0..config.iterations {
        let mut forces = vec![Vector2::zeros(); n];

        // Repulsion, each unordered pair once with equal and opposite
        // contributions.
        for i in 0..n {
            for j in (i + 1)..n {
                let delta = positions[i] - positions[j];
                let dist = delta.norm().max(config.min_distance);
                // The raw offset over the clamped distance, not a unit
                // vector: inside the floor the push fades with the true
                // separation, and a coincident pair gets zero force
                // rather than NaN.
                let direction = delta / dist;
                let force = direction * (config.repulsion_strength / (dist * dist));
                forces[i] += force;
                forces[j] -= force;
            }
        }

        // Spring toward the anchors.
        for i in 0..n {
            forces[i] += (original[i] - positions[i]) * config.attraction_strength;
        }

        // Positions stay frozen until every force for this step is in.
        max_step = 0.0;
        for i in 0..n {
            let step = forces[i] * config.damping;
            positions[i] += step;
            max_step = max_step.max(step.norm());
        }
    }

    let max_displacement = positions
        .iter()
        .zip(original)
        .map(|(p, o)| (p - o).norm())
        .fold(0.0, f64::max);

    Ok(RelaxResult {
        iterations: config.iterations,
        item_count: n,
        max_step,
        max_displacement,
        positions,
    })
}
