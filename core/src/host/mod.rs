//! Host abstraction layer for label acquisition and storage.
//!
//! This module provides a trait-based abstraction over whatever supplies
//! and consumes label data (a live drawing session, an exported table, a
//! test fixture), so the detector and solver never touch a host object
//! model or a file format directly.

use crate::geometry::Point2;
use crate::label::{Label, LabelRecord, OverlapPair};
use thiserror::Error;

/// Errors that can occur at the host boundary.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record: {0}")]
    Malformed(String),

    #[error("Host backend error: {0}")]
    Backend(String),
}

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Anything that can produce label records for the engine.
pub trait LabelSource: Send {
    /// Fetch every label the host currently knows about. Records come back
    /// raw; shape validation happens when they are registered.
    fn fetch_labels(&mut self) -> HostResult<Vec<LabelRecord>>;
}

/// Persistent storage for label records and solved positions.
pub trait LabelStore: Send {
    /// Load every stored label record.
    fn load(&mut self) -> HostResult<Vec<LabelRecord>>;

    /// Persist labels together with their relaxed positions.
    ///
    /// `labels` and `positions` run parallel, one position per label in the
    /// same order. Implementations must reject a length mismatch rather
    /// than pair things up by guesswork.
    fn save(&mut self, labels: &[Label], positions: &[Point2]) -> HostResult<()>;
}

/// Every store can stand in as a source.
impl<S: LabelStore> LabelSource for S {
    fn fetch_labels(&mut self) -> HostResult<Vec<LabelRecord>> {
        self.load()
    }
}

/// Sink for rendering results back at the user. Purely an output channel;
/// nothing the engine computes depends on what a visualizer does.
pub trait Visualizer {
    /// Present the overlap report for the given labels.
    fn show_overlaps(&mut self, labels: &[Label], pairs: &[OverlapPair]) -> HostResult<()>;

    /// Present relaxed positions, parallel to the labels previously shown.
    fn show_positions(&mut self, positions: &[Point2]) -> HostResult<()>;
}
