//! Label data model and overlap detection.
//!
//! A label is an annotation's bounding quadrilateral plus the insertion
//! point it hangs off. Hosts hand in free-form [`LabelRecord`]s; the
//! four-corner contract is enforced once at conversion, after which the
//! detector and solver can rely on shape.

pub mod detector;
pub mod types;

pub use detector::{detect_overlaps, OverlapDetector, OverlapPair};
pub use types::{Label, LabelError, LabelId, LabelKind, LabelRecord};

#[cfg(test)]
mod tests_detector;
