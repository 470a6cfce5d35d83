//! Pairwise overlap detection over a registry of labels.
//!
//! Detection is brute force over all unordered pairs. Label counts on a
//! single drawing sheet are small enough that the n^2 sweep beats any
//! spatial index on constant factors, and it keeps the reported order
//! deterministic.

use crate::geometry::polygons_overlap;
use crate::label::types::{Label, LabelError, LabelId, LabelRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An unordered overlap finding, reported with `first` registered before
/// `second`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapPair {
    pub first: LabelId,
    pub second: LabelId,
}

impl OverlapPair {
    pub fn involves(&self, id: &LabelId) -> bool {
        &self.first == id || &self.second == id
    }
}

impl From<(&Label, &Label)> for OverlapPair {
    fn from((first, second): (&Label, &Label)) -> Self {
        OverlapPair {
            first: first.id.clone(),
            second: second.id.clone(),
        }
    }
}

/// Reports every unordered pair of labels whose bounding quadrilaterals
/// overlap in the drawing plane.
///
/// Pairs come back in slice order: `first` always precedes `second` in the
/// input, and pairs are sorted by the position of their earlier member. The
/// input is read-only and the scan has no state, so repeated calls over the
/// same slice return identical reports.
pub fn detect_overlaps(labels: &[Label]) -> Vec<OverlapPair> {
    let mut pairs = Vec::new();
    for i in 0..labels.len() {
        for j in (i + 1)..labels.len() {
            if polygons_overlap(&labels[i].corners, &labels[j].corners) {
                pairs.push(OverlapPair::from((&labels[i], &labels[j])));
            }
        }
    }
    pairs
}

/// Registry of labels with duplicate-id protection and ordered iteration.
#[derive(Debug, Clone, Default)]
pub struct OverlapDetector {
    // Vec keeps registration order so reports are stable run to run.
    labels: Vec<Label>,
    index: HashMap<LabelId, usize>,
}

impl OverlapDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a validated label. Rejects a second label with an id that
    /// is already present instead of silently replacing the first.
    pub fn add_label(&mut self, label: Label) -> Result<(), LabelError> {
        if self.index.contains_key(&label.id) {
            return Err(LabelError::DuplicateId(label.id));
        }
        self.index.insert(label.id.clone(), self.labels.len());
        self.labels.push(label);
        Ok(())
    }

    /// Validates and registers a raw host record in one step.
    pub fn add_record(&mut self, record: LabelRecord) -> Result<(), LabelError> {
        self.add_label(Label::try_from(record)?)
    }

    pub fn get(&self, id: &LabelId) -> Option<&Label> {
        self.index.get(id).map(|&i| &self.labels[i])
    }

    /// Registered labels in registration order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Scans every unordered pair and returns the overlapping ones, with
    /// the earlier-registered label first in each pair.
    pub fn find_overlapping_labels(&self) -> Vec<(&Label, &Label)> {
        let mut pairs = Vec::new();
        for i in 0..self.labels.len() {
            for j in (i + 1)..self.labels.len() {
                if polygons_overlap(&self.labels[i].corners, &self.labels[j].corners) {
                    pairs.push((&self.labels[i], &self.labels[j]));
                }
            }
        }
        pairs
    }
}
