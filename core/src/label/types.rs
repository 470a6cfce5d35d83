use crate::geometry::{anchor_xy, Point2, Point3};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Host-assigned identifier for a label. Kept opaque so the engine works the
/// same whether the host hands us entity handles, GUIDs, or row numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LabelId(String);

impl LabelId {
    pub fn new(id: impl Into<String>) -> Self {
        LabelId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LabelId {
    fn from(id: &str) -> Self {
        LabelId(id.to_string())
    }
}

impl From<String> for LabelId {
    fn from(id: String) -> Self {
        LabelId(id)
    }
}

/// Discipline tag carried by a label. Tags are advisory; no operation
/// branches on the kind, it only flows through to reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LabelKind {
    Pipe,
    Structure,
    Unknown,
}

impl LabelKind {
    /// Maps a host tag onto a kind. Anything unrecognized is `Unknown`
    /// rather than an error, so foreign disciplines still flow through.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "PIPE" => LabelKind::Pipe,
            "STRUCTURE" => LabelKind::Structure,
            _ => LabelKind::Unknown,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            LabelKind::Pipe => "PIPE",
            LabelKind::Structure => "STRUCTURE",
            LabelKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl std::str::FromStr for LabelKind {
    type Err = std::convert::Infallible;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Ok(LabelKind::from_tag(tag))
    }
}

/// A drawing annotation reduced to what overlap testing needs: its bounding
/// quadrilateral and the point it is anchored to.
///
/// Corners run bottom-left, bottom-right, top-right, top-left, i.e. in
/// counter-clockwise winding. Coordinates are world coordinates straight
/// from the host; only x and y ever participate in geometry tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub kind: LabelKind,
    pub corners: [Point3; 4],
    pub insertion_point: Point3,
}

impl Label {
    /// The 2D anchor the placement solver pulls this label back toward.
    pub fn anchor(&self) -> Point2 {
        anchor_xy(&self.insertion_point)
    }
}

/// Raw label data as a host hands it over, before shape validation. The
/// corner list is still a free-length vector here; conversion to [`Label`]
/// is the single place where the four-corner contract is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRecord {
    pub id: String,
    pub kind: String,
    pub corners: Vec<Point3>,
    pub insertion_point: Point3,
}

#[derive(Debug, Error, Clone)]
pub enum LabelError {
    #[error("label {id}: expected 4 corners, got {count}")]
    CornerCount { id: String, count: usize },
    #[error("label {0} is already registered")]
    DuplicateId(LabelId),
}

impl TryFrom<LabelRecord> for Label {
    type Error = LabelError;

    fn try_from(record: LabelRecord) -> Result<Self, Self::Error> {
        let corners: [Point3; 4] =
            record
                .corners
                .as_slice()
                .try_into()
                .map_err(|_| LabelError::CornerCount {
                    id: record.id.clone(),
                    count: record.corners.len(),
                })?;
        Ok(Label {
            id: LabelId::new(record.id),
            kind: LabelKind::from_tag(&record.kind),
            corners,
            insertion_point: record.insertion_point,
        })
    }
}
