//! CSV-backed label store.
//!
//! One row per label in the drawing-export convention: the id, the type
//! tag, the four corner triples in bottom-left, bottom-right, top-right,
//! top-left order, the insertion point triple, and the solver's two
//! position columns. Position columns are written on save and ignored on
//! load, where the insertion point is the authoritative anchor.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;

use label_core::geometry::{Point2, Point3};
use label_core::host::{HostError, HostResult, LabelStore};
use label_core::label::{Label, LabelRecord};
use serde::{Deserialize, Serialize};

/// A single flat row, so the header stays plain coordinate columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LabelRow {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    bl_x: f64,
    bl_y: f64,
    bl_z: f64,
    br_x: f64,
    br_y: f64,
    br_z: f64,
    tr_x: f64,
    tr_y: f64,
    tr_z: f64,
    tl_x: f64,
    tl_y: f64,
    tl_z: f64,
    ins_x: f64,
    ins_y: f64,
    ins_z: f64,
    // Absent in tables exported straight from the drawing.
    #[serde(default)]
    pos_x: f64,
    #[serde(default)]
    pos_y: f64,
}

impl LabelRow {
    fn to_record(&self) -> LabelRecord {
        LabelRecord {
            id: self.id.clone(),
            kind: self.kind.clone(),
            corners: vec![
                Point3::new(self.bl_x, self.bl_y, self.bl_z),
                Point3::new(self.br_x, self.br_y, self.br_z),
                Point3::new(self.tr_x, self.tr_y, self.tr_z),
                Point3::new(self.tl_x, self.tl_y, self.tl_z),
            ],
            insertion_point: Point3::new(self.ins_x, self.ins_y, self.ins_z),
        }
    }

    fn from_label(label: &Label, position: &Point2) -> Self {
        let [bl, br, tr, tl] = label.corners;
        LabelRow {
            id: label.id.to_string(),
            kind: label.kind.to_string(),
            bl_x: bl.x,
            bl_y: bl.y,
            bl_z: bl.z,
            br_x: br.x,
            br_y: br.y,
            br_z: br.z,
            tr_x: tr.x,
            tr_y: tr.y,
            tr_z: tr.z,
            tl_x: tl.x,
            tl_y: tl.y,
            tl_z: tl.z,
            ins_x: label.insertion_point.x,
            ins_y: label.insertion_point.y,
            ins_z: label.insertion_point.z,
            pos_x: position.x,
            pos_y: position.y,
        }
    }
}

fn read_rows<R: Read>(reader: R) -> HostResult<Vec<LabelRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize::<LabelRow>() {
        let row = row.map_err(|e| HostError::Malformed(e.to_string()))?;
        records.push(row.to_record());
    }
    Ok(records)
}

fn write_rows<W: Write>(writer: W, labels: &[Label], positions: &[Point2]) -> HostResult<()> {
    if labels.len() != positions.len() {
        return Err(HostError::Malformed(format!(
            "{} labels but {} positions",
            labels.len(),
            positions.len()
        )));
    }
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (label, position) in labels.iter().zip(positions) {
        csv_writer
            .serialize(LabelRow::from_label(label, position))
            .map_err(|e| HostError::Malformed(e.to_string()))?;
    }
    csv_writer
        .flush()
        .map_err(|e| HostError::Malformed(e.to_string()))?;
    Ok(())
}

/// [`LabelStore`] over a CSV file on disk.
pub struct CsvLabelStore {
    path: PathBuf,
}

impl CsvLabelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvLabelStore { path: path.into() }
    }
}

impl LabelStore for CsvLabelStore {
    fn load(&mut self) -> HostResult<Vec<LabelRecord>> {
        let file = File::open(&self.path)?;
        read_rows(BufReader::new(file))
    }

    fn save(&mut self, labels: &[Label], positions: &[Point2]) -> HostResult<()> {
        let file = File::create(&self.path)?;
        write_rows(file, labels, positions)
    }
}
