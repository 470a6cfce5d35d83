//! Batch host for the label engine: reads a drawing's label export, reports
//! overlapping pairs, and writes back relaxed positions.

mod store;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use label_core::host::LabelStore;
use label_core::label::{Label, OverlapDetector};
use label_core::placement::{relax_positions_with_result, RelaxConfig};
use serde_json::json;
use tracing::{debug, info};

use store::CsvLabelStore;

#[derive(Parser, Debug)]
#[command(name = "label-cli", version, about = "Label overlap detection and placement")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report every pair of overlapping labels in a CSV export
    Detect {
        /// Label table exported from the drawing
        input: PathBuf,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Relax label positions apart and write the table back with pos columns
    Place {
        /// Label table exported from the drawing
        input: PathBuf,

        /// Output table; defaults to rewriting the input in place
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Integration steps to run
        #[arg(long, default_value_t = 100)]
        iterations: usize,

        /// Inverse-square repulsion strength between labels
        #[arg(long, default_value_t = 100.0)]
        repulsion: f64,

        /// Spring strength pulling each label back to its insertion point
        #[arg(long, default_value_t = 10.0)]
        attraction: f64,

        /// Force scale per step, in (0, 1]
        #[arg(long, default_value_t = 0.9)]
        damping: f64,

        /// Distance floor for the repulsion term
        #[arg(long, default_value_t = 5.0)]
        min_distance: f64,

        /// Emit the run summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt::init();
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Detect { input, json } => detect(&input, json),
        Command::Place {
            input,
            output,
            iterations,
            repulsion,
            attraction,
            damping,
            min_distance,
            json,
        } => {
            let config = RelaxConfig {
                iterations,
                repulsion_strength: repulsion,
                attraction_strength: attraction,
                damping,
                min_distance,
            };
            place(&input, output.as_deref().unwrap_or(&input), &config, json)
        }
    }
}

/// Loads and validates every label in the table, rejecting duplicates and
/// malformed corner counts at the boundary.
fn load_labels(path: &std::path::Path) -> Result<OverlapDetector> {
    let mut store = CsvLabelStore::new(path);
    let records = store
        .load()
        .with_context(|| format!("reading {}", path.display()))?;
    debug!(count = records.len(), "loaded label records");

    let mut detector = OverlapDetector::new();
    for record in records {
        detector
            .add_record(record)
            .with_context(|| format!("registering labels from {}", path.display()))?;
    }
    Ok(detector)
}

fn detect(input: &std::path::Path, as_json: bool) -> Result<()> {
    let detector = load_labels(input)?;
    info!(labels = detector.len(), "scanning for overlaps");

    let pairs = detector.find_overlapping_labels();

    if as_json {
        let report = json!({
            "labels": detector.len(),
            "overlaps": pairs
                .iter()
                .map(|(a, b)| json!({
                    "first": { "id": a.id.as_str(), "kind": a.kind, "insertion_point": a.insertion_point },
                    "second": { "id": b.id.as_str(), "kind": b.kind, "insertion_point": b.insertion_point },
                }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if pairs.is_empty() {
        println!("no overlapping labels among {}", detector.len());
        return Ok(());
    }

    println!("{} overlapping pair(s):", pairs.len());
    for (a, b) in &pairs {
        println!(
            "  {} ({} at {:.3}, {:.3}) <-> {} ({} at {:.3}, {:.3})",
            a.id,
            a.kind,
            a.insertion_point.x,
            a.insertion_point.y,
            b.id,
            b.kind,
            b.insertion_point.x,
            b.insertion_point.y,
        );
    }
    Ok(())
}

fn place(
    input: &std::path::Path,
    output: &std::path::Path,
    config: &RelaxConfig,
    as_json: bool,
) -> Result<()> {
    let detector = load_labels(input)?;
    let labels: &[Label] = detector.labels();
    let anchors: Vec<_> = labels.iter().map(Label::anchor).collect();
    info!(
        labels = labels.len(),
        iterations = config.iterations,
        "relaxing label positions"
    );

    let result = relax_positions_with_result(&anchors, config)
        .with_context(|| format!("relaxing labels from {}", input.display()))?;
    debug!(
        max_step = result.max_step,
        max_displacement = result.max_displacement,
        "relaxation finished"
    );

    let mut store = CsvLabelStore::new(output);
    store
        .save(labels, &result.positions)
        .with_context(|| format!("writing {}", output.display()))?;

    if as_json {
        let report = json!({
            "labels": result.item_count,
            "iterations": result.iterations,
            "max_step": result.max_step,
            "max_displacement": result.max_displacement,
            "output": output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "relaxed {} labels over {} iterations (max displacement {:.3}) -> {}",
            result.item_count,
            result.iterations,
            result.max_displacement,
            output.display()
        );
    }
    Ok(())
}
