use bboxmetrics::ops::rayon::{filter_out_sentinels_par, sort_bboxes_par};
use bboxmetrics::{
    bbox_area, compute_ious, filter_boxes, filter_out_sentinels, match_boxes, reject_boxes,
    sort_bboxes, to_sentinel_padded_bbox_tensor, BoxBatch, BoxError, BoxSet, BoxView, BOX_FIELDS,
    CLASS, CONFIDENCE,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "bboxmetrics CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

fn default_class_axis() -> usize {
    CLASS
}

fn default_confidence_axis() -> usize {
    CONFIDENCE
}

fn default_threshold() -> f32 {
    0.5
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Operation {
    Area,
    Filter {
        value: f32,
        #[serde(default = "default_class_axis")]
        axis: usize,
    },
    Reject {
        value: f32,
        #[serde(default = "default_class_axis")]
        axis: usize,
    },
    Pad,
    StripSentinels,
    Sort {
        #[serde(default = "default_confidence_axis")]
        axis: usize,
    },
    Iou {
        other_path: String,
    },
    Match {
        other_path: String,
        #[serde(default = "default_threshold")]
        threshold: f32,
    },
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    input_path: String,
    output_path: Option<String>,
    fields: usize,
    parallel: bool,
    operation: Operation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: String::new(),
            output_path: None,
            fields: BOX_FIELDS,
            parallel: false,
            operation: Operation::Pad,
        }
    }
}

#[derive(Debug, Serialize)]
struct PaddedRecord {
    batch: usize,
    max_boxes: usize,
    fields: usize,
    boxes: Vec<Vec<Vec<f32>>>,
}

impl From<&BoxBatch> for PaddedRecord {
    fn from(value: &BoxBatch) -> Self {
        Self {
            batch: value.batch(),
            max_boxes: value.max_boxes(),
            fields: value.fields(),
            boxes: value.sets().map(rows_of).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    Values(Vec<Vec<f32>>),
    Sets(Vec<Vec<Vec<f32>>>),
    Padded(PaddedRecord),
    Matches(Vec<Vec<Option<usize>>>),
}

fn rows_of(view: BoxView<'_>) -> Vec<Vec<f32>> {
    view.iter().map(<[f32]>::to_vec).collect()
}

fn load_sets(path: &Path, fields: usize) -> Result<Vec<BoxSet>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let raw: Vec<Vec<Vec<f32>>> = serde_json::from_str(&text)?;
    let mut sets = Vec::with_capacity(raw.len());
    for rows in raw {
        let width = rows.first().map_or(fields, Vec::len);
        if let Some(bad) = rows.iter().find(|row| row.len() != width) {
            return Err(BoxError::FieldMismatch {
                expected: width,
                got: bad.len(),
            }
            .into());
        }
        sets.push(BoxSet::new(rows.concat(), width)?);
    }
    Ok(sets)
}

fn pairwise(
    lhs: &[BoxSet],
    rhs: &[BoxSet],
) -> Result<Vec<bboxmetrics::IouMatrix>, Box<dyn std::error::Error>> {
    if lhs.len() != rhs.len() {
        return Err(format!(
            "iou needs matching set counts, got {} and {}",
            lhs.len(),
            rhs.len()
        )
        .into());
    }
    let tables = lhs
        .iter()
        .zip(rhs.iter())
        .map(|(a, b)| compute_ious(a.view(), b.view()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tables)
}

fn run(config: &Config, sets: &[BoxSet]) -> Result<Output, Box<dyn std::error::Error>> {
    let views: Vec<BoxView<'_>> = sets.iter().map(BoxSet::view).collect();
    let output = match &config.operation {
        Operation::Area => Output::Values(
            views
                .iter()
                .map(|view| bbox_area(*view))
                .collect::<Result<_, _>>()?,
        ),
        Operation::Filter { value, axis } => Output::Sets(
            views
                .iter()
                .map(|view| filter_boxes(*view, *value, *axis).map(|set| rows_of(set.view())))
                .collect::<Result<_, _>>()?,
        ),
        Operation::Reject { value, axis } => Output::Sets(
            views
                .iter()
                .map(|view| reject_boxes(*view, *value, *axis).map(|set| rows_of(set.view())))
                .collect::<Result<_, _>>()?,
        ),
        Operation::Pad => {
            let batch = to_sentinel_padded_bbox_tensor(&views)?;
            Output::Padded(PaddedRecord::from(&batch))
        }
        Operation::StripSentinels => {
            let stripped = if config.parallel {
                filter_out_sentinels_par(&views)?
            } else {
                views
                    .iter()
                    .map(|view| filter_out_sentinels(*view))
                    .collect::<Result<_, _>>()?
            };
            Output::Sets(stripped.iter().map(|set| rows_of(set.view())).collect())
        }
        Operation::Sort { axis } => {
            let batch = to_sentinel_padded_bbox_tensor(&views)?;
            let sorted = if config.parallel {
                sort_bboxes_par(&batch, *axis)?
            } else {
                sort_bboxes(&batch, *axis)?
            };
            Output::Padded(PaddedRecord::from(&sorted))
        }
        Operation::Iou { other_path } => {
            let other = load_sets(Path::new(other_path), config.fields)?;
            let tables = pairwise(sets, &other)?;
            Output::Sets(
                tables
                    .iter()
                    .map(|table| {
                        (0..table.rows())
                            .filter_map(|r| table.row(r).map(<[f32]>::to_vec))
                            .collect()
                    })
                    .collect(),
            )
        }
        Operation::Match {
            other_path,
            threshold,
        } => {
            let other = load_sets(Path::new(other_path), config.fields)?;
            let tables = pairwise(sets, &other)?;
            Output::Matches(
                tables
                    .iter()
                    .map(|table| match_boxes(table, *threshold))
                    .collect(),
            )
        }
    };
    Ok(output)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("bboxmetrics=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.input_path.is_empty() {
        return Err("input_path must be set in the config".into());
    }
    if config.fields == 0 {
        return Err("fields must be at least 1".into());
    }

    let sets = load_sets(Path::new(&config.input_path), config.fields)?;
    tracing::info!(sets = sets.len(), "loaded box sets");
    let output = run(&config, &sets)?;
    let json = serde_json::to_string_pretty(&output)?;

    match &config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
