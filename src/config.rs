//! Command-line flags and the session settings derived from them

use crate::errors::{VizError, VizResult};
use crate::playback::Speed;
use crate::structures::{Operation, Structure, StructureKind, Value};
use clap::Parser;
use std::ops::RangeInclusive;
use std::path::PathBuf;

pub const DEFAULT_MAX_STEPS: usize = 100_000;
pub const DEFAULT_CAPACITY: usize = 32;
pub const DEFAULT_RANDOM_RANGE: RangeInclusive<Value> = 1..=99;

#[derive(Parser, Debug)]
#[command(name = "algotty", version, about = "Step through data structure algorithms in the terminal")]
pub struct Cli {
    /// Structure to start with
    #[arg(long, short = 's', value_enum, default_value_t = StructureKind::Array)]
    pub structure: StructureKind,

    /// Initial values, comma separated (graph: node labels)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Vec<Value>,

    /// Graph edges as comma separated A-B pairs; missing nodes are created
    #[arg(long, value_delimiter = ',', value_parser = parse_edge)]
    pub edges: Vec<(Value, Value)>,

    /// Start from the built-in sample data instead of --values
    #[arg(long, default_value_t = false, conflicts_with_all = ["values", "edges"])]
    pub sample: bool,

    /// Auto-play speed
    #[arg(long, value_enum, default_value_t = Speed::Normal)]
    pub speed: Speed,

    /// Abort run generation beyond this many steps
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Maximum number of elements a structure may hold
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Execute one command headless and print the resulting steps
    #[arg(long, value_name = "COMMAND")]
    pub run: Option<String>,
}

fn parse_edge(raw: &str) -> Result<(Value, Value), String> {
    let (a, b) = raw
        .split_once('-')
        .ok_or_else(|| format!("edge '{}' must look like A-B", raw))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<Value>()
            .map_err(|_| format!("'{}' is not a node label", s))
    };
    Ok((parse(a)?, parse(b)?))
}

/// Knobs a session runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub speed: Speed,
    pub max_steps: usize,
    pub capacity: usize,
    /// Range for `random LEN` when no bounds are given
    pub random_range: RangeInclusive<Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            speed: Speed::Normal,
            max_steps: DEFAULT_MAX_STEPS,
            capacity: DEFAULT_CAPACITY,
            random_range: DEFAULT_RANDOM_RANGE,
        }
    }
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            speed: self.speed,
            max_steps: self.max_steps,
            capacity: self.capacity,
            ..Settings::default()
        }
    }

    /// Build the structure described by `--structure`, `--values` and `--edges`
    ///
    /// Start-up data obeys `--capacity` like any later insertion.
    pub fn initial_structure(&self) -> VizResult<Structure> {
        if self.sample {
            let structure = Structure::sample(self.structure);
            if structure.len() > self.capacity {
                return Err(VizError::CapacityExceeded {
                    capacity: self.capacity,
                });
            }
            return Ok(structure);
        }
        let mut structure = Structure::new(self.structure);
        for value in &self.values {
            let op = structure.insertion_for(*value);
            self.insert_initial(&mut structure, &op)?;
        }
        if structure.kind() == StructureKind::Graph {
            for &(a, b) in &self.edges {
                for label in [a, b] {
                    let missing =
                        matches!(&structure, Structure::Graph(graph) if graph.node_id(label).is_none());
                    if missing {
                        self.insert_initial(&mut structure, &Operation::AddNode(label))?;
                    }
                }
                structure.apply(&Operation::AddEdge(a, b))?;
            }
        } else if !self.edges.is_empty() {
            tracing::warn!(kind = %self.structure, "--edges ignored for non-graph structure");
        }
        Ok(structure)
    }

    fn insert_initial(&self, structure: &mut Structure, op: &Operation) -> VizResult<()> {
        check_capacity(structure, op, self.capacity)?;
        structure.apply(op)?;
        Ok(())
    }
}

/// Reject operations that would leave more than `capacity` elements
pub fn check_capacity(structure: &Structure, op: &Operation, capacity: usize) -> VizResult<()> {
    let after = match op {
        Operation::Randomize { len, .. } => *len,
        _ if op.growth() > 0 => structure.len() + op.growth(),
        _ => return Ok(()),
    };
    if after > capacity {
        return Err(VizError::CapacityExceeded { capacity });
    }
    Ok(())
}
