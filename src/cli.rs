use crate::config::load_config;
use crate::dataset::{filter_by_year, generate_nodes};
use crate::layout::compute_layout_with_rng;
use crate::layout_dump::write_layout_dump;
use crate::model::{LayoutMode, ThoughtNode};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "starmap",
    version,
    about = "3D star-map layout engine for thought graphs"
)]
pub struct Args {
    /// Input node list (JSON array) or '-' for stdin; mock data is generated when omitted
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the layout dump. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Layout mode
    #[arg(short = 'm', long = "mode", value_enum, default_value = "spiral")]
    pub mode: ModeArg,

    /// Timeline filter: keep only thoughts dated on or before this year
    #[arg(short = 'y', long = "year")]
    pub year: Option<i32>,

    /// Config JSON file (partial overrides allowed)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Node count when generating mock data
    #[arg(short = 'n', long = "count")]
    pub count: Option<usize>,

    /// Seed for link sampling, layout scatter and mock data
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ModeArg {
    Spiral,
    Sphere,
    Force,
    Grouped,
}

impl From<ModeArg> for LayoutMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Spiral => LayoutMode::Spiral,
            ModeArg::Sphere => LayoutMode::Sphere,
            ModeArg::Force => LayoutMode::Force,
            ModeArg::Grouped => LayoutMode::Grouped,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.layout.seed = Some(seed);
    }
    if let Some(count) = args.count {
        config.dataset.count = count;
    }

    let mut rng = match config.layout.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut nodes = match args.input.as_deref() {
        Some(path) => read_nodes(path)?,
        None => generate_nodes(&config.dataset, &mut rng),
    };
    if let Some(year) = args.year {
        nodes = filter_by_year(&nodes, year);
    }

    let layout = compute_layout_with_rng(&nodes, args.mode.into(), &config.layout, &mut rng);
    write_layout_dump(args.output.as_deref(), &layout, &nodes)?;
    Ok(())
}

fn read_nodes(path: &Path) -> Result<Vec<ThoughtNode>> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    let nodes: Vec<ThoughtNode> = serde_json::from_str(&contents)?;
    Ok(nodes)
}
