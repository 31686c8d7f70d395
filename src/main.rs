use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sculpt::{ContourAlgorithm, EditSession, SessionConfig, Stroke, write_segments};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmArg {
    Marching,
    Blocky,
}

impl From<AlgorithmArg> for ContourAlgorithm {
    fn from(a: AlgorithmArg) -> Self {
        match a {
            AlgorithmArg::Marching => ContourAlgorithm::MarchingSquares,
            AlgorithmArg::Blocky => ContourAlgorithm::Blocky,
        }
    }
}

/// Generate a voxel grid, replay brush strokes and print its contour.
#[derive(Debug, Parser)]
#[command(name = "sculpt", version)]
struct Args {
    /// Session TOML; missing tables use the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<i32>,
    #[arg(long)]
    zoom: Option<f64>,
    #[arg(long)]
    octaves: Option<i32>,
    #[arg(long)]
    threshold: Option<f64>,
    /// Place endpoints by value instead of at edge midpoints
    #[arg(long)]
    interpolate: bool,
    #[arg(long, value_enum)]
    algorithm: Option<AlgorithmArg>,
    /// Brush stroke in grid cells, e.g. `placing:40,12`. Repeatable.
    #[arg(long = "stroke", value_name = "VARIANT:X,Y")]
    strokes: Vec<Stroke>,
    /// Segment file; stdout when omitted
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => {
            log::info!(target: "config", "loading {}", path.display());
            SessionConfig::from_path(path)?
        }
        None => SessionConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.noise.seed = seed;
    }
    if let Some(zoom) = args.zoom {
        cfg.noise.zoom = zoom;
    }
    if let Some(octaves) = args.octaves {
        cfg.noise.octaves = octaves;
    }
    if let Some(threshold) = args.threshold {
        cfg.contour.threshold = threshold;
    }
    cfg.contour.interpolate |= args.interpolate;

    let mut session = EditSession::from_config(&cfg)?;
    if let Some(algorithm) = args.algorithm {
        let settings = *session.contour_settings();
        session.extract_contour(algorithm.into(), settings.threshold, settings.interpolate);
    }

    for stroke in &args.strokes {
        session.apply_brush(stroke.variant, stroke.x, stroke.y);
    }

    log::info!(
        target: "session",
        "{}x{} grid, {} solid cells, {} segments after {} strokes",
        session.grid().width(),
        session.grid().height(),
        session.grid().solid_count(),
        session.segments().len(),
        args.strokes.len()
    );

    match &args.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_segments(&mut out, session.segments())?;
            out.flush()?;
            log::info!(target: "session", "wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_segments(&mut out, session.segments())?;
            out.flush()?;
        }
    }
    Ok(())
}
