//! vmf2stl - convert the brush geometry of a VMF map to STL

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use vmf_mesh::float_types::{Real, set_tolerance, tolerance};
use vmf_mesh::import::{ImportOptions, ScalePreset, import_file};
use vmf_mesh::io::{self, Format};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    /// One map unit per output unit
    Default,
    /// Twelve map units per output unit
    Csgo,
    /// Fourteen map units per output unit
    Tf2,
}

impl From<Preset> for ScalePreset {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Default => ScalePreset::Default,
            Preset::Csgo => ScalePreset::CsGo,
            Preset::Tf2 => ScalePreset::Tf2,
        }
    }
}

#[derive(Parser)]
#[command(name = "vmf2stl")]
#[command(about = "Convert Valve Map Format brushes to STL", long_about = None)]
struct Cli {
    /// Input .vmf file
    input: PathBuf,

    /// Output .stl file (default: input with .stl extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Unit conversion preset
    #[arg(long, value_enum, default_value_t = Preset::Default)]
    preset: Preset,

    /// Custom scale; map units are divided by it (overrides --preset)
    #[arg(long)]
    scale: Option<Real>,

    /// Merge coincident vertices of each brush; a custom tolerance is given as `--weld=TOL`
    #[arg(long, num_args = 0..=1, require_equals = true)]
    weld: Option<Option<Real>>,

    /// Write ASCII instead of binary STL
    #[arg(long)]
    ascii: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(error) = run(Cli::parse()) {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let preset = match cli.scale {
        Some(scale) => ScalePreset::Custom(scale),
        None => cli.preset.into(),
    };
    let options = ImportOptions::from_preset(preset);

    let mut level = import_file(&cli.input, &options)?;

    if let Some(custom) = cli.weld {
        if let Some(custom) = custom {
            set_tolerance(custom);
        }
        level.weld(tolerance());
    }

    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("stl"));
    let format = Format::from_path(&output, cli.ascii)?;
    let name = cli
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("vmf");

    io::save(&level, name, &output, format)
        .with_context(|| format!("writing '{}'", output.display()))?;

    println!(
        "{}: {} world(s), {} brush(es), {} face(s), {} vertices -> {}",
        cli.input.display(),
        level.worlds.len(),
        level.brush_count(),
        level.face_count(),
        level.vertex_count(),
        output.display()
    );
    Ok(())
}
