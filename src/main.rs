//! Chordloop — print generated chord progressions with chained voicings.
//!
//! Settings come from ~/.chordloop/config.yaml (or `--config`), with command
//! line flags taking precedence. The same `--seed` always prints the same
//! progressions.

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;

use chordloop::config::{default_config_path, load_config, GeneratorConfig};
use chordloop::pattern::pentatonic::pick_interval;
use chordloop::random;
use chordloop::{PlaybackStep, ScaleType};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "chordloop",
    version,
    about = "Procedural lofi chord progression generator"
)]
struct Cli {
    /// Chords per progression (at least 2)
    #[arg(short, long)]
    length: Option<usize>,

    /// Scale: major or major-pentatonic (other names fall back to major)
    #[arg(short, long)]
    scale: Option<String>,

    /// Voices per chord voicing
    #[arg(long)]
    voices: Option<usize>,

    /// RNG seed (same seed => same output)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of progressions to print
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// YAML chord catalog replacing the built-in chords
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Config file (defaults to ~/.chordloop/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Suggest a pentatonic melody tone above each chord
    #[arg(long)]
    melody: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// One printed progression.
#[derive(Debug, Serialize)]
struct ProgressionOutput {
    description: String,
    scale: ScaleType,
    steps: Vec<PlaybackStep>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    melody: Vec<i32>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("chordloop: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load the config file and apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<GeneratorConfig, Box<dyn Error>> {
    let path = cli.config.clone().unwrap_or_else(default_config_path);
    let mut config = load_config(&path)?;

    if let Some(length) = cli.length {
        config.length = length;
    }
    if let Some(scale) = &cli.scale {
        config.scale = ScaleType::from(scale.as_str());
    }
    if let Some(voices) = cli.voices {
        config.voices = voices;
    }
    if let Some(catalog) = &cli.catalog {
        config.catalog = Some(catalog.clone());
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(cli)?;
    if !config.scale.is_recognized() {
        log::warn!("unknown scale {:?}, using the major catalog", config.scale.as_str());
    }

    let builder = config.builder()?;
    let mut rng = match cli.seed {
        Some(seed) => random::seeded(seed),
        None => random::from_entropy(),
    };

    let mut outputs = Vec::with_capacity(cli.count);
    for _ in 0..cli.count {
        let progression = builder
            .generate(config.length, &config.scale, &mut rng)
            .ok_or_else(|| {
                format!(
                    "{} chords do not form a progression (need at least 2)",
                    config.length
                )
            })?;
        let steps = progression.playback_steps(config.voices, config.voice_leading, &mut rng);
        let melody = if cli.melody {
            steps.iter().map(|_| pick_interval(&mut rng)).collect()
        } else {
            Vec::new()
        };
        outputs.push(ProgressionOutput {
            description: progression.description(),
            scale: config.scale.clone(),
            steps,
            melody,
        });
    }

    match cli.format {
        OutputFormat::Text => print_text(&outputs),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outputs)?),
    }
    Ok(())
}

fn print_text(outputs: &[ProgressionOutput]) {
    for (i, output) in outputs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} ({})", output.description, output.scale);
        for (j, step) in output.steps.iter().enumerate() {
            let melody = output
                .melody
                .get(j)
                .map(|tone| format!("  melody +{tone}"))
                .unwrap_or_default();
            println!(
                "  {:<5} root +{:<2} voicing {:?}{melody}",
                step.numeral, step.root, step.voicing
            );
        }
    }
}
