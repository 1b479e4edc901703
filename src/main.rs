use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueHint};
use kmeans_palette::{QuantizerConfig, SeedPolicy, SweepRunner};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kmeans_palette", version)]
#[command(about = "Reduce an image's palette with k-means, once per cluster count")]
struct Cli {
    /// Input image path; prompted for on stdin when omitted
    #[arg(value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Smallest cluster count of the sweep
    #[arg(long = "min", default_value_t = kmeans_palette::pipeline::DEFAULT_MIN_CLUSTERS)]
    min_clusters: usize,
    /// Largest cluster count of the sweep (inclusive)
    #[arg(long = "max", default_value_t = kmeans_palette::pipeline::DEFAULT_MAX_CLUSTERS)]
    max_clusters: usize,

    /// Directory the output images are written to
    #[arg(short = 'o', long = "output-dir", value_hint = ValueHint::DirPath, default_value = ".")]
    output_dir: PathBuf,
    /// Output file prefix; files are named <prefix><K>.png
    #[arg(long = "prefix", default_value = kmeans_palette::pipeline::DEFAULT_OUTPUT_PREFIX)]
    prefix: String,

    /// Number of cluster counts processed concurrently (defaults to CPU count)
    #[arg(short = 'j', long = "workers")]
    workers: Option<usize>,
    /// Fixed RNG seed for reproducible output
    #[arg(long = "seed")]
    seed: Option<u64>,
    /// Draw the first seed from visible pixels only
    #[arg(long = "visible-seed", action = ArgAction::SetTrue)]
    visible_seed: bool,
}

fn build_config(cli: &Cli) -> QuantizerConfig {
    let mut cfg = QuantizerConfig {
        min_clusters: cli.min_clusters,
        max_clusters: cli.max_clusters,
        output_dir: cli.output_dir.clone(),
        output_prefix: cli.prefix.clone(),
        seed: cli.seed,
        ..QuantizerConfig::default()
    };
    if let Some(v) = cli.workers {
        cfg.workers = v.max(1);
    }
    if cli.visible_seed {
        cfg.seed_policy = SeedPolicy::VisibleOnly;
    }
    cfg
}

fn prompt_filename() -> Result<PathBuf> {
    let mut stdout = io::stdout();
    writeln!(stdout, "input filename")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("failed to read filename from stdin")?;
    let filename = line.split_whitespace().next().unwrap_or_default();
    if filename.is_empty() {
        bail!("no input filename given");
    }
    Ok(PathBuf::from(filename))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let input = match cli.input.clone() {
        Some(path) => path,
        None => prompt_filename()?,
    };

    let runner = SweepRunner::new(build_config(&cli)).context("invalid configuration")?;
    let report = runner.run(input).await;

    let failed: Vec<usize> = report.failures().map(|(k, _)| k).collect();
    if !failed.is_empty() {
        bail!("quantization failed for k = {:?}", failed);
    }
    Ok(())
}
