use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use keytrack::{Composition, FrameIndex, KeyframeTrack, PlayerFit, Size};
use tracing_subscriber::EnvFilter;

/// Upper bound on the number of samples a `--from/--to/--step` range may produce.
const MAX_RANGE_SAMPLES: f64 = 10_000_000.0;

#[derive(Parser, Debug)]
#[command(name = "keytrack", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample a keyframe track JSON file.
    Sample(SampleArgs),
    /// Print the clip states of a composition at one frame as JSON.
    Frame(FrameArgs),
    /// Print the scale that fits a stage into a container as JSON.
    Fit(FitArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input track JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Sample time; repeatable.
    #[arg(long = "at", allow_negative_numbers = true)]
    at: Vec<f64>,

    #[command(flatten)]
    range: RangeArgs,
}

#[derive(Args, Debug)]
struct RangeArgs {
    /// First time of a sampled range (inclusive).
    #[arg(long, requires = "to", requires = "step", allow_negative_numbers = true)]
    from: Option<f64>,

    /// Last time of a sampled range (inclusive).
    #[arg(long, requires = "from", allow_negative_numbers = true)]
    to: Option<f64>,

    /// Distance between range samples.
    #[arg(long, requires = "from")]
    step: Option<f64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct FitArgs {
    /// Stage width in pixels.
    #[arg(long)]
    width: f64,

    /// Stage height in pixels.
    #[arg(long)]
    height: f64,

    /// Container width in pixels.
    #[arg(long)]
    container_width: f64,

    /// Container height in pixels.
    #[arg(long)]
    container_height: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Fit(args) => cmd_fit(args),
    }
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let s = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read track '{}'", args.in_path.display()))?;
    let track: KeyframeTrack = serde_json::from_str(&s)
        .with_context(|| format!("parse track '{}'", args.in_path.display()))?;

    let mut times = args.at;
    times.extend(range_times(&args.range)?);
    if times.is_empty() {
        anyhow::bail!("nothing to sample; pass --at or --from/--to/--step");
    }

    let values = track.sample_many(&times)?;
    for (t, v) in times.iter().zip(values) {
        println!("{t} {v}");
    }
    Ok(())
}

fn range_times(range: &RangeArgs) -> anyhow::Result<Vec<f64>> {
    let (Some(from), Some(to), Some(step)) = (range.from, range.to, range.step) else {
        return Ok(Vec::new());
    };
    if !(step.is_finite() && step > 0.0) {
        anyhow::bail!("--step must be a positive number, got {step}");
    }
    if !(from.is_finite() && to.is_finite()) || to < from {
        anyhow::bail!("--from/--to must be finite with from <= to, got {from}..{to}");
    }

    let count = ((to - from) / step).floor();
    if !count.is_finite() || count >= MAX_RANGE_SAMPLES {
        anyhow::bail!(
            "range {from}..{to} with step {step} exceeds {MAX_RANGE_SAMPLES} samples"
        );
    }
    let count = count as u64;
    Ok((0..=count).map(|i| from + (i as f64) * step).collect())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = Composition::from_path(&args.in_path)?;
    let states = comp.sample_frame(FrameIndex(args.frame))?;
    println!("{}", serde_json::to_string_pretty(&states)?);
    Ok(())
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct FitOutput {
    #[serde(flatten)]
    fit: PlayerFit,
    transform: String,
    transform_origin: &'static str,
}

fn cmd_fit(args: FitArgs) -> anyhow::Result<()> {
    let stage = Size::new(args.width, args.height);
    let container = Size::new(args.container_width, args.container_height);
    let fit = PlayerFit::fit(container, stage)?;
    let out = FitOutput {
        transform: format!("scale({})", fit.scale),
        transform_origin: "center",
        fit,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
