use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "inkreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export a drawing as a cropped SVG document.
    Svg(SvgArgs),
    /// Export a drawing's reveal animation as a GIF.
    Gif(GifArgs),
}

#[derive(Parser, Debug)]
struct SvgArgs {
    /// Input drawing JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct GifArgs {
    /// Input drawing JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,

    /// Render surface width in pixels.
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Render surface height in pixels.
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Replay duration in seconds (0.1 to 30, one decimal).
    #[arg(long, default_value_t = inkreel::DEFAULT_DURATION_SECS)]
    duration: f64,

    /// Frames per second.
    #[arg(long, default_value_t = inkreel::DEFAULT_FPS)]
    fps: u32,

    /// Reveal all strokes in lockstep instead of one after another.
    #[arg(long)]
    simultaneous: bool,

    /// Replay wobble amplitude in pixels.
    #[arg(long, default_value_t = 0.0)]
    jitter: f64,

    /// Opaque background color (e.g. "#ffffff"); omit for transparency.
    #[arg(long)]
    background: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Gif(args) => cmd_gif(args),
    }
}

fn read_drawing(path: &Path) -> anyhow::Result<inkreel::Drawing> {
    let f = File::open(path).with_context(|| format!("open drawing '{}'", path.display()))?;
    let drawing: inkreel::Drawing =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse drawing JSON")?;
    Ok(drawing)
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let drawing = read_drawing(&args.in_path)?;
    let mut exporter = inkreel::Exporter::new();
    exporter.export_svg(&drawing, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_gif(args: GifArgs) -> anyhow::Result<()> {
    let drawing = read_drawing(&args.in_path)?;

    let canvas = inkreel::Canvas::new(args.width, args.height)?;
    let mut replay = inkreel::ReplayConfig {
        simultaneous: args.simultaneous,
        jitter: args.jitter.max(0.0),
        ..inkreel::ReplayConfig::default()
    };
    replay.set_duration_secs(args.duration);

    let background = args
        .background
        .as_deref()
        .map(inkreel::Rgba8::parse)
        .transpose()?;
    let cfg = inkreel::GifConfig {
        fps: args.fps,
        background,
        wobble_seed: 0,
    };

    let mut exporter = inkreel::Exporter::new();
    let stats = exporter.export_gif(&drawing, canvas, &replay, &cfg, &args.out)?;
    eprintln!(
        "wrote {} ({} frames, {}x{})",
        args.out.display(),
        stats.frames,
        stats.width,
        stats.height
    );
    Ok(())
}
