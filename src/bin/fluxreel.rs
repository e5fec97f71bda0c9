use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fluxreel", version, about = "Evaluate fluxreel kernel functions")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate an easing curve.
    Ease(EaseArgs),
    /// Show a hex color as RGB and HSL.
    Color(ColorArgs),
    /// Convert between seconds, frames and timecodes.
    Time {
        #[command(subcommand)]
        cmd: TimeCommand,
    },
    /// Build or validate a project configuration and print it as JSON.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct EaseArgs {
    /// Curve name, e.g. `cubic_in_out` or `ease_in`.
    curve: Option<String>,

    /// Normalized progress.
    #[arg(allow_negative_numbers = true)]
    t: Option<f64>,

    /// Print `N + 1` evenly spaced samples instead of a single value.
    #[arg(long)]
    samples: Option<u32>,

    /// List every curve name.
    #[arg(long)]
    list: bool,
}

#[derive(Parser, Debug)]
struct ColorArgs {
    /// Hex color, `#rrggbb` or `rrggbb`.
    hex: String,
}

#[derive(Subcommand, Debug)]
enum TimeCommand {
    /// Format seconds as HH:MM:SS.mmm.
    Format { seconds: f64 },
    /// Parse MM:SS or HH:MM:SS into seconds.
    Parse { timecode: String },
    /// Convert a frame count to seconds.
    Frames {
        frames: u64,
        /// Integer frame rate.
        #[arg(long, default_value_t = 30)]
        fps: u32,
    },
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Read the config from a JSON file instead of flags.
    #[arg(long = "in", conflicts_with_all = ["res", "fps", "format"])]
    in_path: Option<PathBuf>,

    /// Resolution preset or WIDTHxHEIGHT.
    #[arg(long, default_value = "1080p")]
    res: String,

    /// Integer frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Output format (mp4, mov, gif, webp, png_sequence).
    #[arg(long, default_value = "mp4")]
    format: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Ease(args) => cmd_ease(args),
        Command::Color(args) => cmd_color(args),
        Command::Time { cmd } => cmd_time(cmd),
        Command::Config(args) => cmd_config(args),
    }
}

fn cmd_ease(args: EaseArgs) -> anyhow::Result<()> {
    if args.list {
        for e in fluxreel::Ease::ALL {
            println!("{e}");
        }
        return Ok(());
    }

    let name = args.curve.context("missing curve name (see --list)")?;
    let curve: fluxreel::Ease = name.parse()?;

    if let Some(n) = args.samples {
        anyhow::ensure!(n > 0, "--samples must be > 0");
        for i in 0..=n {
            let t = f64::from(i) / f64::from(n);
            println!("{t:.4} {:.6}", fluxreel::ease(curve, t));
        }
        return Ok(());
    }

    let t = args.t.context("missing progress value t")?;
    println!("{}", fluxreel::ease(curve, t));
    Ok(())
}

fn cmd_color(args: ColorArgs) -> anyhow::Result<()> {
    let rgb = fluxreel::hex_to_rgb(&args.hex)?;
    let hsl = fluxreel::rgb_to_hsl(rgb);
    println!("hex: {}", fluxreel::rgb_to_hex(rgb));
    println!("rgb: {} {} {}", rgb.r, rgb.g, rgb.b);
    println!("hsl: {:.2} {:.4} {:.4}", hsl.h, hsl.s, hsl.l);
    Ok(())
}

fn cmd_time(cmd: TimeCommand) -> anyhow::Result<()> {
    match cmd {
        TimeCommand::Format { seconds } => println!("{}", fluxreel::format_time(seconds)),
        TimeCommand::Parse { timecode } => println!("{}", fluxreel::parse_time(&timecode)?),
        TimeCommand::Frames { frames, fps } => {
            let fps = fluxreel::Fps::integer(fps)?;
            println!("{}", fluxreel::frames_to_seconds(frames, fps));
        }
    }
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = match &args.in_path {
        Some(path) => fluxreel::ProjectConfig::from_path(path)
            .with_context(|| format!("load project config '{}'", path.display()))?,
        None => {
            let format: fluxreel::OutputFormat = args.format.parse()?;
            fluxreel::ProjectConfig::setup(&args.res, args.fps)?.with_output_format(format)
        }
    };
    println!("{}", cfg.to_json_pretty()?);
    Ok(())
}
