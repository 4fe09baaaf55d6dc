use std::io::BufRead as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "curvecast", version)]
struct Cli {
    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an animation to MP4 (requires `ffmpeg` on PATH) or to a PNG sequence.
    Render(RenderArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Write a preset animation JSON for a curve family.
    Init(InitArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input animation JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output MP4 path.
    #[arg(long, required_unless_present = "png_dir")]
    out: Option<PathBuf>,

    /// Write one PNG per frame into this directory instead of encoding a video.
    #[arg(long, conflicts_with = "out")]
    png_dir: Option<PathBuf>,

    /// Refuse to replace an existing `--out` file.
    #[arg(long, conflicts_with = "png_dir")]
    no_overwrite: bool,

    /// Override the run length in frames.
    #[arg(long)]
    frames: Option<u64>,

    /// Clear and replay the whole path every frame.
    #[arg(long, default_value_t = false)]
    full_redraw: bool,

    /// Sample the curve on a rayon thread pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames sampled per batch.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input animation JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Curve family name (e.g. `rose`, `epicycloid`).
    #[arg(long)]
    family: String,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Init(args) => cmd_init(args),
    }
}

fn load(path: &std::path::Path) -> anyhow::Result<curvecast::Animation> {
    let anim = curvecast::Animation::from_path(path)
        .with_context(|| format!("load animation '{}'", path.display()))?;
    anim.validate()
        .with_context(|| format!("validate animation '{}'", path.display()))?;
    Ok(anim)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut anim = load(&args.in_path)?;
    if let Some(n) = args.frames {
        anim.render.frame_count = Some(n);
        anim.render.duration_seconds = None;
    }
    if args.full_redraw {
        anim.render.draw_mode = curvecast::DrawMode::FullRedraw;
    }

    let opts = curvecast::RenderSessionOpts {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let sess = curvecast::RenderSession::from_animation(&anim, opts)?;

    let cancel = curvecast::CancelToken::new();
    spawn_quit_watcher(cancel.clone());

    let (stats, target) = match (&args.png_dir, &args.out) {
        (Some(dir), _) => {
            let mut sink = curvecast::PngSequenceSink::new(dir);
            (sess.render(&mut sink, &cancel)?, dir.clone())
        }
        (None, Some(out)) => {
            let mut sink = curvecast::FfmpegSink::new(curvecast::FfmpegSinkOpts {
                out_path: out.clone(),
                overwrite: !args.no_overwrite,
                codec: "libx264".to_owned(),
            });
            (sess.render(&mut sink, &cancel)?, out.clone())
        }
        (None, None) => anyhow::bail!("either --out or --png-dir is required"),
    };

    if stats.cancelled {
        eprintln!(
            "cancelled after {}/{} frames, wrote {}",
            stats.frames_emitted,
            stats.frames_total,
            target.display()
        );
    } else {
        eprintln!("wrote {}", target.display());
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let anim = load(&args.in_path)?;
    let sess = curvecast::RenderSession::from_animation(
        &anim,
        curvecast::RenderSessionOpts::default(),
    )?;
    let frame = sess.render_frame(curvecast::FrameIndex(args.frame))?;
    curvecast::write_png(&args.out, &frame)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    let Some(curve) = curvecast::CurveFamily::preset(&args.family) else {
        let names: Vec<&str> = curvecast::CurveFamily::presets()
            .iter()
            .map(|c| c.name())
            .collect();
        anyhow::bail!(
            "unknown curve family '{}' (available: {})",
            args.family,
            names.join(", ")
        );
    };
    curvecast::Animation::preset(curve)
        .to_path(&args.out)
        .with_context(|| format!("write animation '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Cancel the render when a line reading `q` arrives on stdin.
fn spawn_quit_watcher(cancel: curvecast::CancelToken) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().eq_ignore_ascii_case("q") {
                tracing::info!("quit requested");
                cancel.cancel();
                break;
            }
        }
    });
}
