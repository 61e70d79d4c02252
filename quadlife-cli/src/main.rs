use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod github;
mod output;

#[derive(Parser, Debug)]
#[command(name = "quadlife", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download a user's contribution calendar as JSON (requires `GITHUB_TOKEN`).
    Fetch(FetchArgs),
    /// Render the animated Game of Life SVG.
    Render(RenderArgs),
    /// Render one generation as a PNG.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Source {
    /// GitHub login to fetch the calendar for (requires `GITHUB_TOKEN`).
    #[arg(long)]
    user: Option<String>,

    /// Calendar JSON previously saved with `fetch` (GraphQL response shape).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FetchArgs {
    /// GitHub login.
    #[arg(long)]
    user: String,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: Source,

    /// Output SVG path. Defaults to a timestamped file inside `--out-dir`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Directory for the timestamped output file when `--out` is not given.
    #[arg(long, default_value = "build-dir")]
    out_dir: PathBuf,

    /// Number of automaton generations.
    #[arg(long, default_value_t = 90)]
    generations: usize,

    /// Holds of the observed grid before the automaton starts.
    #[arg(long, default_value_t = 3)]
    lead_in: usize,

    /// Holds of the empty grid after the last generation.
    #[arg(long, default_value_t = 4)]
    reset_hold: usize,

    /// Do not end the animation on the observed grid.
    #[arg(long, default_value_t = false)]
    no_loop: bool,

    /// Render config JSON (partial configs are merged over the defaults).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: Source,

    /// Generation to render (0 = observed data).
    #[arg(long, default_value_t = 0)]
    generation: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Pixels per SVG unit.
    #[arg(long, default_value_t = 2.0)]
    scale: f32,

    /// Render config JSON (partial configs are merged over the defaults).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Variables already in the environment win over `.env`.
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }
    match cli.cmd {
        Command::Fetch(args) => cmd_fetch(args),
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn load_calendar(source: &Source) -> anyhow::Result<quadlife::ContributionCalendar> {
    if let Some(path) = &source.in_path {
        return read_calendar_json(path);
    }
    let user = source
        .user
        .as_deref()
        .context("either --user or --in is required")?;
    let token = github::token_from_env()?;
    let body = github::fetch_calendar_json(user, &token)?;
    quadlife::ContributionCalendar::from_response_str(&body)
        .with_context(|| format!("parse contribution calendar for '{user}'"))
}

fn read_calendar_json(path: &Path) -> anyhow::Result<quadlife::ContributionCalendar> {
    let f = File::open(path).with_context(|| format!("open calendar '{}'", path.display()))?;
    let cal = quadlife::ContributionCalendar::from_response_reader(BufReader::new(f))
        .with_context(|| format!("parse calendar JSON '{}'", path.display()))?;
    Ok(cal)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<quadlife::RenderConfig> {
    match path {
        Some(p) => Ok(quadlife::RenderConfig::from_path(p)?),
        None => Ok(quadlife::RenderConfig::default()),
    }
}

fn cmd_fetch(args: FetchArgs) -> anyhow::Result<()> {
    let token = github::token_from_env()?;
    let body = github::fetch_calendar_json(&args.user, &token)?;

    // Refuse to save a response we could not render later.
    let cal = quadlife::ContributionCalendar::from_response_str(&body)
        .with_context(|| format!("parse contribution calendar for '{}'", args.user))?;
    tracing::info!(
        weeks = cal.weeks.len(),
        days = cal.day_count(),
        total = cal.total_contributions,
        "calendar fetched"
    );

    output::write_text(&args.out, &body)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let cal = load_calendar(&args.source)?;

    let opts = quadlife::SequenceOpts {
        lead_in: args.lead_in,
        generations: args.generations,
        reset_hold: args.reset_hold,
        close_loop: !args.no_loop,
    };
    tracing::debug!(days = cal.day_count(), "calendar loaded");
    let seq = quadlife::build_sequence(&cal, opts)?;
    let svg = quadlife::render_svg(&seq, &cfg)?;

    let out = match args.out {
        Some(p) => p,
        None => args
            .out_dir
            .join(output::timestamped_name(chrono::Utc::now().timestamp_millis())),
    };
    output::write_text(&out, &svg)?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let cal = load_calendar(&args.source)?;

    let observed = quadlife::Grid::from_calendar(&cal, quadlife::GridMode::Observed);
    let grid = quadlife::evolve(&observed, args.generation)
        .pop()
        .unwrap_or(observed);

    let svg = quadlife::render_snapshot_svg(&grid, &cfg)?;
    let frame = quadlife::rasterize_svg(&svg, args.scale)?;

    output::commit(&args.out, |tmp| {
        image::save_buffer_with_format(
            tmp,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", args.out.display()))
    })?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
