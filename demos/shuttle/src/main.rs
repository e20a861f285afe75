//! shuttle — drives the route announcer along a campus shuttle line.
//!
//! Three ways to move the vehicle:
//!
//! - `demo`: sweep the progress slider from one end of the line to the other.
//! - `sim`:  poll a simulated vehicle that shuttles back and forth.
//! - `gps`:  poll a live GPS bridge at `GET {url}/gpsdata`.
//!
//! Announcements are printed, and optionally logged to CSV (`--log`) and
//! resolved to audio clips (`--clips`).  `RUST_LOG=debug` shows every
//! threshold crossing.

mod announcer;

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use ra_core::Direction;
use ra_progress::{ProgressTracker, TrackerConfig};
use ra_route::{RouteModel, default_route, load_route_csv};
use ra_session::{ClipSink, CsvAnnouncementLog, Driver, Session, SourceMode};
use ra_source::{HttpFetcher, PollConfig, PositionFetcher, SimulatedSource};

use announcer::{Announcer, Player, print_clip};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Demo,
    Sim,
    Gps,
}

#[derive(Parser)]
#[command(name = "shuttle", about = "Proximity announcements for a shuttle route")]
struct Cli {
    /// Where positions come from.
    #[arg(long, value_enum, default_value_t = Mode::Demo)]
    mode: Mode,

    /// Stops CSV (`name,lat,lon`).  Requires --waypoints.
    #[arg(long, requires = "waypoints")]
    stops: Option<PathBuf>,

    /// Waypoints CSV (`lat,lon`).  Requires --stops.
    #[arg(long, requires = "stops")]
    waypoints: Option<PathBuf>,

    /// Initial direction of travel (AtoC or CtoA).
    #[arg(long, default_value_t = Direction::AtoC)]
    direction: Direction,

    /// Arrival radius, metres.
    #[arg(long, default_value_t = 30.0)]
    near: f64,

    /// Approaching radius, metres.
    #[arg(long, default_value_t = 100.0)]
    far: f64,

    /// Slider step per reading in demo and sim modes (fraction of the path).
    #[arg(long, default_value_t = 0.01)]
    step: f64,

    /// Turn around automatically at the end of the line.
    #[arg(long)]
    auto_reverse: bool,

    /// GPS bridge base URL (gps mode).
    #[arg(long, default_value = HttpFetcher::DEFAULT_BASE)]
    url: String,

    /// Poll interval, milliseconds (gps and sim modes).
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    /// Per-request timeout, milliseconds (gps mode).
    #[arg(long, default_value_t = 800)]
    timeout_ms: u64,

    /// Stop after this many poll readings (gps and sim modes).  Runs until
    /// Ctrl-C when omitted.
    #[arg(long)]
    polls: Option<u64>,

    /// Simulated GPS noise, metres per axis (sim mode).
    #[arg(long, default_value_t = 0.0)]
    jitter: f64,

    /// Probability of a simulated "no fix" reading (sim mode).
    #[arg(long, default_value_t = 0.0)]
    dropout: f64,

    /// Seed for simulated noise (sim mode).
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Append every announcement to this CSV file.
    #[arg(long)]
    log: Option<PathBuf>,

    /// Directory of announcement clips named by clip key (`100B.mp3`, ...).
    #[arg(long)]
    clips: Option<PathBuf>,
}

// ── main ──────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let route = load_route(&cli)?;
    println!("=== shuttle — route announcer ===");
    println!(
        "Route:  {} stops ({})  |  {:.0} m  |  mode: {:?}",
        route.stop_count(),
        route.stops().iter().map(|s| s.name.as_str()).collect::<Vec<_>>().join(" - "),
        route.length_m(),
        cli.mode,
    );
    println!();

    let config = TrackerConfig { near_m: cli.near, far_m: cli.far };
    let tracker = ProgressTracker::new(route.clone(), config).context("invalid radii")?;
    let mut session = Session::new(tracker);

    let csv = cli.log.as_deref().map(CsvAnnouncementLog::<File>::create).transpose()?;
    let clips = cli.clips.clone().map(|dir| ClipSink::new(dir, print_clip as Player));
    let mut announcer = Announcer::new(csv, clips);

    session.start_route(cli.direction, &mut announcer);

    match cli.mode {
        Mode::Demo => run_demo(&cli, &mut session, &mut announcer)?,
        Mode::Sim => {
            let source = SimulatedSource::new(route, cli.step)
                .jitter(cli.jitter, cli.seed)
                .dropout(cli.dropout);
            session = run_polling(&cli, session, source, &mut announcer).await?;
        }
        Mode::Gps => {
            let fetcher = HttpFetcher::new(&cli.url, Duration::from_millis(cli.timeout_ms))?;
            println!("Polling {} every {} ms", fetcher.url(), cli.interval_ms);
            session = run_polling(&cli, session, fetcher, &mut announcer).await?;
        }
    }

    announcer.finish()?;

    println!();
    println!("Announcements: {}", announcer.count);
    println!("Direction:     {}", session.direction());
    if let Some(line) = session.status_line() {
        println!("Status:        {line}");
    }
    if let Some(path) = &cli.log {
        println!("Log:           {}", path.display());
    }
    Ok(())
}

fn load_route(cli: &Cli) -> Result<RouteModel> {
    match (&cli.stops, &cli.waypoints) {
        (Some(stops), Some(waypoints)) => load_route_csv(stops, waypoints)
            .with_context(|| format!("loading route from {} and {}", stops.display(), waypoints.display())),
        (None, None) => Ok(default_route()),
        _ => bail!("--stops and --waypoints must be given together"),
    }
}

// ── Demo mode ─────────────────────────────────────────────────────────────────

/// Sweep the slider across the line, and back again with `--auto-reverse`.
fn run_demo(cli: &Cli, session: &mut Session, announcer: &mut Announcer) -> Result<()> {
    session.set_mode(SourceMode::Demo);

    let steps = (1.0 / cli.step.abs().clamp(1e-4, 1.0)).ceil() as u64;
    let legs = if cli.auto_reverse { 2 } else { 1 };

    for _ in 0..legs {
        // The slider runs 0 → 1 along the canonical AtoC order.
        let forward = session.direction() == Direction::AtoC;
        for i in 0..=steps {
            let f = (i as f64 / steps as f64).min(1.0);
            let fraction = if forward { f } else { 1.0 - f };
            if let Some(outcome) = session.set_fraction(fraction, announcer)? {
                if !outcome.events.is_empty() {
                    if let Some(line) = session.status_line() {
                        println!("  [{:>5.1}%] {line}", fraction * 100.0);
                    }
                }
            }
        }
        if cli.auto_reverse && !session.reverse(announcer)? {
            log::warn!("sweep ended away from the terminal stop; not reversing");
            break;
        }
    }
    Ok(())
}

// ── Polling modes ─────────────────────────────────────────────────────────────

async fn run_polling<F: PositionFetcher + Clone>(
    cli:       &Cli,
    session:   Session,
    fetcher:   F,
    announcer: &mut Announcer,
) -> Result<Session> {
    let poll = PollConfig { interval: Duration::from_millis(cli.interval_ms) };
    let mut driver = Driver::new(session, fetcher, poll);
    driver.set_mode(SourceMode::Gps)?;

    let mut readings = 0u64;
    loop {
        if cli.polls.is_some_and(|n| readings >= n) {
            break;
        }
        let event = tokio::select! {
            event = driver.next_poll(announcer) => event,
            _ = tokio::signal::ctrl_c() => {
                println!("interrupted");
                break;
            }
        };
        let Some(event) = event else { break };
        readings += 1;
        log::trace!("poll #{readings}: {event:?}");

        if cli.auto_reverse && driver.session().can_reverse() {
            driver.session_mut().reverse(announcer)?;
        }
    }

    // Leaving GPS mode cancels the poll task before the session is handed back.
    driver.set_mode(SourceMode::Demo)?;
    Ok(driver.into_session())
}
