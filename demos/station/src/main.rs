//! station — walk an agent around a synthetic train station.
//!
//! Loads the floor plan and the named locations in the background, replays a
//! short script of dropdown requests (including a few bad ones), then keeps
//! the agent busy with seeded random clicks until the frame budget runs out.
//!
//! ```text
//! cargo run -p station -- [config.toml] [navmesh.json]
//! ```
//!
//! Without a navmesh file the built-in floor plan is used and also written to
//! `output/station/station-navmesh.json` for inspection.  Set `RUST_LOG` to
//! change verbosity (default `info`).

mod layout;

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::time::MissedTickBehavior;
use tracing_subscriber::EnvFilter;

use nav_core::{Frame, NavConfig, point};
use nav_mesh::{GraphNavMesh, MeshGeometry, NavMesh};
use nav_mobility::{CameraPose, PathStore, TickOutcome};
use nav_output::{CsvTraceWriter, TraceObserver};
use nav_request::{LocationMap, NavRequest, RouteSummary};
use nav_sim::{LogObserver, NavObserver, Notice, PendingAsset, SessionBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64 = 7;
const DEFAULT_FRAMES:  u64 = 3_600;
const TRACE_INTERVAL:  u64 = 6;     // one track row every 0.1 s at 60 fps
const PLAYBACK_SPEEDUP: u32 = 10;   // frames are paced 10× faster than real time
const OUTPUT_DIR:      &str = "output/station";

const LOCATIONS_CSV: &str = include_str!("../assets/locations.csv");

/// `(frame, request)` pairs replayed before random clicks take over.
fn script() -> Vec<(u64, NavRequest)> {
    vec![
        // Lands before either asset has been registered.
        (0, NavRequest::locations("Gate A", "Platform 2")),
        (30, NavRequest::Locations { start: Some("Gate A".into()), destination: None }),
        (31, NavRequest::locations("Gate A", "Lost Property")),
        (32, NavRequest::locations("Gate A", "Platform 2")),
        // Superseded half-way.
        (300, NavRequest::locations("Information", "Platform 1")),
        (900, NavRequest::click_from("Gate B", point(12.0, 0.0, 13.0))),
        (1_200, NavRequest::locations("Kiosk", "Platform 3")),
    ]
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

struct StationObserver<W: nav_output::TraceWriter> {
    trace:    TraceObserver<W>,
    log:      LogObserver,
    routes:   usize,
    arrivals: usize,
    failures: usize,
    camera:   Option<CameraPose>,
}

impl<W: nav_output::TraceWriter> StationObserver<W> {
    fn new(trace: TraceObserver<W>) -> Self {
        Self { trace, log: LogObserver, routes: 0, arrivals: 0, failures: 0, camera: None }
    }
}

impl<W: nav_output::TraceWriter> NavObserver for StationObserver<W> {
    fn on_frame_end(&mut self, frame: Frame, elapsed: f64, store: &PathStore, outcome: &TickOutcome) {
        self.log.on_frame_end(frame, elapsed, store, outcome);
        self.trace.on_frame_end(frame, elapsed, store, outcome);
    }

    fn on_camera(&mut self, _frame: Frame, pose: &CameraPose) {
        self.camera = Some(*pose);
    }

    fn on_notice(&mut self, frame: Frame, notice: &Notice) {
        match notice {
            Notice::DestinationReached => self.arrivals += 1,
            n if n.is_failure()        => self.failures += 1,
            _ => {}
        }
        self.log.on_notice(frame, notice);
        self.trace.on_notice(frame, notice);
    }

    fn on_route_installed(&mut self, frame: Frame, summary: &RouteSummary) {
        self.routes += 1;
        self.log.on_route_installed(frame, summary);
    }

    fn on_asset_loaded(&mut self, frame: Frame, asset: &'static str) {
        self.log.on_asset_loaded(frame, asset);
    }

    fn on_locations(&mut self, frame: Frame, locations: &LocationMap) {
        self.trace.on_locations(frame, locations);
    }

    fn on_session_end(&mut self, final_frame: Frame) {
        self.log.on_session_end(final_frame);
        self.trace.on_session_end(final_frame);
    }
}

// ── Asset loading ─────────────────────────────────────────────────────────────

fn load_geometry(navmesh: Option<&Path>) -> Result<MeshGeometry> {
    match navmesh {
        Some(path) => MeshGeometry::from_json_path(path)
            .with_context(|| format!("reading navmesh {}", path.display())),
        None => {
            let geometry = layout::station_geometry();
            let file = std::fs::File::create(Path::new(OUTPUT_DIR).join("station-navmesh.json"))?;
            serde_json::to_writer_pretty(file, &geometry)?;
            Ok(geometry)
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let config_path:  Option<PathBuf> = args.next().map(PathBuf::from);
    let navmesh_path: Option<PathBuf> = args.next().map(PathBuf::from);

    // 1. Config.
    let config = match &config_path {
        Some(path) => NavConfig::from_file(path).with_context(|| format!("loading {}", path.display()))?,
        None => NavConfig {
            agent_start: [1.0, 0.0, 1.0],
            max_frames:  Some(DEFAULT_FRAMES),
            ..NavConfig::default()
        },
    };
    let max_frames = config.max_frames.unwrap_or(DEFAULT_FRAMES);
    tracing::info!(zone = %config.zone, speed = config.speed, max_frames, "station demo starting");
    std::fs::create_dir_all(OUTPUT_DIR)?;

    // 2. Background loads.
    let (mesh_loader, pending_mesh) = PendingAsset::channel();
    tokio::task::spawn_blocking(move || {
        let zone = load_geometry(navmesh_path.as_deref())
            .and_then(|g| GraphNavMesh::create_zone(&g).map_err(anyhow::Error::from));
        mesh_loader.finish(zone.map_err(|e| format!("{e:#}")));
    });

    let (location_loader, pending_locations) = PendingAsset::channel();
    tokio::task::spawn_blocking(move || {
        location_loader.finish(LocationMap::from_csv_reader(Cursor::new(LOCATIONS_CSV)));
    });

    // 3. Session and observers.
    let mut session = SessionBuilder::new(config.clone(), GraphNavMesh::new())
        .pending_zone(pending_mesh)
        .pending_locations(pending_locations)
        .build()?;

    let writer = CsvTraceWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = StationObserver::new(TraceObserver::new(writer, TRACE_INTERVAL));

    // 4. Frame loop.
    let dt = config.frame_secs();
    let mut ticker = tokio::time::interval(Duration::from_secs_f32(dt) / PLAYBACK_SPEEDUP);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut script = script().into_iter().peekable();
    let mut rng = SmallRng::seed_from_u64(SEED);
    let t0 = Instant::now();

    while session.current_frame().0 < max_frames {
        ticker.tick().await;
        let frame = session.current_frame().0;

        while let Some((_, request)) = script.next_if(|(at, _)| *at <= frame) {
            let _ = session.request(&request, &mut obs);
        }

        if script.peek().is_none() && session.store.is_idle() && session.is_mesh_ready() {
            let hit = rng.gen_bool(0.9).then(|| {
                point(
                    rng.gen_range(layout::CONCOURSE_X.0..layout::CONCOURSE_X.1),
                    0.0,
                    rng.gen_range(layout::CONCOURSE_Z.0..layout::CONCOURSE_Z.1),
                )
            });
            let _ = session.request(&NavRequest::Click { start: None, hit }, &mut obs);
        }

        session.frame(dt, &mut obs);
    }
    obs.on_session_end(session.current_frame());

    if let Some(e) = obs.trace.take_error() {
        eprintln!("trace error: {e}");
    }

    // 5. Summary.
    let p = session.store.agent_position();
    println!();
    println!("Session complete in {:.3} s ({} frames, {:.1} s simulated)",
        t0.elapsed().as_secs_f64(), session.current_frame().0, session.clock.elapsed_secs);
    println!("  routes installed : {}", obs.routes);
    println!("  arrivals         : {}", obs.arrivals);
    println!("  failed requests  : {}", obs.failures);
    println!("  agent position   : ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z);
    if let Some(pose) = obs.camera {
        println!("  camera eye       : ({:.2}, {:.2}, {:.2})", pose.eye.x, pose.eye.y, pose.eye.z);
    }
    println!("  trace written to {OUTPUT_DIR}/");

    Ok(())
}
