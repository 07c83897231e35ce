//! sparkswarm: headless runner for the projectile-swarm simulation.
//!
//! Usage:
//!   sparkswarm run --seconds 10 --seed 42
//!   sparkswarm run --settings swarm.json --realtime --snapshot-out final.json

use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use sparkswarm_core::commands::SimCommand;
use sparkswarm_core::config::{SimConfig, SimSettings};
use sparkswarm_core::constants::TICK_RATE;
use sparkswarm_core::state::SimSnapshot;
use sparkswarm_sim::SimEngine;

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "sparkswarm: headless projectile-swarm simulation runner\n\
         \n\
         Commands:\n\
         \n\
         run       Run the simulation and report hit statistics\n\
         \n\
           --settings <path>     Settings JSON (defaults used when omitted)\n\
           --seed <n>            RNG seed (default: 42)\n\
           --seconds <n>         Simulated seconds to run (default: 10)\n\
           --realtime            Pace against the wall clock instead of\n\
                                 running as fast as possible\n\
           --snapshot-out <path> Write the final snapshot as JSON\n\
         \n\
         Examples:\n\
         \n\
           sparkswarm run --seconds 30\n\
           sparkswarm run --settings swarm.json --seed 7 --snapshot-out out.json\n"
    );
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn parse_u64(args: &[String], flag: &str, default: u64) -> u64 {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<u64>() {
                return n;
            }
        }
    }
    default
}

fn parse_f64(args: &[String], flag: &str, default: f64) -> f64 {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<f64>() {
                return n;
            }
        }
    }
    default
}

fn load_settings(path: &PathBuf) -> SimSettings {
    let raw = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    };
    match serde_json::from_str(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", path.display());
            process::exit(1);
        }
    }
}

fn cmd_run(args: &[String]) {
    let settings = match parse_path(args, "--settings") {
        Some(path) => load_settings(&path),
        None => SimSettings::default(),
    };
    let seed = parse_u64(args, "--seed", 42);
    let seconds = parse_f64(args, "--seconds", 10.0);
    if !(seconds > 0.0) {
        eprintln!("Error: --seconds must be positive");
        process::exit(1);
    }
    let realtime = args.iter().any(|a| a == "--realtime");
    let snapshot_out = parse_path(args, "--snapshot-out");

    let config = SimConfig {
        seed,
        settings,
        ..Default::default()
    };
    log::info!(
        "starting: seed={seed}, arena={:?}, cast_rate={}, projectiles/cast={}",
        config.settings.arena,
        config.settings.cast_rate,
        config.settings.projectile_count,
    );

    let mut engine = SimEngine::new(config);
    engine.queue_command(SimCommand::Start);

    let final_snapshot = if realtime {
        run_realtime(&mut engine, seconds)
    } else {
        run_fast(&mut engine, seconds)
    };

    report(&final_snapshot);

    if let Some(path) = snapshot_out {
        let json = match serde_json::to_string_pretty(&final_snapshot) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Error serializing snapshot: {e}");
                process::exit(1);
            }
        };
        if let Err(e) = std::fs::write(&path, json) {
            eprintln!("Error writing {}: {e}", path.display());
            process::exit(1);
        }
        log::info!("snapshot written to {}", path.display());
    }
}

/// Tick as fast as possible for the requested simulated span.
fn run_fast(engine: &mut SimEngine, seconds: f64) -> SimSnapshot {
    let total_ticks = (seconds * TICK_RATE as f64).ceil() as u64;
    let mut snapshot = engine.snapshot();
    for _ in 0..total_ticks {
        snapshot = engine.tick();
        if snapshot.time.tick % TICK_RATE as u64 == 0 {
            log_progress(&snapshot);
        }
    }
    snapshot
}

/// Pace the fixed-step loop against the wall clock.
fn run_realtime(engine: &mut SimEngine, seconds: f64) -> SimSnapshot {
    let started = Instant::now();
    let mut last_frame = started;
    let mut last_report_secs = 0u64;
    let mut snapshot = engine.snapshot();

    while snapshot.time.elapsed_secs < seconds {
        std::thread::sleep(Duration::from_millis(4));
        let now = Instant::now();
        let frame_dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        snapshot = engine.advance(frame_dt);

        let whole_secs = snapshot.time.elapsed_secs as u64;
        if whole_secs > last_report_secs {
            last_report_secs = whole_secs;
            log_progress(&snapshot);
        }
    }
    snapshot
}

fn log_progress(snapshot: &SimSnapshot) {
    log::info!(
        "t={:.1}s live={} hits={} dps={:.1} hit_rate={:.2}/s gated={:.0}%",
        snapshot.time.elapsed_secs,
        snapshot.stats.live_projectiles,
        snapshot.stats.total_hits,
        snapshot.stats.dps,
        snapshot.stats.hit_rate,
        snapshot.stats.cooldown_active_pct,
    );
}

fn report(snapshot: &SimSnapshot) {
    println!(
        "ticks: {}\nsimulated: {:.2}s\ntotal hits: {}\ntotal damage: {:.0}\n\
         hit rate (5s window): {:.2}/s\ndps (5s window): {:.1}\nlive projectiles: {}",
        snapshot.time.tick,
        snapshot.time.elapsed_secs,
        snapshot.stats.total_hits,
        snapshot.stats.total_damage,
        snapshot.stats.hit_rate,
        snapshot.stats.dps,
        snapshot.stats.live_projectiles,
    );
}
