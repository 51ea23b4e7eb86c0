use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use argus_view::catalog::{conjunctions_for, sort_by_risk, CatalogSnapshot, FleetOverview, Selection};
use argus_view::format::{
    format_distance, format_probability, format_time_to_tca, status_badge, AlertRow,
};
use argus_view::geometry::{default_phase, generate_orbit_ring, OrbitPlane};
use argus_view::web::{run_server, Config};

#[derive(Parser)]
#[command(name = "argus-view")]
#[command(about = "Orbit visualization geometry for the tracking dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the orbit ring for an altitude and inclination as JSON
    Ring {
        #[arg(long)]
        altitude_km: f64,
        #[arg(long)]
        inclination_deg: f64,
        #[arg(long)]
        segments: Option<usize>,
        #[arg(long)]
        config: Option<String>,
    },
    /// Print the marker position after an elapsed time, e.g. `--elapsed 1m30s`
    Marker {
        #[arg(long)]
        altitude_km: f64,
        #[arg(long)]
        inclination_deg: f64,
        #[arg(long, default_value = "0s")]
        elapsed: String,
        #[arg(long)]
        phase: Option<f64>,
        #[arg(long)]
        config: Option<String>,
    },
    /// Summarize saved satellite and conjunction payloads
    Overview {
        #[arg(long)]
        satellites: PathBuf,
        #[arg(long)]
        conjunctions: PathBuf,
        /// Show the detail panel for one object id
        #[arg(long)]
        select: Option<String>,
    },
    /// Run the geometry HTTP service
    Serve {
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Ring {
            altitude_km,
            inclination_deg,
            segments,
            config,
        } => ring(altitude_km, inclination_deg, segments, config.as_deref()),
        Commands::Marker {
            altitude_km,
            inclination_deg,
            elapsed,
            phase,
            config,
        } => marker(altitude_km, inclination_deg, &elapsed, phase, config.as_deref()),
        Commands::Overview {
            satellites,
            conjunctions,
            select,
        } => overview(&satellites, &conjunctions, select),
        Commands::Serve { config } => serve(config.as_deref()),
    }
}

fn load_config(path: Option<&str>) -> Option<Config> {
    match Config::load(path) {
        Ok(c) => Some(c),
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            None
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn ring(
    altitude_km: f64,
    inclination_deg: f64,
    segments: Option<usize>,
    config_path: Option<&str>,
) -> ExitCode {
    let Some(config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };
    let scale = match config.scene.scale() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Invalid scene config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let segments = segments.unwrap_or(config.scene.ring_segments);

    match generate_orbit_ring(
        altitude_km,
        inclination_deg,
        segments,
        scale.body_radius,
        scale.scale,
    ) {
        Ok(points) => print_json(&points),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn marker(
    altitude_km: f64,
    inclination_deg: f64,
    elapsed: &str,
    phase: Option<f64>,
    config_path: Option<&str>,
) -> ExitCode {
    let elapsed_seconds = match humantime::parse_duration(elapsed.trim()) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => {
            eprintln!("Invalid --elapsed '{}': {}", elapsed, e);
            return ExitCode::FAILURE;
        }
    };
    let Some(config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };

    let result = config.scene.scale().and_then(|scale| {
        let timing = config.scene.timing()?;
        let plane = OrbitPlane::new(altitude_km, inclination_deg, scale)?;
        let phase = phase.unwrap_or_else(|| default_phase(altitude_km));
        let angle = plane.marker_angle(phase, elapsed_seconds, &timing)?;
        Ok((plane.point_at(angle), angle, timing.period(altitude_km)))
    });

    match result {
        Ok((position, angle, period_s)) => print_json(&serde_json::json!({
            "position": position,
            "angle": angle,
            "period_s": period_s,
            "elapsed_seconds": elapsed_seconds,
        })),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn overview(
    satellites: &Path,
    conjunctions: &Path,
    select: Option<String>,
) -> ExitCode {
    let mut snapshot = match CatalogSnapshot::load(satellites, conjunctions) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading catalog: {}", e);
            return ExitCode::FAILURE;
        }
    };
    sort_by_risk(&mut snapshot.conjunctions);

    let overview = FleetOverview::from_snapshot(&snapshot);
    println!(
        "Tracked objects: {} ({} active, {} inactive)",
        overview.total_objects, overview.active_objects, overview.inactive_objects
    );
    println!("Active conjunctions: {}", overview.total_conjunctions);
    println!(
        "High-risk events: {} ({})",
        overview.high_risk_conjunctions,
        overview.status_label()
    );

    for row in snapshot.conjunctions.iter().map(AlertRow::from_event) {
        println!(
            "  {} {:<6} {} vs {}  Pc {}  miss {}  TCA in {}",
            row.badge,
            row.risk_level,
            row.primary_name,
            row.secondary_name,
            row.probability,
            row.miss_distance,
            row.time_to_tca
        );
    }

    let mut selection = Selection::default();
    if let Some(id) = select {
        selection.select(id);
    }
    if let Some(id) = selection.selected_id() {
        let Some(obj) = selection.resolve(&snapshot) else {
            eprintln!("Object not found: {}", id);
            return ExitCode::FAILURE;
        };
        println!();
        println!("{} {} (NORAD {})", status_badge(obj.status), obj.name, obj.norad_id);
        println!("  Altitude:    {} km", obj.altitude_km);
        println!("  Inclination: {}°", obj.inclination_deg);
        println!("  Operator:    {}", obj.operator);
        println!("  Country:     {}", obj.country);
        if obj.has_propulsion {
            println!("  [M] Maneuverable");
        }
        let upcoming = conjunctions_for(&snapshot.conjunctions, &obj.id);
        println!("  Upcoming conjunctions: {}", upcoming.len());
        for conj in upcoming {
            println!(
                "    {} {}  Pc {}  miss {}  TCA in {}",
                conj.risk_level,
                conj.secondary_name,
                format_probability(conj.probability_collision),
                format_distance(conj.miss_distance_m),
                format_time_to_tca(conj.time_to_tca_hours)
            );
        }
    }

    ExitCode::SUCCESS
}

fn serve(config_path: Option<&str>) -> ExitCode {
    let Some(config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}
