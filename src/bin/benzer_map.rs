//! Physical map demo driver.
//!
//! Loads an overlap matrix, prints the overlap graph, its complement and
//! the transitive orientation, then the clique path and the tiling-path
//! label.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `MAP_POLICY`: path to a JSON reconstruction policy (default: built-in)
//! - `RUST_LOG`: Log level filter (default: benzer_map=info)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: pretty)
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin benzer-map -- [fixture.json] [--json]
//! ```
//!
//! The fixture is `{"labels": [...], "matrix": [[0, 1, ...], ...]}`. Without
//! one, the seven-marker demo fixture is used. `--json` prints the
//! reconstructed map as JSON instead of text.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use benzer_map::{MapReconstructor, MatrixFixture, ReconstructionPolicyV1};

/// Seven markers whose overlaps form five maximal cliques.
fn demo_fixture() -> MatrixFixture {
    MatrixFixture {
        labels: ["α", "β", "γ", "δ", "ε", "θ", "λ"].map(String::from).to_vec(),
        matrix: vec![
            vec![1, 1, 0, 1, 0, 1, 0],
            vec![1, 1, 1, 1, 0, 1, 0],
            vec![0, 1, 1, 0, 0, 1, 0],
            vec![1, 1, 0, 1, 1, 0, 0],
            vec![0, 0, 0, 1, 1, 0, 0],
            vec![1, 1, 1, 0, 0, 1, 1],
            vec![0, 0, 0, 0, 0, 1, 1],
        ],
    }
}

/// Initialize the tracing subscriber with JSON or pretty format
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "benzer_map=info".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

fn load_policy() -> Result<ReconstructionPolicyV1, String> {
    match std::env::var("MAP_POLICY") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| format!("cannot read policy {}: {}", path, e))?;
            ReconstructionPolicyV1::from_json(&json)
                .map_err(|e| format!("invalid policy {}: {}", path, e))
        }
        Err(_) => Ok(ReconstructionPolicyV1::default()),
    }
}

fn load_fixture(path: Option<&str>) -> Result<MatrixFixture, String> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read fixture {}: {}", path, e))?;
            MatrixFixture::from_json(&json).map_err(|e| format!("invalid fixture {}: {}", path, e))
        }
        None => Ok(demo_fixture()),
    }
}

fn print_matrix(title: &str, rendered: &str) {
    println!("{}", title);
    println!("{}", rendered);
    println!("{}", "-".repeat(32));
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let fixture_path = args.iter().find(|a| !a.starts_with("--")).map(String::as_str);

    let policy = load_policy()?;
    let fixture = load_fixture(fixture_path)?;
    let overlap = fixture.to_graph().map_err(|e| e.to_string())?;

    info!(
        markers = overlap.node_count(),
        overlaps = overlap.edge_count(),
        policy = %policy.policy_id(),
        "Loaded overlap graph"
    );

    let reconstruction = MapReconstructor::new(policy)
        .reconstruct_with_graphs(&overlap)
        .map_err(|e| {
            if e.is_not_interval_graph() {
                format!("not an interval graph: {}", e)
            } else {
                e.to_string()
            }
        })?;
    let map = &reconstruction.map;

    if as_json {
        let json = serde_json::to_string_pretty(map).map_err(|e| e.to_string())?;
        println!("{}", json);
        return Ok(());
    }

    print_matrix("overlap matrix", &overlap.render_matrix());
    print_matrix("complement", &reconstruction.complement.render_matrix());
    print_matrix("transitive orientation", &reconstruction.oriented.render_matrix());

    for (label, clique) in map.cliques.iter() {
        println!("{} = {}", label, clique);
    }
    let order: Vec<&str> = map.order.iter().map(|l| l.as_str()).collect();
    println!("order: {}", order.join(" "));
    println!("{}", map.genome_label);

    info!(fingerprint = %map.fingerprint, "Reconstruction complete");
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!(error = %message, "Reconstruction failed");
            ExitCode::FAILURE
        }
    }
}
