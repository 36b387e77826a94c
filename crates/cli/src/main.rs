use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

use trigon::fit::FitCfg;
use trigon::tri::rand::{random_triangle_in_box, BoxCfg, ReplayToken};
use trigon::tri::{build_display_query, parse_display_query};
use trigon::{TriCfg, Triangle};

mod report;
mod store;

use store::{JsonFileStore, TriangleStore};

#[derive(Parser)]
#[command(name = "trigon")]
#[command(about = "Triangle measures, classification, and display fitting")]
struct Cmd {
    /// Path of the JSON store for the last triangle and history
    #[arg(long, default_value = "trigon-store.json")]
    store: String,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute and print the full report for a triangle
    Report {
        /// Query string `?a=x,y&b=x,y&c=x,y`; absent keys fall back per-point
        #[arg(long)]
        query: Option<String>,
    },
    /// Draw a seeded random triangle, save it, and print its report
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
    /// Print the stored history, most recent first
    History,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let mut store = JsonFileStore::open(&cmd.store)?;
    match cmd.action {
        Action::Report { query } => report_cmd(&mut store, query),
        Action::Random { seed, index } => random_cmd(&mut store, seed, index),
        Action::History => history_cmd(&store),
    }
}

/// Resolve the working triangle: explicit query beats the stored last value
/// beats the fixed default. Query keys resolve per-point, absent keys taking
/// the default triangle's corresponding vertex.
fn resolve_triangle(store: &dyn TriangleStore, query: Option<&str>) -> Triangle {
    let fallback = store.load().unwrap_or_default();
    match query {
        Some(q) => {
            let pts = parse_display_query(q);
            Triangle::new(
                pts.a.unwrap_or(fallback.a),
                pts.b.unwrap_or(fallback.b),
                pts.c.unwrap_or(fallback.c),
            )
        }
        None => fallback,
    }
}

fn validated(tri: Triangle, cfg: TriCfg) -> Result<Triangle> {
    if !tri.is_finite() {
        bail!("triangle has non-finite coordinates");
    }
    if !tri.is_non_collinear(cfg) {
        bail!("points are collinear; not a triangle");
    }
    Ok(tri)
}

fn print_report(store: &mut dyn TriangleStore, tri: Triangle) -> Result<()> {
    let cfg = TriCfg::default();
    let tri = validated(tri, cfg)?;
    let report = report::build_report(&tri, cfg, FitCfg::default());
    store.save(&tri)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn report_cmd(store: &mut JsonFileStore, query: Option<String>) -> Result<()> {
    let tri = resolve_triangle(store, query.as_deref());
    tracing::info!(query = ?query, "report");
    print_report(store, tri)
}

fn random_cmd(store: &mut JsonFileStore, seed: u64, index: u64) -> Result<()> {
    let tri = random_triangle_in_box(BoxCfg::default(), ReplayToken { seed, index });
    tracing::info!(seed, index, "random");
    print_report(store, tri)
}

fn history_cmd(store: &JsonFileStore) -> Result<()> {
    for tri in store.history() {
        println!("{}", build_display_query(tri.a, tri.b, tri.c));
    }
    Ok(())
}
