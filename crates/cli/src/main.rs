use anyhow::Result;
use clap::{Parser, Subcommand};
use earclip::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Headless driver for the ear-clipping core")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate an outline read from a CSV with x,y columns
    Triangulate {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Replay a JSON command script against a fresh session and dump the final state
    Replay {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Sample a random star outline and write it as CSV
    Gen {
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Triangulate { input, out } => triangulate_csv(input, out),
        Action::Replay { input, out } => replay(input, out),
        Action::Gen { vertices, seed, out } => gen(vertices, seed, out),
    }
}

fn triangulate_csv(input: String, out: String) -> Result<()> {
    let points = io::read_points_csv(&input)?;
    tracing::info!(input, vertices = points.len(), "outline_loaded");

    let mut session = Session::new();
    for (x, y) in points {
        session.add_vertex(x, y);
    }
    session.triangulate()?;
    tracing::info!(triangles = session.triangles().len(), out, "triangulated");

    io::write_state_json(&out, &session)
}

fn replay(input: String, out: String) -> Result<()> {
    let text = std::fs::read_to_string(&input)?;
    let script = io::parse_script(&text)?;
    tracing::info!(input, commands = script.len(), "script_loaded");

    let mut session = Session::new();
    for cmd in script {
        io::apply(&mut session, cmd)?;
    }
    tracing::info!(
        vertices = session.vertices().len(),
        triangles = session.triangles().len(),
        out,
        "replayed"
    );

    io::write_state_json(&out, &session)
}

fn gen(vertices: usize, seed: u64, out: String) -> Result<()> {
    let cfg = StarCfg {
        vertices,
        ..StarCfg::default()
    };
    let outline = draw_outline_star(cfg, ReplayToken { seed, index: 0 });
    let points: Vec<(f64, f64)> = outline.iter().map(|p| (p.x, p.y)).collect();
    io::write_points_csv(&out, &points)?;
    tracing::info!(vertices = points.len(), seed, out, "outline_written");
    Ok(())
}
