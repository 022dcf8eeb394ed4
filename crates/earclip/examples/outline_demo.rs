//! Headless walkthrough of the interaction loop.
//!
//! Places the vertices of an arrow-shaped concave outline the way a mouse
//! would, triangulates, and prints the resulting fan along with a timing
//! probe for a larger random outline.

use std::time::Instant;

use earclip::prelude::*;

fn main() {
    let mut session = Session::new();
    // An arrow pointing right; the notch at (40, 60) makes it concave.
    for (x, y) in [
        (20.0, 20.0),
        (120.0, 60.0),
        (20.0, 100.0),
        (40.0, 60.0),
    ] {
        session.add_vertex(x, y);
    }
    session
        .triangulate()
        .expect("arrow outline is simple and must triangulate");

    println!("triangles={}", session.triangles().len());
    for (i, t) in session.triangles().iter().enumerate() {
        println!(
            "  t{i}: ({:.0},{:.0}) ({:.0},{:.0}) ({:.0},{:.0}) area={:.1}",
            t.a.x,
            t.a.y,
            t.b.x,
            t.b.y,
            t.c.x,
            t.c.y,
            t.signed_area().abs()
        );
    }

    // Timing probe on a 256-vertex star outline.
    let cfg = StarCfg {
        vertices: 256,
        ..StarCfg::default()
    };
    let points = draw_outline_star(cfg, ReplayToken { seed: 7, index: 0 });
    let mut outline = VertexLoop::from_points(points);
    let start = Instant::now();
    let tris = triangulate(&mut outline, ClipCfg::default()).expect("star outline triangulates");
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    println!("star_vertices=256 triangles={} time_ms={elapsed_ms:.3}", tris.len());
}
