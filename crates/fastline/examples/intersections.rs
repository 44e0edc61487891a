//! Timing probe for repeated line-line intersection.
//!
//! Purpose
//! - Provide a quick, code-backed data point for raw intersection throughput
//!   on the same fixed pair the Python-era benchmark used.
//!
//! Run: cargo run --release -p fastline --example intersections

use std::time::Instant;

use fastline::{Line, Vec2};

fn main() {
    let l1 = Line::from_points(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0))
        .expect("distinct points");
    let l2 = Line::from_slope_intercept(4.0, -1.0).expect("finite slope");

    let p = l1.intersection(&l2).expect("lines cross");
    println!("{l1}");
    println!("{l2}");
    println!("intersection=({}, {})", p.x, p.y);

    const ITERS: u32 = 1_000_000;
    let start = Instant::now();
    let mut acc = 0.0f64;
    for _ in 0..ITERS {
        if let Some(q) = l1.intersection(&l2) {
            acc += q.x;
        }
    }
    let elapsed = start.elapsed().as_secs_f64();
    println!("iters={ITERS} total_s={elapsed:.4} checksum={acc}");
}
