//! Reconstructs curves from a small mixed sample and prints them.
//!
//! Usage:
//! ```text
//! cargo run --example combine                            # sorted matcher
//! cargo run --example combine -- --spatial               # spatial-hash matcher
//! RUST_LOG=curvestitch=debug cargo run --example combine
//! ```

use curvestitch::topology::PointTable;
use curvestitch::{CurveStitchError, GenerateCurves, MatchStrategy};

fn main() -> Result<(), CurveStitchError> {
    // Default: WARN for everything, INFO for curvestitch.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("curvestitch=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let strategy = if std::env::args().any(|arg| arg == "--spatial") {
        MatchStrategy::SpatialHash
    } else {
        MatchStrategy::SortedAdjacent
    };

    let segments: Vec<[Vec<f64>; 2]> = [
        [[1.0, 1.0], [2.0, 2.0]],
        [[3.0, 3.0], [4.0, 4.0]],
        [[6.0, 6.0], [7.0, 7.0]],
        [[6.0, 6.0], [5.0, 5.0]],
        [[7.0, 7.0], [8.0, 8.0]],
        [[2.0, 2.0], [3.0, 3.0]],
        [[4.0, 4.0], [5.0, 5.0]],
        [[1.0, 1.0], [8.0, 8.0]],
        [[9.0, 9.0], [10.0, 10.0]],
        [[11.0, 11.0], [10.0, 10.0]],
        [[0.0, 0.0], [9.0, 9.0]],
        [[11.0, 11.0], [12.0, 12.0]],
    ]
    .into_iter()
    .map(|[start, end]: [[f64; 2]; 2]| [start.to_vec(), end.to_vec()])
    .collect();

    let table = PointTable::from_nested(&segments)?;
    let curves = GenerateCurves::from_table(table)
        .with_strategy(strategy)
        .execute()?;

    for (i, curve) in curves.iter().enumerate() {
        let kind = if curve.is_closed() { "closed" } else { "open" };
        let points: Vec<String> = curve
            .points()
            .iter()
            .map(|p| format!("({}, {})", p[0], p[1]))
            .collect();
        println!("curve {i} [{kind}, {} segments]: {}", curve.segment_count(), points.join(" -> "));
    }
    Ok(())
}
