//! Print a small necklace map: scale factor and bead angles.
//!
//! Usage:
//!   cargo run -p cartoviz --example necklace_demo -- [fixed|any] [count]
//!
//! Stage summaries are logged at debug level.

use std::f64::consts::TAU;

use cartoviz::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    SubscriberBuilder::default()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let order = match args.next().as_deref() {
        Some("any") => OrderType::Any,
        _ => OrderType::Fixed,
    };
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(9);

    let regions: RegionMap = draw_ring_of_regions(RadialCfg::default(), count, 6.0, 2025)
        .into_iter()
        .enumerate()
        .map(|(k, p)| Region::new(format!("R{k}"), vec![p]))
        .collect();
    let mut map = NecklaceMap::new(regions);
    *map.parameters_mut() = Parameters::new()
        .with_order_type(order)
        .with_buffer_rad(0.02);

    let id = match map.add_necklace(NecklaceShape::circle(Point2::origin(), 10.0)) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("necklace: {e}");
            return;
        }
    };
    for k in 0..count {
        if let Err(e) = map.add_bead(&format!("R{k}"), 1.0 + (k % 4) as f64, id) {
            eprintln!("bead R{k}: {e}");
        }
    }

    match map.compute() {
        Ok(scale) => {
            println!(
                "order={order:?} scale={scale:.4} max_buffer_rad={:.4}",
                map.max_buffer_rad().unwrap_or(0.0)
            );
            for bead in map.beads() {
                let deg = |a: f64| a * 360.0 / TAU;
                match bead.angle {
                    Some(a) => println!(
                        "  {:>4} r={:.3} angle={:7.2}°",
                        bead.region_id,
                        scale * bead.radius_base,
                        deg(a)
                    ),
                    None => println!("  {:>4} unplaced", bead.region_id),
                }
            }
        }
        Err(e) => eprintln!("compute: {e}"),
    }
}
