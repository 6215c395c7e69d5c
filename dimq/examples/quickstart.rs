//! Minimal end-to-end example: compose derived dimensions from base ones.

use dimq::{Meters, MetersPerSecond, Seconds, SquareMeters};

fn main() {
    let d = Meters::new(10.0) + Meters::new(5.0);
    println!("total distance: {d}");

    let area: SquareMeters = Meters::new(10.0) * Meters::new(5.0);
    println!("area: {area}");

    let v: MetersPerSecond = Meters::new(10.0) / Seconds::new(2.0);
    println!("velocity: {v}");
}
