//! Free-fall worked example: every intermediate carries its dimension.

use dimq::{Joules, Kilograms, Meters, MetersPerSecond, MetersPerSecondSquared, Newtons, Seconds};

fn main() {
    let g = MetersPerSecondSquared::new(9.81);
    let mass = Kilograms::new(70.0);
    let drop = Meters::new(20.0);

    let weight: Newtons = mass * g;
    println!("weight: {weight}");

    // v = sqrt(2·g·h) — the root halves every exponent, landing on velocity.
    let impact: MetersPerSecond = (2.0 * g * drop).sqrt();
    println!("impact velocity: {impact}");

    let fall_time: Seconds = impact / g;
    println!("time to impact: {fall_time}");

    let energy: Joules = weight * drop;
    println!("energy at impact: {energy}");
}
