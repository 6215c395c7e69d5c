//! Integration-level smoke tests for the `dimq` facade crate.

use dimq::*;

use approx::assert_relative_eq;

// ─────────────────────────────────────────────────────────────────────────────
// The seeded end-to-end scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn adding_lengths() {
    let d: Meters = Meters::new(10.0) + Meters::new(5.0);
    assert_eq!(d.value(), 15.0);
}

#[test]
fn subtracting_lengths() {
    let d: Meters = Meters::new(10.0) - Meters::new(5.0);
    assert_eq!(d.value(), 5.0);
}

#[test]
fn multiplying_lengths_gives_area() {
    let a: SquareMeters = Meters::new(10.0) * Meters::new(5.0);
    assert_eq!(a.value(), 50.0);
}

#[test]
fn dividing_length_by_time_gives_velocity() {
    let v: MetersPerSecond = Meters::new(10.0) / Seconds::new(2.0);
    assert_eq!(v.value(), 5.0);
}

#[test]
fn weight_of_seventy_kilograms() {
    let g = MetersPerSecondSquared::new(9.81);
    let f: Newtons = Kilograms::new(70.0) * g;
    assert_relative_eq!(f.value(), 686.7, max_relative = 1e-12);
}

#[test]
fn dimensionless_factor_halves_a_length() {
    let half: Scalar = Scalar::new(0.5);
    let d: Meters = Meters::new(10.0) * half;
    assert_eq!(d.value(), 5.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Worked physics chains
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn braking_distance() {
    // v² / (2·a): dimension works out to a plain length.
    let v = MetersPerSecond::new(30.0);
    let a = MetersPerSecondSquared::new(6.0);
    let d: Meters = v * v / (2.0 * a);
    assert_relative_eq!(d.value(), 75.0, max_relative = 1e-12);
}

#[test]
fn kinetic_energy() {
    // E = ½·m·v²
    let m = Kilograms::new(80.0);
    let v = MetersPerSecond::new(10.0);
    let e: Joules = m * v * v * 0.5;
    assert_relative_eq!(e.value(), 4000.0, max_relative = 1e-12);
}

#[test]
fn power_from_work_over_time() {
    let f: Newtons = Kilograms::new(10.0) * MetersPerSecondSquared::new(9.81);
    let work: Joules = f * Meters::new(5.0);
    let p: Watts = work / Seconds::new(2.0);
    assert_relative_eq!(p.value(), 245.25, max_relative = 1e-12);
}

#[test]
fn side_of_a_square_plot() {
    let plot: SquareMeters = Meters::new(30.0) * Meters::new(120.0);
    let side: Meters = plot.sqrt();
    assert_relative_eq!(side.value(), 60.0, max_relative = 1e-12);
}

#[test]
fn ohmic_heating_uses_the_current_axis() {
    // Charge = I·t, and P·t = E, exercising all four base axes together:
    // E / (I·t) has the dimension of electric potential.
    let q: Coulombs = Amperes::new(2.0) * Seconds::new(3.0);
    assert_eq!(q.value(), 6.0);

    let e: Joules = Watts::new(12.0) * Seconds::new(3.0);
    let volts = e / q;
    assert_relative_eq!(volts.value(), 6.0, max_relative = 1e-12);
}

// ─────────────────────────────────────────────────────────────────────────────
// Structural typing of aliases
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn aliases_are_structural() {
    // A hertz and an inverse second are the same type, so a function
    // accepting one accepts the other.
    fn takes_frequency(f: Hertz) -> f64 {
        f.value()
    }

    let inverse_second = Seconds::new(0.25).recip();
    assert_eq!(takes_frequency(inverse_second), 4.0);
}

#[test]
fn unit_constants_compose() {
    let d = 10.0 * M;
    let t = 2.0 * S;
    let v: MetersPerSecond = d / t;
    assert_eq!(v.value(), 5.0);
}
