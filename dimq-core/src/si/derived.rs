//! Derived dimensions and their quantity aliases.
//!
//! Each alias spells out its exponent vector directly; nothing here is
//! nominal. `Newtons` and a hand-built `Quantity<Dim<One, One, NegTwo>>`
//! are one and the same type.
//!
//! ```rust
//! use dimq_core::si::{Meters, Seconds, MetersPerSecond};
//!
//! let v: MetersPerSecond = Meters::new(10.0) / Seconds::new(2.0);
//! assert_eq!(v.value(), 5.0);
//! ```

use crate::dimension::{Dim, Dimensionless};
use crate::quantity::Quantity;
use crate::ratio::{NegOne, NegThree, NegTwo, One, Three, Two, Zero};

/// Velocity, L¹T⁻¹.
pub type Velocity = Dim<One, Zero, NegOne>;
/// Acceleration, L¹T⁻².
pub type Acceleration = Dim<One, Zero, NegTwo>;
/// Area, L².
pub type Area = Dim<Two>;
/// Volume, L³.
pub type Volume = Dim<Three>;
/// Force, L¹M¹T⁻².
pub type Force = Dim<One, One, NegTwo>;
/// Energy, L²M¹T⁻².
pub type Energy = Dim<Two, One, NegTwo>;
/// Power, L²M¹T⁻³.
pub type Power = Dim<Two, One, NegThree>;
/// Frequency, T⁻¹.
pub type Frequency = Dim<Zero, Zero, NegOne>;
/// Electric charge, T¹I¹.
pub type Charge = Dim<Zero, Zero, One, One>;

/// A velocity in metres per second.
pub type MetersPerSecond = Quantity<Velocity>;
/// An acceleration in metres per second squared.
pub type MetersPerSecondSquared = Quantity<Acceleration>;
/// An area in square metres.
pub type SquareMeters = Quantity<Area>;
/// A volume in cubic metres.
pub type CubicMeters = Quantity<Volume>;
/// A force in newtons.
pub type Newtons = Quantity<Force>;
/// An energy in joules.
pub type Joules = Quantity<Energy>;
/// A power in watts.
pub type Watts = Quantity<Power>;
/// A frequency in hertz.
pub type Hertz = Quantity<Frequency>;
/// An electric charge in coulombs.
pub type Coulombs = Quantity<Charge>;
/// A dimensionless quantity.
pub type Scalar = Quantity<Dimensionless>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::si::base::{Amperes, Kilograms, Meters, Seconds};
    use approx::assert_relative_eq;

    // ─────────────────────────────────────────────────────────────────────────
    // Derived dimensions fall out of base arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn velocity_from_length_over_time() {
        let v: MetersPerSecond = Meters::new(10.0) / Seconds::new(2.0);
        assert_eq!(v.value(), 5.0);
    }

    #[test]
    fn acceleration_from_velocity_over_time() {
        let v: MetersPerSecond = Meters::new(10.0) / Seconds::new(2.0);
        let a: MetersPerSecondSquared = v / Seconds::new(2.5);
        assert_eq!(a.value(), 2.0);
    }

    #[test]
    fn area_and_volume_from_lengths() {
        let a: SquareMeters = Meters::new(10.0) * Meters::new(5.0);
        assert_eq!(a.value(), 50.0);
        let v: CubicMeters = a * Meters::new(2.0);
        assert_eq!(v.value(), 100.0);
    }

    #[test]
    fn force_energy_power_chain() {
        let f: Newtons = Kilograms::new(70.0) * MetersPerSecondSquared::new(9.81);
        assert_relative_eq!(f.value(), 686.7, max_relative = 1e-12);

        let e: Joules = f * Meters::new(2.0);
        assert_relative_eq!(e.value(), 1373.4, max_relative = 1e-12);

        let p: Watts = e / Seconds::new(10.0);
        assert_relative_eq!(p.value(), 137.34, max_relative = 1e-12);
    }

    #[test]
    fn charge_from_current_times_time() {
        let q: Coulombs = Amperes::new(1.5) * Seconds::new(4.0);
        assert_eq!(q.value(), 6.0);
    }

    #[test]
    fn frequency_is_reciprocal_time() {
        let f: Hertz = Seconds::new(0.1).recip();
        assert_relative_eq!(f.value(), 10.0, max_relative = 1e-12);
    }

    #[test]
    fn scalar_ratio_behaves_like_a_number() {
        let r: Scalar = Meters::new(3.0) / Meters::new(4.0);
        assert!(r == 0.75);
    }
}
