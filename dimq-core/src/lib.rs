//! Core type system for compile-time dimensional analysis.
//!
//! `dimq-core` attaches a *dimension vector* — one rational exponent per
//! base dimension, in the fixed order ⟨length, mass, time, current⟩ — to a
//! numeric value, entirely at the type level:
//!
//! - A dimension is a [`Dim`] over type-level rationals ([`ratio::Ratio`]).
//! - A value tagged with a dimension is a [`Quantity<D, S>`], backed by an
//!   `f64` unless another scalar type is chosen.
//! - Arithmetic propagates dimensions through a small compile-time algebra
//!   ([`DimMul`], [`DimDiv`], [`DimPow`], [`DimInv`]); exponents are always
//!   normalized to lowest terms, so type equality *is* dimensional equality.
//!
//! Most users should depend on `dimq` (the facade crate) unless they need
//! direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of dimensionally inconsistent arithmetic: a
//!   successful build is a proof that no reached expression adds metres to
//!   seconds.
//! - Zero runtime overhead: after optimization a quantity is bit-identical
//!   to its scalar. There is nothing to initialize, open, or close.
//! - Closure under multiplication, division and rational powers: the square
//!   root of an area is a length, with no new names required.
//!
//! # What this crate does not try to solve
//!
//! - Unit conversion: all quantities share one coherent base system. There
//!   are no scaled units (no kilometres) and no affine scales (no Celsius).
//! - Parsing or pretty-printing of unit expressions; `Display` output is
//!   diagnostic only.
//! - Numerical robustness: overflow, division by zero and NaN behave
//!   exactly as they do for the underlying scalar.
//!
//! # Quick start
//!
//! ```rust
//! use dimq_core::si::{Meters, Seconds, MetersPerSecond, SquareMeters};
//!
//! let d = Meters::new(10.0) + Meters::new(5.0);
//! assert_eq!(d.value(), 15.0);
//!
//! let a: SquareMeters = Meters::new(10.0) * Meters::new(5.0);
//! assert_eq!(a.value(), 50.0);
//!
//! let v: MetersPerSecond = Meters::new(10.0) / Seconds::new(2.0);
//! assert_eq!(v.value(), 5.0);
//! ```
//!
//! # Dimensional mistakes fail to compile
//!
//! Adding a length to a time is ill-formed:
//!
//! ```compile_fail
//! use dimq_core::si::{Meters, Seconds};
//!
//! let _ = Meters::new(10.0) + Seconds::new(2.0); // cannot add L to T
//! ```
//!
//! A velocity cannot be bound as a length:
//!
//! ```compile_fail
//! use dimq_core::si::{Meters, Seconds};
//!
//! let _v: Meters = Meters::new(10.0) / Seconds::new(2.0); // L/T is not L
//! ```
//!
//! Ordering across dimensions is ill-formed too:
//!
//! ```compile_fail
//! use dimq_core::si::{Kilograms, Newtons};
//!
//! let _ = Newtons::new(1.0) < Kilograms::new(1.0); // force vs mass
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `dimq-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! dimq-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in
//! `core` (roots and powers) is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for [`Quantity`]; serialization is the
//!   raw scalar value only. Dimensions have no on-wire representation;
//!   embedders that need one must tag it out-of-band.
//!
//! # Panics and errors
//!
//! This crate defines no error type and returns no `Result`. Dimensional
//! mismatch is a *build* failure, not a value; scalar arithmetic follows
//! IEEE-754 (NaN and infinities propagate) and never panics on its own.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod dimension;
pub mod quantity;
pub mod ratio;
pub mod si;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{
    Dim, DimDiv, DimInv, DimInverse, DimMul, DimPow, DimPower, DimProduct, DimQuotient, Dimension,
    Dimensionless,
};
pub use quantity::Quantity;
pub use ratio::{Ratio, Rational};

/// Re-exported so downstream code can name exponents (`P2`, `U3`, …)
/// without taking its own dependency.
pub use typenum;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::si::*;
    use approx::assert_relative_eq;

    /// Asserts at compile time that two quantities carry the same dimension.
    fn same_dimension<D: Dimension, S>(_: &Quantity<D, S>, _: &Quantity<D, S>) {}

    // ─────────────────────────────────────────────────────────────────────────
    // Algebraic laws, checked over several dimension triples
    // ─────────────────────────────────────────────────────────────────────────

    macro_rules! check_group_laws {
        ($($name:ident: ($a:ty, $b:ty, $c:ty);)+) => {$(
            #[test]
            fn $name() {
                let a = Quantity::<$a>::new(2.0);
                let b = Quantity::<$b>::new(3.0);
                let c = Quantity::<$c>::new(5.0);
                let u = Scalar::new(1.0);

                // Associativity and commutativity of the product.
                same_dimension(&((a * b) * c), &(a * (b * c)));
                same_dimension(&(a * b), &(b * a));

                // The dimensionless vector is the identity.
                same_dimension(&(a * u), &a);

                // Every dimension has an inverse.
                let ratio = a / a;
                same_dimension(&ratio, &u);

                // Addition within one dimension distributes through the
                // product: (a + a') * c has the dimension of a * c.
                let a2 = Quantity::<$a>::new(7.0);
                same_dimension(&((a + a2) * c), &(a * c));
            }
        )+};
    }

    check_group_laws! {
        laws_base_dims: (Length, Mass, Time);
        laws_derived_dims: (Velocity, Force, Area);
        laws_mixed_dims: (Length, Frequency, Energy);
        laws_degenerate_dims: (Dimensionless, Time, Dimensionless);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // End-to-end scenarios
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn meter_addition() {
        let d: Meters = Meters::new(10.0) + Meters::new(5.0);
        assert_eq!(d.value(), 15.0);
    }

    #[test]
    fn meter_subtraction() {
        let d: Meters = Meters::new(10.0) - Meters::new(5.0);
        assert_eq!(d.value(), 5.0);
    }

    #[test]
    fn meters_multiply_into_area() {
        let a: SquareMeters = Meters::new(10.0) * Meters::new(5.0);
        assert_eq!(a.value(), 50.0);
    }

    #[test]
    fn meters_over_seconds_into_velocity() {
        let v: MetersPerSecond = Meters::new(10.0) / Seconds::new(2.0);
        assert_eq!(v.value(), 5.0);
    }

    #[test]
    fn mass_times_acceleration_into_force() {
        let f: Newtons = Kilograms::new(70.0) * MetersPerSecondSquared::new(9.81);
        assert_relative_eq!(f.value(), 686.7, max_relative = 1e-12);
    }

    #[test]
    fn dimensionless_scaling() {
        let half = Scalar::new(0.5);
        let d: Meters = Meters::new(10.0) * half;
        assert_eq!(d.value(), 5.0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Canonical form of every producible exponent
    // ─────────────────────────────────────────────────────────────────────────

    fn assert_canonical<D: Dimension>() {
        fn axis<R: Rational>() {
            let (num, den) = (R::NUM, R::DEN);
            assert!(den > 0);
            let gcd = {
                let (mut a, mut b) = (num.unsigned_abs(), den);
                while b != 0 {
                    let t = a % b;
                    a = b;
                    b = t;
                }
                a
            };
            assert!(gcd == 1 || (num == 0 && den == 1));
        }
        axis::<D::Length>();
        axis::<D::Mass>();
        axis::<D::Time>();
        axis::<D::Current>();
    }

    #[test]
    fn produced_dimensions_are_canonical() {
        assert_canonical::<Length>();
        assert_canonical::<DimProduct<Length, Length>>();
        assert_canonical::<DimQuotient<Length, Time>>();
        assert_canonical::<DimPower<Area, crate::ratio::Half>>();
        assert_canonical::<DimPower<Length, crate::ratio::Half>>();
        assert_canonical::<DimInverse<Force>>();
        assert_canonical::<DimQuotient<Energy, Energy>>();
    }
}
