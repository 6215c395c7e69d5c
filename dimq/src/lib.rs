//! Compile-time dimensional analysis with zero-cost dimensioned quantities.
//!
//! `dimq` is the user-facing crate in this workspace. It re-exports the full
//! API from `dimq-core`: the [`Quantity`] carrier, the [`Dim`] dimension
//! vector with its rational-exponent algebra, and named aliases for the
//! common base and derived dimensions under [`si`] (also re-exported at the
//! crate root).
//!
//! The core idea: a value is always a `Quantity<D>`, where `D` is a
//! type-level vector of rational exponents over ⟨length, mass, time,
//! current⟩. Dimensions exist only at compile time; at runtime a quantity is
//! exactly its `f64`.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to
//!   seconds, or compare a force against a mass).
//! - Propagates dimensions through `*`, `/`, roots and rational powers, so
//!   derived dimensions need no registration: `Meters / Seconds` *is* a
//!   `MetersPerSecond`.
//! - Keeps the whole check in the type system: a build that succeeds is a
//!   proof of dimensional consistency for every expression it reached.
//!
//! # What this crate does not try to solve
//!
//! - Unit conversion between scales of one dimension; every quantity lives
//!   in a single coherent base system.
//! - Parsing quantities from text, or printing canonical unit names.
//! - Transcendental functions on dimensioned values.
//!
//! # Quick start
//!
//! ```rust
//! use dimq::{Meters, Seconds, MetersPerSecond, SquareMeters};
//!
//! let d = Meters::new(10.0) + Meters::new(5.0);
//! assert_eq!(d.value(), 15.0);
//!
//! let area: SquareMeters = Meters::new(10.0) * Meters::new(5.0);
//! assert_eq!(area.value(), 50.0);
//!
//! let v: MetersPerSecond = Meters::new(10.0) / Seconds::new(2.0);
//! assert_eq!(v.value(), 5.0);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use dimq::{Meters, Seconds};
//!
//! let _ = Meters::new(10.0) + Seconds::new(2.0); // cannot add different dimensions
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `dimq-core`.
//! - `serde`: enables `serde` support for `Quantity`; serialization is the
//!   raw scalar value only.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! dimq = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! No error type exists at runtime. Dimensional mismatches are compile-time
//! failures; scalar arithmetic follows IEEE-754 untouched.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use dimq_core::*;

pub use dimq_core::si::*;
