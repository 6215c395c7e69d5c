//! Base dimensions and their quantity aliases.

use crate::dimension::Dim;
use crate::quantity::Quantity;
use crate::ratio::{One, Zero};

/// The length dimension, L¹.
pub type Length = Dim<One>;
/// The mass dimension, M¹.
pub type Mass = Dim<Zero, One>;
/// The time dimension, T¹.
pub type Time = Dim<Zero, Zero, One>;
/// The electric-current dimension, I¹.
pub type Current = Dim<Zero, Zero, Zero, One>;

/// A length in metres.
pub type Meters = Quantity<Length>;
/// A mass in kilograms.
pub type Kilograms = Quantity<Mass>;
/// A time in seconds.
pub type Seconds = Quantity<Time>;
/// An electric current in amperes.
pub type Amperes = Quantity<Current>;

/// One metre.
pub const M: Meters = Meters::new(1.0);
/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);
/// One second.
pub const S: Seconds = Seconds::new(1.0);
/// One ampere.
pub const A: Amperes = Amperes::new(1.0);
