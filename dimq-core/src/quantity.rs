//! Quantity type and its implementations.

use crate::dimension::{DimDiv, DimInv, DimInverse, DimMul, DimPow, DimPower, DimProduct,
    DimQuotient, Dimension, Dimensionless};
use crate::ratio::{Half, Ratio, Rational, Third};
use core::fmt;
use core::marker::PhantomData;
use core::ops::*;
use typenum::{Integer, NonZero, Unsigned};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A scalar value tagged with a compile-time dimension.
///
/// `Quantity<D, S>` wraps a scalar of type `S` (by default `f64`) together
/// with phantom type information about its dimension `D`. The dimension
/// costs nothing at runtime: a quantity is bit-identical to its scalar.
///
/// Construction is deliberately explicit. [`Quantity::new`] is the only way
/// a bare scalar acquires a dimension, and [`Quantity::value`] is the only
/// way back out; there is no `From<f64>` impl. Arithmetic never mutates a
/// quantity's dimension: each operator produces a new quantity whose
/// dimension is computed by the algebra in [`crate::dimension`].
///
/// Two quantities with different dimensions are different types. Addition,
/// subtraction and comparison demand the *same* dimension and fail to
/// compile otherwise; multiplication and division accept any pair and
/// produce the product/quotient dimension.
///
/// # Examples
///
/// ```rust
/// use dimq_core::si::{Meters, Seconds, MetersPerSecond};
///
/// let d = Meters::new(10.0);
/// let t = Seconds::new(2.0);
/// let v: MetersPerSecond = d / t;
/// assert_eq!(v.value(), 5.0);
/// ```
///
/// Both operands of any arithmetic must also share the scalar type `S`;
/// there is no implicit promotion between, say, `f32` and `f64` payloads.
pub struct Quantity<D: Dimension, S = f64>(S, PhantomData<D>);

impl<D: Dimension, S> Quantity<D, S> {
    /// Creates a new quantity with the given value.
    ///
    /// This is the sole entry point from an undimensioned scalar into the
    /// dimensioned world.
    ///
    /// ```rust
    /// use dimq_core::si::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: S) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw scalar value.
    ///
    /// Needed for printing and for handing values to scalar APIs at the
    /// boundary of dimensioned code.
    ///
    /// ```rust
    /// use dimq_core::si::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub fn value(self) -> S {
        self.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// f64 helpers
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Quantity<D, f64> {
    /// A constant representing NaN for this quantity type.
    pub const NAN: Self = Self::new(f64::NAN);

    /// The zero quantity.
    pub const ZERO: Self = Self::new(0.0);

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use dimq_core::si::Meters;
    /// assert_eq!(Meters::new(-10.0).abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Returns the minimum of this quantity and another of the same
    /// dimension.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// Returns the maximum of this quantity and another of the same
    /// dimension.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }

    /// Reciprocal, with the inverse dimension.
    ///
    /// ```rust
    /// use dimq_core::si::{Seconds, Hertz};
    /// let period = Seconds::new(0.5);
    /// let freq: Hertz = period.recip();
    /// assert_eq!(freq.value(), 2.0);
    /// ```
    #[inline]
    pub fn recip(self) -> Quantity<DimInverse<D>, f64>
    where
        D: DimInv,
    {
        Quantity::new(self.0.recip())
    }

    /// Square root: the scalar's square root with every dimension exponent
    /// halved.
    ///
    /// The square root of an area is a length:
    ///
    /// ```rust
    /// use dimq_core::si::{Meters, SquareMeters};
    /// let a = SquareMeters::new(49.0);
    /// let side: Meters = a.sqrt();
    /// assert_eq!(side.value(), 7.0);
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<DimPower<D, Half>, f64>
    where
        D: DimPow<Half>,
    {
        #[cfg(feature = "std")]
        {
            Quantity::new(self.0.sqrt())
        }
        #[cfg(not(feature = "std"))]
        {
            Quantity::new(libm::sqrt(self.0))
        }
    }

    /// Cube root: every dimension exponent divided by three.
    #[inline]
    pub fn cbrt(self) -> Quantity<DimPower<D, Third>, f64>
    where
        D: DimPow<Third>,
    {
        #[cfg(feature = "std")]
        {
            Quantity::new(self.0.cbrt())
        }
        #[cfg(not(feature = "std"))]
        {
            Quantity::new(libm::cbrt(self.0))
        }
    }

    /// Raises the quantity to the rational power `P / Q`, scaling every
    /// dimension exponent accordingly.
    ///
    /// ```rust
    /// use dimq_core::si::{Meters, SquareMeters};
    /// use dimq_core::typenum::{P2, U1};
    ///
    /// let side = Meters::new(3.0);
    /// let a: SquareMeters = side.pow::<P2, U1>();
    /// assert_eq!(a.value(), 9.0);
    /// ```
    #[inline]
    pub fn pow<P, Q>(self) -> Quantity<DimPower<D, Ratio<P, Q>>, f64>
    where
        P: Integer,
        Q: Unsigned + NonZero,
        D: DimPow<Ratio<P, Q>>,
    {
        let exponent = <Ratio<P, Q> as Rational>::to_f64();
        #[cfg(feature = "std")]
        {
            Quantity::new(self.0.powf(exponent))
        }
        #[cfg(not(feature = "std"))]
        {
            Quantity::new(libm::pow(self.0, exponent))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Basic trait plumbing (manual: `D` is phantom, derives would over-constrain)
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, S: Clone> Clone for Quantity<D, S> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<D: Dimension, S: Copy> Copy for Quantity<D, S> {}

impl<D: Dimension, S: PartialEq> PartialEq for Quantity<D, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<D: Dimension, S: PartialOrd> PartialOrd for Quantity<D, S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// A dimensionless quantity may be compared against a bare scalar;
/// dimensioned quantities may not.
impl PartialEq<f64> for Quantity<Dimensionless, f64> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

fn fmt_axis<R: Rational>(f: &mut fmt::Formatter<'_>, symbol: &str) -> fmt::Result {
    match (R::NUM, R::DEN) {
        (0, _) => Ok(()),
        (1, 1) => write!(f, " {symbol}"),
        (n, 1) => write!(f, " {symbol}^{n}"),
        (n, d) => write!(f, " {symbol}^{n}/{d}"),
    }
}

fn fmt_dim<D: Dimension>(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_axis::<D::Length>(f, "m")?;
    fmt_axis::<D::Mass>(f, "kg")?;
    fmt_axis::<D::Time>(f, "s")?;
    fmt_axis::<D::Current>(f, "A")
}

/// Formats the scalar followed by the nonzero base-dimension exponents,
/// e.g. `5 m s^-1`. Diagnostic only; derived dimensions have no unique
/// canonical name, so no attempt is made to print `N` for a force.
impl<D: Dimension, S: fmt::Display> fmt::Display for Quantity<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        fmt_dim::<D>(f)
    }
}

impl<D: Dimension, S: fmt::Debug> fmt::Debug for Quantity<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)?;
        fmt_dim::<D>(f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Same-dimension operators
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, S: Add<Output = S>> Add for Quantity<D, S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<D: Dimension, S: AddAssign> AddAssign for Quantity<D, S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<D: Dimension, S: Sub<Output = S>> Sub for Quantity<D, S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<D: Dimension, S: SubAssign> SubAssign for Quantity<D, S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<D: Dimension, S: Neg<Output = S>> Neg for Quantity<D, S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimension-combining operators
// ─────────────────────────────────────────────────────────────────────────────

impl<Dl, Dr, S> Mul<Quantity<Dr, S>> for Quantity<Dl, S>
where
    Dl: Dimension + DimMul<Dr>,
    Dr: Dimension,
    S: Mul<Output = S>,
{
    type Output = Quantity<DimProduct<Dl, Dr>, S>;
    #[inline]
    fn mul(self, rhs: Quantity<Dr, S>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<Dl, Dr, S> Div<Quantity<Dr, S>> for Quantity<Dl, S>
where
    Dl: Dimension + DimDiv<Dr>,
    Dr: Dimension,
    S: Div<Output = S>,
{
    type Output = Quantity<DimQuotient<Dl, Dr>, S>;
    #[inline]
    fn div(self, rhs: Quantity<Dr, S>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalar operators (dimension unchanged)
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, S: Mul<Output = S>> Mul<S> for Quantity<D, S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<D: Dimension, S: Div<Output = S>> Div<S> for Quantity<D, S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<D: Dimension, S: Rem<Output = S>> Rem<S> for Quantity<D, S> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: S) -> Self {
        Self::new(self.0 % rhs)
    }
}

impl<D: Dimension, S: MulAssign> MulAssign<S> for Quantity<D, S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        self.0 *= rhs;
    }
}

impl<D: Dimension, S: DivAssign> DivAssign<S> for Quantity<D, S> {
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        self.0 /= rhs;
    }
}

macro_rules! impl_scalar_lhs {
    ($($scalar:ty),+ $(,)?) => {$(
        impl<D: Dimension> Mul<Quantity<D, $scalar>> for $scalar {
            type Output = Quantity<D, $scalar>;
            #[inline]
            fn mul(self, rhs: Quantity<D, $scalar>) -> Self::Output {
                Quantity::new(self * rhs.0)
            }
        }

        impl<D> Div<Quantity<D, $scalar>> for $scalar
        where
            D: Dimension + DimInv,
        {
            type Output = Quantity<DimInverse<D>, $scalar>;
            #[inline]
            fn div(self, rhs: Quantity<D, $scalar>) -> Self::Output {
                Quantity::new(self / rhs.0)
            }
        }
    )+};
}

impl_scalar_lhs!(f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension, S: Serialize> Serialize for Quantity<D, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> core::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension, S: Deserialize<'de>> Deserialize<'de> for Quantity<D, S> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let value = S::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}
