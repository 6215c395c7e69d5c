//! Type-level rational numbers used as dimension exponents.
//!
//! A dimension exponent is a [`Ratio<N, D>`]: a numerator `N` (a
//! [`typenum::Integer`]) over a denominator `D` (a [`typenum::Unsigned`] that
//! is [`typenum::NonZero`]). A zero denominator is therefore unrepresentable.
//!
//! Every operation in this module funnels its raw result through [`Reduce`],
//! which divides numerator and denominator by their greatest common divisor.
//! The invariant this buys is central to the whole crate: an exponent is
//! always in lowest terms with a positive denominator, so *type equality* of
//! two `Ratio`s coincides with mathematical equality of the fractions they
//! denote. Without it, `2/4` and `1/2` would be different types and
//! dimension checking would silently break.
//!
//! ```rust
//! use dimq_core::ratio::{Ratio, Rational, Reduced};
//! use dimq_core::typenum::{P2, U4};
//!
//! // 2/4 normalizes to 1/2.
//! type Canonical = Reduced<Ratio<P2, U4>>;
//! assert_eq!(<Canonical as Rational>::NUM, 1);
//! assert_eq!(<Canonical as Rational>::DEN, 2);
//! ```

use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Neg, Sub};
use typenum::{
    Diff, Gcd, Gcf, Integer, NInt, Negate, NonZero, PInt, Prod, Quot, Sum, Unsigned, N1, N2, N3,
    P1, P2, P3, U0, U1, U2, U3, Z0,
};

/// A type-level rational `N / D`.
///
/// `N` is a signed [`typenum::Integer`], `D` an unsigned non-zero
/// denominator. The denominator defaults to one, so plain integer exponents
/// read as `Ratio<P2>`.
///
/// `Ratio` is never instantiated; it exists only as a parameter to
/// [`Dim`](crate::Dim).
pub struct Ratio<N, D = U1>(PhantomData<(N, D)>);

/// Runtime view of a type-level rational.
///
/// The constants exist for diagnostics (Debug formatting, tests asserting
/// canonical form) and for computing rational powers of the scalar; the
/// algebra itself never reads them.
pub trait Rational {
    /// Numerator in lowest terms.
    const NUM: i64;
    /// Denominator in lowest terms, always positive.
    const DEN: u64;

    /// The exponent as a floating-point value.
    fn to_f64() -> f64 {
        Self::NUM as f64 / Self::DEN as f64
    }
}

impl<N: Integer, D: Unsigned + NonZero> Rational for Ratio<N, D> {
    const NUM: i64 = N::I64;
    const DEN: u64 = D::U64;
}

// ─────────────────────────────────────────────────────────────────────────────
// Signed/unsigned plumbing
// ─────────────────────────────────────────────────────────────────────────────

/// Magnitude of a signed type-level integer, as an unsigned.
pub trait Magnitude {
    /// `|Self|`.
    type Output: Unsigned;
}

impl Magnitude for Z0 {
    type Output = U0;
}
impl<U: Unsigned + NonZero> Magnitude for PInt<U> {
    type Output = U;
}
impl<U: Unsigned + NonZero> Magnitude for NInt<U> {
    type Output = U;
}

/// Alias for [`Magnitude::Output`].
pub type Mag<N> = <N as Magnitude>::Output;

/// Exact division of a signed integer by an unsigned divisor of its
/// magnitude, preserving sign.
pub trait DivMag<G> {
    /// `Self / G`.
    type Output: Integer;
}

impl<G: Unsigned + NonZero> DivMag<G> for Z0 {
    type Output = Z0;
}
impl<U, G> DivMag<G> for PInt<U>
where
    U: Unsigned + NonZero + Div<G>,
    G: Unsigned + NonZero,
    Quot<U, G>: Unsigned + NonZero,
{
    type Output = PInt<Quot<U, G>>;
}
impl<U, G> DivMag<G> for NInt<U>
where
    U: Unsigned + NonZero + Div<G>,
    G: Unsigned + NonZero,
    Quot<U, G>: Unsigned + NonZero,
{
    type Output = NInt<Quot<U, G>>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Normalization
// ─────────────────────────────────────────────────────────────────────────────

/// Normalizes a `Ratio` to lowest terms.
///
/// Divides numerator and denominator by `gcd(|N|, D)`. A zero numerator
/// normalizes to `0/1`.
pub trait Reduce {
    /// The canonical equivalent of `Self`.
    type Output: Rational;
}

impl<N, D> Reduce for Ratio<N, D>
where
    N: Integer + Magnitude,
    D: Unsigned + NonZero,
    Mag<N>: Gcd<D>,
    Gcf<Mag<N>, D>: Unsigned + NonZero,
    N: DivMag<Gcf<Mag<N>, D>>,
    D: Div<Gcf<Mag<N>, D>>,
    Quot<D, Gcf<Mag<N>, D>>: Unsigned + NonZero,
{
    type Output = Ratio<<N as DivMag<Gcf<Mag<N>, D>>>::Output, Quot<D, Gcf<Mag<N>, D>>>;
}

/// Alias for [`Reduce::Output`].
pub type Reduced<R> = <R as Reduce>::Output;

// ─────────────────────────────────────────────────────────────────────────────
// Rational arithmetic
// ─────────────────────────────────────────────────────────────────────────────

/// Sum of two type-level rationals, in lowest terms.
pub trait RatAdd<Rhs> {
    /// `Self + Rhs`, reduced.
    type Output: Rational;
}

impl<Nl, Dl, Nr, Dr> RatAdd<Ratio<Nr, Dr>> for Ratio<Nl, Dl>
where
    Nl: Integer + Mul<PInt<Dr>>,
    Nr: Integer + Mul<PInt<Dl>>,
    Dl: Unsigned + NonZero + Mul<Dr>,
    Dr: Unsigned + NonZero,
    Prod<Nl, PInt<Dr>>: Add<Prod<Nr, PInt<Dl>>>,
    Prod<Dl, Dr>: Unsigned + NonZero,
    Ratio<Sum<Prod<Nl, PInt<Dr>>, Prod<Nr, PInt<Dl>>>, Prod<Dl, Dr>>: Reduce,
{
    type Output = Reduced<Ratio<Sum<Prod<Nl, PInt<Dr>>, Prod<Nr, PInt<Dl>>>, Prod<Dl, Dr>>>;
}

/// Alias for [`RatAdd::Output`].
pub type RatSum<A, B> = <A as RatAdd<B>>::Output;

/// Difference of two type-level rationals, in lowest terms.
pub trait RatSub<Rhs> {
    /// `Self - Rhs`, reduced.
    type Output: Rational;
}

impl<Nl, Dl, Nr, Dr> RatSub<Ratio<Nr, Dr>> for Ratio<Nl, Dl>
where
    Nl: Integer + Mul<PInt<Dr>>,
    Nr: Integer + Mul<PInt<Dl>>,
    Dl: Unsigned + NonZero + Mul<Dr>,
    Dr: Unsigned + NonZero,
    Prod<Nl, PInt<Dr>>: Sub<Prod<Nr, PInt<Dl>>>,
    Prod<Dl, Dr>: Unsigned + NonZero,
    Ratio<Diff<Prod<Nl, PInt<Dr>>, Prod<Nr, PInt<Dl>>>, Prod<Dl, Dr>>: Reduce,
{
    type Output = Reduced<Ratio<Diff<Prod<Nl, PInt<Dr>>, Prod<Nr, PInt<Dl>>>, Prod<Dl, Dr>>>;
}

/// Alias for [`RatSub::Output`].
pub type RatDiff<A, B> = <A as RatSub<B>>::Output;

/// Product of two type-level rationals, in lowest terms.
pub trait RatMul<Rhs> {
    /// `Self * Rhs`, reduced.
    type Output: Rational;
}

impl<Nl, Dl, Nr, Dr> RatMul<Ratio<Nr, Dr>> for Ratio<Nl, Dl>
where
    Nl: Integer + Mul<Nr>,
    Nr: Integer,
    Dl: Unsigned + NonZero + Mul<Dr>,
    Dr: Unsigned + NonZero,
    Prod<Dl, Dr>: Unsigned + NonZero,
    Ratio<Prod<Nl, Nr>, Prod<Dl, Dr>>: Reduce,
{
    type Output = Reduced<Ratio<Prod<Nl, Nr>, Prod<Dl, Dr>>>;
}

/// Alias for [`RatMul::Output`].
pub type RatProd<A, B> = <A as RatMul<B>>::Output;

/// Negation of a type-level rational.
///
/// A canonical input stays canonical, so no reduction step is needed.
pub trait RatNeg {
    /// `-Self`.
    type Output: Rational;
}

impl<N, D> RatNeg for Ratio<N, D>
where
    N: Integer + Neg,
    Negate<N>: Integer,
    D: Unsigned + NonZero,
{
    type Output = Ratio<Negate<N>, D>;
}

/// Alias for [`RatNeg::Output`].
pub type RatNegated<A> = <A as RatNeg>::Output;

// ─────────────────────────────────────────────────────────────────────────────
// Common exponents
// ─────────────────────────────────────────────────────────────────────────────

/// The zero exponent, `0/1`.
pub type Zero = Ratio<Z0>;
/// The exponent `1`.
pub type One = Ratio<P1>;
/// The exponent `2`.
pub type Two = Ratio<P2>;
/// The exponent `3`.
pub type Three = Ratio<P3>;
/// The exponent `-1`.
pub type NegOne = Ratio<N1>;
/// The exponent `-2`.
pub type NegTwo = Ratio<N2>;
/// The exponent `-3`.
pub type NegThree = Ratio<N3>;
/// The exponent `1/2` (square roots).
pub type Half = Ratio<P1, U2>;
/// The exponent `1/3` (cube roots).
pub type Third = Ratio<P1, U3>;
