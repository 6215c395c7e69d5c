//! Dimension vectors and their compile-time algebra.
//!
//! A physical dimension is a vector of rational exponents over a fixed,
//! ordered set of base dimensions. This crate uses arity four, in the order
//! ⟨length, mass, time, electric current⟩:
//!
//! ```text
//! velocity     = ⟨ 1, 0, -1, 0⟩      (m · s⁻¹)
//! force        = ⟨ 1, 1, -2, 0⟩      (kg · m · s⁻²)
//! dimensionless = ⟨ 0, 0,  0, 0⟩
//! ```
//!
//! [`Dim`] carries that vector purely at the type level; trailing axes
//! default to the zero exponent, so `Dim<One>` is the length dimension.
//!
//! The algebra on dimension vectors is a free abelian group over the
//! rationals: multiplication of quantities adds exponents ([`DimMul`]),
//! division subtracts them ([`DimDiv`]), rational powers scale them
//! ([`DimPow`]) and the reciprocal negates them ([`DimInv`]). There are no
//! ad-hoc simplification rules and no per-dimension special cases: the
//! dimension of a product depends only on the dimensions of its operands.
//!
//! Equality needs no trait of its own. Because every exponent is kept in
//! lowest terms (see [`crate::ratio`]), two dimensions are equal exactly
//! when they are the *same Rust type*, and the compiler enforces that for
//! free wherever a single `D` parameter appears twice.

use core::marker::PhantomData;

use crate::ratio::{
    RatAdd, RatDiff, RatMul, RatNeg, RatNegated, RatProd, RatSub, RatSum, Rational, Zero,
};

/// A dimension vector with one rational exponent per base dimension.
///
/// Type parameters are, in order: length `L`, mass `M`, time `T`, electric
/// current `I`. Omitted trailing parameters are the zero exponent.
///
/// `Dim` is a phantom type: it is never constructed and occupies no storage
/// inside a [`Quantity`](crate::Quantity).
///
/// ```rust
/// use dimq_core::{Dim, Dimension, Rational};
/// use dimq_core::ratio::{One, NegOne};
///
/// type Velocity = Dim<One, dimq_core::ratio::Zero, NegOne>;
/// assert_eq!(<<Velocity as Dimension>::Length as Rational>::NUM, 1);
/// assert_eq!(<<Velocity as Dimension>::Time as Rational>::NUM, -1);
/// ```
pub struct Dim<L = Zero, M = Zero, T = Zero, I = Zero>(PhantomData<(L, M, T, I)>);

/// The all-zero dimension vector.
///
/// This is the identity of the dimension group: multiplying by a
/// dimensionless quantity leaves any dimension unchanged, and `a / a` lands
/// exactly on this type.
pub type Dimensionless = Dim<Zero, Zero, Zero, Zero>;

/// Per-axis access to a dimension vector's exponents.
///
/// Implemented for every `Dim` whose axes are valid rationals. The
/// associated types are the *only* public view of a dimension; the runtime
/// never inspects them except through [`Rational`]'s diagnostic constants.
pub trait Dimension {
    /// Exponent of the length axis.
    type Length: Rational;
    /// Exponent of the mass axis.
    type Mass: Rational;
    /// Exponent of the time axis.
    type Time: Rational;
    /// Exponent of the electric-current axis.
    type Current: Rational;
}

impl<L, M, T, I> Dimension for Dim<L, M, T, I>
where
    L: Rational,
    M: Rational,
    T: Rational,
    I: Rational,
{
    type Length = L;
    type Mass = M;
    type Time = T;
    type Current = I;
}

// ─────────────────────────────────────────────────────────────────────────────
// Group operations
// ─────────────────────────────────────────────────────────────────────────────

/// Dimension of a product: exponents add axis-wise.
pub trait DimMul<Rhs> {
    /// The product dimension.
    type Output: Dimension;
}

impl<Ll, Ml, Tl, Il, Lr, Mr, Tr, Ir> DimMul<Dim<Lr, Mr, Tr, Ir>> for Dim<Ll, Ml, Tl, Il>
where
    Ll: RatAdd<Lr>,
    Ml: RatAdd<Mr>,
    Tl: RatAdd<Tr>,
    Il: RatAdd<Ir>,
{
    type Output = Dim<RatSum<Ll, Lr>, RatSum<Ml, Mr>, RatSum<Tl, Tr>, RatSum<Il, Ir>>;
}

/// Alias for [`DimMul::Output`].
pub type DimProduct<A, B> = <A as DimMul<B>>::Output;

/// Dimension of a quotient: exponents subtract axis-wise.
pub trait DimDiv<Rhs> {
    /// The quotient dimension.
    type Output: Dimension;
}

impl<Ll, Ml, Tl, Il, Lr, Mr, Tr, Ir> DimDiv<Dim<Lr, Mr, Tr, Ir>> for Dim<Ll, Ml, Tl, Il>
where
    Ll: RatSub<Lr>,
    Ml: RatSub<Mr>,
    Tl: RatSub<Tr>,
    Il: RatSub<Ir>,
{
    type Output = Dim<RatDiff<Ll, Lr>, RatDiff<Ml, Mr>, RatDiff<Tl, Tr>, RatDiff<Il, Ir>>;
}

/// Alias for [`DimDiv::Output`].
pub type DimQuotient<A, B> = <A as DimDiv<B>>::Output;

/// Dimension of a rational power: exponents scale by `E` axis-wise.
///
/// `E` is a [`Ratio`](crate::ratio::Ratio); `sqrt` is the special case
/// `E = 1/2`. Because the per-axis products are reduced, the square root of
/// an area is a plain length, exponent `1`, not `2/2`.
pub trait DimPow<E> {
    /// The scaled dimension.
    type Output: Dimension;
}

impl<L, M, T, I, E> DimPow<E> for Dim<L, M, T, I>
where
    L: RatMul<E>,
    M: RatMul<E>,
    T: RatMul<E>,
    I: RatMul<E>,
{
    type Output = Dim<RatProd<L, E>, RatProd<M, E>, RatProd<T, E>, RatProd<I, E>>;
}

/// Alias for [`DimPow::Output`].
pub type DimPower<A, E> = <A as DimPow<E>>::Output;

/// Dimension of a reciprocal: exponents negate axis-wise.
pub trait DimInv {
    /// The inverse dimension.
    type Output: Dimension;
}

impl<L, M, T, I> DimInv for Dim<L, M, T, I>
where
    L: RatNeg,
    M: RatNeg,
    T: RatNeg,
    I: RatNeg,
{
    type Output = Dim<RatNegated<L>, RatNegated<M>, RatNegated<T>, RatNegated<I>>;
}

/// Alias for [`DimInv::Output`].
pub type DimInverse<A> = <A as DimInv>::Output;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratio::{Half, NegOne, NegTwo, One, Ratio, Two};
    use typenum::{P1, U2};

    type Length = Dim<One>;
    type Mass = Dim<Zero, One>;
    type Time = Dim<Zero, Zero, One>;
    type Area = Dim<Two>;
    type Velocity = Dim<One, Zero, NegOne>;
    type Force = Dim<One, One, NegTwo>;

    trait DimIs<A> {}
    impl<A> DimIs<A> for A {}
    fn same<A, B: DimIs<A>>() {}

    // ─────────────────────────────────────────────────────────────────────────
    // Group laws
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn product_adds_exponents() {
        same::<DimProduct<Length, Length>, Area>();
        same::<DimProduct<Velocity, Time>, Length>();
        same::<DimProduct<Mass, DimQuotient<Velocity, Time>>, Force>();
    }

    #[test]
    fn quotient_subtracts_exponents() {
        same::<DimQuotient<Length, Time>, Velocity>();
        same::<DimQuotient<Length, Length>, Dimensionless>();
        same::<DimQuotient<Force, Mass>, DimQuotient<Velocity, Time>>();
    }

    #[test]
    fn product_is_commutative_and_associative() {
        same::<DimProduct<Length, Time>, DimProduct<Time, Length>>();
        same::<
            DimProduct<DimProduct<Length, Mass>, Time>,
            DimProduct<Length, DimProduct<Mass, Time>>,
        >();
    }

    #[test]
    fn dimensionless_is_the_identity() {
        same::<DimProduct<Force, Dimensionless>, Force>();
        same::<DimProduct<Dimensionless, Dimensionless>, Dimensionless>();
    }

    #[test]
    fn inverse_negates() {
        same::<DimInverse<Time>, Dim<Zero, Zero, NegOne>>();
        same::<DimProduct<Time, DimInverse<Time>>, Dimensionless>();
        same::<DimInverse<Dimensionless>, Dimensionless>();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rational powers
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn sqrt_of_area_is_length() {
        same::<DimPower<Area, Half>, Length>();
    }

    #[test]
    fn sqrt_of_length_is_half_exponent() {
        same::<DimPower<Length, Half>, Dim<Ratio<P1, U2>>>();
        // Squaring the half-exponent dimension lands back on length.
        same::<DimProduct<DimPower<Length, Half>, DimPower<Length, Half>>, Length>();
    }

    #[test]
    fn canonical_form_after_power() {
        // (L^2)^(1/2): the length exponent must be the type-level 1/1,
        // not an unreduced 2/2.
        assert_eq!(<<DimPower<Area, Half> as Dimension>::Length as Rational>::NUM, 1);
        assert_eq!(<<DimPower<Area, Half> as Dimension>::Length as Rational>::DEN, 1);
    }
}
