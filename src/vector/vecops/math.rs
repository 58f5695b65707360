use std::fmt::Debug;

use crate::vector::coercion::{CommonNum, Promoted};

/// Pointwise
///
/// An element-wise binary operation. Implementors are zero-sized markers
/// which parameterize expression nodes, so the operation applied at each
/// element is resolved statically.
///
/// Both operands are first coerced to their promoted type, then combined
/// using the host's arithmetic for that type. Division by zero is not
/// intercepted; integer division by zero panics and floating point division
/// by zero produces an infinity or `NaN`.
///
pub trait Pointwise: Debug + Copy + Default {
    /// Symbol used when describing expressions
    const SYMBOL: &'static str;

    fn apply<L, R>(&self, l: L, r: R) -> Promoted<L, R>
    where
        (L, R): CommonNum;
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct AddOp;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SubOp;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MulOp;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DivOp;

impl Pointwise for AddOp {
    const SYMBOL: &'static str = "+";

    #[inline]
    fn apply<L, R>(&self, l: L, r: R) -> Promoted<L, R>
    where
        (L, R): CommonNum,
    {
        let (l, r) = (l, r).into_common();
        l + r
    }
}

impl Pointwise for SubOp {
    const SYMBOL: &'static str = "-";

    #[inline]
    fn apply<L, R>(&self, l: L, r: R) -> Promoted<L, R>
    where
        (L, R): CommonNum,
    {
        let (l, r) = (l, r).into_common();
        l - r
    }
}

impl Pointwise for MulOp {
    const SYMBOL: &'static str = "*";

    #[inline]
    fn apply<L, R>(&self, l: L, r: R) -> Promoted<L, R>
    where
        (L, R): CommonNum,
    {
        let (l, r) = (l, r).into_common();
        l * r
    }
}

impl Pointwise for DivOp {
    const SYMBOL: &'static str = "/";

    #[inline]
    fn apply<L, R>(&self, l: L, r: R) -> Promoted<L, R>
    where
        (L, R): CommonNum,
    {
        let (l, r) = (l, r).into_common();
        l / r
    }
}

/// Add two values under their promoted type
///
/// ```
/// use exprvec::vector::vecops::add;
///
/// assert_eq!(add(1_i8, 2_i64), 3_i64);
/// assert_eq!(add(1_i32, 0.5_f64), 1.5_f64);
/// ```
///
#[inline]
pub fn add<L, R>(l: L, r: R) -> Promoted<L, R>
where
    (L, R): CommonNum,
{
    AddOp.apply(l, r)
}

/// See [add] for more information
#[inline]
pub fn sub<L, R>(l: L, r: R) -> Promoted<L, R>
where
    (L, R): CommonNum,
{
    SubOp.apply(l, r)
}

/// See [add] for more information
#[inline]
pub fn mul<L, R>(l: L, r: R) -> Promoted<L, R>
where
    (L, R): CommonNum,
{
    MulOp.apply(l, r)
}

/// See [add] for more information
#[inline]
pub fn div<L, R>(l: L, r: R) -> Promoted<L, R>
where
    (L, R): CommonNum,
{
    DivOp.apply(l, r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_pairs_use_the_wider_type() {
        let x: i16 = add(100_i8, 1000_i16);
        assert_eq!(x, 1100);

        // 100 * 100 overflows i8, but not the promoted i32
        let y: i32 = mul(100_i8, 100_i32);
        assert_eq!(y, 10_000);
    }

    #[test]
    fn integer_division_truncates() {
        assert_eq!(div(7_i32, 2_i8), 3_i32);
        assert_eq!(div(-7_i64, 2_i32), -3_i64);
    }

    #[test]
    fn mixed_division_promotes_before_dividing() {
        assert_eq!(div(7_i32, 2_f32), 3.5_f32);
        assert_eq!(div(1_i8, 4.0_f64), 0.25_f64);
    }

    #[test]
    fn float_division_by_zero_follows_host() {
        assert_eq!(div(1.0_f64, 0_i32), f64::INFINITY);
        assert!(div(0.0_f32, 0_i8).is_nan());
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero_panics() {
        let zero = std::hint::black_box(0_i32);
        let _ = div(1_i32, zero);
    }

    #[test]
    fn subtraction_is_ordered() {
        assert_eq!(sub(1_i16, 3_i32), -2_i32);
        assert_eq!(sub(3_i32, 1_i16), 2_i32);
    }

    #[test]
    fn float_and_double_promote_to_double() {
        let x = add(0.5_f32, 0.25_f64);
        assert_eq!(x, 0.75_f64);
    }
}
