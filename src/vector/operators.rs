//! Operator Surface
//!
//! Implements `+`, `-`, `*` and `/` for borrowed vectors and every expression
//! node, building new expression nodes without evaluating anything.
//!
//! | Left       | Right      | `+` | `-` | `*` | `/` | Produces      |
//! |------------|------------|-----|-----|-----|-----|---------------|
//! | expression | expression |  ✓  |  ✓  |     |     | [VecVec]      |
//! | expression | scalar     |  ✓  |  ✓  |  ✓  |  ✓  | [VecScalar]   |
//! | scalar     | expression |  ✓  |  ✓  |  ✓  |     | [ScalarVec]   |
//!
//! Scalars are limited to the [crate::vector::types::Numeric] types. Using
//! any other type as a scalar fails to compile:
//!
//! ```compile_fail
//! use exprvec::{vector, Vector};
//!
//! let a: Vector<i32> = vector![1];
//! let e = &a + "one";
//! ```
//!
//! Neither are element-wise products or quotients of two expressions, nor
//! division of a scalar by an expression, provided:
//!
//! ```compile_fail
//! use exprvec::{vector, Vector};
//!
//! let a: Vector<i32> = vector![1, 2];
//! let e = &a * &a;
//! ```
//!
//! ```compile_fail
//! use exprvec::{vector, Vector};
//!
//! let a: Vector<f64> = vector![1.0, 2.0];
//! let e = 1.0_f64 / &a;
//! ```
//!
//! Operand sizes of `+` and `-` between expressions are checked when the
//! expression is materialized. See [crate::vector::TryAdd] for an eager check.
//!

use std::ops::{Add, Div, Mul, Sub};

use super::coercion::CommonNum;
use super::expr::{Expression, ScalarVec, VecScalar, VecVec};
use super::types::Numeric;
use super::vecops::{AddOp, DivOp, MulOp, SubOp};
use super::Vector;

macro_rules! expression_operators {
    ( [$($gen:tt)*] $lhs:ty ) => {
        impl<$($gen)*, Rhs> Add<Rhs> for $lhs
        where
            Self: Expression,
            Rhs: Expression,
            (<Self as Expression>::Elem, Rhs::Elem): CommonNum,
        {
            type Output = VecVec<Self, Rhs, AddOp>;
            #[inline]
            fn add(self, rhs: Rhs) -> Self::Output {
                VecVec::new(self, rhs)
            }
        }

        impl<$($gen)*, Rhs> Sub<Rhs> for $lhs
        where
            Self: Expression,
            Rhs: Expression,
            (<Self as Expression>::Elem, Rhs::Elem): CommonNum,
        {
            type Output = VecVec<Self, Rhs, SubOp>;
            #[inline]
            fn sub(self, rhs: Rhs) -> Self::Output {
                VecVec::new(self, rhs)
            }
        }

        expression_operators!(@scalars [$($gen)*] $lhs; i8, i16, i32, i64, f32, f64);
    };

    ( @scalars $gen:tt $lhs:ty; $($s:ty),* ) => {
        $(
            expression_operators!(@rhs $gen $lhs; $s; Add add AddOp);
            expression_operators!(@rhs $gen $lhs; $s; Sub sub SubOp);
            expression_operators!(@rhs $gen $lhs; $s; Mul mul MulOp);
            expression_operators!(@rhs $gen $lhs; $s; Div div DivOp);
            expression_operators!(@lhs $gen $lhs; $s; Add add AddOp);
            expression_operators!(@lhs $gen $lhs; $s; Sub sub SubOp);
            expression_operators!(@lhs $gen $lhs; $s; Mul mul MulOp);
        )*
    };

    // expression op scalar
    ( @rhs [$($gen:tt)*] $lhs:ty; $s:ty; $trait:ident $method:ident $op:ident ) => {
        impl<$($gen)*> $trait<$s> for $lhs
        where
            Self: Expression,
            (<Self as Expression>::Elem, $s): CommonNum,
        {
            type Output = VecScalar<Self, $s, $op>;
            #[inline]
            fn $method(self, rhs: $s) -> Self::Output {
                VecScalar::new(self, rhs)
            }
        }
    };

    // scalar op expression
    ( @lhs [$($gen:tt)*] $rhs:ty; $s:ty; $trait:ident $method:ident $op:ident ) => {
        impl<$($gen)*> $trait<$rhs> for $s
        where
            $rhs: Expression,
            ($s, <$rhs as Expression>::Elem): CommonNum,
        {
            type Output = ScalarVec<$s, $rhs, $op>;
            #[inline]
            fn $method(self, rhs: $rhs) -> Self::Output {
                ScalarVec::new(self, rhs)
            }
        }
    };
}

expression_operators!(['a, T: Numeric] &'a Vector<T>);
expression_operators!([L, R, O] VecVec<L, R, O>);
expression_operators!([L, S, O] VecScalar<L, S, O>);
expression_operators!([S, R, O] ScalarVec<S, R, O>);

#[cfg(test)]
mod tests {
    use crate::vector::types::ElementKind;
    use crate::vector::{Expression, Vector};
    use crate::{vector, Error};

    fn kind_of<E: Expression>(_: &E) -> ElementKind {
        <E::Elem as crate::vector::types::Numeric>::KIND
    }

    #[test]
    fn vector_plus_vector() {
        let a: Vector<i32> = vector![1, 2, 3, 4];
        let b: Vector<i32> = vector![10, 20, 30, 40];
        let r = Vector::<i32>::from_expr(&a + &b).unwrap();
        assert_eq!(r.as_slice(), &[11, 22, 33, 44]);
    }

    #[test]
    fn vector_minus_vector_of_other_type() {
        let a: Vector<i64> = vector![5, 5, 5];
        let b: Vector<i16> = vector![1, 2, 3];
        let e = &a - &b;
        assert_eq!(kind_of(&e), ElementKind::I64);
        assert_eq!(e.to_vec(), Ok(vec![4, 3, 2]));
    }

    #[test]
    fn vector_times_double() {
        let a: Vector<i32> = vector![1, 2, 3];
        let e = &a * 0.5_f64;
        assert_eq!(kind_of(&e), ElementKind::F64);
        let r = Vector::<f64>::from_expr(e).unwrap();
        assert_eq!(r.as_slice(), &[0.5, 1.0, 1.5]);
    }

    #[test]
    fn scalar_operators_on_either_side() {
        let a: Vector<i32> = vector![2, 4, 8];
        assert_eq!((&a + 1_i8).to_vec(), Ok(vec![3, 5, 9]));
        assert_eq!((1_i8 + &a).to_vec(), Ok(vec![3, 5, 9]));
        assert_eq!((&a - 1_i64).to_vec(), Ok(vec![1_i64, 3, 7]));
        assert_eq!((1_i64 - &a).to_vec(), Ok(vec![-1_i64, -3, -7]));
        assert_eq!((&a * 3_i16).to_vec(), Ok(vec![6, 12, 24]));
        assert_eq!((3_i16 * &a).to_vec(), Ok(vec![6, 12, 24]));
        assert_eq!((&a / 2_i32).to_vec(), Ok(vec![1, 2, 4]));
        assert_eq!((&a / 4.0_f32).to_vec(), Ok(vec![0.5_f32, 1.0, 2.0]));
    }

    #[test]
    fn mixed_chain_promotes_pairwise() {
        let a: Vector<i8> = vector![0, 1, 2, 3];
        let c: Vector<f64> = vector![0.01, 0.02, 0.03, 0.04];
        let e = 1.05_f64 + 0.5_f32 * &c + &a * 2_i32 - 2_i32;
        assert_eq!(kind_of(&e), ElementKind::F64);
        assert_eq!(e.size(), 4);
        assert!((e.at(0) - (-0.945)).abs() < 1e-12);
        assert!((e.at(3) - (1.05 + 0.02 + 6.0 - 2.0)).abs() < 1e-12);
    }

    #[test]
    fn narrow_integers_promote_before_overflowing() {
        let a: Vector<i8> = vector![100, 120];
        let e = &a * 2_i16;
        assert_eq!(kind_of(&e), ElementKind::I16);
        assert_eq!(e.to_vec(), Ok(vec![200_i16, 240]));
    }

    #[test]
    fn nodes_combine_with_nodes() {
        let a: Vector<i32> = vector![1, 2];
        let b: Vector<i32> = vector![3, 4];
        let e = (&a + &b) - (&b * 2_i32) + (10_i32 - &a);
        assert_eq!(e.to_vec(), Ok(vec![7, 6]));
    }

    #[test]
    fn mismatched_sizes_fail_on_materialization() {
        let a: Vector<i32> = vector![1, 2];
        let b: Vector<i32> = vector![1, 2, 3];
        let r = Vector::<i32>::from_expr(&a + &b);
        assert_eq!(r, Err(Error::DimensionMismatch(2, 3)));
    }

    #[test]
    fn nodes_are_copy() {
        let a: Vector<i32> = vector![1, 2, 3];
        let e = &a + 1_i32;
        let f = e;
        assert_eq!(e.to_vec(), f.to_vec());
    }
}
