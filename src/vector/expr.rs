//! Expressions
//!
//! An [Expression] is anything that can report a size and produce the
//! element at an index on demand. The only leaf expression is a borrowed
//! [crate::vector::Vector]; every other expression is one of three node
//! shapes combining its operands with a [Pointwise] operation:
//!
//! - [VecVec], an expression combined with another expression of equal size,
//! - [VecScalar], an expression combined with a scalar on its right,
//! - [ScalarVec], a scalar combined with an expression on its right.
//!
//! Nodes hold their expression operands by value. Since the leaves are
//! references, a node is only ever a thin view over the vectors it refers to
//! and can not outlive them. Scalars are copied into the node.
//!
//! Nodes never allocate. Elements are computed when requested and an
//! expression tree is only walked when it is materialized into a vector.
//!

use std::fmt;

use super::coercion::{CommonNum, Promoted};
use super::iterators::Elements;
use super::render::display;
use super::types::Numeric;
use super::vecops::{AddOp, Pointwise, SubOp};
use crate::dimension_err;
use crate::error::Error;

/// Expression
///
/// A lazily evaluated sequence of numeric elements.
///
pub trait Expression {
    /// The promoted element type produced by the expression
    type Elem: Numeric;

    /// Number of elements in the expression
    ///
    /// Nodes report the size of their expression operand, the left one for
    /// [VecVec]. Operand sizes only agree once [Expression::validate]
    /// succeeds.
    ///
    fn size(&self) -> usize;

    /// Compute the element at index `i`
    ///
    /// Indices must be less than [Expression::size]. Out of range access
    /// panics when it reaches a vector leaf.
    ///
    fn at(&self, i: usize) -> Self::Elem;

    /// Validate the shape of the expression
    ///
    /// Every [VecVec] node in the tree must combine operands of equal size.
    /// Validation walks the tree without evaluating any elements.
    ///
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Iterate over the lazily computed elements
    ///
    /// The expression is validated first, so a mis-shaped tree is reported
    /// as an error rather than iterated over the size of its left operand.
    ///
    /// ```
    /// use exprvec::{vector, Error, Expression, Vector};
    ///
    /// let a: Vector<i32> = vector![1, 2];
    /// let b: Vector<i32> = vector![1, 2, 3];
    /// assert!((&a + &a).iter().is_ok());
    /// assert_eq!((&a + &b).iter().err(), Some(Error::DimensionMismatch(2, 3)));
    /// ```
    ///
    fn iter(&self) -> Result<Elements<'_, Self>, Error>
    where
        Self: Sized,
    {
        self.validate()?;
        Ok(Elements::new(self))
    }

    /// Collect the elements into a [Vec] of the promoted element type
    fn to_vec(&self) -> Result<Vec<Self::Elem>, Error>
    where
        Self: Sized,
    {
        Ok(self.iter()?.collect())
    }
}

/// Expression combined with Expression
#[derive(Debug, Copy, Clone)]
pub struct VecVec<L, R, O> {
    left: L,
    right: R,
    op: O,
}

/// Expression combined with a Scalar
#[derive(Debug, Copy, Clone)]
pub struct VecScalar<L, S, O> {
    left: L,
    right: S,
    op: O,
}

/// Scalar combined with an Expression
#[derive(Debug, Copy, Clone)]
pub struct ScalarVec<S, R, O> {
    left: S,
    right: R,
    op: O,
}

impl<L, R, O> VecVec<L, R, O>
where
    L: Expression,
    R: Expression,
    O: Pointwise,
    (L::Elem, R::Elem): CommonNum,
{
    /// Build a node without checking operand sizes
    ///
    /// A size mismatch is reported by [Expression::validate], which every
    /// materialization performs before evaluating any element.
    ///
    pub fn new(left: L, right: R) -> Self {
        VecVec {
            left,
            right,
            op: O::default(),
        }
    }

    /// Build a node, failing immediately if operand sizes differ
    pub fn try_new(left: L, right: R) -> Result<Self, Error> {
        let (l, r) = (left.size(), right.size());
        if l != r {
            log::debug!("dimension mismatch building `{}` node: {l} != {r}", O::SYMBOL);
            return dimension_err!(l, r);
        }
        Ok(Self::new(left, right))
    }
}

impl<L, R, O> Expression for VecVec<L, R, O>
where
    L: Expression,
    R: Expression,
    O: Pointwise,
    (L::Elem, R::Elem): CommonNum,
{
    type Elem = Promoted<L::Elem, R::Elem>;

    #[inline]
    fn size(&self) -> usize {
        self.left.size()
    }

    #[inline]
    fn at(&self, i: usize) -> Self::Elem {
        self.op.apply(self.left.at(i), self.right.at(i))
    }

    fn validate(&self) -> Result<(), Error> {
        self.left.validate()?;
        self.right.validate()?;
        match (self.left.size(), self.right.size()) {
            (l, r) if l != r => {
                log::debug!("dimension mismatch in `{}` node: {l} != {r}", O::SYMBOL);
                dimension_err!(l, r)
            }
            _ => Ok(()),
        }
    }
}

impl<L, S, O> VecScalar<L, S, O>
where
    L: Expression,
    S: Numeric,
    O: Pointwise,
    (L::Elem, S): CommonNum,
{
    pub fn new(left: L, right: S) -> Self {
        VecScalar {
            left,
            right,
            op: O::default(),
        }
    }
}

impl<L, S, O> Expression for VecScalar<L, S, O>
where
    L: Expression,
    S: Numeric,
    O: Pointwise,
    (L::Elem, S): CommonNum,
{
    type Elem = Promoted<L::Elem, S>;

    #[inline]
    fn size(&self) -> usize {
        self.left.size()
    }

    #[inline]
    fn at(&self, i: usize) -> Self::Elem {
        self.op.apply(self.left.at(i), self.right)
    }

    fn validate(&self) -> Result<(), Error> {
        self.left.validate()
    }
}

impl<S, R, O> ScalarVec<S, R, O>
where
    S: Numeric,
    R: Expression,
    O: Pointwise,
    (S, R::Elem): CommonNum,
{
    pub fn new(left: S, right: R) -> Self {
        ScalarVec {
            left,
            right,
            op: O::default(),
        }
    }
}

impl<S, R, O> Expression for ScalarVec<S, R, O>
where
    S: Numeric,
    R: Expression,
    O: Pointwise,
    (S, R::Elem): CommonNum,
{
    type Elem = Promoted<S, R::Elem>;

    #[inline]
    fn size(&self) -> usize {
        self.right.size()
    }

    #[inline]
    fn at(&self, i: usize) -> Self::Elem {
        self.op.apply(self.left, self.right.at(i))
    }

    fn validate(&self) -> Result<(), Error> {
        self.right.validate()
    }
}

impl<L, R, O> fmt::Display for VecVec<L, R, O>
where
    Self: Expression,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display(self, f)
    }
}

impl<L, S, O> fmt::Display for VecScalar<L, S, O>
where
    Self: Expression,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display(self, f)
    }
}

impl<S, R, O> fmt::Display for ScalarVec<S, R, O>
where
    Self: Expression,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display(self, f)
    }
}

/// Fallible addition of expressions
///
/// Unlike `+`, which defers the size check until the expression is
/// materialized, [TryAdd::try_add] checks operand sizes immediately.
///
/// ```
/// use exprvec::{vector, Error, Vector};
/// use exprvec::vector::TryAdd;
///
/// let a: Vector<i32> = vector![1, 2];
/// let b: Vector<i32> = vector![1, 2, 3];
/// assert_eq!((&a).try_add(&b).err(), Some(Error::DimensionMismatch(2, 3)));
/// ```
///
pub trait TryAdd<Rhs> {
    type Output;
    fn try_add(self, rhs: Rhs) -> Result<Self::Output, Error>;
}

/// Fallible subtraction of expressions, see [TryAdd]
pub trait TrySub<Rhs> {
    type Output;
    fn try_sub(self, rhs: Rhs) -> Result<Self::Output, Error>;
}

impl<L, R> TryAdd<R> for L
where
    L: Expression,
    R: Expression,
    (L::Elem, R::Elem): CommonNum,
{
    type Output = VecVec<L, R, AddOp>;
    fn try_add(self, rhs: R) -> Result<Self::Output, Error> {
        VecVec::try_new(self, rhs)
    }
}

impl<L, R> TrySub<R> for L
where
    L: Expression,
    R: Expression,
    (L::Elem, R::Elem): CommonNum,
{
    type Output = VecVec<L, R, SubOp>;
    fn try_sub(self, rhs: R) -> Result<Self::Output, Error> {
        VecVec::try_new(self, rhs)
    }
}
