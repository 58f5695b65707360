use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Sub};

use super::ElementKind;
use crate::vector::coercion::CoerceInto;

/// Numeric
///
/// Implemented exactly for the numeric element types. Every numeric type can
/// be coerced into every other, which is what allows an expression of any
/// promoted element type to be written into a vector of any declared element
/// type.
///
/// Only types implementing [Numeric] can appear as scalars in expressions,
/// so an operator applied to anything else simply does not resolve.
///
pub trait Numeric:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + CoerceInto<i8>
    + CoerceInto<i16>
    + CoerceInto<i32>
    + CoerceInto<i64>
    + CoerceInto<f32>
    + CoerceInto<f64>
{
    const KIND: ElementKind;
}

impl Numeric for i8 {
    const KIND: ElementKind = ElementKind::I8;
}

impl Numeric for i16 {
    const KIND: ElementKind = ElementKind::I16;
}

impl Numeric for i32 {
    const KIND: ElementKind = ElementKind::I32;
}

impl Numeric for i64 {
    const KIND: ElementKind = ElementKind::I64;
}

impl Numeric for f32 {
    const KIND: ElementKind = ElementKind::F32;
}

impl Numeric for f64 {
    const KIND: ElementKind = ElementKind::F64;
}
