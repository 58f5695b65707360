//! Element types
//!
//! Vectors and expressions are built over a closed set of primitive numeric
//! element types: [i8], [i16], [i32], [i64], [f32] and [f64]. Each of these
//! implements [Numeric], which declares the arithmetic and conversions the
//! expression engine relies on, as well as an [ElementKind] tag that makes the
//! element type queryable at runtime.
//!
//! Types outside of this set do not implement [Numeric] and therefore can not
//! participate in expressions. The same membership can be asked of any type
//! through [is_numeric].
//!

mod kind;
pub use kind::*;

mod numerics;
pub use numerics::*;
