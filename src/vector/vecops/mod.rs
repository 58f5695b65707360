//! Vector Operations
//!
//! This module implements the element-wise primitives for algebraic
//! operations. Each primitive promotes its operands to their common numeric
//! type before applying the host's arithmetic.
//!

mod math;
pub use math::*;
