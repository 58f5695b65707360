//! Vectors
//!
//! This module implements typed numeric vectors and the lazily evaluated
//! expressions built from them. Arithmetic between borrowed vectors and
//! scalars produces expression nodes; elements are only computed when an
//! expression is materialized into a [Vector], in a single fused pass and
//! without intermediate vectors.
//!
//! ```
//! use exprvec::{vector, Vector};
//!
//! let a: Vector<i8> = vector![0, 1, 2, 3];
//! let c: Vector<f64> = vector![0.01, 0.02, 0.03, 0.04];
//!
//! let r = Vector::<f64>::from_expr(1.05_f64 + 0.5_f32 * &c + &a * 2_i32 - 2_i32)?;
//! assert!((r[0] + 0.945).abs() < 1e-12);
//! # Ok::<(), exprvec::Error>(())
//! ```
//!
mod vector;
pub use vector::*;

mod expr;
pub use expr::*;

mod iterators;
pub use iterators::*;

pub mod operators;

mod render;
pub use render::*;

#[cfg(feature = "random")]
mod random;

pub mod coercion;
pub mod types;
pub mod vecops;
