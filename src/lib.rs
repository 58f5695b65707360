//! # exprvec
//!
//! Natural arithmetic over one-dimensional numeric vectors and scalars,
//! evaluated lazily. An expression such as `&a + &b * 2 - 1` is a tree of
//! thin, non-owning views; it is realized by constructing or assigning a
//! [Vector], which walks the tree exactly once into freshly allocated
//! storage.
//!
//! Every node computes its elements under the promotion of its operands'
//! element types (see [vector::coercion::CommonNum]), so mixing integer and
//! floating point operands is well defined at every level of the tree.
//!

pub mod error;
pub mod vector;

pub use error::Error;
pub use vector::{Expression, Vector};
