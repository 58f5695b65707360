//! Tools for coercing between element types
//!
//! The primary workhorse of this implementation is [CoerceInto], which
//! provides unilateral mappings between the numeric element types.
//!
//! For binary operations, an additional mapping is provided for pairs of
//! inputs, [CommonNum]. Provided two inputs, it names the common numeric
//! representation both are coerced into before performing computation. This
//! pairwise relation is the promotion table of the expression engine, and
//! [Promoted] is shorthand for its result.
//!

mod macros;

mod coerce_into;
pub use coerce_into::*;

mod common_num;
pub use common_num::*;
