use crate::register;
use crate::vector::types::Numeric;

/// Coerce Two Values to Commonly Operable Data
///
/// Provided a tuple of (lhs, rhs), coerce both into data that can be combined
/// arithmetically, the "lowest common denominator" of the pair. The common
/// type is the promotion of the two element types:
///
/// - identical types are left as they are,
/// - integer with integer promotes to the wider integer,
/// - integer with float promotes to that float,
/// - [f32] with [f64] promotes to [f64].
///
/// ```
/// use exprvec::vector::coercion::CommonNum;
///
/// let (l, r) = (2_i8, 0.5_f32).into_common();
/// assert_eq!((l, r), (2.0_f32, 0.5_f32));
/// ```
///
pub trait CommonNum {
    type Common: Numeric;
    fn into_common(self) -> (Self::Common, Self::Common);
}

/// The promoted element type of a pair of element types
pub type Promoted<L, R> = <(L, R) as CommonNum>::Common;

impl<T: Numeric> CommonNum for (T, T) {
    type Common = T;
    #[inline]
    fn into_common(self) -> (Self::Common, Self::Common) {
        self
    }
}

register!(CommonNum: (i8, i16) => i16);
register!(CommonNum: (i8, i32) => i32);
register!(CommonNum: (i8, i64) => i64);
register!(CommonNum: (i8, f32) => f32);
register!(CommonNum: (i8, f64) => f64);

register!(CommonNum: (i16, i32) => i32);
register!(CommonNum: (i16, i64) => i64);
register!(CommonNum: (i16, f32) => f32);
register!(CommonNum: (i16, f64) => f64);

register!(CommonNum: (i32, i64) => i64);
register!(CommonNum: (i32, f32) => f32);
register!(CommonNum: (i32, f64) => f64);

register!(CommonNum: (i64, f32) => f32);
register!(CommonNum: (i64, f64) => f64);

register!(CommonNum: (f32, f64) => f64);
