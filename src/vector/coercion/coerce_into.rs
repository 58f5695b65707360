/// CoerceInto
///
/// A coercion trait often equivalent to [Into]. Unlike [Into], narrowing
/// conversions are permitted and follow the host's `as` conversion, which is
/// what allows an expression to be written into a vector of a narrower
/// declared element type.
///
/// ```
/// use exprvec::vector::coercion::CoerceInto;
///
/// let x: f64 = 3_i8.coerce();
/// assert_eq!(x, 3.0);
///
/// let y: i16 = 2.75_f32.coerce();
/// assert_eq!(y, 2);
/// ```
///
pub trait CoerceInto<T> {
    fn coerce(self) -> T;
}

// i8
impl CoerceInto<i8> for i8 { #[inline] fn coerce(self) -> i8 { self } }
impl CoerceInto<i16> for i8 { #[inline] fn coerce(self) -> i16 { self as i16 } }
impl CoerceInto<i32> for i8 { #[inline] fn coerce(self) -> i32 { self as i32 } }
impl CoerceInto<i64> for i8 { #[inline] fn coerce(self) -> i64 { self as i64 } }
impl CoerceInto<f32> for i8 { #[inline] fn coerce(self) -> f32 { self as f32 } }
impl CoerceInto<f64> for i8 { #[inline] fn coerce(self) -> f64 { self as f64 } }

// i16
impl CoerceInto<i8> for i16 { #[inline] fn coerce(self) -> i8 { self as i8 } }
impl CoerceInto<i16> for i16 { #[inline] fn coerce(self) -> i16 { self } }
impl CoerceInto<i32> for i16 { #[inline] fn coerce(self) -> i32 { self as i32 } }
impl CoerceInto<i64> for i16 { #[inline] fn coerce(self) -> i64 { self as i64 } }
impl CoerceInto<f32> for i16 { #[inline] fn coerce(self) -> f32 { self as f32 } }
impl CoerceInto<f64> for i16 { #[inline] fn coerce(self) -> f64 { self as f64 } }

// i32
impl CoerceInto<i8> for i32 { #[inline] fn coerce(self) -> i8 { self as i8 } }
impl CoerceInto<i16> for i32 { #[inline] fn coerce(self) -> i16 { self as i16 } }
impl CoerceInto<i32> for i32 { #[inline] fn coerce(self) -> i32 { self } }
impl CoerceInto<i64> for i32 { #[inline] fn coerce(self) -> i64 { self as i64 } }
impl CoerceInto<f32> for i32 { #[inline] fn coerce(self) -> f32 { self as f32 } }
impl CoerceInto<f64> for i32 { #[inline] fn coerce(self) -> f64 { self as f64 } }

// i64
impl CoerceInto<i8> for i64 { #[inline] fn coerce(self) -> i8 { self as i8 } }
impl CoerceInto<i16> for i64 { #[inline] fn coerce(self) -> i16 { self as i16 } }
impl CoerceInto<i32> for i64 { #[inline] fn coerce(self) -> i32 { self as i32 } }
impl CoerceInto<i64> for i64 { #[inline] fn coerce(self) -> i64 { self } }
impl CoerceInto<f32> for i64 { #[inline] fn coerce(self) -> f32 { self as f32 } }
impl CoerceInto<f64> for i64 { #[inline] fn coerce(self) -> f64 { self as f64 } }

// f32
impl CoerceInto<i8> for f32 { #[inline] fn coerce(self) -> i8 { self as i8 } }
impl CoerceInto<i16> for f32 { #[inline] fn coerce(self) -> i16 { self as i16 } }
impl CoerceInto<i32> for f32 { #[inline] fn coerce(self) -> i32 { self as i32 } }
impl CoerceInto<i64> for f32 { #[inline] fn coerce(self) -> i64 { self as i64 } }
impl CoerceInto<f32> for f32 { #[inline] fn coerce(self) -> f32 { self } }
impl CoerceInto<f64> for f32 { #[inline] fn coerce(self) -> f64 { self as f64 } }

// f64
impl CoerceInto<i8> for f64 { #[inline] fn coerce(self) -> i8 { self as i8 } }
impl CoerceInto<i16> for f64 { #[inline] fn coerce(self) -> i16 { self as i16 } }
impl CoerceInto<i32> for f64 { #[inline] fn coerce(self) -> i32 { self as i32 } }
impl CoerceInto<i64> for f64 { #[inline] fn coerce(self) -> i64 { self as i64 } }
impl CoerceInto<f32> for f64 { #[inline] fn coerce(self) -> f32 { self as f32 } }
impl CoerceInto<f64> for f64 { #[inline] fn coerce(self) -> f64 { self } }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening_is_exact() {
        assert_eq!(CoerceInto::<i64>::coerce(-128_i8), -128_i64);
        assert_eq!(CoerceInto::<f64>::coerce(0.5_f32), 0.5_f64);
        assert_eq!(CoerceInto::<f32>::coerce(-7_i16), -7.0_f32);
    }

    #[test]
    fn narrowing_follows_as_conversion() {
        assert_eq!(CoerceInto::<i8>::coerce(300_i32), 300_i32 as i8);
        assert_eq!(CoerceInto::<i32>::coerce(-1.9_f64), -1);
        assert_eq!(CoerceInto::<i8>::coerce(f64::NAN), 0);
    }
}
