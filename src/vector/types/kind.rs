use std::any::TypeId;

use strum::IntoEnumIterator;

/// Element Kind
///
/// A runtime tag for each of the numeric element types. Kinds are ordered from
/// narrowest to widest integer, followed by the floating point types.
///
/// ```
/// use exprvec::vector::types::ElementKind;
/// use std::str::FromStr;
///
/// assert_eq!(ElementKind::I16.to_string(), "i16");
/// assert_eq!(ElementKind::from_str("f32"), Ok(ElementKind::F32));
/// ```
///
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum ElementKind {
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl ElementKind {
    /// Find the kind of a type, if it is one of the numeric element types
    pub fn of<T: ?Sized + 'static>() -> Option<ElementKind> {
        let id = TypeId::of::<T>();
        ElementKind::iter().find(|kind| kind.element_type_id() == id)
    }

    fn element_type_id(self) -> TypeId {
        match self {
            ElementKind::I8 => TypeId::of::<i8>(),
            ElementKind::I16 => TypeId::of::<i16>(),
            ElementKind::I32 => TypeId::of::<i32>(),
            ElementKind::I64 => TypeId::of::<i64>(),
            ElementKind::F32 => TypeId::of::<f32>(),
            ElementKind::F64 => TypeId::of::<f64>(),
        }
    }

    pub fn is_integer(self) -> bool {
        !self.is_float()
    }

    pub fn is_float(self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }

    /// Width of the element type in bits
    pub fn width(self) -> u32 {
        match self {
            ElementKind::I8 => 8,
            ElementKind::I16 => 16,
            ElementKind::I32 | ElementKind::F32 => 32,
            ElementKind::I64 | ElementKind::F64 => 64,
        }
    }

    /// Promote a Pair of Kinds
    ///
    /// The runtime mirror of [crate::vector::coercion::CommonNum]. Integers
    /// promote to the wider integer, any float wins over any integer and
    /// [ElementKind::F64] wins over [ElementKind::F32].
    ///
    /// ```
    /// use exprvec::vector::types::ElementKind::*;
    ///
    /// assert_eq!(I8.promote(I64), I64);
    /// assert_eq!(I64.promote(F32), F32);
    /// assert_eq!(F32.promote(F64), F64);
    /// ```
    ///
    pub fn promote(self, other: ElementKind) -> ElementKind {
        match (self, other) {
            (l, r) if l == r => l,
            (ElementKind::F64, _) | (_, ElementKind::F64) => ElementKind::F64,
            (ElementKind::F32, _) | (_, ElementKind::F32) => ElementKind::F32,
            (l, r) if l.width() >= r.width() => l,
            (_, r) => r,
        }
    }
}

/// Test whether a type is one of the numeric element types
///
/// ```
/// use exprvec::vector::types::is_numeric;
///
/// assert!(is_numeric::<i8>());
/// assert!(is_numeric::<f64>());
/// assert!(!is_numeric::<u8>());
/// assert!(!is_numeric::<&str>());
/// ```
///
pub fn is_numeric<T: ?Sized + 'static>() -> bool {
    ElementKind::of::<T>().is_some()
}
