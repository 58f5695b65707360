use std::fmt;
use std::ops::{Index, IndexMut};

use super::coercion::CoerceInto;
use super::expr::Expression;
use super::render::display;
use super::types::{ElementKind, Numeric};
use crate::error::Error;

/// Storage
///
/// A vector either holds no storage at all, or owns a buffer of exactly as
/// many initialized elements as its size. A zero-length vector is always
/// [Storage::Empty].
///
#[derive(Debug, Clone, Default, PartialEq)]
enum Storage<T> {
    #[default]
    Empty,
    Owned(Box<[T]>),
}

impl<T> Storage<T> {
    fn adopt(buf: Vec<T>) -> Self {
        if buf.is_empty() {
            Storage::Empty
        } else {
            Storage::Owned(buf.into_boxed_slice())
        }
    }
}

/// Vector
///
/// The only owning container, and the only leaf of an expression. A borrowed
/// vector is an [Expression] of its element type, so arithmetic on `&Vector`
/// builds lazily evaluated expression nodes rather than new vectors.
///
/// ```
/// use exprvec::{vector, Vector};
///
/// let a: Vector<i32> = vector![1, 2, 3, 4];
/// let b: Vector<i32> = vector![10, 20, 30, 40];
///
/// let r = Vector::<i32>::from_expr(&a + &b)?;
/// assert_eq!(r.as_slice(), &[11, 22, 33, 44]);
/// # Ok::<(), exprvec::Error>(())
/// ```
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vector<T: Numeric> {
    storage: Storage<T>,
}

impl<T: Numeric> Vector<T> {
    /// Create an empty vector, owning no storage
    pub fn new() -> Self {
        Vector {
            storage: Storage::Empty,
        }
    }

    /// Reserve storage for exactly `n` elements
    pub(crate) fn allocate(n: usize) -> Result<Vec<T>, Error> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(n)
            .map_err(|_| Error::AllocationFailure(n))?;
        Ok(buf)
    }

    pub(crate) fn from_buffer(buf: Vec<T>) -> Self {
        Vector {
            storage: Storage::adopt(buf),
        }
    }

    /// Create a vector of `n` default (zero) elements
    pub fn with_size(n: usize) -> Result<Self, Error> {
        log::trace!("allocating {n} elements of {}", T::KIND);
        let mut buf = Self::allocate(n)?;
        buf.resize(n, T::default());
        Ok(Self::from_buffer(buf))
    }

    /// Materialize an Expression
    ///
    /// Validates the shape of the expression, allocates storage for exactly
    /// [Expression::size] elements and evaluates the expression in a single
    /// pass, coercing each element to the vector's element type. No other
    /// storage is allocated along the way.
    ///
    /// ```
    /// use exprvec::{vector, Vector};
    ///
    /// let a: Vector<i32> = vector![1, 2, 3];
    /// let r = Vector::<f64>::from_expr(&a * 0.5_f64)?;
    /// assert_eq!(r.as_slice(), &[0.5, 1.0, 1.5]);
    /// # Ok::<(), exprvec::Error>(())
    /// ```
    ///
    pub fn from_expr<E>(expr: E) -> Result<Self, Error>
    where
        E: Expression,
        E::Elem: CoerceInto<T>,
    {
        expr.validate()?;
        let n = expr.size();
        log::trace!(
            "materializing {n} elements of {} as {}",
            <E::Elem as Numeric>::KIND,
            T::KIND
        );

        let mut buf = Self::allocate(n)?;
        buf.extend((0..n).map(|i| expr.at(i).coerce()));
        Ok(Self::from_buffer(buf))
    }

    /// Assign an Expression
    ///
    /// The expression is first materialized into a temporary vector. Only
    /// once that succeeds is the current storage released and the
    /// temporary's storage adopted, so on error the vector is left as it was.
    ///
    /// Expressions which refer to the vector being assigned are written with
    /// [crate::assign!], since the vector can not be borrowed by the
    /// expression while it is being mutated.
    ///
    pub fn assign<E>(&mut self, expr: E) -> Result<(), Error>
    where
        E: Expression,
        E::Elem: CoerceInto<T>,
    {
        let tmp = Self::from_expr(expr)?;
        self.adopt(tmp);
        Ok(())
    }

    /// Assign an Expression without a temporary
    ///
    /// When the vector already holds exactly as many elements as the
    /// expression, elements are written into the existing storage. Since the
    /// vector is mutably borrowed, the expression can not refer to it.
    /// Otherwise this behaves as [Vector::assign].
    ///
    pub fn assign_unaliased<E>(&mut self, expr: E) -> Result<(), Error>
    where
        E: Expression,
        E::Elem: CoerceInto<T>,
    {
        expr.validate()?;
        match &mut self.storage {
            Storage::Owned(buf) if buf.len() == expr.size() => {
                log::trace!("assigning {} elements in place", buf.len());
                for (i, x) in buf.iter_mut().enumerate() {
                    *x = expr.at(i).coerce();
                }
                Ok(())
            }
            _ => self.assign(expr),
        }
    }

    /// Release the current storage and take ownership of another vector's
    pub fn adopt(&mut self, other: Vector<T>) {
        self.release();
        self.storage = other.storage;
    }

    /// Release storage, leaving an empty vector
    ///
    /// Releasing an already empty vector does nothing.
    ///
    pub fn release(&mut self) {
        if let Storage::Owned(buf) = std::mem::take(&mut self.storage) {
            log::trace!("releasing {} elements of {}", buf.len(), T::KIND);
        }
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.as_slice().len()
    }

    /// See [Self::size] for more information
    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Whether the vector currently owns an allocation
    pub fn owns_storage(&self) -> bool {
        matches!(self.storage, Storage::Owned(_))
    }

    /// The element kind of the vector
    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    pub fn as_slice(&self) -> &[T] {
        match &self.storage {
            Storage::Empty => &[],
            Storage::Owned(buf) => buf,
        }
    }

    /// Get a single element, if the index is in range
    pub fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).copied()
    }

    /// Get a single element, failing if the index is out of range
    pub fn try_get(&self, index: usize) -> Result<T, Error> {
        self.get(index)
            .ok_or(Error::IndexOutOfRange(index, self.size()))
    }

    /// Set a single element
    ///
    /// The value is coerced into the vector's element type.
    ///
    /// ```
    /// use exprvec::Vector;
    ///
    /// let mut v = Vector::<i16>::with_size(2)?;
    /// v.set(1, 7.9_f64)?;
    /// assert_eq!(v.as_slice(), &[0, 7]);
    /// assert!(v.set(2, 1_i16).is_err());
    /// # Ok::<(), exprvec::Error>(())
    /// ```
    ///
    pub fn set<U>(&mut self, index: usize, value: U) -> Result<(), Error>
    where
        U: CoerceInto<T>,
    {
        let n = self.size();
        match &mut self.storage {
            Storage::Owned(buf) if index < n => {
                buf[index] = value.coerce();
                Ok(())
            }
            _ => Err(Error::IndexOutOfRange(index, n)),
        }
    }
}

/// Assign an expression which may refer to the vector being assigned
///
/// The expression is materialized into a temporary before the destination is
/// mutably borrowed, then the destination adopts the temporary's storage.
/// Each element is therefore computed from the destination's contents before
/// assignment. Evaluates to `Result<(), Error>`.
///
/// ```
/// use exprvec::{assign, vector, Vector};
///
/// let mut v: Vector<i32> = vector![1, 2, 3];
/// assign!(v = &v + 10_i32)?;
/// assert_eq!(v.as_slice(), &[11, 12, 13]);
/// # Ok::<(), exprvec::Error>(())
/// ```
///
/// The destination may be any field path, such as `self.values`.
///
#[macro_export]
macro_rules! assign {
    ( $($dst:tt).+ = $expr:expr ) => {
        $crate::vector::Vector::from_expr($expr).map(|tmp| $($dst).+.adopt(tmp))
    };
}

/// Build a vector from a list of elements
///
/// ```
/// use exprvec::{vector, Vector};
///
/// let v: Vector<f32> = vector![1.0, 2.5];
/// assert_eq!(v.size(), 2);
/// ```
///
#[macro_export]
macro_rules! vector {
    () => {
        $crate::vector::Vector::new()
    };
    ( $($x:expr),+ $(,)? ) => {
        $crate::vector::Vector::from(vec![$($x),+])
    };
}

impl<'a, T: Numeric> Expression for &'a Vector<T> {
    type Elem = T;

    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        (**self).as_slice()[i]
    }
}

impl<T: Numeric> Index<usize> for Vector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T: Numeric> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match &mut self.storage {
            Storage::Owned(buf) => &mut buf[index],
            Storage::Empty => panic!("index {index} is out of range for an empty vector"),
        }
    }
}

impl<T: Numeric> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_buffer(value)
    }
}

impl<T: Numeric> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_buffer(iter.into_iter().collect())
    }
}

impl<T: Numeric> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display(&self, f)
    }
}
