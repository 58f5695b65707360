//! Random Vectors
//!
//! Constructors filling a vector with random draws. Draws are made in [f64]
//! and coerced into the vector's element type. Enabled by the `random`
//! feature.
//!

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

use super::coercion::CoerceInto;
use super::types::Numeric;
use super::Vector;
use crate::error::Error;

impl<T: Numeric> Vector<T>
where
    f64: CoerceInto<T>,
{
    /// Uniformly Distributed Random Vector
    ///
    /// Create a vector of `n` values drawn uniformly from `[min, max]`.
    ///
    /// ```
    /// use exprvec::Vector;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let v = Vector::<f64>::runif(20, 0.0, 0.01, &mut rng)?;
    /// assert_eq!(v.size(), 20);
    /// assert!(v.as_slice().iter().all(|x| (0.0..=0.01).contains(x)));
    /// # Ok::<(), exprvec::Error>(())
    /// ```
    ///
    pub fn runif<R>(n: usize, min: f64, max: f64, rng: &mut R) -> Result<Self, Error>
    where
        R: Rng + ?Sized,
    {
        if !(min <= max && (max - min).is_finite()) {
            return Err(Error::InvalidDistribution(format!(
                "uniform bounds must be finite with min <= max, found [{min}, {max}]"
            )));
        }

        log::trace!("drawing {n} uniform values of {}", T::KIND);
        let between = Uniform::new_inclusive(min, max);
        let mut buf = Self::allocate(n)?;
        buf.extend((0..n).map(|_| between.sample(rng).coerce()));
        Ok(Self::from_buffer(buf))
    }

    /// Normally Distributed Random Vector
    ///
    /// Create a vector of `n` values drawn from a normal distribution.
    ///
    pub fn rnorm<R>(n: usize, mean: f64, std: f64, rng: &mut R) -> Result<Self, Error>
    where
        R: Rng + ?Sized,
    {
        let normal =
            Normal::new(mean, std).map_err(|e| Error::InvalidDistribution(e.to_string()))?;

        log::trace!("drawing {n} normal values of {}", T::KIND);
        let mut buf = Self::allocate(n)?;
        buf.extend((0..n).map(|_| normal.sample(rng).coerce()));
        Ok(Self::from_buffer(buf))
    }
}
