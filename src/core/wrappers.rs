//! Inner-product implementations for slice-backed vectors.
//!
//! The unit type carries the serial (or Rayon-parallel) Euclidean inner
//! product, so generic solver code can write `let ip = ();` and call
//! `ip.dot(..)` / `ip.norm(..)` without threading a context object through.

use crate::core::traits::InnerProduct;
use num_traits::Float;

/// Euclidean dot product and norm over slices, with optional Rayon
/// parallelism when the `rayon` feature is enabled.
impl<T: Float + Send + Sync> InnerProduct<[T]> for () {
    type Scalar = T;

    fn dot(&self, x: &[T], y: &[T]) -> T {
        assert_eq!(x.len(), y.len(), "Vectors must have the same length");
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            x.par_iter()
                .zip(y.par_iter())
                .map(|(xi, yi)| *xi * *yi)
                .reduce(|| T::zero(), |acc, v| acc + v)
        }
        #[cfg(not(feature = "rayon"))]
        {
            x.iter()
                .zip(y.iter())
                .map(|(xi, yi)| *xi * *yi)
                .fold(T::zero(), |acc, v| acc + v)
        }
    }

    fn norm(&self, x: &[T]) -> T {
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            x.par_iter()
                .map(|xi| *xi * *xi)
                .reduce(|| T::zero(), |acc, v| acc + v)
                .sqrt()
        }
        #[cfg(not(feature = "rayon"))]
        {
            x.iter()
                .map(|xi| *xi * *xi)
                .fold(T::zero(), |acc, v| acc + v)
                .sqrt()
        }
    }
}
