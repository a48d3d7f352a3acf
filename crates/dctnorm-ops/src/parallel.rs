//! Element-wise and row-wise execution helpers.
//!
//! With the `parallel` feature (default) work is split across cores with
//! Rayon; without it the same closures run serially. Every closure is a pure
//! function of its element or row, so both paths produce identical results.
//!
//! # Example
//!
//! ```rust
//! use dctnorm_core::Matrix;
//! use dctnorm_ops::parallel;
//!
//! let m = Matrix::filled(64, 64, 3u8);
//! let doubled: Matrix<f32> = parallel::map_matrix(&m, |v| v as f32 * 2.0);
//! assert_eq!(doubled.get(10, 10), Some(6.0));
//! ```

use dctnorm_core::Matrix;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Maps every element of `src` into a new matrix of the same shape.
pub fn map_matrix<A, B, F>(src: &Matrix<A>, f: F) -> Matrix<B>
where
    A: Copy + Sync,
    B: Copy + Default + Send,
    F: Fn(A) -> B + Sync + Send,
{
    let (rows, cols) = src.shape();
    let mut dst = Matrix::filled(rows, cols, B::default());

    #[cfg(feature = "parallel")]
    dst.data_mut()
        .par_iter_mut()
        .zip(src.data().par_iter())
        .for_each(|(d, &s)| *d = f(s));

    #[cfg(not(feature = "parallel"))]
    dst.data_mut()
        .iter_mut()
        .zip(src.data().iter())
        .for_each(|(d, &s)| *d = f(s));

    dst
}

/// Replaces every element with `f(element)` in place.
pub fn update_in_place<T, F>(data: &mut [T], f: F)
where
    T: Copy + Send,
    F: Fn(T) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    data.par_iter_mut().for_each(|v| *v = f(*v));

    #[cfg(not(feature = "parallel"))]
    data.iter_mut().for_each(|v| *v = f(*v));
}

/// Runs `f` on every row of a row-major buffer `width` elements wide.
pub fn for_each_row<T, F>(data: &mut [T], width: usize, f: F)
where
    T: Send,
    F: Fn(&mut [T]) + Sync + Send,
{
    debug_assert!(width > 0 && data.len() % width == 0);

    #[cfg(feature = "parallel")]
    data.par_chunks_mut(width).for_each(|row| f(row));

    #[cfg(not(feature = "parallel"))]
    data.chunks_mut(width).for_each(|row| f(row));
}
