use num_bigint::BigInt;
use num_traits::{One, PrimInt};
use std::fmt::Display;

/// Estimated scalar operations to reduce an `n x n` system to upper
/// triangular form by Gaussian elimination without pivoting.
///
/// Every entry below the diagonal is eliminated by computing a multiplier
/// `l_ij = m_ij / m_jj` and subtracting `l_ij * row_j` from `row_i`. Each
/// such row update is charged `n` operations, giving `n * n * (n - 1) / 2`
/// in total.
///
/// Non-positive `n` yields `0`: the loops are simply empty.
///
/// # Panics
///
/// The sum is accumulated in `T`, so a count that does not fit panics in
/// debug builds and wraps in release builds. Use
/// [`checked_gaussian_elimination_cost`] or [`big_gaussian_elimination_cost`]
/// when `n` is not known to be small.
pub fn gaussian_elimination_cost<T: PrimInt + Display>(n: T) -> T {
    let one = T::one();
    let mut cost = T::zero();

    // Column n has no rows below it, so stop at n - 1.
    let mut j = one;
    while j < n {
        let mut i = j + one;
        loop {
            cost = cost + n;
            if i == n {
                break;
            }
            i = i + one;
        }
        log::trace!("column {} eliminated", j);
        j = j + one;
    }
    cost
}

/// Closed form of [`gaussian_elimination_cost`], with the same overflow
/// behaviour.
pub fn gaussian_elimination_cost_closed<T: PrimInt>(n: T) -> T {
    if n <= T::zero() {
        return T::zero();
    }
    let two = T::one() + T::one();
    n * n * (n - T::one()) / two
}

/// Estimated operations to solve `Ax = b` as `A^{-1} * b`: `n^3` for the
/// inversion plus `n^2` for the matrix-vector product.
///
/// Zero and negative dimensions are not rejected.
///
/// # Panics
///
/// Overflows like ordinary arithmetic on `T`: panics in debug builds and
/// wraps in release builds. [`big_inverse_method_cost`] is exact for every
/// `i64`.
pub fn inverse_method_cost<T: PrimInt>(n: T) -> T {
    let inversion = n.pow(3);
    let multiplication = n.pow(2);
    inversion + multiplication
}

/// Like [`gaussian_elimination_cost`] but returns `None` on overflow.
///
/// Computed from the closed form, so it is constant time in `n`. The
/// division by two is applied to whichever of `n` and `n - 1` is even
/// before multiplying, so the result is exact whenever it fits in `T`.
pub fn checked_gaussian_elimination_cost<T: PrimInt>(n: T) -> Option<T> {
    if n <= T::zero() {
        return Some(T::zero());
    }
    let one = T::one();
    let two = one + one;
    let m = n - one;
    let (a, b) = if n % two == T::zero() {
        (n / two, m)
    } else {
        (n, m / two)
    };
    n.checked_mul(&a)?.checked_mul(&b)
}

/// Like [`inverse_method_cost`] but returns `None` on overflow.
pub fn checked_inverse_method_cost<T: PrimInt>(n: T) -> Option<T> {
    let n2 = n.checked_mul(&n)?;
    let n3 = n2.checked_mul(&n)?;
    n3.checked_add(&n2)
}

/// Exact [`gaussian_elimination_cost`] for any `i64` dimension.
pub fn big_gaussian_elimination_cost(n: i64) -> BigInt {
    if n <= 0 {
        return BigInt::default();
    }
    let n = BigInt::from(n);
    &n * &n * (&n - BigInt::one()) / BigInt::from(2)
}

/// Exact [`inverse_method_cost`] for any `i64` dimension.
pub fn big_inverse_method_cost(n: i64) -> BigInt {
    let n = BigInt::from(n);
    let n2 = &n * &n;
    &n2 * &n + n2
}
