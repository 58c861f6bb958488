//! Binomial coefficients.

/// Number of `k`-element subsets of an `n`-element set, `C(n, k)`.
///
/// Computed multiplicatively as `n·(n-1)·…·(n-k+1) / k!`, one factor at
/// a time; after step `i` the accumulator holds `C(n-k+i, i)`, so every
/// intermediate division is exact.
///
/// `binomial(n, 0) == 1` and `binomial(n, k) == 0` for `k > n`.
///
/// # Examples
///
/// ```
/// use u_pmedian::combinatorics::binomial;
///
/// assert_eq!(binomial(5, 2), 10);
/// assert_eq!(binomial(60, 3), 34_220);
/// ```
///
/// # Panics
///
/// Panics if an intermediate product overflows `u64`.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut c: u64 = 1;
    for i in 1..=k {
        c = c
            .checked_mul(n - k + i)
            .expect("binomial coefficient overflows u64")
            / i;
    }
    c
}
