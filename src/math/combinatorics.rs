//! Exact counting primitives for arrangements and selections
//!
//! Every count is returned as a `u128` computed with checked arithmetic, so results are
//! exact or an error; nothing wraps silently. The largest factorial that fits is `34!`.

use crate::io::error::{Result, computation_error, invalid_parameter};

/// Number of orderings of `n` distinct elements, `n!`
///
/// `permutations(0)` is 1.
///
/// # Errors
///
/// Returns a computation error if `n!` does not fit in a `u128` (`n > 34`)
pub fn permutations(n: u64) -> Result<u128> {
    (1..=n)
        .try_fold(1_u128, |acc, i| acc.checked_mul(u128::from(i)))
        .ok_or_else(|| computation_error("permutations", &format!("{n}! overflows u128")))
}

/// Number of unordered selections of `k` out of `n` elements, "n choose k"
///
/// Uses the multiplicative formula over `min(k, n - k)` factors. After step `i` the
/// running value is `C(n, i + 1)`. The common factor of the running value and `i + 1`
/// is cancelled before multiplying, so no intermediate exceeds the next coefficient.
///
/// # Errors
///
/// Returns an invalid parameter error if `k > n`, or a computation error if the
/// result does not fit in a `u128`
pub fn combinations(n: u64, k: u64) -> Result<u128> {
    ensure_selection_fits(n, k)?;

    let steps = k.min(n - k);
    (0..steps)
        .try_fold(1_u128, |acc, i| {
            let divisor = u128::from(i + 1);
            let common = gcd(acc, divisor);
            // divisor / common is coprime with acc / common, so it divides n - i
            let factor = u128::from(n - i) / (divisor / common);
            (acc / common).checked_mul(factor)
        })
        .ok_or_else(|| computation_error("combinations", &format!("C({n}, {k}) overflows u128")))
}

/// Number of ordered selections of `k` out of `n` distinct elements without repetition
///
/// Equal to `combinations(n, k) * permutations(k)`, evaluated as the falling factorial
/// `n (n - 1) ... (n - k + 1)` so that `k!` never has to be formed on its own.
///
/// # Errors
///
/// Returns an invalid parameter error if `k > n`, or a computation error if the
/// result does not fit in a `u128`
pub fn ordered_selections(n: u64, k: u64) -> Result<u128> {
    ensure_selection_fits(n, k)?;

    (0..k)
        .try_fold(1_u128, |acc, i| acc.checked_mul(u128::from(n - i)))
        .ok_or_else(|| {
            computation_error(
                "ordered_selections",
                &format!("V({n}, {k}) overflows u128"),
            )
        })
}

/// Number of ordered selections of `k` out of `n` elements when elements may repeat, `n^k`
///
/// Any `k` is allowed, including `k > n`. `0^0` is 1.
///
/// # Errors
///
/// Returns a computation error if `n^k` does not fit in a `u128`
pub fn ordered_selections_with_repetition(n: u64, k: u64) -> Result<u128> {
    let overflow = || {
        computation_error(
            "ordered_selections_with_repetition",
            &format!("{n}^{k} overflows u128"),
        )
    };

    usize::try_from(k)
        .ok()
        .and_then(|exponent| num_traits::checked_pow(u128::from(n), exponent))
        .ok_or_else(overflow)
}

/// Floating point binomial coefficient for probability mass computations
///
/// Same multiplicative formula as [`combinations`], evaluated in `f64`. Exact while the
/// intermediate products stay below 2^53; beyond that the result is
/// correctly scaled but rounded. Returns 0 when `k > n`.
pub fn binomial_coefficient(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }

    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Natural logarithm of the binomial coefficient
///
/// Stays finite where [`binomial_coefficient`] overflows to infinity. Returns negative
/// infinity when `k > n`, matching a coefficient of 0.
pub fn ln_binomial_coefficient(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }

    let k = k.min(n - k);
    (0..k)
        .map(|i| ((n - i) as f64).ln() - ((i + 1) as f64).ln())
        .sum()
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn ensure_selection_fits(n: u64, k: u64) -> Result<()> {
    if k > n {
        return Err(invalid_parameter(
            "k",
            &k,
            &format!("cannot select more than n = {n} elements"),
        ));
    }
    Ok(())
}
