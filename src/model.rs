//! Closed-form average-case predictions for BSTs built from `N` random
//! inserts. These never touch a tree; they are the curves that measured
//! averages get compared against.
//!
//! See Sedgewick and Flajolet, *An Introduction to the Analysis of
//! Algorithms*, chapter 6.

/// Leading coefficient of the expected height (Devroye's `α`).
const ALPHA: f64 = 4.31107;

/// Coefficient of the `ln ln N` correction to the expected height.
const BETA: f64 = 1.953;

/// Expected height, `α ln N - β ln ln N`, shifted down by 5 to line up with
/// heights measured over the reference sweep.
///
/// Only defined for `N >= 2`: `ln ln 1` is `-∞`, so `height(1)` is `+∞`. The
/// shift makes it negative for very small `N`.
pub fn height(n: usize) -> f64 {
    let ln = (n as f64).ln();
    ALPHA * ln - BETA * ln.ln() - 5.0
}

/// Expected number of leaves, `(N + 1) / 3`.
pub fn leaves(n: usize) -> f64 {
    (n as f64 + 1.0) / 3.0
}

/// Expected compares for a search hit, `1.39 lg N - 1.85`.
pub fn successful_search(n: usize) -> f64 {
    1.39 * (n as f64).log2() - 1.85
}

/// Expected compares for a search miss, `1.39 lg N - 0.846 + 2 / (N + 1)`.
pub fn unsuccessful_search(n: usize) -> f64 {
    let n = n as f64;
    1.39 * n.log2() - 0.846 + 2.0 / (n + 1.0)
}

/// The `n`th harmonic number, `1 + 1/2 + ... + 1/n`.
pub fn harmonic(n: usize) -> f64 {
    (1..=n).map(|i| 1.0 / i as f64).sum()
}

/// Exact expected compares for a search hit, `2 (1 + 1/N) H_N - 3`.
/// Zero for an empty tree.
pub fn exact_successful_search(n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    2.0 * (1.0 + 1.0 / n as f64) * harmonic(n) - 3.0
}

/// Exact expected compares for a search miss, `2 H_{N+1} - 2`.
pub fn exact_unsuccessful_search(n: usize) -> f64 {
    2.0 * harmonic(n + 1) - 2.0
}
