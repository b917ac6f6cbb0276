//! Comparison helpers with a fixed tie-break.
//!
//! Unlike [`f64::max`] these never look at the sign of zero or special-case NaN: whenever the
//! strict comparison fails, the second argument is returned.

/// Larger of `a` and `b`. Ties, `0.0` against `-0.0` and NaN all return `b`.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Smaller of `a` and `b`. Ties, `0.0` against `-0.0` and NaN all return `b`.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// -1, 0 or 1 depending on the sign of `n`. Unordered values (NaN) count as zero.
pub fn sign<T: PartialOrd + Default>(n: T) -> i8 {
    let zero = T::default();
    if n > zero {
        1
    } else if n < zero {
        -1
    } else {
        0
    }
}
