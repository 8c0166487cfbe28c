/// Tolerance shared by every floating point comparison in the crate. Point
/// equality, collinearity and sign tests must all agree on it.
pub const EPSILON: f64 = 1e-9;

/// `|a - b| <= EPSILON`
pub fn approx_eq(a: f64, b: f64) -> bool {
  (a - b).abs() <= EPSILON
}

/// Mathematical modulo. The result is non-negative whenever `m` is positive,
/// which makes it usable for circular indexing with negative offsets.
///
/// ```rust
/// # use polylab::floor_mod;
/// assert_eq!(floor_mod(-1, 5), 4);
/// assert_eq!(floor_mod(7, 5), 2);
/// ```
pub fn floor_mod(n: isize, m: isize) -> isize {
  ((n % m) + m) % m
}

///////////////////////////////////////////////////////////////////////////////
// Tests

#[cfg(test)]
mod tests {
  use super::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn approx_eq_boundary() {
    assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
    assert!(approx_eq(0.0, -EPSILON));
    assert!(!approx_eq(0.0, 2.0 * EPSILON));
  }

  #[test]
  fn floor_mod_wraps_negatives() {
    assert_eq!(floor_mod(-1, 4), 3);
    assert_eq!(floor_mod(-4, 4), 0);
    assert_eq!(floor_mod(-5, 4), 3);
    assert_eq!(floor_mod(3, 4), 3);
  }

  #[proptest]
  fn floor_mod_in_range(n: i32, #[strategy(1..1000isize)] m: isize) {
    let r = floor_mod(n as isize, m);
    prop_assert!((0..m).contains(&r));
    prop_assert_eq!((n as isize - r) % m, 0);
  }
}
