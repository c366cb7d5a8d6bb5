//! Scalar equality with float tolerance.

use dsd_types::Scalar;
use serde::{Deserialize, Serialize};

/// Thresholds used to compare two floats.
///
/// The check is anchored on the baseline value `x`: when `x` is zero the
/// absolute difference must be below `absolute`, otherwise the difference
/// relative to `x` must be below `relative`. Swapping the operands can
/// change the verdict near the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    pub absolute: f64,
    pub relative: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: 1e-6,
            relative: 1e-5,
        }
    }
}

impl Tolerance {
    /// No tolerance at all: floats must be bit-for-bit equal in value.
    pub fn exact() -> Self {
        Self {
            absolute: 0.0,
            relative: 0.0,
        }
    }

    /// Compare baseline `x` against `y`.
    pub fn floats_equal(&self, x: f64, y: f64) -> bool {
        // Identical infinities would otherwise yield inf - inf = NaN.
        if x == y {
            return true;
        }
        if x == 0.0 {
            (x - y).abs() < self.absolute
        } else {
            ((x - y) / x).abs() < self.relative
        }
    }

    /// Floats use [`Tolerance::floats_equal`]; every other scalar must be
    /// exactly equal.
    pub fn scalars_equal(&self, a: &Scalar, b: &Scalar) -> bool {
        match (a, b) {
            (Scalar::Float(x), Scalar::Float(y)) => self.floats_equal(*x, *y),
            _ => a == b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_boundary() {
        let t = Tolerance::default();
        assert!(t.floats_equal(100.0, 100.0009));
        assert!(!t.floats_equal(100.0, 100.002));
    }

    #[test]
    fn zero_uses_absolute_threshold() {
        let t = Tolerance::default();
        assert!(t.floats_equal(0.0, 0.000_000_5));
        assert!(!t.floats_equal(0.0, 0.000_002));
        assert!(t.floats_equal(0.0, -0.000_000_5));
    }

    #[test]
    fn anchored_on_baseline_near_zero() {
        let t = Tolerance::default();
        assert!(t.floats_equal(0.0, 5e-7));
        // Swapped, the zero is no longer the anchor and the relative
        // difference is 100%.
        assert!(!t.floats_equal(5e-7, 0.0));
    }

    #[test]
    fn anchored_on_baseline_at_relative_boundary() {
        let t = Tolerance::default();
        let x = 1.0;
        let y = 1.0 - 9.999_95e-6;
        assert!(t.floats_equal(x, y));
        assert!(!t.floats_equal(y, x));
    }

    #[test]
    fn just_outside_relative_is_unequal_both_ways() {
        let t = Tolerance::default();
        assert!(!t.floats_equal(1.0, 1.000_011));
        assert!(!t.floats_equal(1.000_011, 1.0));
    }

    #[test]
    fn nan_is_never_equal() {
        let t = Tolerance::default();
        assert!(!t.floats_equal(f64::NAN, f64::NAN));
        assert!(!t.floats_equal(1.0, f64::NAN));
        assert!(!t.floats_equal(0.0, f64::NAN));
    }

    #[test]
    fn infinities() {
        let t = Tolerance::default();
        assert!(t.floats_equal(f64::INFINITY, f64::INFINITY));
        assert!(!t.floats_equal(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!t.floats_equal(1.0, f64::INFINITY));
    }

    #[test]
    fn exact_tolerance() {
        let t = Tolerance::exact();
        assert!(t.floats_equal(2.5, 2.5));
        assert!(!t.floats_equal(2.5, 2.500_000_1));
        assert!(!t.floats_equal(0.0, 1e-300));
    }

    #[test]
    fn non_float_scalars_are_exact() {
        let t = Tolerance::default();
        assert!(t.scalars_equal(&Scalar::Integer(5), &Scalar::Integer(5)));
        assert!(!t.scalars_equal(&Scalar::Integer(100_000), &Scalar::Integer(100_001)));
        assert!(t.scalars_equal(&Scalar::String("a".into()), &Scalar::String("a".into())));
        assert!(!t.scalars_equal(&Scalar::Binary(vec![1, 2]), &Scalar::Binary(vec![1, 3])));
        assert!(t.scalars_equal(&Scalar::Null, &Scalar::Null));
        assert!(!t.scalars_equal(&Scalar::Bool(true), &Scalar::Bool(false)));
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let t: Tolerance = serde_json::from_str(r#"{"relative": 0.01}"#).unwrap();
        assert_eq!(t.relative, 0.01);
        assert_eq!(t.absolute, 1e-6);
    }
}
