//! Common test utilities

use num_complex::Complex64;

/// Largest relative deviation between two coefficient sets.
pub fn max_relative_error(computed: &[Complex64], reference: &[f64]) -> f64 {
    assert_eq!(computed.len(), reference.len());
    computed
        .iter()
        .zip(reference.iter())
        .map(|(&c, &r)| (c - Complex64::new(r, 0.0)).norm() / r.abs())
        .fold(0.0, f64::max)
}

/// Largest absolute deviation between two coefficient sets.
pub fn max_absolute_error(computed: &[Complex64], reference: &[f64]) -> f64 {
    assert_eq!(computed.len(), reference.len());
    computed
        .iter()
        .zip(reference.iter())
        .map(|(&c, &r)| (c - Complex64::new(r, 0.0)).norm())
        .fold(0.0, f64::max)
}
