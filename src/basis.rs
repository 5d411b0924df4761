//! Basis provider trait
//!
//! This module defines the interface through which the transform layer
//! consumes a dimensionless basis: its size, the partition of the x-domain
//! the basis functions are piecewise-smooth on, the basis function values
//! themselves, and the associated spectral data (singular values, spectral
//! functions, frequency kernel).
//!
//! The basis functions u_l(x) live on x ∈ [-1, 1] (the dimensionless image of
//! imaginary time τ ∈ [0, β]) and the spectral functions V_l(y) on
//! y ∈ [-1, 1] (the dimensionless image of real frequency ω ∈ [-ωmax, ωmax]).
//! How a provider obtains this data — singular value expansion, precomputed
//! tables, or closed forms — is deliberately outside this interface.

use crate::freq::MatsubaraFreq;
use crate::traits::{Statistics, StatisticsType};
use num_complex::Complex64;

/// Interface of a dimensionless basis in imaginary time
///
/// # Type Parameters
/// * `S` - Statistics type (Fermionic or Bosonic)
pub trait TauBasis<S: StatisticsType> {
    /// Number of basis functions
    fn size(&self) -> usize;

    /// Section edges of the positive half-axis, ascending
    ///
    /// The partition of [0, 1] on which the basis functions are smooth.
    /// The first edge must be the origin and the last edge 1; quadrature
    /// panels are aligned to these edges, mirrored onto [-1, 0].
    fn section_edges_x(&self) -> Vec<f64>;

    /// Evaluate all basis functions at one point: result[l] = u_l(x)
    ///
    /// # Arguments
    /// * `x` - Point in [-1, 1]
    fn ulx_all(&self, x: f64) -> Vec<f64>;

    /// Evaluate a single basis function u_l(x)
    fn ulx(&self, l: usize, x: f64) -> f64 {
        self.ulx_all(x)[l]
    }

    /// k-th derivative of u_l at x
    fn d_ulx(&self, l: usize, x: f64, order: usize) -> f64;

    /// Spectral basis function V_l(y), y ∈ [-1, 1]
    fn vly(&self, l: usize, y: f64) -> f64;

    /// k-th derivative of V_l at y
    fn d_vly(&self, l: usize, y: f64, order: usize) -> f64;

    /// Singular value s_l associated with basis order l
    fn sl(&self, l: usize) -> f64;

    /// Frequency kernel û_l at a Matsubara frequency
    ///
    /// The dimensionless Fourier transform of u_l; the physical Matsubara
    /// representation is recovered as sqrt(β)·û_l(iω_n).
    fn u_hat(&self, l: usize, freq: MatsubaraFreq<S>) -> Complex64;

    /// Frequency kernel for all l at once: result[l] = û_l(iω_n)
    fn u_hat_all(&self, freq: MatsubaraFreq<S>) -> Vec<Complex64> {
        (0..self.size()).map(|l| self.u_hat(l, freq)).collect()
    }

    /// Runtime statistics of this basis
    fn statistics(&self) -> Statistics {
        S::STATISTICS
    }
}
