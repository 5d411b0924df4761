//! Transform between imaginary-time functions and basis coefficients
//!
//! This module provides [`TauTransformer`], which projects a function G(τ)
//! onto the leading coefficients of a dimensionless basis by composite
//! Gauss-Legendre quadrature:
//!
//! ```text
//! G_l = sqrt(β/2) · ∫ dx u_l(x) · G(τ(x)),   τ(x) = (x + 1)·β/2
//! ```
//!
//! The quadrature grid is built once per (basis, β) pair: the provider's
//! half-axis section edges are mirrored onto the negative axis, a fixed-degree
//! rule is placed on every panel, and the basis values at all nodes are
//! pre-weighted. Repeated [`TauTransformer::compute_gl`] calls then reduce to
//! one function evaluation per node and one inner product per coefficient.
//!
//! The accuracy of the projection is bounded by the quadrature degree and the
//! smoothness of G(τ) within each panel; a function with kinks away from the
//! panel edges silently loses accuracy rather than failing.

use crate::basis::TauBasis;
use crate::freq::MatsubaraFreq;
use crate::gauss::{composite_legendre, QuadratureError, Rule};
use crate::traits::StatisticsType;
use mdarray::DTensor;
use num_complex::Complex64;
use num_traits::Zero;
use thiserror::Error;

/// Default quadrature degree per panel.
pub const DEFAULT_DEGREE: usize = 16;

/// Errors raised by the transformer.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("nl must be in [1, {size}], got {nl}")]
    NlOutOfRange { nl: usize, size: usize },
    #[error("inverse temperature must be positive, got {0}")]
    BetaNotPositive(f64),
    #[error("invalid half-axis section edges: {0}")]
    InvalidSectionEdges(&'static str),
    #[error(transparent)]
    Quadrature(#[from] QuadratureError),
}

/// Mirror half-axis section edges onto the full symmetric interval.
///
/// Performs an ascending merge of the negated edges and the original edges,
/// keeping the shared origin-adjacent boundary exactly once. The dedup uses a
/// near-zero check rather than exact float equality.
///
/// # Errors
/// Fails if fewer than two edges are given, if the edges are not strictly
/// ascending, or if the first edge is not (numerically) the origin.
pub fn symmetric_section_edges(positive_edges: &[f64]) -> Result<Vec<f64>, TransformError> {
    if positive_edges.len() < 2 {
        return Err(TransformError::InvalidSectionEdges(
            "need at least two edges",
        ));
    }
    for i in 1..positive_edges.len() {
        if positive_edges[i] <= positive_edges[i - 1] {
            return Err(TransformError::InvalidSectionEdges(
                "edges must be strictly ascending",
            ));
        }
    }

    let last = *positive_edges.last().unwrap();
    let tol = 1e-12 * last.abs().max(1.0);
    if positive_edges[0].abs() > tol {
        return Err(TransformError::InvalidSectionEdges(
            "edges must start at the origin",
        ));
    }

    let mut edges = Vec::with_capacity(2 * positive_edges.len() - 1);
    for &e in positive_edges.iter().rev() {
        if e.abs() > tol {
            edges.push(-e);
        }
    }
    edges.push(0.0);
    for &e in positive_edges.iter() {
        if e.abs() > tol {
            edges.push(e);
        }
    }

    Ok(edges)
}

/// Projects imaginary-time functions onto basis coefficients.
///
/// Constructed once per (basis, β) pair; `compute_gl` may then be called
/// repeatedly with different target functions. The transformer performs no
/// writes after construction, so shared references may be used from
/// independent call sites.
pub struct TauTransformer {
    beta: f64,
    size: usize,
    rule: Rule,
    /// Weighted basis values: u_smpl[i, l] = w_i · u_l(x_i)
    u_smpl: DTensor<f64, 2>,
}

impl TauTransformer {
    /// Create a transformer with the default quadrature degree.
    ///
    /// # Arguments
    /// * `basis` - Basis provider
    /// * `beta` - Inverse temperature
    pub fn new<S, B>(basis: &B, beta: f64) -> Result<Self, TransformError>
    where
        S: StatisticsType,
        B: TauBasis<S>,
    {
        Self::with_degree(basis, beta, DEFAULT_DEGREE)
    }

    /// Create a transformer with an explicit quadrature degree per panel.
    ///
    /// Queries the provider for its half-axis section edges and dimension,
    /// builds the symmetric composite grid, and pre-evaluates the weighted
    /// basis values at every node.
    pub fn with_degree<S, B>(basis: &B, beta: f64, degree: usize) -> Result<Self, TransformError>
    where
        S: StatisticsType,
        B: TauBasis<S>,
    {
        if beta <= 0.0 {
            return Err(TransformError::BetaNotPositive(beta));
        }

        let edges = symmetric_section_edges(&basis.section_edges_x())?;
        let rule = composite_legendre(degree, &edges)?;

        let size = basis.size();
        let nx = rule.x.len();
        let mut u_smpl = DTensor::<f64, 2>::from_elem([nx, size], 0.0);
        for i in 0..nx {
            let u = basis.ulx_all(rule.x[i]);
            for l in 0..size {
                u_smpl[[i, l]] = rule.w[i] * u[l];
            }
        }

        Ok(Self {
            beta,
            size,
            rule,
            u_smpl,
        })
    }

    /// Inverse temperature β.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Basis dimension of the underlying provider.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Quadrature nodes on [-1, 1].
    pub fn nodes(&self) -> &[f64] {
        &self.rule.x
    }

    /// Quadrature weights matching [`TauTransformer::nodes`].
    pub fn weights(&self) -> &[f64] {
        &self.rule.w
    }

    /// Compute the first `nl` expansion coefficients of a function G(τ).
    ///
    /// Evaluates `gtau` at the physical imaginary times τ_i = (x_i + 1)·β/2
    /// of the precomputed grid and contracts with the weighted basis values:
    ///
    /// ```text
    /// G_l = sqrt(β/2) · Σ_i G(τ_i) · w_i · u_l(x_i),   l = 0..nl
    /// ```
    ///
    /// # Errors
    /// Fails if `nl` is zero or exceeds the basis dimension.
    pub fn compute_gl<F>(&self, gtau: F, nl: usize) -> Result<Vec<Complex64>, TransformError>
    where
        F: Fn(f64) -> Complex64,
    {
        if nl < 1 || nl > self.size {
            return Err(TransformError::NlOutOfRange {
                nl,
                size: self.size,
            });
        }

        let nx = self.rule.x.len();
        let mut gtau_smpl = Vec::with_capacity(nx);
        for &xi in self.rule.x.iter() {
            gtau_smpl.push(gtau(0.5 * (xi + 1.0) * self.beta));
        }

        let scale = (self.beta / 2.0).sqrt();
        let mut gl = Vec::with_capacity(nl);
        for l in 0..nl {
            let mut acc = Complex64::zero();
            for i in 0..nx {
                acc += gtau_smpl[i] * self.u_smpl[[i, l]];
            }
            gl.push(acc * scale);
        }

        Ok(gl)
    }
}

/// Reconstruct G(τ) on a set of dimensionless points from its coefficients.
///
/// Evaluates `sqrt(2/β) · Σ_l u_l(x) · g_l` at every x in `x_points`.
pub fn reconstruct_gtau<S, B>(
    basis: &B,
    beta: f64,
    gl: &[Complex64],
    x_points: &[f64],
) -> Vec<Complex64>
where
    S: StatisticsType,
    B: TauBasis<S>,
{
    let scale = (2.0 / beta).sqrt();
    x_points
        .iter()
        .map(|&x| {
            let u = basis.ulx_all(x);
            let mut acc = Complex64::zero();
            for (l, &g) in gl.iter().enumerate() {
                acc += g * u[l];
            }
            acc * scale
        })
        .collect()
}

/// Evaluate the Matsubara representation G(iω_n) from the coefficients.
///
/// Computes `sqrt(β) · Σ_l û_l(iω_n) · g_l` for every frequency.
pub fn evaluate_giwn<S, B>(
    basis: &B,
    beta: f64,
    gl: &[Complex64],
    freqs: &[MatsubaraFreq<S>],
) -> Vec<Complex64>
where
    S: StatisticsType,
    B: TauBasis<S>,
{
    let scale = beta.sqrt();
    freqs
        .iter()
        .map(|&freq| {
            let mut acc = Complex64::zero();
            for (l, &g) in gl.iter().enumerate() {
                acc += g * basis.u_hat(l, freq);
            }
            acc * scale
        })
        .collect()
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
