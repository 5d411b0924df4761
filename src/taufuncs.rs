//! Imaginary time τ normalization utilities
//!
//! Maps τ from the extended range (-β, 2β) back into [0, β], tracking the
//! sign factor required by the boundary condition of the given statistics:
//! G(τ + β) = -G(τ) for fermions, G(τ + β) = G(τ) for bosons.

use crate::traits::{Statistics, StatisticsType};

/// Normalize τ to [0, β] with statistics-dependent boundary conditions.
///
/// Returns `(tau_normalized, sign)` with `tau_normalized ∈ [0, β]`. τ = β is
/// kept in the normal range (interpreted as the left limit β⁻); τ = -β wraps
/// to 0.
///
/// # Arguments
/// * `tau` - Imaginary time in (-β, 2β)
/// * `beta` - Inverse temperature
pub fn normalize_tau<S: StatisticsType>(tau: f64, beta: f64) -> (f64, f64) {
    let (tau_normalized, wrapped) = if tau < 0.0 {
        (tau + beta, true)
    } else if tau > beta {
        (tau - beta, true)
    } else {
        (tau, false)
    };

    let sign = match S::STATISTICS {
        Statistics::Fermionic if wrapped => -1.0,
        _ => 1.0,
    };

    (tau_normalized, sign)
}
