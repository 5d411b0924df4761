//! Analytic single-pole reference data
//!
//! A spectral function with a single pole, ρ(ω') = δ(ω' - ω), has closed
//! forms in every representation: imaginary time, Matsubara frequency, and
//! basis coefficients. These are the references the drivers and the
//! integration tests validate the quadrature transform against.

use crate::basis::TauBasis;
use crate::freq::MatsubaraFreq;
use crate::taufuncs::normalize_tau;
use crate::traits::{Statistics, StatisticsType};
use num_complex::Complex64;

/// Generic single-pole Green's function at imaginary time τ
///
/// Dispatches on the statistics type parameter.
pub fn gtau_single_pole<S: StatisticsType>(tau: f64, omega: f64, beta: f64) -> f64 {
    match S::STATISTICS {
        Statistics::Fermionic => fermionic_single_pole(tau, omega, beta),
        Statistics::Bosonic => bosonic_single_pole(tau, omega, beta),
    }
}

/// Fermionic single-pole Green's function at imaginary time τ
///
/// Evaluates G(τ) = -exp(-ωτ) / (1 + exp(-βω)).
///
/// Supports the extended range τ ∈ (-β, 2β) with anti-periodic boundary
/// conditions, G(τ + β) = -G(τ).
pub fn fermionic_single_pole(tau: f64, omega: f64, beta: f64) -> f64 {
    use crate::traits::Fermionic;

    let (tau_n, sign) = normalize_tau::<Fermionic>(tau, beta);
    sign * (-(-omega * tau_n).exp() / (1.0 + (-beta * omega).exp()))
}

/// Bosonic single-pole Green's function at imaginary time τ
///
/// Evaluates G(τ) = -ω·exp(-ωτ) / (1 - exp(-βω)) for a pole at ω ≠ 0.
///
/// Supports the extended range τ ∈ (-β, 2β) with periodic boundary
/// conditions, G(τ + β) = G(τ).
pub fn bosonic_single_pole(tau: f64, omega: f64, beta: f64) -> f64 {
    use crate::traits::Bosonic;

    let (tau_n, _) = normalize_tau::<Bosonic>(tau, beta);
    -omega * (-omega * tau_n).exp() / (1.0 - (-beta * omega).exp())
}

/// Single-pole Green's function at a Matsubara frequency
///
/// G(iω_n) = 1/(iω_n - ω) for fermions and ω/(iω_n - ω) for bosons,
/// matching the spectral weight conventions of [`gtau_single_pole`].
pub fn giwn_single_pole<S: StatisticsType>(
    freq: MatsubaraFreq<S>,
    omega: f64,
    beta: f64,
) -> Complex64 {
    let denominator = freq.value_imaginary(beta) - Complex64::new(omega, 0.0);
    let numerator = match S::STATISTICS {
        Statistics::Fermionic => 1.0,
        Statistics::Bosonic => omega,
    };
    Complex64::new(numerator, 0.0) / denominator
}

/// Exact basis coefficients of a single-pole Green's function
///
/// For a pole at ω the coefficients follow directly from the spectral data of
/// the basis: G_l = -S_l·ρ_l with
///
/// ```text
/// fermionic: ρ_l = sqrt(1/ωmax)·V_l(ω/ωmax),  S_l = sqrt(β·ωmax/2)·s_l
/// bosonic:   ρ_l = sqrt(1/ωmax)·V_l(ω/ωmax),  S_l = sqrt(β·ωmax³/2)·s_l
/// ```
///
/// The bosonic spectral functions are defined against the regularized kernel
/// (which carries one power of the frequency), so the pole weight enters
/// through V_l itself and the ρ_l formula is shared between both statistics.
///
/// # Panics
/// Panics if the pole lies outside [-ωmax, ωmax].
pub fn gl_pole_reference<S, B>(basis: &B, beta: f64, wmax: f64, omega: f64) -> Vec<f64>
where
    S: StatisticsType,
    B: TauBasis<S>,
{
    assert!(
        omega.abs() <= wmax,
        "pole at {} outside the spectral window [-{}, {}]",
        omega,
        wmax,
        wmax
    );

    let y = omega / wmax;
    let rho_scale = (1.0 / wmax).sqrt();
    let sl_scale = match S::STATISTICS {
        Statistics::Fermionic => (beta * wmax / 2.0).sqrt(),
        Statistics::Bosonic => (beta * wmax.powi(3) / 2.0).sqrt(),
    };

    (0..basis.size())
        .map(|l| {
            let rho_l = rho_scale * basis.vly(l, y);
            let s_l = sl_scale * basis.sl(l);
            -s_l * rho_l
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::{BosonicFreq, FermionicFreq};

    #[test]
    fn test_fermionic_single_pole_values() {
        let beta = 10.0;
        let omega = 1.0;

        // τ = 0: G = -1/(1 + e^{-βω})
        let g0 = fermionic_single_pole(0.0, omega, beta);
        assert!((g0 + 1.0 / (1.0 + (-beta * omega).exp())).abs() < 1e-15);

        // G(0⁺) + G(β⁻) = -1 for a normalized pole
        let gb = fermionic_single_pole(beta, omega, beta);
        assert!((g0 + gb + 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_fermionic_antiperiodicity() {
        let beta = 4.0;
        let omega = 0.7;
        for tau in [0.1, 1.3, 2.9] {
            let g = fermionic_single_pole(tau, omega, beta);
            let g_shift = fermionic_single_pole(tau + beta, omega, beta);
            assert!((g_shift + g).abs() < 1e-14);
        }
    }

    #[test]
    fn test_bosonic_periodicity() {
        let beta = 4.0;
        let omega = 0.7;
        for tau in [0.1, 1.3, 2.9] {
            let g = bosonic_single_pole(tau, omega, beta);
            let g_shift = bosonic_single_pole(tau + beta, omega, beta);
            assert!((g_shift - g).abs() < 1e-13);
        }
    }

    #[test]
    fn test_giwn_single_pole() {
        let beta = 10.0;
        let omega = 1.0;

        let freq = FermionicFreq::new(0);
        let g = giwn_single_pole(freq, omega, beta);
        let wn = std::f64::consts::PI / beta;
        let expected = Complex64::new(1.0, 0.0) / Complex64::new(-omega, wn);
        assert!((g - expected).norm() < 1e-15);

        let freq = BosonicFreq::new(0);
        let g = giwn_single_pole(freq, omega, beta);
        // At zero frequency: ω/(0 - ω) = -1
        assert!((g - Complex64::new(-1.0, 0.0)).norm() < 1e-15);
    }
}
