//! Fermionic single-pole demo
//!
//! Expands G(τ) generated by a pole at ω = 1.0 in the basis by numerical
//! integration, compares the coefficients against the analytic reference
//! -S_l·ρ_l, then transforms to Matsubara frequencies and compares against
//! the exact 1/(iω_n - ω).

use irtau::{
    evaluate_giwn, fermionic_single_pole, giwn_single_pole, gl_pole_reference, Fermionic,
    LegendreBasis, MatsubaraFreq, TauBasis, TauTransformer,
};
use num_complex::Complex64;

fn main() {
    let beta = 100.0;
    let lambda = 1000.0;
    let wmax = lambda / beta;
    let pole = 1.0;

    let basis = LegendreBasis::<Fermionic>::new(lambda, 30);
    let nl = basis.size();

    // Initialize a transformer (degree-16 composite rule)
    let trans = TauTransformer::new(&basis, beta).expect("transformer construction");

    // G(tau) generated by a pole at "pole"
    let gtau = |tau: f64| Complex64::new(fermionic_single_pole(tau, pole, beta), 0.0);

    // Compute expansion coefficients by numerical integration
    let gl = trans.compute_gl(gtau, nl).expect("compute_gl");

    // In this special case, Gl can be computed from rho_l
    let gl_ref = gl_pole_reference(&basis, beta, wmax, pole);

    println!("# l  Gl  Gl_ref");
    for l in 0..nl {
        println!("{} {:.16e} {:.16e}", l, gl[l].re, gl_ref[l]);
    }

    // Transform Gl to the Matsubara frequency domain
    let nvec = [0i64, 10, 100, 1000, 10000, 100000, -10];
    let freqs: Vec<MatsubaraFreq<Fermionic>> =
        nvec.iter().map(|&n| MatsubaraFreq::new(n)).collect();
    let giw = evaluate_giwn(&basis, beta, &gl, &freqs);

    // Compare the result with the exact 1/(i w_n - pole)
    println!("# n  relative error of G(iw_n)");
    for (k, &freq) in freqs.iter().enumerate() {
        let exact = giwn_single_pole(freq, pole, beta);
        let rel = ((giw[k] - exact) / exact).norm();
        println!("{} {:.6e}", freq.n(), rel);
        assert!(rel < 1e-8, "Matsubara reconstruction off at n={}", freq.n());
    }
}
