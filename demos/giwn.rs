//! Statistics-switchable single-pole demo
//!
//! Expands the pole Green's function with a degree-12 transformer, checks the
//! coefficients against the analytic reference, reconstructs G(τ) on a dense
//! grid, transforms to a logarithmic set of Matsubara frequencies, and writes
//! `gl.dat` and `giwn.dat` for external plotting.

use irtau::{
    evaluate_giwn, giwn_single_pole, gl_pole_reference, gtau_single_pole, reconstruct_gtau,
    Fermionic, LegendreBasis, MatsubaraFreq, TauBasis, TauTransformer,
};
use num_complex::Complex64;
use std::fmt::Write as _;
use std::fs;

// Switch to `irtau::Bosonic` for the bosonic branch
type Stat = Fermionic;

fn main() {
    let wmax = 1.0;
    let lambda = 10.0;
    let beta = lambda / wmax;
    let pole: f64 = 0.4;

    assert!(pole.abs() <= wmax);

    let basis = LegendreBasis::<Stat>::new(lambda, 16);
    let nl = basis.size();

    // Initialize a transformer with a degree-12 composite rule
    let trans = TauTransformer::with_degree(&basis, beta, 12).expect("transformer construction");

    // G(tau) generated by a pole, statistics selected by `Stat`
    let gtau = |tau: f64| Complex64::new(gtau_single_pole::<Stat>(tau, pole, beta), 0.0);

    // Compute expansion coefficients by numerical integration
    let gl = trans.compute_gl(gtau, nl).expect("compute_gl");

    // Check Gl against the analytic reference
    let gl_ref = gl_pole_reference(&basis, beta, wmax, pole);
    for l in 0..nl {
        assert!(
            (gl[l].re - gl_ref[l]).abs() < 1e-10,
            "coefficient mismatch at l={}: {} vs {}",
            l,
            gl[l].re,
            gl_ref[l]
        );
    }

    let mut gl_out = String::new();
    writeln!(gl_out, "# l  |Gl|").unwrap();
    for l in 0..nl {
        writeln!(gl_out, "{} {:.16e}", l, gl[l].norm()).unwrap();
    }
    fs::write("gl.dat", gl_out).expect("write gl.dat");

    // Reconstruct G(tau) from Gl on a uniform grid and compare directly
    let nx = 1000;
    let x_points: Vec<f64> = (0..nx)
        .map(|i| -1.0 + 2.0 * i as f64 / (nx - 1) as f64)
        .collect();
    let gtau_reconst = reconstruct_gtau(&basis, beta, &gl, &x_points);
    for (i, &x) in x_points.iter().enumerate() {
        let expected = gtau_single_pole::<Stat>(0.5 * (x + 1.0) * beta, pole, beta);
        assert!(
            (gtau_reconst[i] - Complex64::new(expected, 0.0)).norm() < 1e-10,
            "reconstruction mismatch at x={}",
            x
        );
    }

    // Logarithmically spaced Matsubara indices
    let mut points: Vec<i64> = (0..50)
        .map(|k| (1e5 * (-(k as f64) / 3.0).exp()) as i64)
        .collect();
    points.sort_unstable();
    points.dedup();

    let freqs: Vec<MatsubaraFreq<Stat>> = points.iter().map(|&n| MatsubaraFreq::new(n)).collect();
    let giw = evaluate_giwn(&basis, beta, &gl, &freqs);

    // G(iw_n) reconstructed from Gl is consistent with the exact value
    let mut giw_out = String::new();
    writeln!(giw_out, "# n  |G(iw_n)|  |exact|").unwrap();
    for (k, &freq) in freqs.iter().enumerate() {
        let exact = giwn_single_pole(freq, pole, beta);
        assert!(
            (giw[k] - exact).norm() < 1e-8,
            "Matsubara mismatch at n={}",
            freq.n()
        );
        writeln!(giw_out, "{} {:.16e} {:.16e}", freq.n(), giw[k].norm(), exact.norm()).unwrap();
    }
    fs::write("giwn.dat", giw_out).expect("write giwn.dat");

    println!(
        "checked {} coefficients, {} tau points, {} frequencies",
        nl, nx, freqs.len()
    );
    println!("wrote gl.dat and giwn.dat");
}
