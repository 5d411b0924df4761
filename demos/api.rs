//! Tour of the basis provider interface
//!
//! Prints the data a provider exposes: dimension, basis function values on
//! both axes, singular values, derivatives, and the frequency kernel.

use irtau::{Fermionic, LegendreBasis, MatsubaraFreq, TauBasis};

fn main() {
    let lambda = 1000.0;

    let basis = LegendreBasis::<Fermionic>::new(lambda, 30);
    let l = 0;
    println!("l = {}, Lambda = {}", l, lambda);

    let x = 1.0;
    let y = 1.0;

    // Dimension of the basis
    println!("dim {}", basis.size());

    // u_0(x = 1) and V_0(y = 1)
    println!("ulx {:.16e}", basis.ulx(l, x));
    println!("vly {:.16e}", basis.vly(l, y));

    // Singular value s_0
    println!("sl {:.16e}", basis.sl(l));

    // The k-th derivative of u_l(x) and V_l(y), k = 1, 2, 3
    for k in 1..=3 {
        println!("k = {}", k);
        println!("d_ulx {:.16e}", basis.d_ulx(l, x, k));
        println!("d_vly {:.16e}", basis.d_vly(l, y, k));
    }

    // Frequency kernel over the first Matsubara indices
    let unl: Vec<_> = (0..1000)
        .map(|n| basis.u_hat(l, MatsubaraFreq::<Fermionic>::new(n)))
        .collect();
    println!("u_hat entries {}", unl.len());
    println!("u_hat(n=0) {:.16e} + {:.16e}i", unl[0].re, unl[0].im);
}
