use super::*;
use crate::traits::Fermionic;

/// Minimal basis provider for transformer tests: u_l(x) = x^l.
///
/// Not orthogonal and with trivial spectral data, but the transform only
/// relies on the partition and the point values.
struct MonomialBasis {
    size: usize,
}

impl TauBasis<Fermionic> for MonomialBasis {
    fn size(&self) -> usize {
        self.size
    }

    fn section_edges_x(&self) -> Vec<f64> {
        vec![0.0, 0.5, 1.0]
    }

    fn ulx_all(&self, x: f64) -> Vec<f64> {
        let mut u = Vec::with_capacity(self.size);
        let mut p = 1.0;
        for _ in 0..self.size {
            u.push(p);
            p *= x;
        }
        u
    }

    fn d_ulx(&self, l: usize, x: f64, order: usize) -> f64 {
        if order > l {
            return 0.0;
        }
        let mut coeff = 1.0;
        for k in 0..order {
            coeff *= (l - k) as f64;
        }
        coeff * x.powi((l - order) as i32)
    }

    fn vly(&self, _l: usize, _y: f64) -> f64 {
        0.0
    }

    fn d_vly(&self, _l: usize, _y: f64, _order: usize) -> f64 {
        0.0
    }

    fn sl(&self, _l: usize) -> f64 {
        1.0
    }

    fn u_hat(&self, _l: usize, _freq: MatsubaraFreq<Fermionic>) -> Complex64 {
        Complex64::new(0.0, 0.0)
    }
}

#[test]
fn test_symmetric_section_edges_mirror() {
    let edges = symmetric_section_edges(&[0.0, 0.5, 1.0]).unwrap();
    assert_eq!(edges, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
}

#[test]
fn test_symmetric_section_edges_keep_origin_once() {
    let edges = symmetric_section_edges(&[0.0, 0.25, 0.5, 0.75, 1.0]).unwrap();
    assert_eq!(edges.len(), 9);
    assert_eq!(edges.iter().filter(|&&e| e == 0.0).count(), 1);
    for i in 1..edges.len() {
        assert!(edges[i] > edges[i - 1]);
    }
    // Mirror symmetry
    for i in 0..edges.len() {
        assert_eq!(edges[i], -edges[edges.len() - 1 - i]);
    }
}

#[test]
fn test_symmetric_section_edges_errors() {
    assert!(matches!(
        symmetric_section_edges(&[0.0]),
        Err(TransformError::InvalidSectionEdges(_))
    ));
    assert!(matches!(
        symmetric_section_edges(&[0.0, 1.0, 0.5]),
        Err(TransformError::InvalidSectionEdges(_))
    ));
    // Origin-adjacent boundary missing
    assert!(matches!(
        symmetric_section_edges(&[0.5, 1.0]),
        Err(TransformError::InvalidSectionEdges(_))
    ));
}

#[test]
fn test_grid_dimensions() {
    let basis = MonomialBasis { size: 4 };
    let trans = TauTransformer::with_degree(&basis, 10.0, 6).unwrap();

    // 2 half-axis panels mirror to 4 panels of 6 nodes each
    assert_eq!(trans.nodes().len(), 24);
    assert_eq!(trans.weights().len(), 24);
    assert_eq!(trans.size(), 4);
    assert_eq!(trans.beta(), 10.0);

    let weight_sum: f64 = trans.weights().iter().sum();
    assert!((weight_sum - 2.0).abs() < 1e-13);
}

#[test]
fn test_constant_function_coefficients() {
    // For gtau ≡ 1, G_l = sqrt(β/2) ∫ x^l dx over [-1, 1]
    let beta = 10.0;
    let basis = MonomialBasis { size: 6 };
    let trans = TauTransformer::with_degree(&basis, beta, 8).unwrap();

    let gl = trans
        .compute_gl(|_tau| Complex64::new(1.0, 0.0), 6)
        .unwrap();

    let scale = (beta / 2.0).sqrt();
    for l in 0..6 {
        let exact = if l % 2 == 0 {
            scale * 2.0 / (l as f64 + 1.0)
        } else {
            0.0
        };
        assert!(
            (gl[l].re - exact).abs() < 1e-13 * scale,
            "l={}: got {}, expected {}",
            l,
            gl[l].re,
            exact
        );
        assert!(gl[l].im.abs() < 1e-14);
    }
}

#[test]
fn test_linearity() {
    let beta = 2.0;
    let basis = MonomialBasis { size: 5 };
    let trans = TauTransformer::with_degree(&basis, beta, 12).unwrap();

    let f1 = |tau: f64| Complex64::new(tau.cos(), 0.0);
    let f2 = |tau: f64| Complex64::new(0.3 * tau, 0.01 * tau * tau);
    let a = Complex64::new(2.5, 0.0);
    let b = Complex64::new(1.0, -2.0);

    let gl1 = trans.compute_gl(f1, 5).unwrap();
    let gl2 = trans.compute_gl(f2, 5).unwrap();
    let gl_combined = trans.compute_gl(|tau| a * f1(tau) + b * f2(tau), 5).unwrap();

    for l in 0..5 {
        let expected = a * gl1[l] + b * gl2[l];
        assert!(
            (gl_combined[l] - expected).norm() < 1e-12,
            "l={}: got {}, expected {}",
            l,
            gl_combined[l],
            expected
        );
    }
}

#[test]
fn test_truncation_consistency() {
    // Lower-order coefficients do not depend on how many are requested
    let basis = MonomialBasis { size: 8 };
    let trans = TauTransformer::with_degree(&basis, 5.0, 10).unwrap();

    let f = |tau: f64| Complex64::new((-tau).exp(), 0.0);
    let gl8 = trans.compute_gl(f, 8).unwrap();
    let gl3 = trans.compute_gl(f, 3).unwrap();

    for l in 0..3 {
        assert_eq!(gl8[l], gl3[l]);
    }
}

#[test]
fn test_nl_bounds() {
    let basis = MonomialBasis { size: 4 };
    let trans = TauTransformer::with_degree(&basis, 1.0, 4).unwrap();
    let f = |_tau: f64| Complex64::new(1.0, 0.0);

    assert!(matches!(
        trans.compute_gl(f, 0),
        Err(TransformError::NlOutOfRange { nl: 0, size: 4 })
    ));
    assert!(matches!(
        trans.compute_gl(f, 5),
        Err(TransformError::NlOutOfRange { nl: 5, size: 4 })
    ));
    assert!(trans.compute_gl(f, 4).is_ok());
    assert!(trans.compute_gl(f, 1).is_ok());
}

#[test]
fn test_invalid_beta() {
    let basis = MonomialBasis { size: 2 };
    assert!(matches!(
        TauTransformer::new(&basis, 0.0),
        Err(TransformError::BetaNotPositive(_))
    ));
    assert!(matches!(
        TauTransformer::new(&basis, -1.0),
        Err(TransformError::BetaNotPositive(_))
    ));
}

#[test]
fn test_invalid_degree() {
    let basis = MonomialBasis { size: 2 };
    assert!(matches!(
        TauTransformer::with_degree(&basis, 1.0, 0),
        Err(TransformError::Quadrature(QuadratureError::InvalidDegree))
    ));
}

#[test]
fn test_reconstruct_round_trip_polynomial() {
    // A function that is exactly a short monomial combination in x is
    // reproduced exactly by reconstruct_gtau from hand-set coefficients.
    let beta = 4.0;
    let basis = MonomialBasis { size: 3 };

    // G(τ(x)) = sqrt(2/β)·(g0 + g1·x + g2·x²)
    let g = [
        Complex64::new(0.7, 0.0),
        Complex64::new(-0.2, 0.1),
        Complex64::new(0.05, 0.0),
    ];
    let xs = [-1.0, -0.3, 0.0, 0.4, 1.0];
    let values = reconstruct_gtau(&basis, beta, &g, &xs);

    let scale = (2.0 / beta).sqrt();
    for (i, &x) in xs.iter().enumerate() {
        let expected = (g[0] + g[1] * x + g[2] * x * x) * scale;
        assert!((values[i] - expected).norm() < 1e-14);
    }
}
