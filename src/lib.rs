//! # irtau: composite-quadrature transform onto IR basis coefficients
//!
//! Computes expansion coefficients of imaginary-time correlation functions
//! G(τ) in an intermediate-representation (IR) basis by composite
//! Gauss-Legendre quadrature, and provides the analytic single-pole reference
//! data to verify the transform against.
//!
//! The basis itself is consumed through the [`TauBasis`] trait: dimension,
//! section edges, basis function values and derivatives, singular values and
//! the frequency kernel all come from the provider. [`LegendreBasis`] is a
//! self-contained analytic provider used by the bundled drivers and tests.
//!
//! Typical usage:
//!
//! ```
//! use irtau::{LegendreBasis, TauTransformer, Fermionic};
//! use num_complex::Complex64;
//!
//! let beta = 100.0;
//! let basis = LegendreBasis::<Fermionic>::new(1000.0, 20);
//! let transformer = TauTransformer::new(&basis, beta).unwrap();
//!
//! let pole = 1.0;
//! let gtau = |tau: f64| {
//!     Complex64::new(irtau::fermionic_single_pole(tau, pole, beta), 0.0)
//! };
//! let gl = transformer.compute_gl(gtau, 20).unwrap();
//! assert_eq!(gl.len(), 20);
//! ```

pub mod basis;
pub mod freq;
pub mod gauss;
pub mod legendre_basis; // Analytic reference provider for drivers and tests
pub mod poles; // Single-pole reference data
pub mod special_functions;
pub mod taufuncs; // Imaginary time τ normalization utilities
pub mod traits;
pub mod transform;

// Re-export commonly used types and functions
pub use basis::TauBasis;
pub use freq::{BosonicFreq, FermionicFreq, MatsubaraFreq};
pub use gauss::{composite_legendre, legendre, QuadratureError, Rule};
pub use legendre_basis::LegendreBasis;
pub use poles::{
    bosonic_single_pole, fermionic_single_pole, giwn_single_pole, gl_pole_reference,
    gtau_single_pole,
};
pub use traits::{Bosonic, Fermionic, Statistics, StatisticsType};
pub use transform::{
    evaluate_giwn, reconstruct_gtau, symmetric_section_edges, TauTransformer, TransformError,
};
