//! Matsubara frequency types
//!
//! This module provides Matsubara frequency types for both fermionic and
//! bosonic statistics. Frequencies are stored as the reduced index `n`, with
//! the physical frequency given by ω_n = (2n + ζ)π/β where ζ = 1 for fermions
//! and ζ = 0 for bosons. With this convention every integer `n` is a valid
//! index for either statistics.

use num_complex::Complex64;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::traits::{Bosonic, Fermionic, Statistics, StatisticsType};

/// Matsubara frequency for a specific statistics type
///
/// The statistics type `S` selects the frequency shift at compile time.
#[derive(Debug, Clone, Copy)]
pub struct MatsubaraFreq<S: StatisticsType> {
    n: i64,
    _phantom: std::marker::PhantomData<S>,
}

// Type aliases for convenience
pub type FermionicFreq = MatsubaraFreq<Fermionic>;
pub type BosonicFreq = MatsubaraFreq<Bosonic>;

impl<S: StatisticsType> MatsubaraFreq<S> {
    /// Create a new Matsubara frequency from a reduced index
    ///
    /// # Examples
    /// ```
    /// use irtau::freq::{FermionicFreq, BosonicFreq};
    ///
    /// let first = FermionicFreq::new(0);   // ω = π/β
    /// let zero = BosonicFreq::new(0);      // ω = 0
    /// let negative = FermionicFreq::new(-10);
    /// ```
    pub fn new(n: i64) -> Self {
        Self {
            n,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get the reduced Matsubara index n
    pub fn n(&self) -> i64 {
        self.n
    }

    /// Full integer index 2n + ζ
    pub fn full_index(&self) -> i64 {
        2 * self.n + S::STATISTICS.zeta()
    }

    /// Compute the real frequency value (2n + ζ)π/β
    ///
    /// # Arguments
    /// * `beta` - Inverse temperature
    pub fn value(&self, beta: f64) -> f64 {
        self.full_index() as f64 * std::f64::consts::PI / beta
    }

    /// Compute the imaginary frequency value iω_n
    ///
    /// # Arguments
    /// * `beta` - Inverse temperature
    pub fn value_imaginary(&self, beta: f64) -> Complex64 {
        Complex64::new(0.0, self.value(beta))
    }

    /// Get the statistics type
    pub fn statistics(&self) -> Statistics {
        S::STATISTICS
    }
}

impl Default for FermionicFreq {
    fn default() -> Self {
        // Smallest positive fermionic frequency, ω = π/β
        Self::new(0)
    }
}

impl Default for BosonicFreq {
    fn default() -> Self {
        // Zero frequency
        Self::new(0)
    }
}

impl<S: StatisticsType> From<MatsubaraFreq<S>> for i64 {
    fn from(freq: MatsubaraFreq<S>) -> Self {
        freq.n
    }
}

impl<S: StatisticsType> Add for MatsubaraFreq<S> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.n + other.n)
    }
}

impl<S: StatisticsType> Sub for MatsubaraFreq<S> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.n - other.n)
    }
}

impl<S: StatisticsType> Neg for MatsubaraFreq<S> {
    type Output = Self;

    fn neg(self) -> Self {
        // Negating the physical frequency maps n to -(n + ζ)
        Self::new(-self.n - S::STATISTICS.zeta())
    }
}

impl<S: StatisticsType> PartialEq for MatsubaraFreq<S> {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n
    }
}

impl<S: StatisticsType> Eq for MatsubaraFreq<S> {}

impl<S: StatisticsType> PartialOrd for MatsubaraFreq<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: StatisticsType> Ord for MatsubaraFreq<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.n.cmp(&other.n)
    }
}

impl<S: StatisticsType> std::hash::Hash for MatsubaraFreq<S> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.n.hash(state);
    }
}

impl<S: StatisticsType> fmt::Display for MatsubaraFreq<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "iω_{{{}}} ({})", self.n, S::STATISTICS.as_str())
    }
}
