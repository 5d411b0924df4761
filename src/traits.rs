//! Common trait definitions for the transform library

/// Statistics type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistics {
    Fermionic,
    Bosonic,
}

/// Statistics type trait for compile-time type-level distinction
pub trait StatisticsType: Copy {
    const STATISTICS: Statistics;
}

/// Fermionic statistics marker type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fermionic;

impl StatisticsType for Fermionic {
    const STATISTICS: Statistics = Statistics::Fermionic;
}

/// Bosonic statistics marker type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bosonic;

impl StatisticsType for Bosonic {
    const STATISTICS: Statistics = Statistics::Bosonic;
}

/// Utility functions for statistics
impl Statistics {
    /// Check if this statistics type is fermionic
    pub fn is_fermionic(self) -> bool {
        matches!(self, Statistics::Fermionic)
    }

    /// Check if this statistics type is bosonic
    pub fn is_bosonic(self) -> bool {
        matches!(self, Statistics::Bosonic)
    }

    /// Frequency shift ζ: Matsubara frequencies are ω_n = (2n + ζ)π/β
    ///
    /// ζ = 1 for fermions (odd frequencies), ζ = 0 for bosons (even frequencies).
    pub fn zeta(self) -> i64 {
        match self {
            Statistics::Fermionic => 1,
            Statistics::Bosonic => 0,
        }
    }

    /// Get the string representation of the statistics
    pub fn as_str(self) -> &'static str {
        match self {
            Statistics::Fermionic => "fermionic",
            Statistics::Bosonic => "bosonic",
        }
    }
}
