//! # Carton Calculations
//!
//! This module contains all carton calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function mapping input to result
//!
//! The formulas are total: they never panic and never allocate beyond their
//! result, so a caller can sweep thousands of parameter sets without error
//! handling in the hot path. Validation helpers exist for presentation layers
//! that want to bound user input first.
//!
//! ## Available Calculations
//!
//! - [`blank`] - Cut-sheet (blank) geometry for RSC and Wrap-Around
//! - [`adhesive`] - Tape and hot-melt consumption and cost
//! - [`machine`] - Line throughput metrics and annual TCO
//! - [`sustainability`] - Board weight and CO2 footprint
//! - [`recommendation`] - Rule-based decision support
//! - [`comparison`] - Full two-style comparison in one call

pub mod adhesive;
pub mod blank;
pub mod comparison;
pub mod machine;
pub mod recommendation;
pub mod sustainability;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use adhesive::{AdhesiveResult, HotmeltResult, RscClosure, TapePattern, TapeResult};
pub use blank::{BoxDimensions, RscBlankResult, WrapAroundBlankResult};
pub use comparison::{compare, ComparisonInput, ComparisonResult};
pub use machine::{MachineMetrics, TcoResult};
pub use recommendation::{Recommendation, Winner};
pub use sustainability::SustainabilityResult;

/// The two carton styles this engine compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CartonStyle {
    /// Regular Slotted Container (FEFCO 0201)
    Rsc,
    /// Wrap-Around / Five Panel Folder (FEFCO 0409)
    WrapAround,
}

impl CartonStyle {
    /// Both styles, in comparison order
    pub const ALL: [CartonStyle; 2] = [CartonStyle::Rsc, CartonStyle::WrapAround];

    /// FEFCO design code
    pub fn fefco_code(&self) -> &'static str {
        match self {
            CartonStyle::Rsc => "0201",
            CartonStyle::WrapAround => "0409",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            CartonStyle::Rsc => "RSC",
            CartonStyle::WrapAround => "Wrap-Around",
        }
    }

    /// Pallet efficiency factor for blank transport.
    ///
    /// Wrap-Around blanks ship completely flat and stack roughly 40% denser
    /// per pallet than pre-glued RSC blanks, cutting transport trips for the
    /// same carton count. Used to scale the transport CO2 term.
    pub fn pallet_efficiency_factor(&self) -> f64 {
        match self {
            CartonStyle::Rsc => 1.0,
            CartonStyle::WrapAround => 1.4,
        }
    }
}

impl std::fmt::Display for CartonStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (FEFCO {})", self.display_name(), self.fefco_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fefco_codes() {
        assert_eq!(CartonStyle::Rsc.fefco_code(), "0201");
        assert_eq!(CartonStyle::WrapAround.fefco_code(), "0409");
    }

    #[test]
    fn test_pallet_factors() {
        assert_eq!(CartonStyle::Rsc.pallet_efficiency_factor(), 1.0);
        assert!(CartonStyle::WrapAround.pallet_efficiency_factor() > 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", CartonStyle::WrapAround),
            "Wrap-Around (FEFCO 0409)"
        );
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&CartonStyle::WrapAround).unwrap();
        let parsed: CartonStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, CartonStyle::WrapAround);
    }
}
