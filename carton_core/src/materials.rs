//! # Corrugated Board Profiles
//!
//! Flute profile definitions and property lookups for corrugated board.
//! Covers the four profiles commonly run on case erectors and wrap-around
//! machines: E, B, C, and BC doublewall.
//!
//! Only the board thickness and the score allowance feed the blank geometry
//! formulas; the remaining properties (take-up factor, flute pitch, grammage
//! addition, compression factor) are descriptive metadata for presentation
//! layers and material selection.
//!
//! ## Example
//!
//! ```rust
//! use carton_core::materials::FluteProfile;
//!
//! let flute = FluteProfile::C;
//! let spec = flute.material_spec();
//! assert_eq!(spec.thickness_mm, 3.5);
//! assert_eq!(spec.score_allowance_mm, 2.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Corrugated flute profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FluteProfile {
    /// E-flute: fine flute for high-quality print and small cases
    E,
    /// B-flute: general-purpose, good crush resistance
    B,
    /// C-flute: the standard shipping-case profile
    C,
    /// BC doublewall: heavy-duty combination of B and C
    #[serde(rename = "BC")]
    Bc,
}

impl FluteProfile {
    /// All flute profile variants for UI selection
    pub const ALL: [FluteProfile; 4] = [
        FluteProfile::E,
        FluteProfile::B,
        FluteProfile::C,
        FluteProfile::Bc,
    ];

    /// Get the code string (e.g., "E", "BC")
    pub fn code(&self) -> &'static str {
        match self {
            FluteProfile::E => "E",
            FluteProfile::B => "B",
            FluteProfile::C => "C",
            FluteProfile::Bc => "BC",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "E" | "E-FLUTE" | "E-WELLE" => Ok(FluteProfile::E),
            "B" | "B-FLUTE" | "B-WELLE" => Ok(FluteProfile::B),
            "C" | "C-FLUTE" | "C-WELLE" => Ok(FluteProfile::C),
            "BC" | "BC-FLUTE" | "BC-WELLE" | "DOUBLEWALL" => Ok(FluteProfile::Bc),
            _ => Err(CalcError::profile_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FluteProfile::E => "E-flute (1.5 mm)",
            FluteProfile::B => "B-flute (2.5 mm)",
            FluteProfile::C => "C-flute (3.5 mm)",
            FluteProfile::Bc => "BC-flute (6.0 mm)",
        }
    }

    /// Nominal board thickness (mm)
    pub fn thickness_mm(&self) -> f64 {
        match self {
            FluteProfile::E => 1.5,
            FluteProfile::B => 2.5,
            FluteProfile::C => 3.5,
            FluteProfile::Bc => 6.0,
        }
    }

    /// Score (crease) allowance per crease line (mm)
    ///
    /// Thicker board loses more usable dimension at each crease.
    pub fn score_allowance_mm(&self) -> f64 {
        match self {
            FluteProfile::E => 1.0,
            FluteProfile::B => 1.5,
            FluteProfile::C => 2.0,
            FluteProfile::Bc => 3.0,
        }
    }

    /// Typical combined basis weight of the finished board (g/m²)
    pub fn basis_weight_gsm(&self) -> f64 {
        match self {
            FluteProfile::E => 380.0,
            FluteProfile::B => 480.0,
            FluteProfile::C => 550.0,
            FluteProfile::Bc => 920.0,
        }
    }

    /// Take-up factor: fluting paper length per unit board length
    pub fn take_up_factor(&self) -> f64 {
        match self {
            FluteProfile::E => 1.27,
            FluteProfile::B => 1.36,
            FluteProfile::C => 1.43,
            // Doublewall carries both a B and a C fluting web
            FluteProfile::Bc => 1.80,
        }
    }

    /// Flute pitch: wavelength of the corrugation (mm)
    ///
    /// For BC doublewall this is the pitch of the outer (C) web.
    pub fn flute_pitch_mm(&self) -> f64 {
        match self {
            FluteProfile::E => 3.4,
            FluteProfile::B => 6.4,
            FluteProfile::C => 7.9,
            FluteProfile::Bc => 7.9,
        }
    }

    /// Grammage added by the fluting web(s) over the liners (g/m²)
    pub fn grammage_addition_gsm(&self) -> f64 {
        match self {
            FluteProfile::E => 120.0,
            FluteProfile::B => 150.0,
            FluteProfile::C => 180.0,
            FluteProfile::Bc => 330.0,
        }
    }

    /// Relative box compression strength factor (B-flute = 1.0)
    pub fn compression_factor(&self) -> f64 {
        match self {
            FluteProfile::E => 0.80,
            FluteProfile::B => 1.00,
            FluteProfile::C => 1.15,
            FluteProfile::Bc => 1.65,
        }
    }

    /// Build the material spec that feeds the geometry and weight formulas
    pub fn material_spec(&self) -> MaterialSpec {
        MaterialSpec {
            thickness_mm: self.thickness_mm(),
            score_allowance_mm: self.score_allowance_mm(),
            basis_weight_gsm: self.basis_weight_gsm(),
        }
    }
}

impl std::fmt::Display for FluteProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Board parameters consumed by the calculation formulas.
///
/// Usually built from a [`FluteProfile`], but fully custom boards (e.g. a
/// lightweight C-flute at 450 g/m²) can be constructed directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Board thickness (mm)
    pub thickness_mm: f64,
    /// Score allowance per crease line (mm)
    pub score_allowance_mm: f64,
    /// Combined basis weight (g/m²)
    pub basis_weight_gsm: f64,
}

impl Default for MaterialSpec {
    fn default() -> Self {
        FluteProfile::C.material_spec()
    }
}
