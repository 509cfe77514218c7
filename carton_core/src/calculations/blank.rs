//! # Blank Geometry
//!
//! Computes cut-sheet (blank) dimensions and area for RSC and Wrap-Around
//! cartons from inner box dimensions and board material.
//!
//! ## Formula Set
//!
//! RSC (FEFCO 0201):
//!
//! ```text
//! blank_length = 2L + 2W + 4t + manufacturer_flap + trim + 4·score
//! flap         = max(L, W) / 2
//! blank_width  = flap + H + W + H + flap + 4t + trim + 2·score
//! ```
//!
//! Wrap-Around (FEFCO 0409):
//!
//! ```text
//! blank_length = 2L + 2W + overlap + 4·score
//! blank_width  = W + 2H
//! ```
//!
//! The RSC blank needs extra sheet in both directions for the manufacturer's
//! glue joint and the folding flaps; the Wrap-Around blank needs only an
//! overlap seam and no flaps since the product itself closes the ends. That
//! area delta is the central quantity the whole comparison is built on.
//!
//! ## Contract
//!
//! These functions are total. Zero thickness, score allowance, or overlap are
//! legitimate; non-positive box dimensions produce degenerate but arithmetically
//! defined blanks. Presentation layers that want physical plausibility should
//! call [`BoxDimensions::validate`] first.
//!
//! ## Example
//!
//! ```rust
//! use carton_core::calculations::blank::{rsc_blank, BoxDimensions, RscBlankInput};
//! use carton_core::materials::FluteProfile;
//!
//! let input = RscBlankInput::new(
//!     BoxDimensions::new(400.0, 300.0, 200.0),
//!     FluteProfile::C.material_spec(),
//! );
//! let blank = rsc_blank(&input);
//! assert_eq!(blank.blank_length_mm, 1467.0);
//! assert_eq!(blank.blank_width_mm, 1138.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialSpec;
use crate::units::{SquareMeters, SquareMillimeters};

/// Default manufacturer's glue flap width for RSC (mm)
pub const DEFAULT_MANUFACTURER_FLAP_MM: f64 = 25.0;

/// Default trim allowance for RSC (mm)
pub const DEFAULT_TRIM_ALLOWANCE_MM: f64 = 20.0;

/// Default overlap seam width for Wrap-Around (mm)
pub const DEFAULT_OVERLAP_MM: f64 = 35.0;

/// Inner dimensions of the packed product.
///
/// ## JSON Example
///
/// ```json
/// { "length_mm": 400.0, "width_mm": 300.0, "height_mm": 200.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    /// Inner length (mm)
    pub length_mm: f64,
    /// Inner width (mm)
    pub width_mm: f64,
    /// Inner height (mm)
    pub height_mm: f64,
}

impl BoxDimensions {
    pub fn new(length_mm: f64, width_mm: f64, height_mm: f64) -> Self {
        BoxDimensions {
            length_mm,
            width_mm,
            height_mm,
        }
    }

    /// Validate that the dimensions fall in the machine-supported range.
    ///
    /// The geometry formulas never call this; it exists for presentation
    /// layers that bound user input before computing. Ranges match typical
    /// case-erector envelopes: 50-2000 mm footprint, 20-1000 mm height.
    pub fn validate(&self) -> CalcResult<()> {
        if !(50.0..=2000.0).contains(&self.length_mm) {
            return Err(CalcError::invalid_input(
                "length_mm",
                self.length_mm.to_string(),
                "Length must be between 50 and 2000 mm",
            ));
        }
        if !(50.0..=2000.0).contains(&self.width_mm) {
            return Err(CalcError::invalid_input(
                "width_mm",
                self.width_mm.to_string(),
                "Width must be between 50 and 2000 mm",
            ));
        }
        if !(20.0..=1000.0).contains(&self.height_mm) {
            return Err(CalcError::invalid_input(
                "height_mm",
                self.height_mm.to_string(),
                "Height must be between 20 and 1000 mm",
            ));
        }
        Ok(())
    }
}

impl Default for BoxDimensions {
    fn default() -> Self {
        BoxDimensions::new(400.0, 300.0, 200.0)
    }
}

/// Input parameters for an RSC blank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RscBlankInput {
    /// Inner box dimensions
    pub dims: BoxDimensions,
    /// Board material (thickness and score allowance feed the formulas)
    pub material: MaterialSpec,
    /// Manufacturer's glue flap width (mm)
    pub manufacturer_flap_mm: f64,
    /// Trim allowance (mm)
    pub trim_allowance_mm: f64,
}

impl RscBlankInput {
    /// Build an input with the standard flap and trim allowances.
    pub fn new(dims: BoxDimensions, material: MaterialSpec) -> Self {
        RscBlankInput {
            dims,
            material,
            manufacturer_flap_mm: DEFAULT_MANUFACTURER_FLAP_MM,
            trim_allowance_mm: DEFAULT_TRIM_ALLOWANCE_MM,
        }
    }
}

/// Input parameters for a Wrap-Around blank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WrapAroundBlankInput {
    /// Inner box dimensions
    pub dims: BoxDimensions,
    /// Board material (thickness and score allowance feed the formulas)
    pub material: MaterialSpec,
    /// Overlap seam width (mm)
    pub overlap_mm: f64,
}

impl WrapAroundBlankInput {
    /// Build an input with the standard overlap seam.
    pub fn new(dims: BoxDimensions, material: MaterialSpec) -> Self {
        WrapAroundBlankInput {
            dims,
            material,
            overlap_mm: DEFAULT_OVERLAP_MM,
        }
    }
}

/// RSC blank dimensions and area.
///
/// ## JSON Example
///
/// ```json
/// {
///   "blank_length_mm": 1467.0,
///   "blank_width_mm": 1138.0,
///   "area_mm2": 1669446.0,
///   "area_m2": 1.669446,
///   "flap_height_mm": 200.0,
///   "manufacturer_flap_mm": 25.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RscBlankResult {
    /// Cut-sheet length (mm)
    pub blank_length_mm: f64,
    /// Cut-sheet width (mm)
    pub blank_width_mm: f64,
    /// Blank area (mm²)
    pub area_mm2: f64,
    /// Blank area (m²)
    pub area_m2: f64,
    /// Closing flap height, applied at both blank ends (mm)
    pub flap_height_mm: f64,
    /// Manufacturer's glue flap width used (mm)
    pub manufacturer_flap_mm: f64,
}

/// Wrap-Around blank dimensions and area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WrapAroundBlankResult {
    /// Cut-sheet length (mm)
    pub blank_length_mm: f64,
    /// Cut-sheet width (mm)
    pub blank_width_mm: f64,
    /// Blank area (mm²)
    pub area_mm2: f64,
    /// Blank area (m²)
    pub area_m2: f64,
    /// Overlap seam width used (mm)
    pub overlap_mm: f64,
}

/// Compute the RSC (FEFCO 0201) blank.
pub fn rsc_blank(input: &RscBlankInput) -> RscBlankResult {
    let d = &input.dims;
    let t = input.material.thickness_mm;
    let score = input.material.score_allowance_mm;

    let blank_length = 2.0 * d.length_mm
        + 2.0 * d.width_mm
        + 4.0 * t
        + input.manufacturer_flap_mm
        + input.trim_allowance_mm
        + 4.0 * score;

    // Flaps meet in the middle of the larger footprint dimension
    let flap = d.length_mm.max(d.width_mm) / 2.0;

    let blank_width = flap
        + d.height_mm
        + d.width_mm
        + d.height_mm
        + flap
        + 4.0 * t
        + input.trim_allowance_mm
        + 2.0 * score;

    let area_mm2 = blank_length * blank_width;
    let area_m2: SquareMeters = SquareMillimeters(area_mm2).into();

    RscBlankResult {
        blank_length_mm: blank_length,
        blank_width_mm: blank_width,
        area_mm2,
        area_m2: area_m2.0,
        flap_height_mm: flap,
        manufacturer_flap_mm: input.manufacturer_flap_mm,
    }
}

/// Compute the Wrap-Around (FEFCO 0409) blank.
pub fn wrap_around_blank(input: &WrapAroundBlankInput) -> WrapAroundBlankResult {
    let d = &input.dims;
    let score = input.material.score_allowance_mm;

    let blank_length =
        2.0 * d.length_mm + 2.0 * d.width_mm + input.overlap_mm + 4.0 * score;

    // No flap allowance: the product is fully wrapped and the ends are closed
    // by separate adhesive seams
    let blank_width = d.width_mm + 2.0 * d.height_mm;

    let area_mm2 = blank_length * blank_width;
    let area_m2: SquareMeters = SquareMillimeters(area_mm2).into();

    WrapAroundBlankResult {
        blank_length_mm: blank_length,
        blank_width_mm: blank_width,
        area_mm2,
        area_m2: area_m2.0,
        overlap_mm: input.overlap_mm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::FluteProfile;

    fn reference_dims() -> BoxDimensions {
        BoxDimensions::new(400.0, 300.0, 200.0)
    }

    #[test]
    fn test_rsc_blank_reference() {
        let input = RscBlankInput::new(reference_dims(), FluteProfile::C.material_spec());
        let blank = rsc_blank(&input);

        // 2*400 + 2*300 + 4*3.5 + 25 + 20 + 4*2 = 1467
        assert!((blank.blank_length_mm - 1467.0).abs() < 1e-9);
        // 200 + 200 + 300 + 200 + 200 + 4*3.5 + 20 + 2*2 = 1138
        assert!((blank.blank_width_mm - 1138.0).abs() < 1e-9);
        assert_eq!(blank.flap_height_mm, 200.0);
        assert!((blank.area_m2 - 1467.0 * 1138.0 / 1e6).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_around_blank_reference() {
        let input =
            WrapAroundBlankInput::new(reference_dims(), FluteProfile::C.material_spec());
        let blank = wrap_around_blank(&input);

        // 2*400 + 2*300 + 35 + 4*2 = 1443
        assert!((blank.blank_length_mm - 1443.0).abs() < 1e-9);
        // 300 + 2*200 = 700
        assert!((blank.blank_width_mm - 700.0).abs() < 1e-9);
        assert_eq!(blank.overlap_mm, DEFAULT_OVERLAP_MM);
    }

    #[test]
    fn test_wrap_around_uses_less_board() {
        let dims = reference_dims();
        let material = FluteProfile::C.material_spec();
        let rsc = rsc_blank(&RscBlankInput::new(dims, material));
        let wa = wrap_around_blank(&WrapAroundBlankInput::new(dims, material));
        assert!(wa.area_m2 < rsc.area_m2);
    }

    #[test]
    fn test_rsc_blank_monotonic_in_each_dimension() {
        let material = FluteProfile::C.material_spec();
        let base = rsc_blank(&RscBlankInput::new(reference_dims(), material));

        let bigger = [
            BoxDimensions::new(450.0, 300.0, 200.0),
            BoxDimensions::new(400.0, 350.0, 200.0),
            BoxDimensions::new(400.0, 300.0, 250.0),
        ];
        for dims in bigger {
            let blank = rsc_blank(&RscBlankInput::new(dims, material));
            assert!(blank.blank_length_mm >= base.blank_length_mm);
            assert!(blank.blank_width_mm >= base.blank_width_mm);
            assert!(blank.area_m2 > base.area_m2);
        }

        // Thicker board also grows the blank in both directions
        let thick = rsc_blank(&RscBlankInput::new(
            reference_dims(),
            FluteProfile::Bc.material_spec(),
        ));
        assert!(thick.blank_length_mm > base.blank_length_mm);
        assert!(thick.blank_width_mm > base.blank_width_mm);
    }

    #[test]
    fn test_flap_follows_larger_footprint_dimension() {
        let material = FluteProfile::C.material_spec();
        // Width larger than length: flaps still meet across the larger dim
        let wide = rsc_blank(&RscBlankInput::new(
            BoxDimensions::new(300.0, 400.0, 200.0),
            material,
        ));
        assert_eq!(wide.flap_height_mm, 200.0);
    }

    #[test]
    fn test_zero_allowances_are_defined() {
        let input = WrapAroundBlankInput {
            dims: reference_dims(),
            material: MaterialSpec {
                thickness_mm: 0.0,
                score_allowance_mm: 0.0,
                basis_weight_gsm: 0.0,
            },
            overlap_mm: 0.0,
        };
        let blank = wrap_around_blank(&input);
        assert_eq!(blank.blank_length_mm, 1400.0);
        assert_eq!(blank.blank_width_mm, 700.0);
    }

    #[test]
    fn test_degenerate_dims_do_not_panic() {
        let input = RscBlankInput::new(
            BoxDimensions::new(-10.0, 0.0, -5.0),
            FluteProfile::E.material_spec(),
        );
        // Non-physical, but arithmetically defined
        let blank = rsc_blank(&input);
        assert!(blank.blank_length_mm.is_finite());
        assert!(blank.area_m2.is_finite());
    }

    #[test]
    fn test_validate_bounds() {
        assert!(reference_dims().validate().is_ok());
        assert!(BoxDimensions::new(10.0, 300.0, 200.0).validate().is_err());
        assert!(BoxDimensions::new(400.0, 300.0, 1500.0).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let input = RscBlankInput::new(reference_dims(), FluteProfile::C.material_spec());
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: RscBlankInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
