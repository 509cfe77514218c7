//! # Adhesive Cost
//!
//! Tape and hot-melt consumption and per-box cost.
//!
//! RSC cases close with self-adhesive tape or a hot-melt bead; Wrap-Around
//! cases always close with hot-melt (one longitudinal seam plus two end
//! seams). When the RSC closure choice is [`RscClosure::CompareBoth`], the
//! engine computes both and reports the cheaper method as a tagged
//! [`AdhesiveResult`], so downstream match arms stay exhaustive.
//!
//! ## Example
//!
//! ```rust
//! use carton_core::calculations::adhesive::{tape_cost, TapePattern, TapePricing};
//! use carton_core::calculations::blank::BoxDimensions;
//!
//! let dims = BoxDimensions::new(400.0, 300.0, 200.0);
//! let pricing = TapePricing::default();
//! let tape = tape_cost(&dims, &pricing);
//! assert!((tape.tape_length_m - 2.3).abs() < 1e-9); // H-pattern
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::blank::BoxDimensions;
use crate::calculations::CartonStyle;
use crate::units::{Grams, Kilograms, Meters, Millimeters};

/// Tape overhang allowance for the H-pattern, per closure face (mm)
const H_PATTERN_OVERHANG_MM: f64 = 150.0;

/// Tape overhang allowance for the single-strip pattern, per closure face (mm)
const SINGLE_PATTERN_OVERHANG_MM: f64 = 100.0;

/// Tape closure patterns for RSC cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TapePattern {
    /// H-pattern: one strip along the center seam plus one down each side
    #[serde(rename = "H")]
    HPattern,
    /// Single strip across the center seam only
    Single,
}

impl TapePattern {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TapePattern::HPattern => "H-pattern",
            TapePattern::Single => "Single strip",
        }
    }

    /// Tape length consumed per closure face (mm)
    fn length_per_face_mm(&self, dims: &BoxDimensions) -> Millimeters {
        match self {
            TapePattern::HPattern => Millimeters(
                dims.length_mm + 2.0 * dims.width_mm + H_PATTERN_OVERHANG_MM,
            ),
            TapePattern::Single => {
                Millimeters(dims.width_mm + SINGLE_PATTERN_OVERHANG_MM)
            }
        }
    }
}

impl std::fmt::Display for TapePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Tape commercials: roll price, roll length, and the closure pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TapePricing {
    /// Price per roll
    pub price_per_roll: f64,
    /// Tape length per roll (m)
    pub roll_length_m: f64,
    /// Closure pattern
    pub pattern: TapePattern,
}

impl Default for TapePricing {
    fn default() -> Self {
        TapePricing {
            price_per_roll: 2.5,
            roll_length_m: 66.0,
            pattern: TapePattern::HPattern,
        }
    }
}

/// Hot-melt bead presets. The bead width fixes the application rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HotmeltBead {
    /// 1.5 mm bead, 0.50 g/m
    #[serde(rename = "1.5mm")]
    Narrow,
    /// 3 mm bead, 2.0 g/m
    #[serde(rename = "3mm")]
    Standard,
    /// 5 mm bead, 6.67 g/m
    #[serde(rename = "5mm")]
    Wide,
}

impl HotmeltBead {
    /// Bead width (mm)
    pub fn bead_width_mm(&self) -> f64 {
        match self {
            HotmeltBead::Narrow => 1.5,
            HotmeltBead::Standard => 3.0,
            HotmeltBead::Wide => 5.0,
        }
    }

    /// Application rate (g per metre of seam)
    pub fn grams_per_meter(&self) -> f64 {
        match self {
            HotmeltBead::Narrow => 0.50,
            HotmeltBead::Standard => 2.0,
            HotmeltBead::Wide => 6.67,
        }
    }
}

/// Hot-melt commercials: adhesive price and application rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HotmeltPricing {
    /// Adhesive price per kg
    pub price_per_kg: f64,
    /// Application rate (g/m of seam)
    pub grams_per_meter: f64,
}

impl HotmeltPricing {
    /// Pricing from a bead preset
    pub fn with_bead(price_per_kg: f64, bead: HotmeltBead) -> Self {
        HotmeltPricing {
            price_per_kg,
            grams_per_meter: bead.grams_per_meter(),
        }
    }
}

impl Default for HotmeltPricing {
    fn default() -> Self {
        HotmeltPricing::with_bead(3.0, HotmeltBead::Standard)
    }
}

/// RSC closure-method choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum RscClosure {
    /// Tape with the given pattern
    Tape { pattern: TapePattern },
    /// Hot-melt bead on the flaps and manufacturer seam
    Hotmelt,
    /// Compute both and keep whichever is cheaper per box
    CompareBoth,
}

impl Default for RscClosure {
    fn default() -> Self {
        RscClosure::Tape {
            pattern: TapePattern::HPattern,
        }
    }
}

/// Tape consumption and cost per box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TapeResult {
    /// Tape consumed per box (m)
    pub tape_length_m: f64,
    /// Closure cost per box
    pub cost_per_box: f64,
    /// Pattern that produced these figures
    pub pattern: TapePattern,
}

/// Hot-melt consumption and cost per box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HotmeltResult {
    /// Total glued seam length per box (m)
    pub seam_length_m: f64,
    /// Adhesive consumed per box (kg)
    pub hotmelt_kg: f64,
    /// Closure cost per box
    pub cost_per_box: f64,
}

/// Result of a closure-method decision, tagged by the method used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum AdhesiveResult {
    /// Tape closure
    Tape(TapeResult),
    /// Hot-melt closure
    Hotmelt(HotmeltResult),
}

impl AdhesiveResult {
    /// Closure cost per box, whichever the method
    pub fn cost_per_box(&self) -> f64 {
        match self {
            AdhesiveResult::Tape(t) => t.cost_per_box,
            AdhesiveResult::Hotmelt(h) => h.cost_per_box,
        }
    }

    /// Get the closure method as a string
    pub fn method_name(&self) -> &'static str {
        match self {
            AdhesiveResult::Tape(_) => "Tape",
            AdhesiveResult::Hotmelt(_) => "Hot-melt",
        }
    }
}

/// Total glued seam length per box for a style (m).
///
/// RSC: one manufacturer seam along the height plus two flap-closure seams
/// each spanning twice the width. Wrap-Around: one longitudinal seam along
/// the height plus two end-closure seams each spanning the girth (L + W).
pub fn seam_length_m(style: CartonStyle, dims: &BoxDimensions) -> f64 {
    let seam_mm = match style {
        CartonStyle::Rsc => {
            Millimeters(dims.height_mm) + Millimeters(2.0 * (2.0 * dims.width_mm))
        }
        CartonStyle::WrapAround => {
            Millimeters(dims.height_mm)
                + Millimeters(2.0 * (dims.length_mm + dims.width_mm))
        }
    };
    Meters::from(seam_mm).0
}

/// Compute tape consumption and cost for an RSC case (top + bottom closure).
pub fn tape_cost(dims: &BoxDimensions, pricing: &TapePricing) -> TapeResult {
    // Same pattern on top and bottom
    let per_face = pricing.pattern.length_per_face_mm(dims);
    let tape_length_m = Meters::from(per_face).0 * 2.0;

    let cost_per_meter = if pricing.roll_length_m > 0.0 {
        pricing.price_per_roll / pricing.roll_length_m
    } else {
        0.0
    };

    TapeResult {
        tape_length_m,
        cost_per_box: tape_length_m * cost_per_meter,
        pattern: pricing.pattern,
    }
}

/// Compute hot-melt consumption and cost for either style.
pub fn hotmelt_cost(
    dims: &BoxDimensions,
    style: CartonStyle,
    pricing: &HotmeltPricing,
) -> HotmeltResult {
    let seam_m = seam_length_m(style, dims);
    let consumed: Kilograms = Grams(seam_m * pricing.grams_per_meter).into();

    HotmeltResult {
        seam_length_m: seam_m,
        hotmelt_kg: consumed.0,
        cost_per_box: consumed.0 * pricing.price_per_kg,
    }
}

/// Resolve the RSC closure choice into a concrete adhesive result.
///
/// For [`RscClosure::CompareBoth`] the cheaper of tape and hot-melt wins;
/// on an exact tie tape is kept, since it needs no melter on the line.
pub fn rsc_adhesive(
    dims: &BoxDimensions,
    closure: RscClosure,
    tape: &TapePricing,
    hotmelt: &HotmeltPricing,
) -> AdhesiveResult {
    match closure {
        RscClosure::Tape { pattern } => {
            let pricing = TapePricing { pattern, ..*tape };
            AdhesiveResult::Tape(tape_cost(dims, &pricing))
        }
        RscClosure::Hotmelt => {
            AdhesiveResult::Hotmelt(hotmelt_cost(dims, CartonStyle::Rsc, hotmelt))
        }
        RscClosure::CompareBoth => {
            let t = tape_cost(dims, tape);
            let h = hotmelt_cost(dims, CartonStyle::Rsc, hotmelt);
            if h.cost_per_box < t.cost_per_box {
                AdhesiveResult::Hotmelt(h)
            } else {
                AdhesiveResult::Tape(t)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_dims() -> BoxDimensions {
        BoxDimensions::new(400.0, 300.0, 200.0)
    }

    #[test]
    fn test_h_pattern_tape_length() {
        let tape = tape_cost(&reference_dims(), &TapePricing::default());
        // (400 + 600 + 150) / 1000 * 2 = 2.3 m
        assert!((tape.tape_length_m - 2.3).abs() < 1e-9);
    }

    #[test]
    fn test_single_pattern_tape_length() {
        let pricing = TapePricing {
            pattern: TapePattern::Single,
            ..TapePricing::default()
        };
        let tape = tape_cost(&reference_dims(), &pricing);
        // (300 + 100) / 1000 * 2 = 0.8 m
        assert!((tape.tape_length_m - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_tape_cost_scales_with_roll_price() {
        let base = tape_cost(&reference_dims(), &TapePricing::default());
        let double = tape_cost(
            &reference_dims(),
            &TapePricing {
                price_per_roll: 5.0,
                ..TapePricing::default()
            },
        );
        assert!((double.cost_per_box - 2.0 * base.cost_per_box).abs() < 1e-12);

        // Twice the roll length halves the cost per box
        let long_roll = tape_cost(
            &reference_dims(),
            &TapePricing {
                roll_length_m: 132.0,
                ..TapePricing::default()
            },
        );
        assert!((long_roll.cost_per_box - base.cost_per_box / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_roll_length_is_guarded() {
        let pricing = TapePricing {
            roll_length_m: 0.0,
            ..TapePricing::default()
        };
        let tape = tape_cost(&reference_dims(), &pricing);
        assert_eq!(tape.cost_per_box, 0.0);
    }

    #[test]
    fn test_seam_lengths() {
        let dims = reference_dims();
        // RSC: 0.2 + 2 * 0.6 = 1.4 m
        assert!((seam_length_m(CartonStyle::Rsc, &dims) - 1.4).abs() < 1e-9);
        // WA: 0.2 + 2 * 0.7 = 1.6 m
        assert!((seam_length_m(CartonStyle::WrapAround, &dims) - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_hotmelt_cost_reference() {
        let hm = hotmelt_cost(
            &reference_dims(),
            CartonStyle::WrapAround,
            &HotmeltPricing::default(),
        );
        // 1.6 m * 2.0 g/m = 3.2 g = 0.0032 kg
        assert!((hm.hotmelt_kg - 0.0032).abs() < 1e-12);
        // 0.0032 kg * 3.0 /kg = 0.0096
        assert!((hm.cost_per_box - 0.0096).abs() < 1e-12);
    }

    #[test]
    fn test_bead_presets() {
        assert_eq!(HotmeltBead::Narrow.grams_per_meter(), 0.50);
        assert_eq!(HotmeltBead::Standard.grams_per_meter(), 2.0);
        assert_eq!(HotmeltBead::Wide.grams_per_meter(), 6.67);

        let pricing = HotmeltPricing::with_bead(3.0, HotmeltBead::Wide);
        assert_eq!(pricing.grams_per_meter, 6.67);
    }

    #[test]
    fn test_compare_both_picks_cheaper() {
        let dims = reference_dims();
        let tape = TapePricing::default();
        let hotmelt = HotmeltPricing::default();

        let chosen = rsc_adhesive(&dims, RscClosure::CompareBoth, &tape, &hotmelt);
        let t = tape_cost(&dims, &tape);
        let h = hotmelt_cost(&dims, CartonStyle::Rsc, &hotmelt);
        assert!(chosen.cost_per_box() <= t.cost_per_box);
        assert!(chosen.cost_per_box() <= h.cost_per_box);

        // With the defaults, hot-melt (0.0084) undercuts H-pattern tape (0.0871)
        assert_eq!(chosen.method_name(), "Hot-melt");
    }

    #[test]
    fn test_explicit_closure_choices() {
        let dims = reference_dims();
        let tape = TapePricing::default();
        let hotmelt = HotmeltPricing::default();

        let taped = rsc_adhesive(
            &dims,
            RscClosure::Tape {
                pattern: TapePattern::Single,
            },
            &tape,
            &hotmelt,
        );
        match taped {
            AdhesiveResult::Tape(t) => assert_eq!(t.pattern, TapePattern::Single),
            AdhesiveResult::Hotmelt(_) => panic!("expected tape result"),
        }

        let glued = rsc_adhesive(&dims, RscClosure::Hotmelt, &tape, &hotmelt);
        assert_eq!(glued.method_name(), "Hot-melt");
    }

    #[test]
    fn test_serialization() {
        let result = rsc_adhesive(
            &reference_dims(),
            RscClosure::CompareBoth,
            &TapePricing::default(),
            &HotmeltPricing::default(),
        );
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"method\""));
        let roundtrip: AdhesiveResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
