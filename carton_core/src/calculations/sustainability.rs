//! # Sustainability Model
//!
//! Estimates per-box board weight and a simplified CO2 footprint from blank
//! area, basis weight, and transport distance.
//!
//! The emission factors are deliberately coarse screening values, not a
//! validated LCA: 0.7 kg CO2 per kg of corrugated board, and 0.062 kg CO2
//! per tonne-kilometre of road transport. The transport term is divided by
//! the style's pallet-efficiency factor, since flatter blanks stack more
//! densely per pallet and need fewer trips.

use serde::{Deserialize, Serialize};

/// Emission factor for board production (kg CO2 per kg board)
pub const CO2_PER_KG_BOARD: f64 = 0.7;

/// Emission factor for road transport (kg CO2 per tonne-km)
pub const CO2_PER_TONNE_KM: f64 = 0.062;

/// Input for the weight and CO2 estimate of one style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityInput {
    /// Blank area per box (m²)
    pub area_m2: f64,
    /// Board basis weight (g/m²)
    pub basis_weight_gsm: f64,
    /// Cartons per year
    pub production_volume: f64,
    /// Transport distance for blank delivery (km)
    pub transport_km: f64,
    /// Pallet-efficiency factor (> 1.0 for flatter-stacking blanks)
    pub pallet_efficiency_factor: f64,
}

/// Per-box weight and annual CO2 figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityResult {
    /// Board weight per box (kg)
    pub weight_kg_per_box: f64,
    /// Annual board weight (t)
    pub total_weight_t: f64,
    /// Annual CO2 from board production (kg)
    pub co2_material_kg: f64,
    /// Annual CO2 from blank transport, pallet-adjusted (kg)
    pub co2_transport_kg: f64,
    /// Total annual CO2 (kg)
    pub co2_total_kg: f64,
}

/// Estimate board weight and CO2 footprint.
pub fn sustainability(input: &SustainabilityInput) -> SustainabilityResult {
    let weight_kg_per_box = input.area_m2 * input.basis_weight_gsm / 1000.0;
    let total_weight_t = weight_kg_per_box * input.production_volume / 1000.0;

    let co2_material_kg = total_weight_t * CO2_PER_KG_BOARD;

    let co2_transport_raw = total_weight_t * input.transport_km * CO2_PER_TONNE_KM / 1000.0;
    let co2_transport_kg = if input.pallet_efficiency_factor > 0.0 {
        co2_transport_raw / input.pallet_efficiency_factor
    } else {
        co2_transport_raw
    };

    SustainabilityResult {
        weight_kg_per_box,
        total_weight_t,
        co2_material_kg,
        co2_transport_kg,
        co2_total_kg: co2_material_kg + co2_transport_kg,
    }
}
