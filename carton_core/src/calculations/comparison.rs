//! # Full Comparison
//!
//! Orchestrates the whole two-style comparison in one call: blank geometry
//! for both styles, adhesive cost per style, per-box cost, annual TCO,
//! sustainability figures, savings, and the recommendation cascade.
//!
//! This is the entry point presentation layers should use; the individual
//! calculation modules remain available for sensitivity sweeps over a single
//! aspect.
//!
//! ## Example
//!
//! ```rust
//! use carton_core::calculations::comparison::{compare, ComparisonInput};
//!
//! let result = compare(&ComparisonInput::default());
//! assert!(result.area_savings_pct > 0.0); // WA blank is smaller
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::adhesive::{
    hotmelt_cost, rsc_adhesive, AdhesiveResult, HotmeltPricing, HotmeltResult, RscClosure,
    TapePricing,
};
use crate::calculations::blank::{
    rsc_blank, wrap_around_blank, BoxDimensions, RscBlankInput, RscBlankResult,
    WrapAroundBlankInput, WrapAroundBlankResult,
};
use crate::calculations::machine::{
    machine_metrics, tco, MachineCosts, MachineInput, MachineMetrics, TcoInput, TcoResult,
};
use crate::calculations::recommendation::{recommend, Recommendation, RecommendationInput};
use crate::calculations::sustainability::{
    sustainability, SustainabilityInput, SustainabilityResult,
};
use crate::calculations::CartonStyle;
use crate::materials::FluteProfile;

/// Everything a full comparison needs.
///
/// Defaults reproduce the reference scenario: a 400 x 300 x 200 mm case in
/// C-flute at 500,000 cartons per year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonInput {
    /// Inner box dimensions
    pub dims: BoxDimensions,
    /// Board profile for both styles
    pub flute: FluteProfile,
    /// Purchased RSC blank price per 1000
    pub rsc_price_per_1000: f64,
    /// Purchased Wrap-Around blank price per 1000
    pub wa_price_per_1000: f64,
    /// RSC closure-method choice
    pub rsc_closure: RscClosure,
    /// Tape commercials
    pub tape: TapePricing,
    /// Hot-melt commercials (shared by both styles)
    pub hotmelt: HotmeltPricing,
    /// Cartons per year
    pub production_volume: f64,
    /// Line schedule and speed (shared by both styles)
    pub line_schedule: MachineInput,
    /// RSC machine operating costs
    pub rsc_machine: MachineCosts,
    /// Wrap-Around machine operating costs
    pub wa_machine: MachineCosts,
    /// Blank transport distance (km)
    pub transport_km: f64,
    /// Format changeovers per week
    pub weekly_changeovers: f64,
}

impl Default for ComparisonInput {
    fn default() -> Self {
        ComparisonInput {
            dims: BoxDimensions::default(),
            flute: FluteProfile::C,
            rsc_price_per_1000: 610.0,
            wa_price_per_1000: 555.0,
            rsc_closure: RscClosure::default(),
            tape: TapePricing::default(),
            hotmelt: HotmeltPricing::default(),
            production_volume: 500_000.0,
            line_schedule: MachineInput::default(),
            rsc_machine: MachineCosts::default(),
            wa_machine: MachineCosts::default(),
            transport_km: 200.0,
            weekly_changeovers: 5.0,
        }
    }
}

/// Aggregated results for both styles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// RSC blank geometry
    pub rsc_blank: RscBlankResult,
    /// Wrap-Around blank geometry
    pub wa_blank: WrapAroundBlankResult,
    /// RSC closure figures (tape or hot-melt, per the closure choice)
    pub rsc_adhesive: AdhesiveResult,
    /// Wrap-Around closure figures (always hot-melt)
    pub wa_adhesive: HotmeltResult,
    /// RSC cost per box: material + adhesive
    pub rsc_cost_per_box: f64,
    /// Wrap-Around cost per box: material + adhesive
    pub wa_cost_per_box: f64,
    /// Blank-area saving of Wrap-Around vs RSC (%)
    pub area_savings_pct: f64,
    /// Per-box cost saving of Wrap-Around vs RSC
    pub cost_savings_per_box: f64,
    /// Per-box cost saving as a share of the RSC cost (%)
    pub cost_savings_pct: f64,
    /// Cost saving over the full annual volume
    pub annual_savings: f64,
    /// Line throughput and availability figures
    pub throughput: MachineMetrics,
    /// RSC annual TCO
    pub rsc_tco: TcoResult,
    /// Wrap-Around annual TCO
    pub wa_tco: TcoResult,
    /// RSC weight and CO2 figures
    pub rsc_sustainability: SustainabilityResult,
    /// Wrap-Around weight and CO2 figures
    pub wa_sustainability: SustainabilityResult,
    /// Rule-cascade findings and winner
    pub recommendation: Recommendation,
}

impl ComparisonResult {
    /// Cumulative cost saving at an arbitrary volume, for projection tables.
    pub fn savings_at_volume(&self, volume: f64) -> f64 {
        self.cost_savings_per_box * volume
    }
}

/// Run the full two-style comparison.
pub fn compare(input: &ComparisonInput) -> ComparisonResult {
    let material = input.flute.material_spec();

    // Blank geometry for both styles
    let rsc = rsc_blank(&RscBlankInput::new(input.dims, material));
    let wa = wrap_around_blank(&WrapAroundBlankInput::new(input.dims, material));

    // Closure cost per style
    let rsc_glue = rsc_adhesive(&input.dims, input.rsc_closure, &input.tape, &input.hotmelt);
    let wa_glue = hotmelt_cost(&input.dims, CartonStyle::WrapAround, &input.hotmelt);

    // Per-box cost: purchased blank plus closure
    let rsc_cost_per_box = input.rsc_price_per_1000 / 1000.0 + rsc_glue.cost_per_box();
    let wa_cost_per_box = input.wa_price_per_1000 / 1000.0 + wa_glue.cost_per_box;

    // Savings, guarded against degenerate RSC figures
    let area_savings_pct = if rsc.area_m2 > 0.0 {
        (rsc.area_m2 - wa.area_m2) / rsc.area_m2 * 100.0
    } else {
        0.0
    };
    let cost_savings_per_box = rsc_cost_per_box - wa_cost_per_box;
    let cost_savings_pct = if rsc_cost_per_box > 0.0 {
        cost_savings_per_box / rsc_cost_per_box * 100.0
    } else {
        0.0
    };
    let annual_savings = cost_savings_per_box * input.production_volume;

    // Line capacity from the shared schedule
    let throughput = machine_metrics(&input.line_schedule);

    // Annual TCO per style, fed by the per-box cost
    let rsc_tco = tco(&TcoInput {
        carton_cost_per_box: rsc_cost_per_box,
        production_volume: input.production_volume,
        machine: input.rsc_machine,
    });
    let wa_tco = tco(&TcoInput {
        carton_cost_per_box: wa_cost_per_box,
        production_volume: input.production_volume,
        machine: input.wa_machine,
    });

    // Weight and CO2 per style
    let rsc_sustainability = sustainability(&SustainabilityInput {
        area_m2: rsc.area_m2,
        basis_weight_gsm: material.basis_weight_gsm,
        production_volume: input.production_volume,
        transport_km: input.transport_km,
        pallet_efficiency_factor: CartonStyle::Rsc.pallet_efficiency_factor(),
    });
    let wa_sustainability = sustainability(&SustainabilityInput {
        area_m2: wa.area_m2,
        basis_weight_gsm: material.basis_weight_gsm,
        production_volume: input.production_volume,
        transport_km: input.transport_km,
        pallet_efficiency_factor: CartonStyle::WrapAround.pallet_efficiency_factor(),
    });

    let recommendation = recommend(&RecommendationInput {
        area_savings_pct,
        cost_savings_per_box,
        production_volume: input.production_volume,
        rsc_tco_total: rsc_tco.total,
        wa_tco_total: wa_tco.total,
        weekly_changeovers: input.weekly_changeovers,
    });

    ComparisonResult {
        rsc_blank: rsc,
        wa_blank: wa,
        rsc_adhesive: rsc_glue,
        wa_adhesive: wa_glue,
        rsc_cost_per_box,
        wa_cost_per_box,
        area_savings_pct,
        cost_savings_per_box,
        cost_savings_pct,
        annual_savings,
        throughput,
        rsc_tco,
        wa_tco,
        rsc_sustainability,
        wa_sustainability,
        recommendation,
    }
}
