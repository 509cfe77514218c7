//! # Machine Metrics & Total Cost of Ownership
//!
//! Converts line throughput and OEE parameters into annual capacity, and
//! rolls up depreciation, energy, labor, maintenance, spares, and material
//! into an annual total and a per-box cost.
//!
//! All money amounts are annual figures in one currency unit; the engine is
//! currency-agnostic.
//!
//! ## Example
//!
//! ```rust
//! use carton_core::calculations::machine::{tco, MachineCosts, TcoInput};
//!
//! let input = TcoInput {
//!     carton_cost_per_box: 0.60,
//!     production_volume: 500_000.0,
//!     machine: MachineCosts::default(),
//! };
//! let result = tco(&input);
//! assert_eq!(result.depreciation, 45_000.0);
//! assert_eq!(result.energy, 15_000.0);
//! ```

use serde::{Deserialize, Serialize};

/// Line throughput and availability parameters.
///
/// ## JSON Example
///
/// ```json
/// {
///   "planned_hours_per_day": 16.0,
///   "unplanned_stop_pct": 8.0,
///   "cartons_per_minute": 20.0,
///   "annual_production_days": 250.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachineInput {
    /// Planned production time per day (h)
    pub planned_hours_per_day: f64,
    /// Unplanned stop share of planned time (%)
    pub unplanned_stop_pct: f64,
    /// Nominal line speed (cartons/min)
    pub cartons_per_minute: f64,
    /// Production days per year
    pub annual_production_days: f64,
}

impl Default for MachineInput {
    fn default() -> Self {
        MachineInput {
            planned_hours_per_day: 16.0,
            unplanned_stop_pct: 8.0,
            cartons_per_minute: 20.0,
            annual_production_days: 250.0,
        }
    }
}

/// Derived line-throughput figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachineMetrics {
    /// Productive minutes per day after unplanned stops
    pub net_minutes_per_day: f64,
    /// Cartons produced per day
    pub cartons_per_day: f64,
    /// Cartons produced per year
    pub cartons_per_year: f64,
    /// Availability after unplanned stops (%)
    pub availability_pct: f64,
}

/// Compute line throughput from planned time, stops, and speed.
pub fn machine_metrics(input: &MachineInput) -> MachineMetrics {
    let uptime = 1.0 - input.unplanned_stop_pct / 100.0;
    let net_minutes_per_day = input.planned_hours_per_day * 60.0 * uptime;
    let cartons_per_day = net_minutes_per_day * input.cartons_per_minute;

    MachineMetrics {
        net_minutes_per_day,
        cartons_per_day,
        cartons_per_year: cartons_per_day * input.annual_production_days,
        availability_pct: uptime * 100.0,
    }
}

/// Annual machine operating-cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachineCosts {
    /// Machine purchase price
    pub investment: f64,
    /// Straight-line depreciation period (years)
    pub life_years: f64,
    /// Connected load (kW)
    pub energy_kw: f64,
    /// Energy price per kWh
    pub energy_price_per_kwh: f64,
    /// Machine operating hours per year
    pub operating_hours_per_year: f64,
    /// Operators tending the line (fractions allowed for shared staff)
    pub operator_count: f64,
    /// Operator cost per hour
    pub operator_cost_per_hour: f64,
    /// Annual maintenance as a share of investment (%)
    pub maintenance_pct: f64,
    /// Fixed annual spare-parts spend
    pub spare_parts_per_year: f64,
}

impl Default for MachineCosts {
    fn default() -> Self {
        MachineCosts {
            investment: 450_000.0,
            life_years: 10.0,
            energy_kw: 15.0,
            energy_price_per_kwh: 0.25,
            operating_hours_per_year: 4000.0,
            operator_count: 0.5,
            operator_cost_per_hour: 40.0,
            maintenance_pct: 3.0,
            spare_parts_per_year: 5000.0,
        }
    }
}

/// Input for the annual TCO roll-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TcoInput {
    /// Full carton cost per box (material + adhesive)
    pub carton_cost_per_box: f64,
    /// Cartons produced per year
    pub production_volume: f64,
    /// Machine operating-cost parameters
    pub machine: MachineCosts,
}

/// Annual cost components and the resulting per-box cost.
///
/// `total` is always the sum of the six components.
///
/// ## JSON Example
///
/// ```json
/// {
///   "depreciation": 45000.0,
///   "energy": 15000.0,
///   "personnel": 80000.0,
///   "maintenance": 13500.0,
///   "material": 300000.0,
///   "spares": 5000.0,
///   "total": 458500.0,
///   "per_box": 0.917
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TcoResult {
    /// Annual straight-line depreciation
    pub depreciation: f64,
    /// Annual energy cost
    pub energy: f64,
    /// Annual operator cost
    pub personnel: f64,
    /// Annual maintenance cost
    pub maintenance: f64,
    /// Annual carton material + adhesive cost
    pub material: f64,
    /// Annual spare-parts spend
    pub spares: f64,
    /// Sum of the six components above
    pub total: f64,
    /// Total divided by production volume (0 when volume is not positive)
    pub per_box: f64,
}

/// Roll up the annual total cost of ownership.
pub fn tco(input: &TcoInput) -> TcoResult {
    let m = &input.machine;

    let depreciation = if m.life_years > 0.0 {
        m.investment / m.life_years
    } else {
        0.0
    };
    let energy = m.energy_kw * m.operating_hours_per_year * m.energy_price_per_kwh;
    let personnel = m.operator_count * m.operator_cost_per_hour * m.operating_hours_per_year;
    let maintenance = m.investment * m.maintenance_pct / 100.0;
    let material = input.carton_cost_per_box * input.production_volume;
    let spares = m.spare_parts_per_year;

    let total = depreciation + energy + personnel + maintenance + material + spares;
    let per_box = if input.production_volume > 0.0 {
        total / input.production_volume
    } else {
        0.0
    };

    TcoResult {
        depreciation,
        energy,
        personnel,
        maintenance,
        material,
        spares,
        total,
        per_box,
    }
}
