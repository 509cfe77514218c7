//! # carton_core - Corrugated Carton Cost Comparison Engine
//!
//! `carton_core` computes and compares manufacturing costs for the two most
//! common corrugated-carton styles: **RSC (FEFCO 0201)** and **Wrap-Around
//! (FEFCO 0409)**. It turns box dimensions, board material, and adhesive
//! parameters into blank dimensions, material area, adhesive consumption,
//! per-box and annual cost, total cost of ownership, and a simplified CO2
//! estimate.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Total arithmetic**: Formulas never panic; degenerate inputs produce
//!   degenerate but defined results, and every division is guarded
//! - **Rich Errors**: Structured error types for the validation helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use carton_core::calculations::comparison::{compare, ComparisonInput};
//!
//! let input = ComparisonInput::default();
//! let result = compare(&input);
//!
//! println!(
//!     "Area savings: {:.2} %, winner: {}",
//!     result.area_savings_pct, result.recommendation.winner
//! );
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All carton calculation types (blank geometry, adhesive,
//!   TCO, sustainability, recommendation, full comparison)
//! - [`materials`] - Corrugated board profiles (E/B/C/BC flute)
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::CartonStyle;
pub use errors::{CalcError, CalcResult};
pub use materials::{FluteProfile, MaterialSpec};
