//! Component models for single-spool turbojet cycle analysis.
//!
//! Each component maps an inlet [`State`](turbojet_thermo::State) to an outlet
//! state using a [`PerfectGas`](turbojet_thermo::model::perfect_gas::PerfectGas)
//! property model. Inputs that carry a physical range, such as efficiencies
//! and pressure ratios, are taken as constrained types so the models never
//! re-validate them.

pub mod combustor;
pub mod nozzle;
pub mod turbomachinery;
