//! Thermodynamic property models.

pub mod perfect_gas;
