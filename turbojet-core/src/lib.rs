//! Shared building blocks for the turbojet cycle crates.
//!
//! The only module today is [`constraint`], which validates numeric inputs
//! once at an API boundary and carries that guarantee in the type afterwards.

pub mod constraint;
