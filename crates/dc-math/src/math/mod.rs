//! Core math modules.

pub mod divergence;
pub mod dominance;
pub mod reduce;
