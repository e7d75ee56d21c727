//! Decision Cognizant divergence measures.

pub mod math;

pub use math::divergence::*;
pub use math::dominance::*;
pub use math::reduce::*;
