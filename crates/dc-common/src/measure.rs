//! Divergence measure selection keys.
//!
//! The four selectable measures share one contract: two probability vectors
//! in, one scalar out. The string keys (`kl`, `dckl`, `delta`, `if`) are a
//! stable CLI and serialization surface.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Selectable divergence measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// Regular Kullback-Leibler divergence
    Kl,

    /// Decision cognizant Kullback-Leibler divergence
    Dckl,

    /// Delta divergence (half total variation over the reduced pair)
    Delta,

    /// Conditional divergence (three-level agreement score)
    #[value(name = "if")]
    If,
}

impl Measure {
    /// All selectable measures, in the order they are documented.
    pub const ALL: [Measure; 4] = [Measure::Kl, Measure::Dckl, Measure::Delta, Measure::If];

    /// Stable string key for this measure.
    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::Kl => "kl",
            Measure::Dckl => "dckl",
            Measure::Delta => "delta",
            Measure::If => "if",
        }
    }

    /// One-line description for help and listing output.
    pub fn description(&self) -> &'static str {
        match self {
            Measure::Kl => "regular Kullback-Leibler divergence",
            Measure::Dckl => "decision cognizant Kullback-Leibler divergence",
            Measure::Delta => "Delta divergence",
            Measure::If => "Conditional divergence",
        }
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Measure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kl" => Ok(Measure::Kl),
            "dckl" => Ok(Measure::Dckl),
            "delta" => Ok(Measure::Delta),
            "if" => Ok(Measure::If),
            _ => Err(format!("{} is not a valid divergence measure", s)),
        }
    }
}
