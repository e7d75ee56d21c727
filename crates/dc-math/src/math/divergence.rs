//! Divergence measures between discrete probability distributions.
//!
//! All measures compare a reference distribution `P` against a comparison
//! distribution `P~` (written `pt` throughout) and return one scalar:
//!
//! - [`kullback_leibler_divergence`]: `Σ_i P~_i ln(P~_i / P_i)` with an
//!   epsilon-stabilized ratio
//! - [`decision_cognizant_divergence`]: the same KL summation over the
//!   reduced pair from [`super::reduce`]
//! - [`delta_divergence`]: half the total variation distance over the
//!   same reduced pair
//! - [`conditional_divergence`]: a coarse three-level agreement score
//!
//! The first three validate their inputs and fail fast; the conditional
//! score performs no validation and lets malformed input flow through the
//! arithmetic, matching the behavior of the measures as published.
//!
//! Near-zero probabilities are handled by adding machine epsilon
//! (`f64::EPSILON`) to both numerator and denominator of every log ratio,
//! so an exactly-zero entry never produces `log(0)` or a division by zero.

use thiserror::Error;

use super::dominance::dominant_index;
use super::reduce::reduce;

/// Validation failures for the assertion-guarded measures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DivergenceError {
    /// Input vectors disagree on length (same label set required).
    #[error("P and Pt are of different sizes: {p_len} vs {pt_len}")]
    LengthMismatch { p_len: usize, pt_len: usize },

    /// Both vectors are empty; no dominant class exists.
    #[error("P and Pt are empty")]
    EmptyInput,

    /// A vector's mass deviates from 1.0 beyond tolerance.
    #[error("{vector} does not sum up to 1 (sum = {sum})")]
    NotNormalized { vector: &'static str, sum: f64 },
}

/// Relative tolerance for the normalization check.
const SUM_REL_TOL: f64 = 1e-9;

/// Standard is-close comparison with relative tolerance only.
fn isclose(a: f64, b: f64) -> bool {
    (a - b).abs() <= SUM_REL_TOL * a.abs().max(b.abs())
}

/// Shared preconditions: equal length, non-empty, both sums close to 1.
///
/// Checks run in order and report the first violation; P is checked
/// before Pt so the error names a single offending vector.
fn validate(p: &[f64], pt: &[f64]) -> Result<(), DivergenceError> {
    if p.len() != pt.len() {
        return Err(DivergenceError::LengthMismatch {
            p_len: p.len(),
            pt_len: pt.len(),
        });
    }
    if p.is_empty() {
        return Err(DivergenceError::EmptyInput);
    }
    let p_sum: f64 = p.iter().sum();
    if !isclose(p_sum, 1.0) {
        return Err(DivergenceError::NotNormalized {
            vector: "P",
            sum: p_sum,
        });
    }
    let pt_sum: f64 = pt.iter().sum();
    if !isclose(pt_sum, 1.0) {
        return Err(DivergenceError::NotNormalized {
            vector: "Pt",
            sum: pt_sum,
        });
    }
    Ok(())
}

/// Epsilon-stabilized KL summation in index order:
/// `Σ_i pt_i * ln((pt_i + ε) / (p_i + ε))`.
fn stabilized_kl_sum(p: &[f64], pt: &[f64]) -> f64 {
    pt.iter()
        .zip(p.iter())
        .map(|(&pt_i, &p_i)| pt_i * ((pt_i + f64::EPSILON) / (p_i + f64::EPSILON)).ln())
        .sum()
}

/// Regular Kullback-Leibler divergence of `pt` from `p`.
///
/// Zero iff the vectors are elementwise equal; asymmetric in general.
pub fn kullback_leibler_divergence(p: &[f64], pt: &[f64]) -> Result<f64, DivergenceError> {
    validate(p, pt)?;
    Ok(stabilized_kl_sum(p, pt))
}

/// Dominant index pair `(mu, mu_t)`; None when either vector is empty.
fn dominant_pair(p: &[f64], pt: &[f64]) -> Option<(usize, usize)> {
    Some((dominant_index(p)?, dominant_index(pt)?))
}

/// Decision cognizant KL divergence.
///
/// Reduces both vectors to dominant-class buckets plus clutter (see
/// [`super::reduce`]) and applies the stabilized KL summation to the
/// reduced pair in construction order.
pub fn decision_cognizant_divergence(p: &[f64], pt: &[f64]) -> Result<f64, DivergenceError> {
    validate(p, pt)?;
    let (mu, mu_t) = dominant_pair(p, pt).ok_or(DivergenceError::EmptyInput)?;
    let (p_dc, pt_dc) = reduce(p, pt, mu, mu_t);
    Ok(stabilized_kl_sum(&p_dc, &pt_dc))
}

/// Decision cognizant Delta divergence.
///
/// Same reduction as [`decision_cognizant_divergence`], combined as half
/// the total variation distance: `Σ |PtDC_i - PDC_i| / 2`. Bounded in
/// `[0, 1]` and zero iff the reduced pairs coincide.
pub fn delta_divergence(p: &[f64], pt: &[f64]) -> Result<f64, DivergenceError> {
    validate(p, pt)?;
    let (mu, mu_t) = dominant_pair(p, pt).ok_or(DivergenceError::EmptyInput)?;
    let (p_dc, pt_dc) = reduce(p, pt, mu, mu_t);
    Ok(pt_dc
        .iter()
        .zip(p_dc.iter())
        .map(|(&pt_i, &p_i)| (pt_i - p_i).abs())
        .sum::<f64>()
        / 2.0)
}

/// Conditional divergence: a three-level score over dominant confidence.
///
/// Base score 1 when both vectors put more than 0.60 on their own
/// dominant class, 0.5 when both exceed 0.40, else 0. The score is
/// negated when the vectors agree on the dominant class, so the result
/// lies in {-1, -0.5, 0, 0.5, 1}.
///
/// Performs no validation: the thresholds read each vector's own
/// dominant value, so unequal lengths or non-normalized mass still yield
/// a normal-looking score. Returns NaN only when either vector is empty.
pub fn conditional_divergence(p: &[f64], pt: &[f64]) -> f64 {
    let Some((mu, mu_t)) = dominant_pair(p, pt) else {
        return f64::NAN;
    };

    let mut divergence = if p[mu] > 0.60 && pt[mu_t] > 0.60 {
        1.0
    } else if p[mu] > 0.40 && pt[mu_t] > 0.40 {
        0.5
    } else {
        0.0
    };
    if mu == mu_t {
        divergence = -divergence;
    }

    divergence
}
