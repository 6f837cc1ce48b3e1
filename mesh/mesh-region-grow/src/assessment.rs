//! Assessment functions for adaptive growth.
//!
//! An [`Assessment`] does two jobs:
//!
//! - [`Assessment::score`] ranks frontier candidates by how well they match
//!   the region's scalar signature. Higher is better; a perfect match scores
//!   zero and every score is non-positive.
//! - [`Assessment::contrast`] rates a whole region against its outer
//!   boundary. This is the value recorded in the growth history and whose
//!   peak marks a good stopping point.
//!
//! Multi-frame profiles are compared frame by frame; candidate scores use the
//! Euclidean norm across frames, contrasts the mean across frames.

use std::fmt;
use std::str::FromStr;

use nalgebra::DVector;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GrowError, GrowResult};
use crate::scalar::ScalarProfile;

/// Floor for standard errors so constant regions stay comparable.
const MIN_STD_ERR: f64 = 1e-12;

/// Named assessment functions.
///
/// # Example
///
/// ```
/// use mesh_region_grow::{Assessment, ScalarField};
///
/// let field = ScalarField::from_column(&[5.0, 5.0, 4.0, 1.0]);
/// let region = field.profile_of([0, 1]);
///
/// let close = Assessment::MeanContrast.score(&region, &field.vertex_profile(2));
/// let far = Assessment::MeanContrast.score(&region, &field.vertex_profile(3));
/// assert!(close > far);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Assessment {
    /// Distance between region mean and candidate; contrast is the mean
    /// difference between region and boundary.
    #[default]
    MeanContrast,
    /// Distance between the region's peak response and the candidate;
    /// contrast is the peak difference between region and boundary.
    PeakValue,
    /// Welch t-statistic between region and candidate; contrast is the
    /// t-statistic between region and boundary.
    TStatistic,
}

impl Assessment {
    /// All assessments in presentation order.
    pub const ALL: [Self; 3] = [Self::MeanContrast, Self::PeakValue, Self::TStatistic];

    /// Registry name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MeanContrast => "mean-contrast",
            Self::PeakValue => "peak-value",
            Self::TStatistic => "t-statistic",
        }
    }

    /// Score a candidate against the region. Higher means a better match.
    #[must_use]
    pub fn score(self, region: &ScalarProfile, candidate: &ScalarProfile) -> f64 {
        match self {
            Self::MeanContrast => -(&region.mean - &candidate.mean).norm(),
            Self::PeakValue => -(&region.peak - &candidate.mean).norm(),
            Self::TStatistic => -welch_t(region, candidate).norm(),
        }
    }

    /// Rate a region against its outer boundary. Higher means better
    /// separated. Returns `None` when either side is empty.
    #[must_use]
    pub fn contrast(self, region: &ScalarProfile, boundary: &ScalarProfile) -> Option<f64> {
        if region.is_empty() || boundary.is_empty() {
            return None;
        }
        let per_frame = match self {
            Self::MeanContrast => &region.mean - &boundary.mean,
            Self::PeakValue => &region.peak - &boundary.peak,
            Self::TStatistic => welch_t(region, boundary),
        };
        Some(if per_frame.is_empty() {
            0.0
        } else {
            per_frame.mean()
        })
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Assessment {
    type Err = GrowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|a| a.name() == key)
            .ok_or_else(|| GrowError::UnknownAssessment(s.to_string()))
    }
}

/// Names of all registered assessments, in presentation order.
#[must_use]
pub fn available_types() -> Vec<&'static str> {
    Assessment::ALL.iter().map(|a| a.name()).collect()
}

/// Score a candidate with the assessment registered under `type_name`.
///
/// # Errors
///
/// Returns [`GrowError::UnknownAssessment`] if no assessment has that name.
pub fn score(
    type_name: &str,
    region: &ScalarProfile,
    candidate: &ScalarProfile,
) -> GrowResult<f64> {
    Ok(type_name.parse::<Assessment>()?.score(region, candidate))
}

/// Per-frame Welch t-statistic of `a` against `b`.
#[allow(clippy::cast_precision_loss)]
fn welch_t(a: &ScalarProfile, b: &ScalarProfile) -> DVector<f64> {
    let na = a.count.max(1) as f64;
    let nb = b.count.max(1) as f64;
    DVector::from_fn(a.mean.len(), |f, _| {
        let se = (a.variance[f] / na + b.variance[f] / nb)
            .sqrt()
            .max(MIN_STD_ERR);
        (a.mean[f] - b.mean[f]) / se
    })
}
