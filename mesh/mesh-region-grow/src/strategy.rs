//! Growth strategy selection.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GrowError;

/// The three region growing strategies.
///
/// Strategies parse from their short names so that a front-end can pass the
/// user's choice straight through; any other name is rejected here rather
/// than deep inside the algorithm.
///
/// # Example
///
/// ```
/// use mesh_region_grow::GrowthStrategy;
///
/// let strategy: GrowthStrategy = "crg".parse().unwrap();
/// assert_eq!(strategy, GrowthStrategy::Connectivity);
/// assert!("xrg".parse::<GrowthStrategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GrowthStrategy {
    /// Size-bounded growth towards the closest-matching frontier vertex (`srg`).
    Simple,
    /// Assessment-driven growth with a full step history (`arg`).
    #[default]
    Adaptive,
    /// Connected-component growth over the (possibly cut) graph (`crg`).
    Connectivity,
}

impl GrowthStrategy {
    /// All strategies in presentation order.
    pub const ALL: [Self; 3] = [Self::Simple, Self::Adaptive, Self::Connectivity];

    /// Short name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "srg",
            Self::Adaptive => "arg",
            Self::Connectivity => "crg",
        }
    }
}

impl fmt::Display for GrowthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrowthStrategy {
    type Err = GrowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srg" => Ok(Self::Simple),
            "arg" => Ok(Self::Adaptive),
            "crg" => Ok(Self::Connectivity),
            _ => Err(GrowError::UnsupportedStrategy(s.to_string())),
        }
    }
}
