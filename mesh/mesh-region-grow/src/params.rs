//! Parameters for region growing.

use crate::assessment::Assessment;
use crate::seeds::StopCriteria;
use crate::strategy::GrowthStrategy;

/// Parameters for a growth call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowParams {
    /// Growth strategy. Default: adaptive (`arg`).
    pub strategy: GrowthStrategy,

    /// Target member count per region. Ignored by connectivity growth.
    /// Default: 500 for every seed group.
    pub stop_criteria: StopCriteria,

    /// Assessment used by adaptive growth to rank candidates and rate the
    /// region. Default: mean contrast.
    pub assessment: Assessment,

    /// Components added between two recorded assessments. Default: 1
    pub assess_step: usize,

    /// Grow seed groups on the rayon thread pool. Default: false
    pub parallel: bool,
}

impl Default for GrowParams {
    fn default() -> Self {
        Self {
            strategy: GrowthStrategy::Adaptive,
            stop_criteria: StopCriteria::default(),
            assessment: Assessment::MeanContrast,
            assess_step: 1,
            parallel: false,
        }
    }
}

impl GrowParams {
    /// Simple growth up to `stop` members per region.
    #[must_use]
    pub fn srg(stop: usize) -> Self {
        Self {
            strategy: GrowthStrategy::Simple,
            stop_criteria: StopCriteria::Uniform(stop),
            ..Default::default()
        }
    }

    /// Adaptive growth up to `stop` members per region with the default
    /// assessment.
    #[must_use]
    pub fn arg(stop: usize) -> Self {
        Self {
            strategy: GrowthStrategy::Adaptive,
            stop_criteria: StopCriteria::Uniform(stop),
            ..Default::default()
        }
    }

    /// Connectivity growth.
    #[must_use]
    pub fn crg() -> Self {
        Self {
            strategy: GrowthStrategy::Connectivity,
            ..Default::default()
        }
    }

    /// Set the strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: GrowthStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the stop criteria.
    #[must_use]
    pub fn with_stop_criteria(mut self, stop_criteria: StopCriteria) -> Self {
        self.stop_criteria = stop_criteria;
        self
    }

    /// Set the assessment.
    #[must_use]
    pub const fn with_assessment(mut self, assessment: Assessment) -> Self {
        self.assessment = assessment;
        self
    }

    /// Set the number of components per recorded assessment.
    #[must_use]
    pub const fn with_assess_step(mut self, assess_step: usize) -> Self {
        self.assess_step = assess_step;
        self
    }

    /// Enable or disable parallel growth of seed groups.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
