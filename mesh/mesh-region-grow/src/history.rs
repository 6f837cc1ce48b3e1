//! Adaptive growth history.
//!
//! Adaptive growth records every component it adds and, every
//! `assess_step` components, the region's assessment and the scalar value of
//! its outer boundary. The history lets a caller choose a smaller stopping
//! point after the fact without growing again.
//!
//! Record `i` covers components `0..(i + 1) * assess_step` (clamped to the
//! number of components). Component 0 is always the seed group.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::region::Region;

/// Immutable record of one adaptive growth run.
///
/// # Example
///
/// ```
/// use mesh_region_grow::{AdjacencyGraph, GrowParams, RegionGrower, ScalarField, SeedGroups};
///
/// // Path 0 - 1 - 2 - 3 with a bump around vertex 1.
/// let lists = vec![vec![1], vec![2], vec![3], vec![]];
/// let graph = AdjacencyGraph::from_neighbor_lists(lists).unwrap();
/// let field = ScalarField::from_column(&[4.0, 5.0, 0.0, 0.0]);
///
/// let grower = RegionGrower::new(graph);
/// let grown = grower
///     .adaptive(&field, &SeedGroups::single([1]), &GrowParams::arg(4))
///     .unwrap();
///
/// let history = &grown[0].history;
/// let best = history.optimal_index(0).unwrap();
/// assert_eq!(history.region_at(best).unwrap().to_vec(), vec![0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrowthHistory {
    components: Vec<Vec<u32>>,
    assessments: Vec<f64>,
    outer_boundary_values: Vec<Option<f64>>,
    assess_step: usize,
}

impl GrowthHistory {
    /// Vertex sets added at each growth step, seeds first.
    #[must_use]
    pub fn components(&self) -> &[Vec<u32>] {
        &self.components
    }

    /// Assessment value per record.
    #[must_use]
    pub fn assessments(&self) -> &[f64] {
        &self.assessments
    }

    /// Frame-mean scalar value of the outer boundary per record, `None`
    /// once the boundary is empty.
    #[must_use]
    pub fn outer_boundary_values(&self) -> &[Option<f64>] {
        &self.outer_boundary_values
    }

    /// Components per record.
    #[must_use]
    pub const fn assess_step(&self) -> usize {
        self.assess_step
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assessments.len()
    }

    /// Check whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }

    /// Number of components covered by record `index`.
    #[must_use]
    pub fn components_through(&self, index: usize) -> usize {
        index
            .saturating_add(1)
            .saturating_mul(self.assess_step)
            .min(self.components.len())
    }

    /// Assessment curve smoothed with a centred moving average.
    ///
    /// The window spans `smoothness` records on each side and is truncated
    /// at the ends of the curve; `smoothness == 0` returns the raw curve.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn smoothed_assessments(&self, smoothness: usize) -> Vec<f64> {
        let values = &self.assessments;
        if smoothness == 0 {
            return values.clone();
        }
        (0..values.len())
            .map(|i| {
                let lo = i.saturating_sub(smoothness);
                let hi = i
                    .saturating_add(smoothness)
                    .saturating_add(1)
                    .min(values.len());
                let window = &values[lo..hi];
                window.iter().sum::<f64>() / window.len() as f64
            })
            .collect()
    }

    /// Index of the first maximum of the smoothed assessment curve.
    ///
    /// Returns `None` for an empty history.
    #[must_use]
    pub fn optimal_index(&self, smoothness: usize) -> Option<usize> {
        let curve = self.smoothed_assessments(smoothness);
        let mut best: Option<(usize, f64)> = None;
        for (i, value) in curve.into_iter().enumerate() {
            if value.is_nan() {
                continue;
            }
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((i, value)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// The region obtained by stopping at record `index`.
    ///
    /// Returns `None` if `index` is past the last record.
    #[must_use]
    pub fn region_at(&self, index: usize) -> Option<Region> {
        if index >= self.len() {
            return None;
        }
        let seeds = self.components.first()?.clone();
        let end = self.components_through(index);
        Some(Region::new(
            seeds,
            self.components[..end].iter().flatten().copied(),
        ))
    }

    /// The region at the optimal index of the smoothed curve.
    #[must_use]
    pub fn optimal_region(&self, smoothness: usize) -> Option<Region> {
        self.optimal_index(smoothness)
            .and_then(|index| self.region_at(index))
    }
}

/// Append-only log filled while a region grows.
#[derive(Debug)]
pub(crate) struct HistoryLog {
    components: Vec<Vec<u32>>,
    assessments: Vec<f64>,
    outer_boundary_values: Vec<Option<f64>>,
    assess_step: usize,
    recorded_through: usize,
}

impl HistoryLog {
    pub(crate) const fn new(assess_step: usize) -> Self {
        Self {
            components: Vec::new(),
            assessments: Vec::new(),
            outer_boundary_values: Vec::new(),
            assess_step,
            recorded_through: 0,
        }
    }

    pub(crate) fn push_component(&mut self, component: Vec<u32>) {
        self.components.push(component);
    }

    /// Whether the components added so far complete a record.
    pub(crate) fn record_due(&self) -> bool {
        self.components.len() % self.assess_step == 0
            && self.components.len() > self.recorded_through
    }

    /// Whether components exist that no record covers yet.
    pub(crate) fn has_unrecorded(&self) -> bool {
        self.components.len() > self.recorded_through
    }

    /// Record an assessment; an undefined one repeats the previous value.
    pub(crate) fn record(&mut self, assessment: Option<f64>, outer_boundary_value: Option<f64>) {
        let value = assessment
            .or_else(|| self.assessments.last().copied())
            .unwrap_or(0.0);
        self.assessments.push(value);
        self.outer_boundary_values.push(outer_boundary_value);
        self.recorded_through = self.components.len();
    }

    pub(crate) fn finish(self) -> GrowthHistory {
        GrowthHistory {
            components: self.components,
            assessments: self.assessments,
            outer_boundary_values: self.outer_boundary_values,
            assess_step: self.assess_step,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn history(components: Vec<Vec<u32>>, assessments: Vec<f64>, step: usize) -> GrowthHistory {
        let outer = vec![None; assessments.len()];
        GrowthHistory {
            components,
            assessments,
            outer_boundary_values: outer,
            assess_step: step,
        }
    }

    #[test]
    fn smoothing_window() {
        let h = history(vec![vec![0]], vec![0.0, 3.0, 0.0, 3.0], 1);
        assert_eq!(h.smoothed_assessments(0), vec![0.0, 3.0, 0.0, 3.0]);
        let s = h.smoothed_assessments(1);
        assert_relative_eq!(s[0], 1.5);
        assert_relative_eq!(s[1], 1.0);
        assert_relative_eq!(s[2], 2.0);
        assert_relative_eq!(s[3], 1.5);
    }

    #[test]
    fn huge_smoothness_averages_whole_curve() {
        let h = history(vec![vec![0]], vec![1.0, 4.0, 2.0, 5.0], 1);
        for value in h.smoothed_assessments(usize::MAX) {
            assert_relative_eq!(value, 3.0);
        }
        assert_eq!(h.optimal_index(usize::MAX), Some(0));
    }

    #[test]
    fn optimal_index_takes_first_maximum() {
        let h = history(vec![vec![0]], vec![1.0, 4.0, 2.0, 4.0], 1);
        assert_eq!(h.optimal_index(0), Some(1));
        // Smoothed: [2.5, 2.333, 3.333, 3.0]
        assert_eq!(h.optimal_index(1), Some(2));
        assert_eq!(history(Vec::new(), Vec::new(), 1).optimal_index(0), None);
    }

    #[test]
    fn region_at_with_step() {
        let h = history(
            vec![vec![5, 6], vec![4], vec![7], vec![3], vec![8]],
            vec![0.1, 0.5, 0.2],
            2,
        );
        assert_eq!(h.components_through(0), 2);
        assert_eq!(h.region_at(0).unwrap().to_vec(), vec![4, 5, 6]);
        assert_eq!(h.region_at(1).unwrap().to_vec(), vec![3, 4, 5, 6, 7]);
        assert_eq!(h.region_at(2).unwrap().to_vec(), vec![3, 4, 5, 6, 7, 8]);
        assert!(h.region_at(3).is_none());
        assert_eq!(h.optimal_region(0).unwrap().len(), 5);
        assert_eq!(h.region_at(2).unwrap().seeds(), &[5, 6]);
    }

    #[test]
    fn log_records_every_step_and_tail() {
        let mut log = HistoryLog::new(2);
        log.push_component(vec![0]);
        assert!(!log.record_due());
        log.push_component(vec![1]);
        assert!(log.record_due());
        log.record(Some(1.0), Some(0.5));
        assert!(!log.record_due());
        log.push_component(vec![2]);
        assert!(log.has_unrecorded());
        log.record(None, None);
        let h = log.finish();
        assert_eq!(h.assessments(), &[1.0, 1.0]);
        assert_eq!(h.outer_boundary_values(), &[Some(0.5), None]);
        assert_eq!(h.components().len(), 3);
        assert_eq!(h.assess_step(), 2);
    }
}
