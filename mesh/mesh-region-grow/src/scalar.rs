//! Per-vertex scalar measurements and their summary profiles.
//!
//! A [`ScalarField`] holds one row per vertex and one column per frame
//! (measurement or time point). Growth compares vertices through
//! [`ScalarProfile`]s: count, mean, variance and peak per frame of a set of
//! vertices.

// Vertex counts fit comfortably in f64 mantissas.
#![allow(clippy::cast_precision_loss)]

use mesh_adjacency::VertexMask;
use nalgebra::{DMatrix, DVector};

use crate::error::{GrowError, GrowResult};

/// Vertex-major, frame-minor measurement matrix (`N` rows × `M` columns).
///
/// # Example
///
/// ```
/// use mesh_region_grow::ScalarField;
///
/// // Two frames over three vertices, given per frame.
/// let field = ScalarField::from_columns(&[vec![1.0, 2.0, 3.0], vec![0.0, 0.5, 1.0]]).unwrap();
/// assert_eq!(field.vertex_count(), 3);
/// assert_eq!(field.frame_count(), 2);
/// assert!((field.frame_mean(2) - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    data: DMatrix<f64>,
}

impl ScalarField {
    /// Wrap an `N × M` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`GrowError::DimensionMismatch`] if the matrix has rows but no
    /// columns.
    pub fn new(data: DMatrix<f64>) -> GrowResult<Self> {
        if data.nrows() > 0 && data.ncols() == 0 {
            return Err(GrowError::DimensionMismatch {
                what: "scalar frames",
                expected: 1,
                actual: 0,
            });
        }
        Ok(Self { data })
    }

    /// Single-frame field, one value per vertex.
    #[must_use]
    pub fn from_column(values: &[f64]) -> Self {
        Self {
            data: DMatrix::from_column_slice(values.len(), 1, values),
        }
    }

    /// Stack per-frame columns side by side.
    ///
    /// # Errors
    ///
    /// Returns [`GrowError::DimensionMismatch`] if no columns are given or the
    /// columns differ in length.
    pub fn from_columns(columns: &[Vec<f64>]) -> GrowResult<Self> {
        let Some(first) = columns.first() else {
            return Err(GrowError::DimensionMismatch {
                what: "scalar frames",
                expected: 1,
                actual: 0,
            });
        };
        let rows = first.len();
        if let Some(bad) = columns.iter().find(|c| c.len() != rows) {
            return Err(GrowError::DimensionMismatch {
                what: "scalar column",
                expected: rows,
                actual: bad.len(),
            });
        }
        Ok(Self {
            data: DMatrix::from_fn(rows, columns.len(), |r, c| columns[c][r]),
        })
    }

    /// Build from row-major data (`frames` values per vertex).
    ///
    /// # Errors
    ///
    /// Returns [`GrowError::DimensionMismatch`] if `data.len()` is not
    /// `vertices * frames`, `frames` is zero, or the shape overflows `usize`.
    pub fn from_row_major(vertices: usize, frames: usize, data: &[f64]) -> GrowResult<Self> {
        let mismatch = |expected| GrowError::DimensionMismatch {
            what: "scalar data",
            expected,
            actual: data.len(),
        };
        let expected = vertices
            .checked_mul(frames.max(1))
            .ok_or_else(|| mismatch(usize::MAX))?;
        if frames == 0 || data.len() != expected {
            return Err(mismatch(expected));
        }
        Ok(Self {
            data: DMatrix::from_row_slice(vertices, frames, data),
        })
    }

    /// Number of vertices (rows).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.data.nrows()
    }

    /// Number of frames (columns).
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.data.ncols()
    }

    /// The underlying matrix.
    #[must_use]
    pub const fn matrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Measurement vector of one vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range; callers validate seeds first.
    #[must_use]
    pub fn row(&self, vertex: u32) -> DVector<f64> {
        self.data.row(vertex as usize).transpose()
    }

    /// Mean over frames for one vertex.
    #[must_use]
    pub fn frame_mean(&self, vertex: u32) -> f64 {
        self.data.row(vertex as usize).mean()
    }

    /// Profile of a single vertex.
    #[must_use]
    pub fn vertex_profile(&self, vertex: u32) -> ScalarProfile {
        ScalarProfile::single(self.row(vertex))
    }

    /// Profile of a set of vertices.
    #[must_use]
    pub fn profile_of(&self, vertices: impl IntoIterator<Item = u32>) -> ScalarProfile {
        let mut acc = ProfileAccumulator::new(self.frame_count());
        for v in vertices {
            acc.push(&self.row(v));
        }
        acc.profile()
    }

    /// Mask keeping vertices whose frame mean is non-zero and at least `min`.
    ///
    /// This is how a connectivity mask is derived from a thresholded overlay.
    #[must_use]
    pub fn threshold_mask(&self, min: f64) -> VertexMask {
        let flags = self
            .data
            .row_iter()
            .map(|row| {
                let mean = row.mean();
                mean != 0.0 && mean >= min
            })
            .collect();
        VertexMask::from_flags(flags)
    }
}

/// Summary statistics of the measurement vectors of a vertex set.
///
/// All vectors have one entry per frame. `variance` is the sample variance
/// (zero for fewer than two vertices).
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarProfile {
    /// Number of vertices summarized.
    pub count: usize,
    /// Per-frame mean.
    pub mean: DVector<f64>,
    /// Per-frame sample variance.
    pub variance: DVector<f64>,
    /// Per-frame maximum.
    pub peak: DVector<f64>,
}

impl ScalarProfile {
    /// Profile of exactly one measurement vector.
    #[must_use]
    pub fn single(values: DVector<f64>) -> Self {
        Self {
            count: 1,
            variance: DVector::zeros(values.len()),
            peak: values.clone(),
            mean: values,
        }
    }

    /// Profile of no vertices.
    #[must_use]
    pub fn empty(frames: usize) -> Self {
        Self {
            count: 0,
            mean: DVector::zeros(frames),
            variance: DVector::zeros(frames),
            peak: DVector::from_element(frames, f64::NEG_INFINITY),
        }
    }

    /// Check whether the profile summarizes no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Mean over frames of the per-frame mean.
    #[must_use]
    pub fn frame_mean(&self) -> f64 {
        if self.mean.is_empty() {
            0.0
        } else {
            self.mean.mean()
        }
    }
}

/// Incrementally accumulates a [`ScalarProfile`] as vertices are added.
#[derive(Debug, Clone)]
pub(crate) struct ProfileAccumulator {
    count: usize,
    sum: DVector<f64>,
    sum_sq: DVector<f64>,
    peak: DVector<f64>,
}

impl ProfileAccumulator {
    pub(crate) fn new(frames: usize) -> Self {
        Self {
            count: 0,
            sum: DVector::zeros(frames),
            sum_sq: DVector::zeros(frames),
            peak: DVector::from_element(frames, f64::NEG_INFINITY),
        }
    }

    pub(crate) fn push(&mut self, values: &DVector<f64>) {
        self.count += 1;
        self.sum += values;
        self.sum_sq += values.component_mul(values);
        self.peak = self.peak.sup(values);
    }

    pub(crate) fn profile(&self) -> ScalarProfile {
        let frames = self.sum.len();
        if self.count == 0 {
            return ScalarProfile::empty(frames);
        }
        let n = self.count as f64;
        let mean = &self.sum / n;
        let variance = if self.count < 2 {
            DVector::zeros(frames)
        } else {
            // Sample variance from running sums, clamped against round-off.
            DVector::from_fn(frames, |f, _| {
                ((self.sum_sq[f] - n * mean[f] * mean[f]) / (n - 1.0)).max(0.0)
            })
        };
        ScalarProfile {
            count: self.count,
            mean,
            variance,
            peak: self.peak.clone(),
        }
    }
}
