//! The growth engine.
//!
//! [`RegionGrower`] owns the adjacency graph of one growth session and runs
//! the three strategies over it. Every call validates all of its inputs
//! before the first region grows, so a failed call never returns a partial
//! result.

use mesh_adjacency::{AdjacencyGraph, AdjacencyParams, SurfaceTopology};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::assessment::Assessment;
use crate::error::{GrowError, GrowResult};
use crate::history::HistoryLog;
use crate::params::GrowParams;
use crate::region::{GrowingRegion, Region};
use crate::result::{AdaptiveGrowth, GrowthOutcome};
use crate::scalar::ScalarField;
use crate::seeds::SeedGroups;
use crate::strategy::GrowthStrategy;

/// Grows regions from seed groups over a fixed adjacency graph.
///
/// # Example
///
/// ```
/// use mesh_region_grow::{AdjacencyParams, GrowParams, RegionGrower, ScalarField, SeedGroups};
///
/// // Hexagon fan around hub vertex 6.
/// let faces: Vec<[u32; 3]> = (0..6).map(|i| [i, (i + 1) % 6, 6]).collect();
/// let grower = RegionGrower::from_faces(&faces, 7, &AdjacencyParams::default()).unwrap();
///
/// let field = ScalarField::from_column(&[9.0, 8.0, 1.0, 1.0, 1.0, 7.0, 2.0]);
/// let regions = grower
///     .simple(&field, &SeedGroups::single([0]), &GrowParams::srg(3))
///     .unwrap();
///
/// assert_eq!(regions[0].to_vec(), vec![0, 1, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct RegionGrower {
    adjacency: AdjacencyGraph,
}

impl RegionGrower {
    /// Create a grower over an existing graph.
    #[must_use]
    pub const fn new(adjacency: AdjacencyGraph) -> Self {
        Self { adjacency }
    }

    /// Build the adjacency graph from faces and create a grower over it.
    ///
    /// # Errors
    ///
    /// Returns [`GrowError::Adjacency`] if the graph cannot be built.
    pub fn from_faces(
        faces: &[[u32; 3]],
        vertex_count: usize,
        params: &AdjacencyParams,
    ) -> GrowResult<Self> {
        Ok(Self::new(AdjacencyGraph::build(faces, vertex_count, params)?))
    }

    /// Build the adjacency graph from a topology and create a grower over it.
    ///
    /// # Errors
    ///
    /// Returns [`GrowError::Adjacency`] if the graph cannot be built.
    pub fn from_topology(topology: &SurfaceTopology, params: &AdjacencyParams) -> GrowResult<Self> {
        Ok(Self::new(AdjacencyGraph::from_topology(topology, params)?))
    }

    /// The graph growth walks over.
    #[must_use]
    pub const fn adjacency(&self) -> &AdjacencyGraph {
        &self.adjacency
    }

    /// Number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    /// Grow with the strategy named in `params`.
    ///
    /// `scalar` is required by simple and adaptive growth and ignored by
    /// connectivity growth.
    ///
    /// # Errors
    ///
    /// - [`GrowError::MissingScalarField`] if the strategy needs a scalar
    ///   field and none was given
    /// - Any error of the strategy itself
    pub fn grow(
        &self,
        scalar: Option<&ScalarField>,
        seeds: &SeedGroups,
        params: &GrowParams,
    ) -> GrowResult<GrowthOutcome> {
        let strategy = params.strategy;
        let outcome = match strategy {
            GrowthStrategy::Simple => {
                let scalar = scalar.ok_or(GrowError::MissingScalarField)?;
                GrowthOutcome {
                    strategy,
                    regions: self.simple(scalar, seeds, params)?,
                    histories: Vec::new(),
                }
            }
            GrowthStrategy::Adaptive => {
                let scalar = scalar.ok_or(GrowError::MissingScalarField)?;
                GrowthOutcome::from_adaptive(self.adaptive(scalar, seeds, params)?)
            }
            GrowthStrategy::Connectivity => GrowthOutcome {
                strategy,
                regions: self.connectivity(seeds, params)?,
                histories: Vec::new(),
            },
        };
        Ok(outcome)
    }

    /// Simple region growing.
    ///
    /// Each step adds the frontier vertex whose scalar profile is closest to
    /// the mean profile of the current members, lowest id first on ties,
    /// until the region reaches its stop criterion or the frontier is empty.
    /// `params.strategy` and `params.assessment` are not consulted.
    ///
    /// # Errors
    ///
    /// - [`GrowError::DimensionMismatch`] if the scalar field does not have
    ///   one row per vertex
    /// - [`GrowError::EmptySeedGroup`] / [`GrowError::InvalidSeed`] for bad
    ///   seed groups
    /// - [`GrowError::StopCriteriaMismatch`] if the stop criteria do not fit
    ///   the seed groups
    pub fn simple(
        &self,
        scalar: &ScalarField,
        seeds: &SeedGroups,
        params: &GrowParams,
    ) -> GrowResult<Vec<Region>> {
        self.check_scalar(scalar)?;
        seeds.validate(&self.adjacency)?;
        let stops = params.stop_criteria.resolve(seeds.len())?;

        info!(
            groups = seeds.len(),
            vertices = self.vertex_count(),
            frames = scalar.frame_count(),
            parallel = params.parallel,
            "Starting simple region growing"
        );

        let regions = map_groups(seeds, params.parallel, |group, members| {
            self.grow_simple(scalar, group, members, stops[group])
        });

        info!(
            total = regions.iter().map(Region::len).sum::<usize>(),
            "Simple region growing complete"
        );
        Ok(regions)
    }

    /// Adaptive region growing.
    ///
    /// Each step adds the frontier vertex that `params.assessment` scores
    /// highest, lowest id first on ties. The seed group is component 0 and
    /// every later component is one vertex. After every `params.assess_step`
    /// components, and once more when growth stops, the region's contrast
    /// against its outer boundary and the boundary's mean scalar value are
    /// recorded in the returned [`GrowthHistory`](crate::GrowthHistory).
    ///
    /// # Errors
    ///
    /// - [`GrowError::InvalidAssessStep`] if `params.assess_step` is zero
    /// - Every error of [`RegionGrower::simple`]
    pub fn adaptive(
        &self,
        scalar: &ScalarField,
        seeds: &SeedGroups,
        params: &GrowParams,
    ) -> GrowResult<Vec<AdaptiveGrowth>> {
        if params.assess_step == 0 {
            return Err(GrowError::InvalidAssessStep);
        }
        self.check_scalar(scalar)?;
        seeds.validate(&self.adjacency)?;
        let stops = params.stop_criteria.resolve(seeds.len())?;

        info!(
            groups = seeds.len(),
            vertices = self.vertex_count(),
            frames = scalar.frame_count(),
            assessment = %params.assessment,
            assess_step = params.assess_step,
            parallel = params.parallel,
            "Starting adaptive region growing"
        );

        let grown = map_groups(seeds, params.parallel, |group, members| {
            self.grow_adaptive(
                scalar,
                group,
                members,
                stops[group],
                params.assessment,
                params.assess_step,
            )
        });

        info!(
            total = grown.iter().map(|g| g.region.len()).sum::<usize>(),
            records = grown.iter().map(|g| g.history.len()).sum::<usize>(),
            "Adaptive region growing complete"
        );
        Ok(grown)
    }

    /// Connectivity region growing.
    ///
    /// Each region is the full connected component of its seeds over the
    /// graph, cuts included. Regions of seed groups that no cut separates
    /// overlap; this is logged but not rejected. Only `params.parallel` is
    /// consulted.
    ///
    /// # Errors
    ///
    /// [`GrowError::EmptySeedGroup`] / [`GrowError::InvalidSeed`] for bad
    /// seed groups.
    pub fn connectivity(
        &self,
        seeds: &SeedGroups,
        params: &GrowParams,
    ) -> GrowResult<Vec<Region>> {
        seeds.validate(&self.adjacency)?;

        info!(
            groups = seeds.len(),
            vertices = self.vertex_count(),
            edges = self.adjacency.edge_count(),
            parallel = params.parallel,
            "Starting connectivity region growing"
        );

        let regions = map_groups(seeds, params.parallel, |group, members| {
            self.grow_connected(group, members)
        });

        for (i, a) in regions.iter().enumerate() {
            for (j, b) in regions.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    warn!(
                        first = i,
                        second = j,
                        "Connectivity regions overlap; no cut separates their seeds"
                    );
                }
            }
        }

        info!(
            total = regions.iter().map(Region::len).sum::<usize>(),
            "Connectivity region growing complete"
        );
        Ok(regions)
    }

    fn check_scalar(&self, scalar: &ScalarField) -> GrowResult<()> {
        if scalar.vertex_count() == self.vertex_count() {
            Ok(())
        } else {
            Err(GrowError::DimensionMismatch {
                what: "scalar field rows",
                expected: self.vertex_count(),
                actual: scalar.vertex_count(),
            })
        }
    }

    fn grow_simple(
        &self,
        scalar: &ScalarField,
        group: usize,
        seeds: &[u32],
        stop: usize,
    ) -> Region {
        warn_small_stop(group, seeds.len(), stop);
        let mut region = GrowingRegion::new(&self.adjacency, Some(scalar), seeds);
        while region.advance(stop, Assessment::MeanContrast).is_some() {}
        debug!(
            group,
            members = region.len(),
            stop,
            exhausted = region.frontier().is_empty(),
            "Simple growth stopped"
        );
        region.freeze()
    }

    fn grow_adaptive(
        &self,
        scalar: &ScalarField,
        group: usize,
        seeds: &[u32],
        stop: usize,
        assessment: Assessment,
        assess_step: usize,
    ) -> AdaptiveGrowth {
        warn_small_stop(group, seeds.len(), stop);
        let mut region = GrowingRegion::new(&self.adjacency, Some(scalar), seeds);
        let mut log = HistoryLog::new(assess_step);

        log.push_component(seeds.to_vec());
        if log.record_due() {
            record(&mut log, &region, assessment);
        }
        while let Some(vertex) = region.advance(stop, assessment) {
            log.push_component(vec![vertex]);
            if log.record_due() {
                record(&mut log, &region, assessment);
            }
        }
        if log.has_unrecorded() {
            record(&mut log, &region, assessment);
        }

        let history = log.finish();
        debug!(
            group,
            members = region.len(),
            components = history.components().len(),
            records = history.len(),
            "Adaptive growth stopped"
        );
        AdaptiveGrowth {
            region: region.freeze(),
            history,
        }
    }

    fn grow_connected(&self, group: usize, seeds: &[u32]) -> Region {
        let mut region = GrowingRegion::new(&self.adjacency, None, seeds);
        while let Some(vertex) = region.frontier().first().copied() {
            region.add(vertex);
        }
        region.stop();
        debug!(group, members = region.len(), "Connectivity growth stopped");
        region.freeze()
    }
}

/// Run `grow` once per seed group, keeping seed group order.
fn map_groups<T, F>(seeds: &SeedGroups, parallel: bool, grow: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize, &[u32]) -> T + Sync,
{
    if parallel {
        seeds
            .groups()
            .par_iter()
            .enumerate()
            .map(|(group, members)| grow(group, members))
            .collect()
    } else {
        seeds
            .groups()
            .iter()
            .enumerate()
            .map(|(group, members)| grow(group, members))
            .collect()
    }
}

fn record(log: &mut HistoryLog, region: &GrowingRegion<'_>, assessment: Assessment) {
    log.record(region.assess(assessment), region.outer_boundary_value());
}

fn warn_small_stop(group: usize, seeds: usize, stop: usize) {
    if stop < seeds {
        warn!(
            group,
            seeds, stop, "Stop criterion is smaller than the seed group; region keeps its seeds"
        );
    }
}
