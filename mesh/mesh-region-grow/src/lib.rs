//! Seeded region growing on triangulated surfaces.
//!
//! This crate segments a surface, typically a cortical mesh, into regions
//! grown outward from seed vertices over a [`mesh_adjacency::AdjacencyGraph`].
//! Growth is guided either by a per-vertex scalar field (functional
//! activation, thickness, ...) or by graph connectivity alone.
//!
//! # Features
//!
//! - **Simple growth (`srg`)**: add the frontier vertex closest to the region
//!   mean until the region reaches its target size
//! - **Adaptive growth (`arg`)**: rank candidates with a named [`Assessment`]
//!   and record a [`GrowthHistory`] for choosing a stopping point afterwards
//! - **Connectivity growth (`crg`)**: take the full connected component of
//!   the seeds, partitioned by user-drawn cut edges
//! - **Deterministic**: ties go to the lowest vertex id, and parallel growth
//!   of seed groups returns exactly what sequential growth returns
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Python bindings
//!
//! # Example
//!
//! ```
//! use mesh_region_grow::{
//!     AdjacencyParams, CutEdges, GrowParams, RegionGrower, ScalarField, SeedGroups,
//! };
//!
//! // Hexagon fan around hub vertex 6.
//! let faces: Vec<[u32; 3]> = (0..6).map(|i| [i, (i + 1) % 6, 6]).collect();
//! let field = ScalarField::from_column(&[9.0, 8.0, 1.0, 1.0, 1.0, 7.0, 2.0]);
//! let seeds = SeedGroups::single([0]);
//!
//! let grower = RegionGrower::from_faces(&faces, 7, &AdjacencyParams::default()).unwrap();
//! let outcome = grower.grow(Some(&field), &seeds, &GrowParams::arg(4)).unwrap();
//! println!("{outcome}");
//!
//! let history = &outcome.histories[0];
//! let best = history.optimal_region(1).unwrap();
//! assert!(best.contains(0));
//!
//! // Cut the hub off vertex 0 and grow by connectivity alone.
//! let cut = AdjacencyParams::default().with_cut_edges(CutEdges::from_path(&[6, 0]));
//! let grower = RegionGrower::from_faces(&faces, 7, &cut).unwrap();
//! let outcome = grower.grow(None, &seeds, &GrowParams::crg()).unwrap();
//! assert_eq!(outcome.regions[0].len(), 7);
//! ```
//!
//! # Quality Standards
//!
//! - Zero `unwrap`/`expect` in library code
//! - All inputs validated before any region grows
//! - Property tests for size bounds, connectivity, history consistency and
//!   determinism

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod assessment;
mod error;
mod grow;
mod history;
mod params;
mod region;
mod result;
mod scalar;
mod seeds;
mod strategy;

pub use assessment::{Assessment, available_types, score};
pub use error::{GrowError, GrowResult};
pub use grow::RegionGrower;
pub use history::GrowthHistory;
pub use params::GrowParams;
pub use region::Region;
pub use result::{AdaptiveGrowth, GrowthOutcome};
pub use scalar::{ScalarField, ScalarProfile};
pub use seeds::{SeedGroups, StopCriteria};
pub use strategy::GrowthStrategy;

// Re-export the adjacency builder so callers need one import
pub use mesh_adjacency::{
    AdjacencyError, AdjacencyGraph, AdjacencyParams, CutEdges, SurfaceTopology, VertexMask,
};
