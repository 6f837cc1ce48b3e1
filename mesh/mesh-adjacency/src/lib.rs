//! N-ring vertex adjacency for triangulated surfaces.
//!
//! This crate turns a triangle list into the vertex graph that region growing
//! walks over. Two vertices are neighbors when they share a face; the graph
//! can be widened to n-ring neighborhoods, restricted by a vertex mask, and
//! severed along user-drawn cut edges without touching the surface itself.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Python bindings
//!
//! # Overview
//!
//! - [`SurfaceTopology`] - Vertex count plus validated faces
//! - [`AdjacencyParams`] - Ring size, optional [`VertexMask`], optional [`CutEdges`]
//! - [`AdjacencyGraph`] - Symmetric, sorted neighbor lists per vertex
//!
//! # Example
//!
//! ```
//! use mesh_adjacency::{AdjacencyGraph, AdjacencyParams, CutEdges};
//!
//! // Hexagon fan around hub vertex 6.
//! let faces: Vec<[u32; 3]> = (0..6).map(|i| [i, (i + 1) % 6, 6]).collect();
//!
//! let params = AdjacencyParams::default().with_cut_edges(CutEdges::from_path(&[0, 6]));
//! let graph = AdjacencyGraph::build(&faces, 7, &params).unwrap();
//!
//! assert!(!graph.contains_edge(0, 6));
//! assert!(graph.contains_edge(0, 1));
//! assert!(graph.is_symmetric());
//! ```
//!
//! # Quality Standards
//!
//! - Zero `unwrap`/`expect` in library code
//! - Property tests for symmetry, ring monotonicity, masking and cuts

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod adjacency;
mod cut;
mod error;
mod mask;
mod params;
mod topology;

pub use adjacency::AdjacencyGraph;
pub use cut::CutEdges;
pub use error::{AdjacencyError, AdjacencyResult};
pub use mask::VertexMask;
pub use params::AdjacencyParams;
pub use topology::SurfaceTopology;
