//! End-to-end growth scenarios on small surfaces.
//!
//! Run with: cargo test -p mesh-region-grow --test growth

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use mesh_region_grow::{
    AdjacencyGraph, AdjacencyParams, Assessment, CutEdges, GrowError, GrowParams,
    GrowthStrategy, RegionGrower, ScalarField, SeedGroups, StopCriteria, VertexMask,
};

// =============================================================================
// Surfaces
// =============================================================================

/// Ring of six vertices, each adjacent to its two circular neighbors.
fn ring() -> AdjacencyGraph {
    AdjacencyGraph::from_neighbor_lists((0..6).map(|i| vec![(i + 1) % 6]).collect()).unwrap()
}

/// Path graph over `n` vertices.
fn path(n: u32) -> AdjacencyGraph {
    AdjacencyGraph::from_neighbor_lists((0..n).map(|i| vec![(i + 1).min(n - 1)]).collect())
        .unwrap()
}

/// Triangulated strip with two rows of `cols` vertices; vertex id is
/// `row * cols + col`.
fn strip(cols: u32) -> (Vec<[u32; 3]>, usize) {
    let mut faces = Vec::new();
    for v in 0..cols - 1 {
        faces.push([v, v + 1, v + cols]);
        faces.push([v + 1, v + cols + 1, v + cols]);
    }
    (faces, 2 * cols as usize)
}

/// Triangulated `size` x `size` grid; vertex id is `row * size + col`.
fn grid(size: u32) -> (Vec<[u32; 3]>, usize) {
    let mut faces = Vec::new();
    for row in 0..size - 1 {
        for col in 0..size - 1 {
            let v = row * size + col;
            faces.push([v, v + 1, v + size]);
            faces.push([v + 1, v + size + 1, v + size]);
        }
    }
    (faces, (size * size) as usize)
}

// =============================================================================
// Simple growth
// =============================================================================

#[test]
fn srg_on_uniform_ring_prefers_lowest_ids() {
    let grower = RegionGrower::new(ring());
    let field = ScalarField::from_column(&[2.0; 6]);
    let outcome = grower
        .grow(Some(&field), &SeedGroups::single([0]), &GrowParams::srg(3))
        .unwrap();

    assert_eq!(outcome.strategy, GrowthStrategy::Simple);
    assert_eq!(outcome.regions[0].to_vec(), vec![0, 1, 2]);
    assert!(outcome.histories.is_empty());
}

#[test]
fn srg_per_group_stop_criteria() {
    let grower = RegionGrower::new(path(10));
    let field = ScalarField::from_column(&[1.0; 10]);
    let seeds = SeedGroups::new(vec![vec![0], vec![9]]);
    let params = GrowParams::srg(2).with_stop_criteria(StopCriteria::from_counts(vec![2, 4]));

    let regions = grower.simple(&field, &seeds, &params).unwrap();
    assert_eq!(regions[0].to_vec(), vec![0, 1]);
    assert_eq!(regions[1].to_vec(), vec![6, 7, 8, 9]);
}

#[test]
fn srg_with_multi_frame_field() {
    let grower = RegionGrower::new(path(5));
    // Frame 0 alone would pull towards vertex 1; both frames favour vertex 3.
    let field = ScalarField::from_columns(&[
        vec![0.0, 5.0, 5.0, 4.0, 0.0],
        vec![0.0, 0.0, 5.0, 5.0, 0.0],
    ])
    .unwrap();
    let regions = grower
        .simple(&field, &SeedGroups::single([2]), &GrowParams::srg(2))
        .unwrap();
    assert_eq!(regions[0].to_vec(), vec![2, 3]);
}

// =============================================================================
// Connectivity growth
// =============================================================================

#[test]
fn crg_stops_at_cut() {
    let graph = ring()
        .with_cut_edges(&CutEdges::from_path(&[2, 3, 4]))
        .unwrap();
    let grower = RegionGrower::new(graph);
    let outcome = grower
        .grow(None, &SeedGroups::single([0]), &GrowParams::crg())
        .unwrap();
    assert_eq!(outcome.regions[0].to_vec(), vec![0, 1, 2, 4, 5]);
}

#[test]
fn crg_single_cut_leaves_ring_connected() {
    let graph = ring().with_cut_edges(&CutEdges::from_path(&[2, 3])).unwrap();
    let grower = RegionGrower::new(graph);
    let regions = grower
        .connectivity(&SeedGroups::single([0]), &GrowParams::crg())
        .unwrap();
    assert_eq!(regions[0].len(), 6);
}

#[test]
fn crg_cut_partitions_into_compartments() {
    let graph = ring()
        .with_cut_edges(&CutEdges::from_pairs([(0, 1), (3, 4)]))
        .unwrap();
    let grower = RegionGrower::new(graph);
    let outcome = grower
        .grow(None, &SeedGroups::new(vec![vec![0], vec![2]]), &GrowParams::crg())
        .unwrap();
    assert_eq!(outcome.regions[0].to_vec(), vec![0, 4, 5]);
    assert_eq!(outcome.regions[1].to_vec(), vec![1, 2, 3]);
    assert!(!outcome.has_overlap());
}

#[test]
fn crg_severed_line_splits_grid() {
    let (faces, n) = grid(5);
    let line = [2, 7, 12, 17, 22];
    let seeds = SeedGroups::new(vec![vec![0], vec![4]]);

    let params = AdjacencyParams::default().with_cut_edges(CutEdges::sever_path(&line));
    let grower = RegionGrower::from_faces(&faces, n, &params).unwrap();
    let outcome = grower.grow(None, &seeds, &GrowParams::crg()).unwrap();
    assert_eq!(
        outcome.regions[0].to_vec(),
        vec![0, 1, 5, 6, 10, 11, 15, 16, 20, 21]
    );
    assert_eq!(
        outcome.regions[1].to_vec(),
        vec![3, 4, 8, 9, 13, 14, 18, 19, 23, 24]
    );
    assert!(!outcome.has_overlap());

    // A wider ring cannot reach across severed vertices either.
    let params = AdjacencyParams::with_n_ring(2).with_cut_edges(CutEdges::sever_path(&line));
    let grower = RegionGrower::from_faces(&faces, n, &params).unwrap();
    let wide = grower.grow(None, &seeds, &GrowParams::crg()).unwrap();
    assert_eq!(wide.regions, outcome.regions);

    // Cutting only the line's own pairs leaves the sides joined.
    let params = AdjacencyParams::default().with_cut_edges(CutEdges::from_path(&line));
    let grower = RegionGrower::from_faces(&faces, n, &params).unwrap();
    let joined = grower.grow(None, &seeds, &GrowParams::crg()).unwrap();
    assert_eq!(joined.regions[0].len(), n);
    assert!(joined.has_overlap());
}

#[test]
fn crg_threshold_mask_blocks_growth() {
    let (faces, n) = strip(5);
    let field = ScalarField::from_column(&[1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0]);
    let mask = field.threshold_mask(0.5);
    assert_eq!(mask.active_count(), 8);

    let params = AdjacencyParams::default().with_mask(mask.clone());
    let grower = RegionGrower::from_faces(&faces, n, &params).unwrap();
    let regions = grower
        .connectivity(&SeedGroups::single([0]), &GrowParams::crg())
        .unwrap();
    assert_eq!(regions[0].to_vec(), vec![0, 1, 5, 6]);

    // The mask applies after ring expansion, so a 2-ring reaches across.
    let params = AdjacencyParams::with_n_ring(2).with_mask(mask);
    let grower = RegionGrower::from_faces(&faces, n, &params).unwrap();
    let regions = grower
        .connectivity(&SeedGroups::single([0]), &GrowParams::crg())
        .unwrap();
    assert_eq!(regions[0].to_vec(), vec![0, 1, 3, 4, 5, 6, 8, 9]);
}

#[test]
fn crg_label_overlay() {
    let (faces, n) = strip(3);
    let mask = VertexMask::from_label([0, 1, 3], n).unwrap();
    let params = AdjacencyParams::default().with_mask(mask);
    let grower = RegionGrower::from_faces(&faces, n, &params).unwrap();
    let regions = grower
        .connectivity(&SeedGroups::single([3]), &GrowParams::crg())
        .unwrap();
    assert_eq!(regions[0].label_overlay(n), vec![1, 1, 0, 1, 0, 0]);
}

// =============================================================================
// Adaptive growth
// =============================================================================

#[test]
fn arg_history_finds_the_bump() {
    let grower = RegionGrower::new(path(7));
    let field = ScalarField::from_column(&[0.0, 0.0, 5.0, 6.0, 5.0, 0.0, 0.0]);
    let grown = grower
        .adaptive(&field, &SeedGroups::single([3]), &GrowParams::arg(7))
        .unwrap();
    let history = &grown[0].history;

    assert_eq!(grown[0].region.len(), 7);
    assert_eq!(history.len(), 7);
    assert_relative_eq!(history.assessments()[0], 1.0);
    assert_relative_eq!(history.assessments()[1], 3.0);
    assert_relative_eq!(history.assessments()[2], 16.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(history.outer_boundary_values()[2].unwrap(), 0.0);
    assert_eq!(history.outer_boundary_values()[6], None);

    assert_eq!(history.optimal_index(0), Some(2));
    assert_eq!(history.optimal_region(0).unwrap().to_vec(), vec![2, 3, 4]);
}

#[test]
fn arg_components_cover_region_once() {
    let grower = RegionGrower::new(ring());
    let field = ScalarField::from_column(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0]);
    let params = GrowParams::arg(5)
        .with_assessment(Assessment::TStatistic)
        .with_assess_step(2);
    let grown = grower
        .adaptive(&field, &SeedGroups::single([0, 1]), &params)
        .unwrap();

    let history = &grown[0].history;
    let mut covered: Vec<u32> = history.components().iter().flatten().copied().collect();
    covered.sort_unstable();
    assert_eq!(covered, grown[0].region.to_vec());
    assert_eq!(history.components()[0], vec![0, 1]);
    assert_eq!(history.region_at(history.len() - 1).unwrap(), grown[0].region);
}

#[test]
fn arg_assessment_names_round_trip() {
    let grower = RegionGrower::new(path(6));
    let field = ScalarField::from_column(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    for name in mesh_region_grow::available_types() {
        let assessment: Assessment = name.parse().unwrap();
        let params = GrowParams::arg(4).with_assessment(assessment);
        let outcome = grower
            .grow(Some(&field), &SeedGroups::single([2]), &params)
            .unwrap();
        assert_eq!(outcome.regions[0].len(), 4, "{name}");
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn masked_seed_is_rejected() {
    let (faces, n) = strip(3);
    let mask = VertexMask::from_values(&[1.0, 1.0, 0.0, 1.0, 1.0, 1.0]);
    let params = AdjacencyParams::default().with_mask(mask);
    let grower = RegionGrower::from_faces(&faces, n, &params).unwrap();
    let err = grower
        .connectivity(&SeedGroups::single([2]), &GrowParams::crg())
        .unwrap_err();
    assert_eq!(err, GrowError::invalid_seed(2, "masked out"));
}

#[test]
fn invalid_topology_surfaces_as_adjacency_error() {
    let err = RegionGrower::from_faces(&[[0, 1, 7]], 3, &AdjacencyParams::default()).unwrap_err();
    assert!(matches!(err, GrowError::Adjacency(_)));
}

#[test]
fn one_bad_group_fails_the_whole_call() {
    let grower = RegionGrower::new(ring());
    let field = ScalarField::from_column(&[1.0; 6]);
    let seeds = SeedGroups::new(vec![vec![0], vec![2], vec![2]]);
    for params in [GrowParams::srg(3), GrowParams::arg(3), GrowParams::crg()] {
        let result = grower.grow(Some(&field), &seeds, &params);
        assert_eq!(
            result,
            Err(GrowError::invalid_seed(2, "shared by more than one seed group"))
        );
    }
}

#[test]
fn unknown_names_are_rejected() {
    assert!(matches!(
        "flood".parse::<GrowthStrategy>(),
        Err(GrowError::UnsupportedStrategy(_))
    ));
    assert!(matches!(
        "median".parse::<Assessment>(),
        Err(GrowError::UnknownAssessment(_))
    ));
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn repeated_and_parallel_runs_agree() {
    let (faces, n) = strip(8);
    let grower = RegionGrower::from_faces(&faces, n, &AdjacencyParams::default()).unwrap();
    let values: Vec<f64> = (0..16u32).map(|v| f64::from((v * 7) % 5)).collect();
    let field = ScalarField::from_column(&values);
    let seeds = SeedGroups::per_vertex([0, 7, 12]);

    for strategy in GrowthStrategy::ALL {
        let params = GrowParams::default()
            .with_strategy(strategy)
            .with_stop_criteria(StopCriteria::Uniform(5));
        let first = grower.grow(Some(&field), &seeds, &params).unwrap();
        let second = grower.grow(Some(&field), &seeds, &params).unwrap();
        let parallel = grower
            .grow(Some(&field), &seeds, &params.clone().with_parallel(true))
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(first, parallel);
    }
}
