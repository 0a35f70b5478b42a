use densa::cluster::{Dbscan, Euclidean, Label, Metric, NeighborIndex, NeighborQuery, PointSet};
use proptest::prelude::*;

// Half-integer grid coordinates, so duplicates and distance ties are common.
fn dataset() -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(
        prop::collection::vec((-8i32..8).prop_map(|v| v as f64 * 0.5), 2),
        0..40,
    )
}

fn neighbors(data: &[Vec<f64>], i: usize, eps: f64) -> Vec<usize> {
    (0..data.len())
        .filter(|&j| Euclidean.distance(&data[i], &data[j]) <= eps)
        .collect()
}

fn run(data: &[Vec<f64>], eps: f64, min_pts: usize) -> (usize, Vec<Label>) {
    let index = NeighborIndex::build(data, &Euclidean).unwrap();
    let mut points = PointSet::new(data.to_vec());
    let k = Dbscan::new(eps, min_pts).fit(&mut points, &index).unwrap();
    (k, points.into_labels())
}

proptest! {
    #[test]
    fn prop_index_rows_sorted_and_complete(data in dataset()) {
        let index = NeighborIndex::build(&data, &Euclidean).unwrap();
        prop_assert_eq!(index.len(), data.len());
        for i in 0..data.len() {
            let row = index.row(i).unwrap();
            prop_assert_eq!(row.len(), data.len());
            for w in row.windows(2) {
                prop_assert!(w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1));
            }
            let mut ids: Vec<usize> = row.iter().map(|&(_, j)| j).collect();
            ids.sort_unstable();
            prop_assert_eq!(ids, (0..data.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn prop_region_query_matches_brute_force(data in dataset(), eps in 0.0f64..4.0) {
        let index = NeighborIndex::build(&data, &Euclidean).unwrap();
        for i in 0..data.len() {
            let mut got = index.region_query(i, eps).unwrap();
            prop_assert!(got.contains(&i));
            got.sort_unstable();
            prop_assert_eq!(got, neighbors(&data, i, eps));
        }
    }

    #[test]
    fn prop_labels_complete_and_ids_contiguous(
        data in dataset(),
        eps in 0.0f64..3.0,
        min_pts in 1usize..6,
    ) {
        let (k, labels) = run(&data, eps, min_pts);
        prop_assert!(labels.iter().all(|&l| l != Label::Unclassified));

        // Ids are exactly 1..=k, first seen in increasing order.
        let mut next = 1;
        for l in &labels {
            if let Label::Cluster(id) = *l {
                prop_assert!(id <= next);
                if id == next {
                    next += 1;
                }
            }
        }
        prop_assert_eq!(next - 1, k);
    }

    #[test]
    fn prop_fit_is_idempotent(
        data in dataset(),
        eps in 0.0f64..3.0,
        min_pts in 1usize..6,
    ) {
        prop_assert_eq!(run(&data, eps, min_pts), run(&data, eps, min_pts));
    }

    #[test]
    fn prop_density_invariants(
        data in dataset(),
        eps in 0.0f64..3.0,
        min_pts in 1usize..6,
    ) {
        let (k, labels) = run(&data, eps, min_pts);
        let hoods: Vec<Vec<usize>> = (0..data.len()).map(|i| neighbors(&data, i, eps)).collect();
        let is_core = |i: usize| hoods[i].len() >= min_pts;

        for i in 0..data.len() {
            match labels[i] {
                Label::Noise => {
                    // Not core, and not within eps of any core point.
                    prop_assert!(!is_core(i));
                    prop_assert!(hoods[i].iter().all(|&j| !is_core(j)));
                }
                Label::Cluster(c) => {
                    // Core itself, or a border point of a core point in the same cluster.
                    prop_assert!(
                        is_core(i)
                            || hoods[i].iter().any(|&j| is_core(j) && labels[j] == Label::Cluster(c))
                    );
                    if is_core(i) {
                        for &j in &hoods[i] {
                            if is_core(j) {
                                prop_assert_eq!(labels[j], Label::Cluster(c));
                            }
                        }
                    }
                }
                Label::Unclassified => prop_assert!(false, "point {} left unclassified", i),
            }
        }

        // Every cluster holds at least one core point.
        for c in 1..=k {
            prop_assert!((0..data.len()).any(|i| labels[i] == Label::Cluster(c) && is_core(i)));
        }
    }
}
