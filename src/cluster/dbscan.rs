//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN is a density-based clustering algorithm that groups points based on
//! neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors (inclusive).
//! - **MinPts**: Minimum neighborhood size, the point itself included, for a point to be "core".
//! - **Core point**: Has at least MinPts points within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Expansion Protocol
//!
//! Points are visited in id order. Each still-unclassified point P is expanded:
//!
//! 1. `seeds = region_query(P)`. If `|seeds| < MinPts`, P becomes noise (it may be
//!    claimed by a later cluster).
//! 2. Otherwise every claimable seed joins the new cluster, and the seeds other than
//!    P form a FIFO work-queue.
//! 3. Pop `current`, query it. If it is core, every unclassified or noise neighbor
//!    joins the cluster; only the previously *unclassified* ones are enqueued. A
//!    noise point has already been queried and found non-core, so it is never
//!    re-expanded.
//!
//! Cluster ids start at 1 and increase by one per successful expansion. A point in a
//! cluster never changes cluster, so a border point reachable from two clusters
//! stays with the one that discovered it first.
//!
//! Region queries return ids in ascending-distance order with ties broken by id, and
//! the work-queue is strict FIFO, so labels (including id numbering) are
//! reproducible bit for bit.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) queries against the brute-force [`NeighborIndex`]; better with a
//!   spatial index behind [`NeighborQuery`].
//! - **Space**: O(n) for labels and the work-queue.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use std::collections::VecDeque;

use super::index::NeighborIndex;
use super::label::{Label, NOISE};
use super::metric::{Euclidean, Metric};
use super::point::PointSet;
use super::traits::{Clustering, NeighborQuery};
use crate::error::{Error, Result};

/// DBSCAN parameters and cluster engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Dbscan {
    /// Epsilon: maximum distance for neighborhood.
    epsilon: f64,
    /// Minimum points for core point classification.
    min_pts: usize,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum distance between two points to be neighbors (inclusive).
    /// * `min_pts` - Minimum neighborhood size, the point itself included.
    ///
    /// Parameters are checked when clustering starts, not here.
    pub fn new(epsilon: f64, min_pts: usize) -> Self {
        Self { epsilon, min_pts }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Neighborhood radius.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Minimum neighborhood size.
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    /// Check `epsilon >= 0` and `min_pts >= 1`.
    pub fn validate(&self) -> Result<()> {
        if self.epsilon.is_nan() {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be a number",
            });
        }
        if self.epsilon < 0.0 {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be non-negative",
            });
        }
        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Label every point in `points`, returning the number of clusters found.
    ///
    /// `index` must answer queries for exactly the points in `points`. Labels are
    /// written only if the whole run succeeds; on error `points` is untouched. Only
    /// `Unclassified` points start an expansion, so call [`PointSet::reset`] before
    /// re-running on the same set.
    pub fn fit<Q>(&self, points: &mut PointSet, index: &Q) -> Result<usize>
    where
        Q: NeighborQuery + ?Sized,
    {
        self.validate()?;
        if index.len() != points.len() {
            return Err(Error::IndexSizeMismatch {
                points: points.len(),
                index: index.len(),
            });
        }

        let n = points.len();
        tracing::debug!(n, epsilon = self.epsilon, min_pts = self.min_pts, "dbscan fit");

        let mut labels = points.labels().to_vec();
        let mut cluster_id = 1;
        for point in 0..n {
            if labels[point] != Label::Unclassified {
                continue;
            }
            if self.expand_cluster(index, &mut labels, point, cluster_id)? {
                cluster_id += 1;
            }
        }

        let n_clusters = cluster_id - 1;
        tracing::debug!(
            n_clusters,
            noise = labels.iter().filter(|l| l.is_noise()).count(),
            "dbscan fit complete"
        );
        points.labels_mut().copy_from_slice(&labels);
        Ok(n_clusters)
    }

    /// Build a [`NeighborIndex`] over `positions` with `metric` and cluster them.
    pub fn fit_positions<M>(&self, positions: &[Vec<f64>], metric: &M) -> Result<DbscanFit>
    where
        M: Metric + Sync + ?Sized,
    {
        self.validate()?;
        let index = NeighborIndex::build(positions, metric)?;
        let mut points = PointSet::new(positions.to_vec());
        let n_clusters = self.fit(&mut points, &index)?;
        Ok(DbscanFit {
            labels: points.into_labels(),
            n_clusters,
        })
    }

    /// Try to grow a new cluster from `point`.
    ///
    /// Returns `false` (and marks `point` as noise) if `point` is not core.
    ///
    /// Seeds already in an earlier cluster keep their id. Implementations that
    /// relabel every seed assign such shared border points to the later cluster
    /// instead, so labels can differ from theirs on those points.
    fn expand_cluster<Q>(
        &self,
        index: &Q,
        labels: &mut [Label],
        point: usize,
        cluster_id: usize,
    ) -> Result<bool>
    where
        Q: NeighborQuery + ?Sized,
    {
        let seeds = self.neighbors(index, point, labels.len())?;
        if seeds.len() < self.min_pts {
            tracing::trace!(point, neighbors = seeds.len(), "noise");
            labels[point] = Label::Noise;
            return Ok(false);
        }

        let mut size = 0;
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(seeds.len());
        for &seed in &seeds {
            if labels[seed].is_claimable() {
                labels[seed] = Label::Cluster(cluster_id);
                size += 1;
            }
            if seed != point {
                queue.push_back(seed);
            }
        }

        while let Some(current) = queue.pop_front() {
            let result = self.neighbors(index, current, labels.len())?;
            if result.len() < self.min_pts {
                continue;
            }
            for r in result {
                match labels[r] {
                    Label::Unclassified => {
                        labels[r] = Label::Cluster(cluster_id);
                        queue.push_back(r);
                        size += 1;
                    }
                    Label::Noise => {
                        labels[r] = Label::Cluster(cluster_id);
                        size += 1;
                    }
                    Label::Cluster(_) => {}
                }
            }
        }

        tracing::debug!(cluster_id, seed = point, size, "expanded cluster");
        Ok(true)
    }

    /// Region query with every returned id checked against `n`.
    fn neighbors<Q>(&self, index: &Q, point: usize, n: usize) -> Result<Vec<usize>>
    where
        Q: NeighborQuery + ?Sized,
    {
        let ids = index.region_query(point, self.epsilon)?;
        if let Some(&bad) = ids.iter().find(|&&id| id >= n) {
            return Err(Error::InvalidPointId { id: bad, len: n });
        }
        Ok(ids)
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

/// Result of [`Dbscan::fit_positions`].
#[derive(Debug, Clone, PartialEq)]
pub struct DbscanFit {
    /// One label per input point, in input order.
    pub labels: Vec<Label>,
    /// Number of clusters found; ids are exactly `1..=n_clusters`.
    pub n_clusters: usize,
}

impl DbscanFit {
    /// Numeric labels: `0` for noise, cluster id otherwise.
    pub fn codes(&self) -> Vec<usize> {
        self.labels
            .iter()
            .map(|l| l.cluster_id().unwrap_or(NOISE))
            .collect()
    }

    /// Number of noise points.
    pub fn noise_count(&self) -> usize {
        self.labels.iter().filter(|l| l.is_noise()).count()
    }

    /// Size of each cluster; entry `i` is cluster `i + 1`.
    ///
    /// Ids outside `1..=n_clusters` are not counted.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.n_clusters];
        for id in self.labels.iter().filter_map(|l| l.cluster_id()) {
            if let Some(s) = sizes.get_mut(id.wrapping_sub(1)) {
                *s += 1;
            }
        }
        sizes
    }

    /// Ids of the points in cluster `cluster_id`, ascending.
    pub fn members(&self, cluster_id: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| l.cluster_id() == Some(cluster_id))
            .map(|(i, _)| i)
            .collect()
    }
}

impl Clustering for Dbscan {
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        Ok(self.fit_positions(data, &Euclidean)?.codes())
    }

    /// DBSCAN discovers clusters dynamically, so this returns 0.
    ///
    /// To get the actual number of clusters, use [`Dbscan::fit_positions`].
    fn n_clusters(&self) -> usize {
        0
    }
}

/// Extended DBSCAN interface with noise detection.
pub trait DbscanExt {
    /// Fit and predict, returning labels where noise is marked as `None`.
    fn fit_predict_with_noise(&self, data: &[Vec<f64>]) -> Result<Vec<Option<usize>>>;

    /// Check if a numeric label represents noise.
    fn is_noise(label: usize) -> bool {
        label == NOISE
    }
}

impl DbscanExt for Dbscan {
    fn fit_predict_with_noise(&self, data: &[Vec<f64>]) -> Result<Vec<Option<usize>>> {
        Ok(self
            .fit_positions(data, &Euclidean)?
            .labels
            .into_iter()
            .map(Label::cluster_id)
            .collect())
    }
}
