use crate::error::Result;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering {
    /// Fit the model and return one numeric label per input point.
    ///
    /// Labels use the conventional encoding: `0` is noise, `1..=k` are cluster ids.
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>>;

    /// The configured number of clusters (if applicable).
    ///
    /// For algorithms that discover the number of clusters dynamically (e.g. DBSCAN),
    /// this returns 0.
    fn n_clusters(&self) -> usize;
}

/// Radius queries over a fixed set of points.
///
/// This is the contract the cluster engine relies on. The brute-force
/// [`NeighborIndex`](super::NeighborIndex) is the reference implementation; a spatial
/// index may stand in for it as long as it returns identical results.
pub trait NeighborQuery {
    /// Number of points known to the index.
    fn len(&self) -> usize;

    /// Whether the index holds no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids of every point within `eps` (inclusive) of `point_id`, ascending by
    /// distance with ties broken by ascending id. Includes `point_id` itself.
    fn region_query(&self, point_id: usize, eps: f64) -> Result<Vec<usize>>;
}
