//! Brute-force neighbor index.
//!
//! Every pairwise distance is computed once and each row is sorted ascending by
//! `(distance, id)`. A radius query is then a prefix scan of one row.
//!
//! ## Complexity
//!
//! - **Build**: O(n² log n) time, O(n²) space. Rows are independent and are built in
//!   parallel when the `parallel` feature is enabled.
//! - **Query**: O(k) for k results.
//!
//! Distances do not depend on `eps`, so one index serves any number of runs with
//! different radii. Rebuild only when coordinates or the metric change.

use super::metric::Metric;
use super::traits::NeighborQuery;
use crate::error::{Error, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Precomputed, per-row sorted distance table.
#[derive(Debug, Clone, Default)]
pub struct NeighborIndex {
    rows: Vec<Vec<(f64, usize)>>,
}

impl NeighborIndex {
    /// Build the index over `points` using `metric`.
    ///
    /// Fails with [`Error::DimensionMismatch`] if any point's dimensionality differs from
    /// the first point's, and with [`Error::NonFiniteCoordinate`] on NaN or infinite
    /// coordinates. An empty slice yields an empty index.
    pub fn build<M>(points: &[Vec<f64>], metric: &M) -> Result<Self>
    where
        M: Metric + Sync + ?Sized,
    {
        let Some(first) = points.first() else {
            return Ok(Self::default());
        };
        let dim = first.len();
        if let Some(bad) = points.iter().find(|p| p.len() != dim) {
            return Err(Error::DimensionMismatch {
                expected: dim,
                found: bad.len(),
            });
        }
        for (point, p) in points.iter().enumerate() {
            if let Some(axis) = p.iter().position(|x| !x.is_finite()) {
                return Err(Error::NonFiniteCoordinate { point, axis });
            }
        }

        let row = |i: usize| -> Vec<(f64, usize)> {
            let mut row: Vec<(f64, usize)> = points
                .iter()
                .enumerate()
                .map(|(j, other)| (metric.distance(&points[i], other), j))
                .collect();
            row.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
            row
        };

        #[cfg(feature = "parallel")]
        let rows: Vec<Vec<(f64, usize)>> = (0..points.len()).into_par_iter().map(row).collect();
        #[cfg(not(feature = "parallel"))]
        let rows: Vec<Vec<(f64, usize)>> = (0..points.len()).map(row).collect();

        tracing::debug!(n = points.len(), dim, "built neighbor index");
        Ok(Self { rows })
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the index holds no points.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The full sorted `(distance, id)` row for `point_id`.
    pub fn row(&self, point_id: usize) -> Result<&[(f64, usize)]> {
        self.rows
            .get(point_id)
            .map(Vec::as_slice)
            .ok_or(Error::InvalidPointId {
                id: point_id,
                len: self.rows.len(),
            })
    }

    /// Number of points within `eps` of `point_id`, the point itself included.
    pub fn neighbor_count(&self, point_id: usize, eps: f64) -> Result<usize> {
        Ok(self.within(point_id, eps)?.len())
    }

    /// Prefix of the row whose distances are `<= eps`.
    fn within(&self, point_id: usize, eps: f64) -> Result<&[(f64, usize)]> {
        let row = self.row(point_id)?;
        let end = row.partition_point(|&(d, _)| d <= eps);
        Ok(&row[..end])
    }
}

impl NeighborQuery for NeighborIndex {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn region_query(&self, point_id: usize, eps: f64) -> Result<Vec<usize>> {
        Ok(self
            .within(point_id, eps)?
            .iter()
            .map(|&(_, id)| id)
            .collect())
    }
}
