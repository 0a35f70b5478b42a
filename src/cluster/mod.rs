//! Density-based clustering over a precomputed neighbor index.
//!
//! ## Components
//!
//! ### Neighbor index
//!
//! [`NeighborIndex`] answers "which points lie within ε of point P", in ascending
//! distance order with ties broken by ascending id. It is a full pairwise distance
//! table, built once from the points and a [`Metric`] and never mutated, so it can be
//! shared between readers and reused across runs with different ε.
//!
//! Anything implementing [`NeighborQuery`] can take its place (a k-d tree or R*-tree,
//! say) provided it returns the same ids in the same order.
//!
//! ### Cluster engine
//!
//! [`Dbscan`] owns the expansion protocol. It walks the points in id order, grows a
//! cluster from every unclassified core point with a FIFO work-queue, and records the
//! outcome in the [`PointSet`]'s labels:
//!
//! ```text
//! Unclassified ──> Noise ──> Cluster(id)
//!      └─────────────────────────^
//! ```
//!
//! `Cluster(id)` is terminal. Ids are `1..=k` in order of discovery.
//!
//! ## Usage
//!
//! ```rust
//! use densa::cluster::{Clustering, Dbscan, Euclidean, Label, NeighborIndex, PointSet};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//!     vec![50.0, 50.0],
//! ];
//!
//! // One-shot: numeric labels, 0 = noise.
//! let labels = Dbscan::new(0.5, 2).fit_predict(&data).unwrap();
//! assert_eq!(labels, vec![1, 1, 2, 2, 0]);
//!
//! // Explicit index and point set; the index is reusable for other radii.
//! let index = NeighborIndex::build(&data, &Euclidean).unwrap();
//! let mut points = PointSet::new(data);
//! let k = Dbscan::new(0.5, 2).fit(&mut points, &index).unwrap();
//! assert_eq!(k, 2);
//! assert_eq!(points.label(4), Some(Label::Noise));
//! ```

mod dbscan;
mod index;
mod label;
mod metric;
mod point;
mod traits;

pub use dbscan::{Dbscan, DbscanExt, DbscanFit};
pub use index::NeighborIndex;
pub use label::{Label, NOISE};
pub use metric::{Euclidean, Metric};
pub use point::PointSet;
pub use traits::{Clustering, NeighborQuery};
