//! Density-based clustering.
//!
//! `densa` groups points in a metric space by density-reachability (DBSCAN), labeling
//! each point as a member of a cluster or as noise, without knowing the number of
//! clusters in advance.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`NeighborIndex`]: a precomputed, per-row sorted distance table answering radius queries
//! - [`Dbscan`]: the cluster engine driving seed-set expansion over any [`NeighborQuery`]
//! - [`Label`]: the per-point state (`Unclassified`, `Noise`, `Cluster(id)`)
//!
//! Reading points from whitespace-delimited text and writing labeled reports live in [`io`].

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod io;

pub use cluster::{
    Clustering, Dbscan, DbscanExt, DbscanFit, Euclidean, Label, Metric, NeighborIndex,
    NeighborQuery, PointSet, NOISE,
};
pub use error::{Error, Result};
