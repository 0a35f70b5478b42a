use std::fmt;

/// Numeric label for noise in the conventional encoding (`0` = noise, `1..=k` = cluster).
pub const NOISE: usize = 0;

/// Cluster state of a single point.
///
/// Transitions only move forward: `Unclassified -> Noise -> Cluster(id)` or
/// `Unclassified -> Cluster(id)`. `Cluster(id)` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Label {
    /// Not yet visited by the engine.
    #[default]
    Unclassified,
    /// Not density-reachable from any core point seen so far.
    Noise,
    /// Member of the cluster with this id (ids start at 1).
    Cluster(usize),
}

impl Label {
    /// Whether the point is noise.
    pub fn is_noise(self) -> bool {
        matches!(self, Label::Noise)
    }

    /// Whether the point belongs to a cluster.
    pub fn is_clustered(self) -> bool {
        matches!(self, Label::Cluster(_))
    }

    /// Whether the point may still be claimed by an expansion.
    pub(crate) fn is_claimable(self) -> bool {
        matches!(self, Label::Unclassified | Label::Noise)
    }

    /// Cluster id, if the point belongs to a cluster.
    pub fn cluster_id(self) -> Option<usize> {
        match self {
            Label::Cluster(id) => Some(id),
            _ => None,
        }
    }

    /// Signed code: `-1` unclassified, `0` noise, `id` for clusters.
    pub fn code(self) -> i64 {
        match self {
            Label::Unclassified => -1,
            Label::Noise => 0,
            Label::Cluster(id) => id as i64,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Unclassified => f.write_str("unclassified"),
            Label::Noise => f.write_str("noise"),
            Label::Cluster(id) => write!(f, "cluster {id}"),
        }
    }
}
