use super::label::Label;

/// An ordered, fixed set of positions together with their mutable labels.
///
/// Point ids are positions in the set (`0..len`). Membership never changes after
/// construction; only labels do, and only the cluster engine writes them.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    positions: Vec<Vec<f64>>,
    labels: Vec<Label>,
}

impl PointSet {
    /// Create a point set with every label `Unclassified`.
    pub fn new(positions: Vec<Vec<f64>>) -> Self {
        let labels = vec![Label::Unclassified; positions.len()];
        Self { positions, labels }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All positions, in id order.
    pub fn positions(&self) -> &[Vec<f64>] {
        &self.positions
    }

    /// Position of point `id`.
    pub fn position(&self, id: usize) -> Option<&[f64]> {
        self.positions.get(id).map(Vec::as_slice)
    }

    /// All labels, in id order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Label of point `id`.
    pub fn label(&self, id: usize) -> Option<Label> {
        self.labels.get(id).copied()
    }

    /// Return every label to `Unclassified` for a fresh run.
    pub fn reset(&mut self) {
        self.labels.fill(Label::Unclassified);
    }

    /// Iterate `(id, position, label)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[f64], Label)> + '_ {
        self.positions
            .iter()
            .zip(self.labels.iter())
            .enumerate()
            .map(|(id, (pos, &label))| (id, pos.as_slice(), label))
    }

    /// Consume the set, returning its labels.
    pub fn into_labels(self) -> Vec<Label> {
        self.labels
    }

    pub(crate) fn labels_mut(&mut self) -> &mut [Label] {
        &mut self.labels
    }
}

impl From<Vec<Vec<f64>>> for PointSet {
    fn from(positions: Vec<Vec<f64>>) -> Self {
        Self::new(positions)
    }
}
