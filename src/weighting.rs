use std::fmt;

/// The scalar type stored on the arcs of weighted graphs.
pub type Weight = f64;

/// Whether the arcs of a graph carry weights.
///
/// Fixed when a graph is constructed.  Every weighted operation on an
/// unweighted graph fails, and vice versa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weighting {
    Weighted,
    Unweighted,
}

impl Weighting {
    pub fn is_weighted(self) -> bool {
        self == Weighting::Weighted
    }

    pub fn opposite(self) -> Self {
        match self {
            Weighting::Weighted => Weighting::Unweighted,
            Weighting::Unweighted => Weighting::Weighted,
        }
    }

    /// The weighting implied by an optional weight argument.
    pub(crate) fn of(weight: Option<Weight>) -> Self {
        if weight.is_some() {
            Weighting::Weighted
        } else {
            Weighting::Unweighted
        }
    }
}

/// Whether two stored weights count as equal when comparing the directions
/// of an edge.  Unlike `==`, a NaN weight equals another NaN, so an edge
/// created with NaN can still be updated.
pub(crate) fn same_weight(a: Option<Weight>, b: Option<Weight>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b || (a.is_nan() && b.is_nan()),
        (a, b) => a.is_none() && b.is_none(),
    }
}

impl From<bool> for Weighting {
    fn from(is_weighted: bool) -> Self {
        if is_weighted {
            Weighting::Weighted
        } else {
            Weighting::Unweighted
        }
    }
}

impl fmt::Display for Weighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Weighting::Weighted => "weighted",
            Weighting::Unweighted => "unweighted",
        })
    }
}
