//! Where the active step sits inside its sequence.

/// Position of the active step, as resolved through the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// The active step resolves to this index.
    At(usize),
    /// The active step is absent or its key matches no step.
    NotFound,
}

impl Location {
    pub fn index(self) -> Option<usize> {
        match self {
            Location::At(index) => Some(index),
            Location::NotFound => None,
        }
    }

    /// Classify this location against a sequence of `len` steps.
    ///
    /// `First` wins over `Last` for a single-step sequence. Interior
    /// positions have no boundary.
    pub fn boundary(self, len: usize) -> Option<Boundary> {
        match self {
            Location::NotFound => Some(Boundary::NotFound),
            Location::At(0) => Some(Boundary::First),
            Location::At(index) if index + 1 == len => Some(Boundary::Last),
            Location::At(_) => None,
        }
    }
}

/// Boundary conditions reported alongside navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// The active step is the first step.
    First,
    /// The active step is the final step.
    Last,
    /// There is no resolvable active step.
    NotFound,
}
