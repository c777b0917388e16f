//! The previous/active/next window.

/// The three-slot window of focus over a sequence.
///
/// Every slot is either a step or absent. A state is only ever replaced as a
/// whole; the sequencer never patches a single slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencerState<S> {
    /// The step before the active one.
    pub previous_step: Option<S>,
    /// The focused step.
    pub active_step: Option<S>,
    /// The step after the active one.
    pub next_step: Option<S>,
}

impl<S> Default for SequencerState<S> {
    fn default() -> Self {
        Self {
            previous_step: None,
            active_step: None,
            next_step: None,
        }
    }
}

impl<S> SequencerState<S> {
    pub fn new(previous_step: Option<S>, active_step: Option<S>, next_step: Option<S>) -> Self {
        Self {
            previous_step,
            active_step,
            next_step,
        }
    }

    /// The present steps in window order, skipping empty slots.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        [&self.previous_step, &self.active_step, &self.next_step]
            .into_iter()
            .flatten()
    }

    /// Map every present slot through `f`.
    pub fn map<T>(&self, mut f: impl FnMut(&S) -> T) -> SequencerState<T> {
        SequencerState {
            previous_step: self.previous_step.as_ref().map(&mut f),
            active_step: self.active_step.as_ref().map(&mut f),
            next_step: self.next_step.as_ref().map(&mut f),
        }
    }

    pub fn into_tuple(self) -> (Option<S>, Option<S>, Option<S>) {
        (self.previous_step, self.active_step, self.next_step)
    }
}
