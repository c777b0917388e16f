//! The step sequencer.
//!
//! [`StepSequencer`] tracks a previous/active/next window over a fixed,
//! caller-owned sequence of steps. Navigation never fails: reads outside the
//! sequence produce absent slots. The current position is re-derived from the
//! active step's key on every move, never cached.
//!
//! ```
//! use adv_core::sequencer::StepSequencer;
//!
//! let steps = vec!["intro", "setup", "done"];
//! let mut sequencer = StepSequencer::new(steps, |s: &&str| s.to_string(), None);
//!
//! sequencer.activate_next();
//! assert_eq!(sequencer.get_state().active_step, Some("setup"));
//! ```

pub mod action;
pub mod location;
pub mod selector;
pub mod state;
pub mod transition;

pub use action::{StepAction, StepActions, StepMatcher};
pub use location::{Boundary, Location};
pub use selector::{by_id, StepSelector};
pub use state::SequencerState;

use std::sync::Arc;

use adv_protocol::{GlobalConfig, LastStepMode, SequenceDef, StepDef, StepSnapshot};
use tracing::{debug, warn};

/// Sequencer over [`StepDef`]s keyed by id, as built from a [`SequenceDef`].
pub type DefSequencer = StepSequencer<StepDef, fn(&StepDef) -> String>;

/// Tracks the active step of a sequence and moves it around.
pub struct StepSequencer<S, Sel> {
    steps: Arc<[S]>,
    selector: Sel,
    state: SequencerState<S>,
    last_step: LastStepMode,
}

impl<S, Sel> StepSequencer<S, Sel>
where
    S: Clone,
    Sel: StepSelector<S>,
{
    /// Create a sequencer whose active step is `initial_step`, or the first
    /// step when `None`.
    ///
    /// An initial step whose key matches nothing is still made active; its
    /// neighbours are computed as if it sat one past the final step.
    pub fn new(steps: impl Into<Arc<[S]>>, selector: Sel, initial_step: Option<S>) -> Self {
        let steps = steps.into();
        let state = transition::initial(&steps, &selector, initial_step);

        let sequencer = Self {
            steps,
            selector,
            state,
            last_step: LastStepMode::default(),
        };
        if sequencer.state.active_step.is_some() && sequencer.location() == Location::NotFound {
            warn!(len = sequencer.steps.len(), "initial step is not part of the sequence");
        }
        sequencer
    }

    /// Choose how [`activate_last`](Self::activate_last) positions the window.
    pub fn with_last_step_mode(mut self, mode: LastStepMode) -> Self {
        self.last_step = mode;
        self
    }

    pub fn last_step_mode(&self) -> LastStepMode {
        self.last_step
    }

    /// The sequence this sequencer reads from.
    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    /// The current previous/active/next window.
    pub fn get_state(&self) -> &SequencerState<S> {
        &self.state
    }

    pub fn activate_first(&mut self) {
        let state = transition::first(&self.steps);
        self.replace("activate_first", state);
    }

    /// Move to the end of the sequence according to the last-step mode.
    pub fn activate_last(&mut self) {
        let state = transition::last(&self.steps, self.last_step);
        self.replace("activate_last", state);
    }

    pub fn activate_next(&mut self) {
        let state = transition::next(&self.steps, &self.selector, &self.state);
        self.replace("activate_next", state);
    }

    pub fn activate_previous(&mut self) {
        let state = transition::previous(&self.steps, &self.selector, &self.state);
        self.replace("activate_previous", state);
    }

    /// Activate the first step for which `predicate` holds.
    ///
    /// Matching is done on the steps themselves, not through the selector.
    pub fn activate_matching<P>(&mut self, predicate: P)
    where
        P: Fn(&S) -> bool,
    {
        let state = transition::matching(&self.steps, predicate);
        self.replace("activate_matching", state);
    }

    /// Apply an action value.
    pub fn dispatch(&mut self, action: &StepAction<S>) {
        match action {
            StepAction::First => self.activate_first(),
            StepAction::Next => self.activate_next(),
            StepAction::Previous => self.activate_previous(),
            StepAction::Last => self.activate_last(),
            StepAction::Matching(matcher) => self.activate_matching(|step| matcher.matches(step)),
        }
    }

    /// Where the active step resolves to.
    pub fn location(&self) -> Location {
        self.state
            .active_step
            .as_ref()
            .and_then(|step| selector::index_of(&self.steps, &self.selector, step))
            .map_or(Location::NotFound, Location::At)
    }

    /// Boundary the active step sits on, if any.
    pub fn boundary(&self) -> Option<Boundary> {
        self.location().boundary(self.steps.len())
    }

    fn replace(&mut self, operation: &'static str, state: SequencerState<S>) {
        self.state = state;
        debug!(operation, location = ?self.location(), len = self.steps.len(), "step window moved");
    }
}

impl DefSequencer {
    /// Build a sequencer for a loaded sequence definition.
    ///
    /// The definition's `initial-step` selects the starting step and the
    /// global config selects the last-step mode.
    pub fn from_definition(sequence: &SequenceDef, config: &GlobalConfig) -> Self {
        let by_id: fn(&StepDef) -> String = by_id;
        let initial = sequence.initial().cloned();

        StepSequencer::new(sequence.steps.clone(), by_id, initial)
            .with_last_step_mode(config.last_step)
    }

    /// The current window reduced to step ids.
    pub fn snapshot(&self) -> StepSnapshot {
        let ids = self.state.map(|step| step.id.clone());
        StepSnapshot {
            previous: ids.previous_step,
            active: ids.active_step,
            next: ids.next_step,
        }
    }
}
