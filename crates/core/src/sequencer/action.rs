//! Navigation as values.
//!
//! A [`StepAction`] names one mutator of the sequencer so it can be handed
//! around (embedded in render output, bound to a key) and applied later with
//! `dispatch`. [`StepActions`] is the bundle given to renderers.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use adv_protocol::{Action, StepDef};

/// A shared step predicate used by "activate matching".
pub struct StepMatcher<S> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S> StepMatcher<S> {
    pub fn new<P>(predicate: P) -> Self
    where
        P: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    pub fn matches(&self, step: &S) -> bool {
        (self.predicate)(step)
    }
}

impl<S> Clone for StepMatcher<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S> fmt::Debug for StepMatcher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StepMatcher(..)")
    }
}

/// One sequencer mutator.
pub enum StepAction<S> {
    First,
    Next,
    Previous,
    Last,
    Matching(StepMatcher<S>),
}

impl<S> Clone for StepAction<S> {
    fn clone(&self) -> Self {
        match self {
            StepAction::First => StepAction::First,
            StepAction::Next => StepAction::Next,
            StepAction::Previous => StepAction::Previous,
            StepAction::Last => StepAction::Last,
            StepAction::Matching(matcher) => StepAction::Matching(matcher.clone()),
        }
    }
}

impl<S> fmt::Debug for StepAction<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepAction::First => f.write_str("First"),
            StepAction::Next => f.write_str("Next"),
            StepAction::Previous => f.write_str("Previous"),
            StepAction::Last => f.write_str("Last"),
            StepAction::Matching(matcher) => f.debug_tuple("Matching").field(matcher).finish(),
        }
    }
}

impl<S> StepAction<S> {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            StepAction::First => "activate_first",
            StepAction::Next => "activate_next",
            StepAction::Previous => "activate_previous",
            StepAction::Last => "activate_last",
            StepAction::Matching(_) => "activate_matching",
        }
    }
}

impl StepAction<StepDef> {
    /// Convert a protocol [`Action`]; `ActivateMatching` matches on step id.
    pub fn from_action(action: &Action) -> Self {
        match action {
            Action::ActivateFirst => StepAction::First,
            Action::ActivateNext => StepAction::Next,
            Action::ActivatePrevious => StepAction::Previous,
            Action::ActivateLast => StepAction::Last,
            Action::ActivateMatching { key } => {
                let key = key.clone();
                StepAction::Matching(StepMatcher::new(move |step: &StepDef| step.id == key))
            }
        }
    }
}

/// The mutator bundle passed to renderers.
///
/// Each method returns the action value; applying it is left to whoever
/// owns the sequencer.
pub struct StepActions<S> {
    _steps: PhantomData<fn(&S)>,
}

impl<S> Default for StepActions<S> {
    fn default() -> Self {
        Self {
            _steps: PhantomData,
        }
    }
}

impl<S> Clone for StepActions<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for StepActions<S> {}

impl<S> fmt::Debug for StepActions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StepActions")
    }
}

impl<S> StepActions<S> {
    pub fn activate_first(&self) -> StepAction<S> {
        StepAction::First
    }

    pub fn activate_next(&self) -> StepAction<S> {
        StepAction::Next
    }

    pub fn activate_previous(&self) -> StepAction<S> {
        StepAction::Previous
    }

    pub fn activate_last(&self) -> StepAction<S> {
        StepAction::Last
    }

    /// Build an action that activates the first step satisfying `predicate`.
    pub fn create_step_activator<P>(&self, predicate: P) -> StepAction<S>
    where
        P: Fn(&S) -> bool + Send + Sync + 'static,
    {
        StepAction::Matching(StepMatcher::new(predicate))
    }
}
