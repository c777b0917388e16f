//! Pure state transitions.
//!
//! Each function computes a complete new [`SequencerState`] from the
//! sequence and, where needed, the current state. Reads outside the sequence
//! yield an absent slot. An active step that cannot be resolved through the
//! selector is treated as sitting at index `len`, one past the final step.

use adv_protocol::LastStepMode;

use super::selector::{index_of, StepSelector};
use super::state::SequencerState;

/// Read `steps[index]`, or `None` when `index` falls outside the sequence.
pub fn step_at<S: Clone>(steps: &[S], index: isize) -> Option<S> {
    usize::try_from(index)
        .ok()
        .and_then(|index| steps.get(index))
        .cloned()
}

/// Resolve the position of `step`, treating absent and unknown steps as
/// index `len`.
pub fn resolve<S, Sel>(steps: &[S], selector: &Sel, step: Option<&S>) -> isize
where
    Sel: StepSelector<S> + ?Sized,
{
    let index = step
        .and_then(|step| index_of(steps, selector, step))
        .unwrap_or(steps.len());
    signed(index)
}

fn signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

/// Window around `initial_step`, or around the first step when none is given.
pub fn initial<S, Sel>(steps: &[S], selector: &Sel, initial_step: Option<S>) -> SequencerState<S>
where
    S: Clone,
    Sel: StepSelector<S> + ?Sized,
{
    let active_step = initial_step.or_else(|| steps.first().cloned());
    let index = resolve(steps, selector, active_step.as_ref());

    SequencerState::new(
        step_at(steps, index - 1),
        active_step,
        step_at(steps, index + 1),
    )
}

pub fn first<S: Clone>(steps: &[S]) -> SequencerState<S> {
    SequencerState::new(None, step_at(steps, 0), step_at(steps, 1))
}

pub fn last<S: Clone>(steps: &[S], mode: LastStepMode) -> SequencerState<S> {
    let len = signed(steps.len());
    match mode {
        LastStepMode::PastEnd => {
            SequencerState::new(step_at(steps, len - 1), step_at(steps, len), None)
        }
        LastStepMode::Final => {
            SequencerState::new(step_at(steps, len - 2), step_at(steps, len - 1), None)
        }
    }
}

pub fn next<S, Sel>(steps: &[S], selector: &Sel, current: &SequencerState<S>) -> SequencerState<S>
where
    S: Clone,
    Sel: StepSelector<S> + ?Sized,
{
    let index = resolve(steps, selector, current.active_step.as_ref());

    SequencerState::new(
        current.active_step.clone(),
        step_at(steps, index + 1),
        step_at(steps, index + 2),
    )
}

pub fn previous<S, Sel>(
    steps: &[S],
    selector: &Sel,
    current: &SequencerState<S>,
) -> SequencerState<S>
where
    S: Clone,
    Sel: StepSelector<S> + ?Sized,
{
    let index = resolve(steps, selector, current.active_step.as_ref());

    SequencerState::new(
        step_at(steps, index - 2),
        step_at(steps, index - 1),
        current.active_step.clone(),
    )
}

/// Window around the first step satisfying `predicate`.
///
/// The predicate is applied to the steps directly; the selector plays no
/// part. When nothing matches, the window sits one before the first step:
/// nothing is active and the first step is next.
pub fn matching<S, P>(steps: &[S], predicate: P) -> SequencerState<S>
where
    S: Clone,
    P: Fn(&S) -> bool,
{
    let found = steps.iter().position(predicate);
    let index = found.map_or(-1, signed);

    SequencerState::new(
        step_at(steps, index - 1),
        step_at(steps, index),
        step_at(steps, index + 1),
    )
}
