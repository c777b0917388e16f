//! Custom assertions for sequencer windows.

use adv_core::sequencer::SequencerState;
use adv_protocol::StepDef;

/// Assert a window by step ids; `None` means the slot is empty.
#[allow(dead_code)]
#[track_caller]
pub fn assert_window(
    state: &SequencerState<StepDef>,
    previous: Option<&str>,
    active: Option<&str>,
    next: Option<&str>,
) {
    let ids = state.map(|step| step.id.clone());
    assert_eq!(
        (
            ids.previous_step.as_deref(),
            ids.active_step.as_deref(),
            ids.next_step.as_deref()
        ),
        (previous, active, next),
        "unexpected (previous, active, next) window"
    );
}
