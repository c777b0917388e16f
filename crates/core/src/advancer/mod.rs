//! Render injection around a [`StepSequencer`].
//!
//! An [`Advancer`] owns a sequencer and a caller-supplied [`StepRenderer`].
//! The renderer runs once on [`mount`](Advancer::mount) and again,
//! synchronously, after every navigation. Its output is kept as the current
//! visual output; the advancer never looks inside it.

use crate::sequencer::{
    Boundary, Location, SequencerState, StepAction, StepActions, StepSelector, StepSequencer,
};
use tracing::trace;

/// What a renderer is given: a read accessor and the mutator bundle.
pub struct RenderProps<'a, S> {
    state: &'a SequencerState<S>,
    location: Location,
    len: usize,
}

impl<'a, S> RenderProps<'a, S> {
    /// The current previous/active/next window.
    pub fn get_steps(&self) -> &'a SequencerState<S> {
        self.state
    }

    /// Actions the output may carry and hand back through `dispatch`.
    pub fn get_step_actions(&self) -> StepActions<S> {
        StepActions::default()
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn boundary(&self) -> Option<Boundary> {
        self.location.boundary(self.len)
    }

    /// Number of steps in the sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Turns the current window into presentable output.
pub trait StepRenderer<S> {
    type Output;

    fn render(&mut self, props: RenderProps<'_, S>) -> Self::Output;
}

impl<S, O, F> StepRenderer<S> for F
where
    F: FnMut(RenderProps<'_, S>) -> O,
{
    type Output = O;

    fn render(&mut self, props: RenderProps<'_, S>) -> O {
        self(props)
    }
}

/// A sequencer plus the renderer that presents it.
pub struct Advancer<S, Sel, R>
where
    R: StepRenderer<S>,
{
    sequencer: StepSequencer<S, Sel>,
    renderer: R,
    output: Option<R::Output>,
    renders: usize,
}

impl<S, Sel, R> Advancer<S, Sel, R>
where
    S: Clone,
    Sel: StepSelector<S>,
    R: StepRenderer<S>,
{
    /// Wrap a sequencer. Nothing is rendered until [`mount`](Self::mount).
    pub fn new(sequencer: StepSequencer<S, Sel>, renderer: R) -> Self {
        Self {
            sequencer,
            renderer,
            output: None,
            renders: 0,
        }
    }

    /// Render the initial state.
    pub fn mount(&mut self) -> &R::Output {
        self.render()
    }

    /// Output of the most recent render, `None` before mounting.
    pub fn output(&self) -> Option<&R::Output> {
        self.output.as_ref()
    }

    /// Number of times the renderer has run.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn get_state(&self) -> &SequencerState<S> {
        self.sequencer.get_state()
    }

    pub fn sequencer(&self) -> &StepSequencer<S, Sel> {
        &self.sequencer
    }

    pub fn activate_first(&mut self) -> &R::Output {
        self.sequencer.activate_first();
        self.render()
    }

    pub fn activate_next(&mut self) -> &R::Output {
        self.sequencer.activate_next();
        self.render()
    }

    pub fn activate_previous(&mut self) -> &R::Output {
        self.sequencer.activate_previous();
        self.render()
    }

    pub fn activate_last(&mut self) -> &R::Output {
        self.sequencer.activate_last();
        self.render()
    }

    pub fn activate_matching<P>(&mut self, predicate: P) -> &R::Output
    where
        P: Fn(&S) -> bool,
    {
        self.sequencer.activate_matching(predicate);
        self.render()
    }

    /// Apply an action value and re-render.
    pub fn dispatch(&mut self, action: &StepAction<S>) -> &R::Output {
        self.sequencer.dispatch(action);
        self.render()
    }

    fn render(&mut self) -> &R::Output {
        let props = RenderProps {
            state: self.sequencer.get_state(),
            location: self.sequencer.location(),
            len: self.sequencer.steps().len(),
        };
        let output = self.renderer.render(props);
        self.renders += 1;
        trace!(renders = self.renders, "advancer rendered");
        self.output.insert(output)
    }
}
