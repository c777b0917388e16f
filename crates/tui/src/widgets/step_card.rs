//! Step card: the TUI's renderer for the advancer.
//!
//! [`StepCardRenderer`] turns the previous/active/next window into a
//! [`StepCard`], a plain view model that also carries the key bindings and the
//! action each binding triggers. [`render_step_card`] draws a card into a
//! frame.

use adv_core::advancer::{RenderProps, StepRenderer};
use adv_core::sequencer::{Boundary, StepAction};
use adv_protocol::StepDef;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::body_view::BodyView;

const PREVIOUS_KEYS: &[KeyCode] = &[KeyCode::Left, KeyCode::Char('h')];
const NEXT_KEYS: &[KeyCode] = &[KeyCode::Right, KeyCode::Char('l')];
const FIRST_KEYS: &[KeyCode] = &[KeyCode::Home, KeyCode::Char('g')];
const LAST_KEYS: &[KeyCode] = &[KeyCode::End, KeyCode::Char('G')];

/// A key binding shown in the footer, with the action it dispatches.
#[derive(Debug, Clone)]
pub struct Binding {
    pub keys: &'static [KeyCode],
    pub label: &'static str,
    pub description: &'static str,
    pub action: StepAction<StepDef>,
}

impl Binding {
    pub fn matches(&self, key_event: &KeyEvent) -> bool {
        // Shifted letters arrive as uppercase chars, so only Ctrl/Alt disqualify.
        if key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        self.keys.contains(&key_event.code)
    }
}

/// The active step as shown on the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveStep {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// Render output of [`StepCardRenderer`].
#[derive(Debug, Clone)]
pub struct StepCard {
    pub sequence_name: String,
    pub previous: Option<String>,
    pub active: Option<ActiveStep>,
    pub next: Option<String>,
    /// 1-based position of the active step and the sequence length.
    pub position: Option<(usize, usize)>,
    pub boundary: Option<Boundary>,
    pub bindings: Vec<Binding>,
}

impl StepCard {
    /// The binding triggered by `key_event`, if any.
    pub fn binding_for(&self, key_event: &KeyEvent) -> Option<&Binding> {
        self.bindings.iter().find(|binding| binding.matches(key_event))
    }

    fn position_label(&self) -> String {
        match (self.position, self.boundary) {
            (Some((index, len)), _) => format!("Step {index} of {len}"),
            (None, Some(Boundary::NotFound)) if self.previous.is_some() => {
                "End of sequence".to_string()
            }
            _ => "No active step".to_string(),
        }
    }
}

/// Builds [`StepCard`]s for one named sequence.
#[derive(Debug, Clone)]
pub struct StepCardRenderer {
    sequence_name: String,
}

impl StepCardRenderer {
    pub fn new(sequence_name: impl Into<String>) -> Self {
        Self {
            sequence_name: sequence_name.into(),
        }
    }
}

impl StepRenderer<StepDef> for StepCardRenderer {
    type Output = StepCard;

    fn render(&mut self, props: RenderProps<'_, StepDef>) -> StepCard {
        let steps = props.get_steps();
        let actions = props.get_step_actions();

        let bindings = vec![
            Binding {
                keys: PREVIOUS_KEYS,
                label: "←/h",
                description: "previous",
                action: actions.activate_previous(),
            },
            Binding {
                keys: NEXT_KEYS,
                label: "→/l",
                description: "next",
                action: actions.activate_next(),
            },
            Binding {
                keys: FIRST_KEYS,
                label: "Home/g",
                description: "first",
                action: actions.activate_first(),
            },
            Binding {
                keys: LAST_KEYS,
                label: "End/G",
                description: "last",
                action: actions.activate_last(),
            },
        ];

        StepCard {
            sequence_name: self.sequence_name.clone(),
            previous: steps
                .previous_step
                .as_ref()
                .map(|s| s.display_title().to_string()),
            active: steps.active_step.as_ref().map(|s| ActiveStep {
                id: s.id.clone(),
                title: s.display_title().to_string(),
                body: s.body.clone(),
            }),
            next: steps
                .next_step
                .as_ref()
                .map(|s| s.display_title().to_string()),
            position: props.location().index().map(|i| (i + 1, props.len())),
            boundary: props.boundary(),
            bindings,
        }
    }
}

/// Draw a step card: header, breadcrumb, body and key hints.
pub fn render_step_card(frame: &mut Frame, area: Rect, card: &StepCard, body: &BodyView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Breadcrumb
            Constraint::Min(3),    // Body
            Constraint::Length(3), // Key hints
        ])
        .split(area);

    let breadcrumb = Paragraph::new(breadcrumb_line(card)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} - {}", card.sequence_name, card.position_label())),
    );
    frame.render_widget(breadcrumb, chunks[0]);

    let (title, text) = match &card.active {
        Some(active) => (active.title.as_str(), active.body.as_str()),
        None => ("(no active step)", ""),
    };
    body.render(frame, chunks[1], title, text);

    frame.render_widget(
        Paragraph::new(hints_line(card)).block(Block::default().borders(Borders::ALL)),
        chunks[2],
    );
}

fn breadcrumb_line(card: &StepCard) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::new();

    match &card.previous {
        Some(title) => spans.push(Span::styled(format!("‹ {title}"), dim)),
        None => spans.push(Span::styled("‹ (start)", dim)),
    }
    spans.push(Span::raw("  "));

    match &card.active {
        Some(active) => spans.push(Span::styled(
            format!("● {}", active.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        None => spans.push(Span::styled("● (none)", dim)),
    }
    spans.push(Span::raw("  "));

    match &card.next {
        Some(title) => spans.push(Span::styled(format!("{title} ›"), dim)),
        None => spans.push(Span::styled("(end) ›", dim)),
    }

    Line::from(spans)
}

fn hints_line(card: &StepCard) -> Line<'static> {
    let key_style = Style::default().fg(Color::Yellow);
    let mut spans = Vec::new();

    for binding in &card.bindings {
        spans.push(Span::styled(binding.label, key_style));
        spans.push(Span::raw(format!(" {}  ", binding.description)));
    }
    spans.push(Span::styled("/", key_style));
    spans.push(Span::raw(" jump  "));
    spans.push(Span::styled("q", key_style));
    spans.push(Span::raw(" quit"));

    Line::from(spans)
}
