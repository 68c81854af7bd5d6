use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::tui::{
    state_store::{Action, State},
    ui::components::{Component, ComponentRender},
};

struct Props {
    loading: bool,

    label: &'static str,
}

impl From<&State> for Props {
    fn from(state: &State) -> Self {
        Self { loading: state.view().loading(), label: state.view().button_label() }
    }
}

pub struct CallButton {
    /// Sending actions to the state store
    action_tx: UnboundedSender<Action>,

    props: Props,
}

impl CallButton {
    pub const fn is_disabled(&self) -> bool { self.props.loading }
}

impl Component for CallButton {
    fn new(state: &State, action_tx: UnboundedSender<Action>) -> Self {
        Self { action_tx, props: Props::from(state) }
    }

    fn move_with_state(self, state: &State) -> Self
    where
        Self: Sized,
    {
        Self { props: Props::from(state), ..self }
    }

    fn name(&self) -> &str { "Call Button" }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press || self.is_disabled() {
            return;
        }

        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ' | 'c')) {
            let _unused = self.action_tx.send(Action::CallBackend);
        }
    }
}

pub struct RenderProps {
    pub area: Rect,
}

impl ComponentRender<RenderProps> for CallButton {
    fn render(&self, frame: &mut Frame<'_>, props: RenderProps) {
        let style = if self.is_disabled() {
            Style::default().fg(Color::White).bg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD)
        };

        let button = Paragraph::new(self.props.label)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        let width = u16::try_from(self.props.label.len()).unwrap_or(u16::MAX).saturating_add(6);
        let [area, _] = *Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(width), Constraint::Min(0)].as_ref())
            .split(props.area)
        else {
            panic!("The button layout should have 2 chunks")
        };

        frame.render_widget(button, area);
    }
}
