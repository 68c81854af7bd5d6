use crossterm::event::KeyEvent;
use hello_page_view::text;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::tui::{
    state_store::{Action, State},
    ui::components::{Component, ComponentRender},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
    MissingConfiguration,
}

impl Notice {
    fn text(&self) -> String {
        match self {
            Self::Success(message) => text::success_panel(message),
            Self::Error(error) => error.clone(),
            Self::MissingConfiguration => text::MISSING_BACKEND_URL_TIP.to_string(),
        }
    }

    fn paragraph(&self) -> Paragraph<'static> {
        Paragraph::new(self.text())
            .style(Style::default().fg(self.color()))
            .wrap(Wrap { trim: true })
    }

    /// Rows taken by the bordered panel when drawn `width` columns wide.
    fn height(&self, width: u16) -> u16 {
        let inner_width = width.saturating_sub(2).max(1);
        u16::try_from(self.paragraph().line_count(inner_width))
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }

    const fn color(&self) -> Color {
        match self {
            Self::Success(_) => Color::Green,
            Self::Error(_) => Color::Red,
            Self::MissingConfiguration => Color::Yellow,
        }
    }
}

struct Props {
    notices: Vec<Notice>,
}

impl From<&State> for Props {
    fn from(state: &State) -> Self {
        let view = state.view();
        let notices = [
            view.api_message()
                .filter(|message| !message.is_empty())
                .map(|message| Notice::Success(message.to_string())),
            view.error().map(|error| Notice::Error(error.to_string())),
            (!state.is_configured()).then_some(Notice::MissingConfiguration),
        ];
        Self { notices: notices.into_iter().flatten().collect() }
    }
}

/// Success, error and configuration panels, in that order.
pub struct Notices {
    props: Props,
}

impl Notices {
    /// Rows needed to draw every panel `width` columns wide.
    pub fn height(&self, width: u16) -> u16 {
        self.props.notices.iter().fold(0, |rows, notice| rows.saturating_add(notice.height(width)))
    }
}

impl Component for Notices {
    fn new(state: &State, _action_tx: UnboundedSender<Action>) -> Self {
        Self { props: Props::from(state) }
    }

    fn move_with_state(self, state: &State) -> Self
    where
        Self: Sized,
    {
        Self { props: Props::from(state) }
    }

    fn name(&self) -> &str { "Notices" }

    fn handle_key_event(&mut self, _key: KeyEvent) {}
}

pub struct RenderProps {
    pub area: Rect,
}

impl ComponentRender<RenderProps> for Notices {
    fn render(&self, frame: &mut Frame<'_>, props: RenderProps) {
        let areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                self.props.notices.iter().map(|notice| Constraint::Length(notice.height(props.area.width))),
            )
            .split(props.area);

        for (notice, area) in self.props.notices.iter().zip(areas.iter()) {
            let panel = notice.paragraph().block(
                Block::default().borders(Borders::ALL).border_style(Style::default().fg(notice.color())),
            );
            frame.render_widget(panel, *area);
        }
    }
}
