use crossterm::event::KeyEvent;
use hello_page_view::text;
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::tui::{
    state_store::{Action, State},
    ui::components::{Component, ComponentRender},
};

struct Props {
    greeting: String,
}

impl From<&State> for Props {
    fn from(state: &State) -> Self { Self { greeting: state.view().greeting().to_string() } }
}

/// Greeting heading and the line below it.
pub struct Banner {
    props: Props,
}

impl Banner {
    fn paragraph(&self) -> Paragraph<'_> {
        let heading = Line::from(vec![
            Span::from(self.props.greeting.as_str()).bold(),
            Span::from(" "),
            Span::from(text::WAVE),
        ]);
        let description = Line::from(text::DESCRIPTION).gray();

        Paragraph::new(Text::from(vec![heading, Line::default(), description]))
            .wrap(Wrap { trim: true })
    }

    /// Rows needed to draw the banner `width` columns wide.
    pub fn height(&self, width: u16) -> u16 {
        u16::try_from(self.paragraph().line_count(width.max(1))).unwrap_or(u16::MAX)
    }
}

impl Component for Banner {
    fn new(state: &State, _action_tx: UnboundedSender<Action>) -> Self {
        Self { props: Props::from(state) }
    }

    fn move_with_state(self, state: &State) -> Self
    where
        Self: Sized,
    {
        Self { props: Props::from(state) }
    }

    fn name(&self) -> &str { "Banner" }

    fn handle_key_event(&mut self, _key: KeyEvent) {}
}

pub struct RenderProps {
    pub area: Rect,
}

impl ComponentRender<RenderProps> for Banner {
    fn render(&self, frame: &mut Frame<'_>, props: RenderProps) {
        frame.render_widget(self.paragraph(), props.area);
    }
}
