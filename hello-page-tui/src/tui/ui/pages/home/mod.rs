mod components;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::*,
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc;

use self::components::{
    banner, banner::Banner, call_button, call_button::CallButton, notices, notices::Notices,
};
use crate::tui::{
    state_store::{Action, State},
    ui::components::{Component, ComponentRender},
};

struct Props {
    backend: String,
}

impl From<&State> for Props {
    fn from(state: &State) -> Self {
        Self {
            backend: state
                .base_url()
                .map_or_else(|| "not configured".to_string(), ToString::to_string),
        }
    }
}

pub struct HomePage {
    action_tx: mpsc::UnboundedSender<Action>,

    props: Props,

    banner: Banner,

    call_button: CallButton,

    notices: Notices,
}

impl Component for HomePage {
    fn new(state: &State, action_tx: mpsc::UnboundedSender<Action>) -> Self
    where
        Self: Sized,
    {
        Self {
            action_tx: action_tx.clone(),
            props: Props::from(state),
            banner: Banner::new(state, action_tx.clone()),
            call_button: CallButton::new(state, action_tx.clone()),
            notices: Notices::new(state, action_tx),
        }
        .move_with_state(state)
    }

    fn move_with_state(self, state: &State) -> Self
    where
        Self: Sized,
    {
        Self {
            props: Props::from(state),
            // propagate the update to the child components
            banner: self.banner.move_with_state(state),
            call_button: self.call_button.move_with_state(state),
            notices: self.notices.move_with_state(state),
            ..self
        }
    }

    fn name(&self) -> &str { "Home Page" }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                let _unused = self.action_tx.send(Action::Shutdown);
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let _unused = self.action_tx.send(Action::Shutdown);
            }
            _ => {
                self.call_button.handle_key_event(key);
            }
        }
    }
}

impl ComponentRender<()> for HomePage {
    fn render(&self, frame: &mut Frame<'_>, _props: ()) {
        // width left inside the margin
        let width = frame.area().width.saturating_sub(2);
        let [banner_area, button_area, notices_area, _, footer_area] = *Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(
                [
                    Constraint::Length(self.banner.height(width).saturating_add(1)),
                    Constraint::Length(3),
                    Constraint::Length(self.notices.height(width)),
                    Constraint::Min(0),
                    Constraint::Length(2),
                ]
                .as_ref(),
            )
            .split(frame.area())
        else {
            panic!("The main layout should have 5 chunks")
        };

        self.banner.render(frame, banner::RenderProps { area: banner_area });
        self.call_button.render(frame, call_button::RenderProps { area: button_area });
        self.notices.render(frame, notices::RenderProps { area: notices_area });

        let footer = Paragraph::new(Text::from(vec![
            Line::from(format!(
                "{} v{}  Backend: {}",
                hello_page_base::TUI_PROGRAM_NAME,
                *hello_page_base::PROJECT_SEMVER,
                self.props.backend
            ))
            .gray(),
            Line::from(vec![
                Span::from("<Enter>").cyan(),
                Span::from(" Call backend  "),
                Span::from("<q>").cyan(),
                Span::from(" Quit"),
            ]),
        ]));
        frame.render_widget(footer, footer_area);
    }
}
