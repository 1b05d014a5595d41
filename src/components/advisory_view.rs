use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::header::HEADER_HEIGHT;
use super::{ActionBar, ActionBarProps, Component, Header, WeatherPanel, WeatherPanelProps};
use crate::action::Action;
use crate::state::{AppState, WeatherSample};

pub const FOOTER_TEXT: &str = "May Pasok Ba - 2024";
pub const LOADING_TEXT: &str = "Loading...";

const FOOTER_BG: Color = Color::Rgb(156, 163, 175);

/// Props for AdvisoryView - read-only view of state
pub struct AdvisoryViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole screen
#[derive(Default)]
pub struct AdvisoryView;

enum Body<'a> {
    Loading,
    Populated(&'a WeatherSample),
    Idle,
}

impl<'a> Body<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.weather {
            _ if state.is_loading => Body::Loading,
            Some(sample) => Body::Populated(sample),
            None => Body::Idle,
        }
    }
}

impl Component<Action> for AdvisoryView {
    type Props<'a> = AdvisoryViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return vec![Action::Quit];
            }
        }

        let mut bar = ActionBar;
        bar.handle_event(event, ActionBarProps { is_focused: true })
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: AdvisoryViewProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT), // Title + hero
            Constraint::Min(1),                // Body
            Constraint::Length(1),             // Action bar
            Constraint::Length(1),             // Footer
            Constraint::Length(1),             // Help bar
        ])
        .split(area);

        let state = props.state;

        let mut header = Header;
        header.render(frame, chunks[0], ());

        match Body::from_state(state) {
            Body::Loading => {
                let loading = Paragraph::new(Line::from(LOADING_TEXT))
                    .alignment(Alignment::Center);
                let middle = Layout::vertical([Constraint::Length(1)])
                    .flex(Flex::Center)
                    .split(chunks[1]);
                frame.render_widget(loading, middle[0]);
            }
            Body::Populated(sample) => {
                let mut panel = WeatherPanel;
                panel.render(
                    frame,
                    chunks[1],
                    WeatherPanelProps {
                        sample,
                        advisory: &state.advisory,
                    },
                );
            }
            Body::Idle => {}
        }

        let mut bar = ActionBar;
        bar.render(
            frame,
            chunks[2],
            ActionBarProps {
                is_focused: props.is_focused,
            },
        );

        frame.render_widget(
            Paragraph::new(Line::from(FOOTER_TEXT))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Black).bg(FOOTER_BG)),
            chunks[3],
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[4],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[StatusBarHint::new("q", "quit")]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
