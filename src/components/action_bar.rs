use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::Block,
};
use tui_dispatch::EventKind;

use super::{ActionButton, ActionButtonProps, Component};
use crate::action::Action;

const BAR_BG: Color = Color::Rgb(209, 213, 219);

/// The relocate / refresh / share controls
#[derive(Default)]
pub struct ActionBar;

pub struct ActionBarProps {
    pub is_focused: bool,
}

fn buttons(is_focused: bool) -> [ActionButtonProps<'static>; 3] {
    [
        ActionButtonProps {
            icon: "\u{1f4cd}",
            label: "Get location",
            hotkeys: &[KeyCode::Char('l')],
            is_focused,
            on_activate: || Action::LocationRequest,
        },
        ActionButtonProps {
            icon: "\u{21bb}",
            label: "Refresh",
            hotkeys: &[KeyCode::Char('r'), KeyCode::F(5)],
            is_focused,
            on_activate: || Action::Refresh,
        },
        ActionButtonProps {
            icon: "\u{2934}",
            label: "Share",
            hotkeys: &[KeyCode::Char('s')],
            is_focused,
            on_activate: || Action::ShareRequest,
        },
    ]
}

impl Component<Action> for ActionBar {
    type Props<'a> = ActionBarProps;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let mut button = ActionButton;
        let mut actions = Vec::new();
        for button_props in buttons(props.is_focused) {
            actions.extend(button.handle_event(event, button_props));
        }
        actions
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        frame.render_widget(Block::default().style(Style::default().bg(BAR_BG)), area);

        let buttons = buttons(props.is_focused);
        let widths = buttons
            .iter()
            .map(|b| Constraint::Length(ActionButton::width(b)));
        let chunks = Layout::horizontal(widths)
            .flex(Flex::Center)
            .spacing(2)
            .split(area);

        let mut button = ActionButton;
        for (button_props, chunk) in buttons.into_iter().zip(chunks.iter()) {
            button.render(frame, *chunk, button_props);
        }
    }
}
