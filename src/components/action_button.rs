use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;

use super::Component;
use crate::action::Action;

pub const BUTTON_BG: Color = Color::Rgb(107, 114, 128);

/// Stateless button: shows a label, forwards activation to `on_activate`
#[derive(Default)]
pub struct ActionButton;

pub struct ActionButtonProps<'a> {
    pub icon: &'a str,
    pub label: &'a str,
    /// First key is shown as the hint
    pub hotkeys: &'a [KeyCode],
    pub is_focused: bool,
    pub on_activate: fn() -> Action,
}

fn key_hint(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}

impl ActionButton {
    /// Display width including padding
    pub fn width(props: &ActionButtonProps<'_>) -> u16 {
        Self::line(props).width() as u16
    }

    fn line<'a>(props: &ActionButtonProps<'a>) -> Line<'a> {
        let base = Style::default().fg(Color::White).bg(BUTTON_BG);
        let mut spans = vec![Span::styled(format!(" {} {}", props.icon, props.label), base)];
        if let Some(code) = props.hotkeys.first() {
            spans.push(Span::styled(
                format!(" [{}]", key_hint(code)),
                base.fg(Color::Cyan).bold(),
            ));
        }
        spans.push(Span::styled(" ", base));
        Line::from(spans)
    }
}

impl Component<Action> for ActionButton {
    type Props<'a> = ActionButtonProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) if props.hotkeys.contains(&key.code) => Some((props.on_activate)()),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        frame.render_widget(Paragraph::new(Self::line(&props)), area);
    }
}
