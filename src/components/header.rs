use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::Component;
use crate::action::Action;

pub const HEADER_BG: Color = Color::Rgb(96, 165, 250);
pub const APP_TITLE: &str = "May Pasok Ba? (v2)";
const HERO_LINES: [&str; 2] = ["WEATHER", "ALERT"];

/// Rows reserved for each hero line
const HERO_ROW_HEIGHT: u16 = 4;

/// Rows needed besides the hero art: the title line
const HEADER_OVERHEAD: u16 = 1;

pub const HEADER_HEIGHT: u16 = HEADER_OVERHEAD + HERO_ROW_HEIGHT * HERO_LINES.len() as u16;

/// Title bar plus the big two-row "WEATHER / ALERT" hero
pub struct Header;

fn hero_fill() -> Fill {
    Fill::Linear(LinearGradient::horizontal(
        ArtColor::rgb(255, 255, 255),
        ArtColor::rgb(219, 234, 254),
    ))
}

impl Component<Action> for Header {
    type Props<'a> = ();

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        frame.render_widget(Block::default().style(Style::default().bg(HEADER_BG)), area);

        let chunks = Layout::vertical([
            Constraint::Length(HEADER_OVERHEAD), // Title
            Constraint::Fill(1),                 // WEATHER
            Constraint::Fill(1),                 // ALERT
        ])
        .split(area);

        let title = Line::from(vec![Span::styled(
            format!(" {APP_TITLE}"),
            Style::default().fg(Color::Black).bold(),
        )]);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(hero_fill());
        for (line, row) in HERO_LINES.into_iter().zip(chunks.iter().skip(1)) {
            frame.render_widget(ArtBox::new(&renderer, line), *row);
        }
    }
}
