use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph},
};

use super::Component;
use super::header::HEADER_BG;
use crate::action::Action;
use crate::advisory::{AdvisoryState, RainSeverity};
use crate::state::WeatherSample;

pub const CLOUD_ICON: &str = "\u{2601}";
pub const WIND_ICON: &str = "\u{1f32c}";
pub const RAIN_ICON: &str = "\u{1f327}";

const WIND_BG: Color = Color::Rgb(156, 163, 175);
const RAIN_BG: Color = Color::Rgb(59, 130, 246);
const ADVISORY_BG: Color = Color::Rgb(254, 215, 170);
const MERON_BG: Color = Color::Rgb(74, 222, 128);
const WALA_BG: Color = Color::Rgb(248, 113, 113);

/// Populated view: conditions, advisory banner and the final verdict
pub struct WeatherPanel;

pub struct WeatherPanelProps<'a> {
    pub sample: &'a WeatherSample,
    pub advisory: &'a AdvisoryState,
}

fn severity_bg(rain: RainSeverity) -> Option<Color> {
    match rain {
        RainSeverity::None => None,
        RainSeverity::Yellow => Some(Color::Rgb(250, 204, 21)),
        RainSeverity::Orange => Some(Color::Rgb(251, 146, 60)),
        RainSeverity::Red => Some(Color::Rgb(248, 113, 113)),
    }
}

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Temperature + place
            Constraint::Length(3), // Wind | Rain
            Constraint::Length(4), // Advisory banner
            Constraint::Min(3),    // Verdict
        ])
        .split(area);

        render_conditions(frame, chunks[0], props.sample);
        render_measurements(frame, chunks[1], props.sample);
        render_advisory(frame, chunks[2], props.advisory);
        render_verdict(frame, chunks[3], props.advisory);
    }
}

fn render_conditions(frame: &mut Frame, area: Rect, sample: &WeatherSample) {
    frame.render_widget(Block::default().style(Style::default().bg(HEADER_BG)), area);
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let white = Style::default().fg(Color::White).bold();
    let text = Text::from(vec![
        Line::from(Span::styled(sample.temperature_label(), white)),
        Line::from(Span::styled(sample.location_name.to_uppercase(), white)),
    ]);
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        halves[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(CLOUD_ICON, white)))
            .alignment(Alignment::Center),
        halves[1],
    );
}

fn render_measurements(frame: &mut Frame, area: Rect, sample: &WeatherSample) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let title = Style::default().fg(Color::White).bold();
    let value = Style::default().fg(Color::White);

    let wind = Text::from(vec![
        Line::from(Span::styled(" WIND", title)),
        Line::from(Span::styled(format!(" {WIND_ICON} {}", sample.wind_label()), value)),
    ]);
    frame.render_widget(
        Paragraph::new(wind).style(Style::default().bg(WIND_BG)),
        halves[0],
    );

    let rain = Text::from(vec![
        Line::from(Span::styled(" RAIN", title)),
        Line::from(Span::styled(format!(" {RAIN_ICON} {}", sample.rain_label()), value)),
    ]);
    frame.render_widget(
        Paragraph::new(rain).style(Style::default().bg(RAIN_BG)),
        halves[1],
    );
}

fn render_advisory(frame: &mut Frame, area: Rect, advisory: &AdvisoryState) {
    let dark = Style::default().fg(Color::Black);

    let lines = if advisory.has_warning() {
        let tag_style = match severity_bg(advisory.rain) {
            Some(bg) => Style::default().fg(Color::White).bg(bg),
            None => Style::default().fg(Color::White).bg(Color::DarkGray),
        };
        vec![
            Line::from(Span::styled("SIGNAL #1", dark.bold())),
            Line::default(),
            Line::from(vec![
                Span::styled(format!(" {}", advisory.rain.tag().to_uppercase()), tag_style.bold()),
                Span::styled(" warning | Lumikas ", tag_style),
            ]),
        ]
    } else {
        vec![
            Line::default(),
            Line::from(Span::styled("No Tropical Cyclone Warning", dark)),
        ]
    };

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(ADVISORY_BG)),
        area,
    );
}

fn render_verdict(frame: &mut Frame, area: Rect, advisory: &AdvisoryState) {
    let bg = if advisory.may_pasok { MERON_BG } else { WALA_BG };
    frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

    let white = Style::default().fg(Color::White).bold();
    let text = Text::from(vec![
        Line::from(Span::styled("May Pasok Ba?", white)),
        Line::default(),
        Line::from(Span::styled(advisory.verdict().to_uppercase(), white)),
    ]);

    // Vertically centre the three lines in the remaining space
    let top = area.height.saturating_sub(3) / 2;
    let inner = Rect {
        y: area.y + top,
        height: area.height.saturating_sub(top),
        ..area
    };
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}
