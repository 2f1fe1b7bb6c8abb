use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::journal::{overall_average, weekly_trend, LogBook};
use crate::tui::theme;
use crate::utils::format::format_percent;

/// Bars above this are drawn in the accent colour.
const HIGHLIGHT_ABOVE: f64 = 80.0;

pub fn render(frame: &mut Frame, area: Rect, logs: &LogBook, today: NaiveDate) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(6)])
        .split(area);

    let trend = weekly_trend(logs, today);
    let bars: Vec<Bar> = trend
        .iter()
        .map(|point| {
            let style = if point.value > HIGHLIGHT_ABOVE {
                theme::olive()
            } else {
                theme::blue()
            };
            Bar::default()
                .value(point.value.round() as u64)
                .text_value(format_percent(point.value))
                .label(Line::from(point.label))
                .style(style)
                .value_style(theme::bold())
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(Span::styled(" تطور الخشوع الأسبوعي ", theme::olive()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme::border(false))
                .style(theme::surface()),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(2)
        .max(100);
    frame.render_widget(chart, chunks[0]);

    let overall = overall_average(logs);
    let card = Paragraph::new(vec![
        Line::from(Span::styled("  متوسط الخشوع العام", theme::dim())),
        Line::from(vec![
            Span::styled(
                format!("  {}", format_percent(overall)),
                theme::olive().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ♥", theme::rose()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  أنت تتقدم ببطء ولكن بثبات. الاستمرارية هي المفتاح.",
            theme::dim(),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border(true))
            .style(theme::surface()),
    );
    frame.render_widget(card, chunks[1]);
}
