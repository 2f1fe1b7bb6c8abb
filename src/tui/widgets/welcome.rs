use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, quote: &str) {
    let height = 9.min(area.height);
    let popup_area = Rect {
        x: area.width / 4,
        y: area.height.saturating_sub(height) / 2,
        width: area.width / 2,
        height,
    };

    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("♥", theme::rose().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(quote.to_string(), theme::bold())),
        Line::from(""),
        Line::from(Span::styled("بسم الله", theme::olive().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled("[any key]", theme::dim())),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::olive())
        .style(theme::surface());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}
