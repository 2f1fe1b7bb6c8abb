use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::PrayerName;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, focus_idx: usize) {
    let height = 16.min(area.height);
    let popup_area = Rect {
        x: area.width / 4,
        y: area.height.saturating_sub(height) / 2,
        width: area.width / 2,
        height,
    };

    frame.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("مراجعة اليوم", theme::bold())),
        Line::from(Span::styled("في أي صلاة شعرت بأكبر خشوع؟", theme::dim())),
        Line::from(""),
    ];

    for (i, name) in PrayerName::ALL.iter().enumerate() {
        let line = if i == focus_idx {
            Line::from(vec![
                Span::styled(name.arabic_name(), theme::olive().add_modifier(Modifier::BOLD)),
                Span::styled("  ♥", theme::rose()),
            ])
        } else {
            Line::from(Span::styled(name.arabic_name(), theme::bold()))
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "* هذه الخطوة إلزامية لختم مجهودك لهذا اليوم بمحبة",
        theme::dim(),
    )));
    lines.push(Line::from(Span::styled(
        "[↑↓] اختر  ·  [Enter] تأكيد  ·  [Esc] لاحقاً",
        theme::dim(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::olive())
        .style(theme::surface());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, popup_area);
}
