use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::{PreferenceKey, Preferences};
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, prefs: &Preferences, focused_idx: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    let block = Block::default()
        .title(Span::styled(" الإعدادات ", theme::olive()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(true))
        .style(theme::surface());

    let items: Vec<ListItem> = PreferenceKey::ALL
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let is_focused = i == focused_idx;
            let enabled = prefs.get(*key);
            let switch = if enabled {
                Span::styled("[ ●━ ]", theme::olive().add_modifier(Modifier::BOLD))
            } else {
                Span::styled("[ ━○ ]", theme::dim())
            };
            let name_style = if is_focused {
                theme::olive().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(if is_focused { " › " } else { "   " }, theme::olive()),
                    switch,
                    Span::raw("  "),
                    Span::styled(key.label(), name_style),
                ]),
                Line::from(Span::styled(format!("           {}", key.hint()), theme::dim())),
                Line::from(""),
            ])
        })
        .collect();

    frame.render_widget(List::new(items).block(block), chunks[0]);

    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  إصدار {} - خاشع", env!("CARGO_PKG_VERSION")),
            theme::dim(),
        )),
        Line::from(Span::styled("  يتم حفظ البيانات تلقائياً", theme::dim())),
    ]);
    frame.render_widget(footer, chunks[1]);
}
