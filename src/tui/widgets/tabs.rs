use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::Tab;
use crate::tui::theme;

fn hints(tab: Tab) -> &'static [(&'static str, &'static str)] {
    match tab {
        Tab::Home => &[("[s]", " share  "), ("[r]", " review  ")],
        Tab::Prayers => &[("[↑↓]", " select  "), ("[m]", " done  "), ("[←→]", " presence  ")],
        Tab::Stats => &[],
        Tab::Settings => &[("[↑↓]", " select  "), ("[Enter]", " toggle  ")],
    }
}

pub fn render(frame: &mut Frame, area: Rect, active: Tab) {
    let mut tab_spans = Vec::new();
    for (i, tab) in Tab::ALL.iter().enumerate() {
        let style = if *tab == active {
            theme::olive().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            theme::dim()
        };
        tab_spans.push(Span::styled(format!("{} ", i + 1), theme::dim()));
        tab_spans.push(Span::styled(tab.label(), style));
        tab_spans.push(Span::raw("    "));
    }

    let mut hint_spans = Vec::new();
    for (key, label) in hints(active).iter().chain([("[Tab]", " next  "), ("[Esc]", " quit")].iter()) {
        hint_spans.push(Span::styled(*key, theme::olive()));
        hint_spans.push(Span::styled(*label, theme::dim()));
    }

    let paragraph = Paragraph::new(vec![Line::from(tab_spans), Line::from(hint_spans)])
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
