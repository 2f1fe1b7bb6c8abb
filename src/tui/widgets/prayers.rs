use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::{DailyLog, MAX_SCORE};
use crate::prayer_times::PrayerTimings;
use crate::tui::theme;
use crate::utils::format::{format_time_12h, pad_display, progress_bar, Language};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    today: &DailyLog,
    timings: &PrayerTimings,
    lang: Language,
    focused_idx: usize,
) {
    let block = Block::default()
        .title(Span::styled(" الصلوات ", theme::olive()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(true))
        .style(theme::surface());

    let items: Vec<ListItem> = today
        .entries
        .iter()
        .enumerate()
        .map(|(i, (name, entry))| {
            let is_focused = i == focused_idx;
            let marker = if is_focused { "›" } else { " " };

            let name_style = if is_focused {
                theme::olive().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };

            let time = timings.get(name).or(entry.scheduled_time);
            let first = Line::from(vec![
                Span::styled(format!(" {} ", marker), theme::olive()),
                Span::styled(pad_display(name.arabic_name(), 8), name_style),
                Span::styled(
                    pad_display(&format!("يبدأ في {}", format_time_12h(time, lang)), 20),
                    theme::dim(),
                ),
                if entry.completed {
                    Span::styled("● مكتملة", theme::olive())
                } else {
                    Span::styled("○ تمّت الصلاة [m]", theme::dim())
                },
            ]);

            let second = if entry.completed {
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled("مستوى الخشوع ", theme::dim()),
                    Span::styled(
                        progress_bar(entry.presence_score as f64, MAX_SCORE as f64, 20),
                        theme::olive(),
                    ),
                    Span::styled(format!(" {}%", entry.presence_score), theme::bold()),
                    if is_focused {
                        Span::styled("  [←→]", theme::dim())
                    } else {
                        Span::raw("")
                    },
                ])
            } else {
                Line::from("")
            };

            ListItem::new(vec![first, second])
        })
        .collect();

    let mut lines = items;
    lines.push(ListItem::new(Line::from(Span::styled(
        "   \"رحمة بالمصلي، الحد الأدنى هو 10% دائماً\"",
        theme::dim().add_modifier(Modifier::ITALIC),
    ))));

    let list = List::new(lines).block(block);
    frame.render_widget(list, area);
}
