use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::journal::{daily_average, day_state};
use crate::models::{DailyLog, DayState};
use crate::tui::theme;
use crate::utils::format::{format_percent, progress_bar};

pub fn render(frame: &mut Frame, area: Rect, today: &DailyLog, notice: Option<&str>) {
    let average = daily_average(today);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4), // big percentage
            Constraint::Length(2), // bar
            Constraint::Length(3), // quote + share
            Constraint::Length(3), // prayer dots
            Constraint::Min(0),    // review prompt / notice
        ])
        .split(inner);

    let percent = format_percent(average);
    let [big_area] = Layout::horizontal([Constraint::Length(percent.len() as u16 * 8)])
        .flex(Flex::Center)
        .areas(rows[1]);
    let big = BigText::builder()
        .pixel_size(PixelSize::HalfHeight)
        .style(theme::olive().add_modifier(Modifier::BOLD))
        .lines(vec![Line::from(percent)])
        .build();
    frame.render_widget(big, big_area);

    let bar = Paragraph::new(vec![
        Line::from(Span::styled(progress_bar(average, 100.0, 30), theme::olive())),
        Line::from(Span::styled("مستوى الخشوع اليوم", theme::dim())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(bar, rows[2]);

    let quote = Paragraph::new(vec![
        Line::from(Span::styled(
            "\"اليوم هو محاولة لخشوع القلب\"",
            theme::dim().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[s] ", theme::olive()),
            Span::styled("شارك رحلتك", theme::olive().add_modifier(Modifier::BOLD)),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(quote, rows[3]);

    let mut dots = Vec::new();
    let mut names = Vec::new();
    for (name, entry) in today.entries.iter() {
        let (dot, style) = if entry.completed {
            ("●", theme::olive().add_modifier(Modifier::BOLD))
        } else {
            ("○", theme::dim())
        };
        dots.push(Span::styled(format!("   {}    ", dot), style));
        names.push(Span::styled(format!(" {} ", name.arabic_name()), theme::dim()));
    }
    let dots = Paragraph::new(vec![Line::from(dots), Line::from(names)]).alignment(Alignment::Center);
    frame.render_widget(dots, rows[4]);

    let mut footer = Vec::new();
    match day_state(today) {
        DayState::AllDone => {
            footer.push(Line::from(""));
            footer.push(Line::from(vec![
                Span::styled("[r] ", theme::olive()),
                Span::styled(
                    "إغلاق اليوم ومراجعة الخشوع",
                    theme::bold().add_modifier(Modifier::SLOW_BLINK),
                ),
            ]));
        }
        DayState::Reviewed => {
            if let Some(best) = today.best_prayer {
                footer.push(Line::from(""));
                footer.push(Line::from(vec![
                    Span::styled("♥ ", theme::rose()),
                    Span::styled(
                        format!("أكثر صلاة خشوعاً اليوم: {}", best.arabic_name()),
                        theme::dim(),
                    ),
                ]));
            }
        }
        DayState::InProgress => {}
    }
    if let Some(notice) = notice {
        footer.push(Line::from(""));
        footer.push(Line::from(Span::styled(notice.to_string(), theme::blue())));
    }
    frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), rows[5]);
}
