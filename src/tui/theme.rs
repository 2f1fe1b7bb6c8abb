use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(22, 24, 17);
pub const SURFACE: Color = Color::Rgb(31, 35, 24);
pub const BORDER: Color = Color::Rgb(62, 78, 34);
pub const TEXT: Color = Color::Rgb(245, 245, 220);
pub const TEXT_DIM: Color = Color::Rgb(140, 140, 118);
pub const OLIVE_BRIGHT: Color = Color::Rgb(142, 168, 92);
pub const LIGHT_BLUE: Color = Color::Rgb(173, 216, 230);
pub const ROSE: Color = Color::Rgb(219, 112, 147);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn olive() -> Style {
    Style::default().fg(OLIVE_BRIGHT)
}

pub fn blue() -> Style {
    Style::default().fg(LIGHT_BLUE)
}

pub fn rose() -> Style {
    Style::default().fg(ROSE)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border(focused: bool) -> Style {
    if focused {
        olive()
    } else {
        Style::default().fg(BORDER)
    }
}
