use ratatui::style::{Color, Modifier, Style};

use crate::scene::Rgb;

pub struct Theme;

impl Theme {
    pub fn status_bar() -> Style {
        Style::default().fg(Color::Reset).bg(Color::DarkGray)
    }

    pub fn text() -> Style {
        Style::default()
    }

    pub fn label() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn notice() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn sum() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
    }

    /// Style carrying a point's palette color.
    pub fn node(color: Rgb) -> Style {
        Style::default().fg(Self::node_color(color))
    }

    pub fn node_color(color: Rgb) -> Color {
        let Rgb(r, g, b) = color;
        Color::Rgb(r, g, b)
    }
}
