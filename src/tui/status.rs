use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::numeric::AngleUnit;
use crate::tui::theme::Theme;

pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    board_name: Option<&str>,
    angle_unit: AngleUnit,
    live_points: usize,
    palette_size: usize,
) {
    let version = env!("CARGO_PKG_VERSION");
    let left_text = match board_name {
        Some(name) => format!(" Argand v{} | {}", version, name),
        None => format!(" Argand v{}", version),
    };
    let right_text = format!(
        "points: {}/{} | angle: {} ",
        live_points,
        palette_size,
        angle_unit.label()
    );

    let left = Span::styled(left_text.clone(), Theme::status_bar());
    let right = Span::styled(right_text.clone(), Theme::status_bar());

    let width = area.width as usize;
    let padding = width.saturating_sub(left_text.len() + right_text.len());

    let line = Line::from(vec![
        left,
        Span::styled(" ".repeat(padding), Theme::status_bar()),
        right,
    ]);

    frame.render_widget(line, area);
}
