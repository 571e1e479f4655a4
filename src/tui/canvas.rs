use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::numeric::AngleUnit;
use crate::scene::{PlanePoint, PlaneTransform, Rgb, SumState};
use crate::tui::theme::Theme;

/// Logical plane size in canvas units; the transform origin sits at the
/// center.
pub const PLANE_SIZE: f64 = 280.0;

/// Marker radius in canvas units.
const POINT_RADIUS: f64 = 2.5;
/// Dash pattern for helper strokes, in canvas units.
const DASH_ON: f64 = 4.0;
const DASH_OFF: f64 = 3.0;

/// Everything the plane widget needs for one frame.
pub struct PlaneView<'a> {
    /// Live positions with marker colors, in presentation order.
    pub entries: &'a [(PlanePoint, Rgb)],
    pub sum: &'a SumState,
    pub transform: &'a PlaneTransform,
    /// Presentation index of the active point, if any.
    pub active: Option<usize>,
    pub show_details: bool,
    pub angle_unit: AngleUnit,
}

/// Convert a terminal cell inside the plane widget to plane coordinates.
/// Cells on the border (or outside the widget) map to nothing.
pub fn cell_to_plane(area: Rect, column: u16, row: u16) -> Option<PlanePoint> {
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    if inner.width == 0 || inner.height == 0 {
        return None;
    }
    if column < inner.x
        || column >= inner.x + inner.width
        || row < inner.y
        || row >= inner.y + inner.height
    {
        return None;
    }

    let fx = (column - inner.x) as f64 + 0.5;
    let fy = (row - inner.y) as f64 + 0.5;
    Some(PlanePoint::new(
        fx / inner.width as f64 * PLANE_SIZE,
        (1.0 - fy / inner.height as f64) * PLANE_SIZE,
    ))
}

/// Render the Argand diagram into the given area.
pub fn render_plane(frame: &mut Frame, area: Rect, view: &PlaneView) {
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border_focused())
                .title(" Argand plane "),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, PLANE_SIZE])
        .y_bounds([0.0, PLANE_SIZE])
        .paint(|ctx| paint(ctx, view));
    frame.render_widget(canvas, area);
}

fn paint(ctx: &mut Context, view: &PlaneView) {
    draw_grid(ctx, view.transform);
    draw_axes(ctx, view.transform);

    for (index, (position, color)) in view.entries.iter().enumerate() {
        draw_vector(ctx, view.transform.origin, *position, Theme::node_color(*color));
        draw_marker(ctx, *position, Theme::node_color(*color), view.active == Some(index));
    }

    draw_sum(ctx, view);

    if view.show_details {
        if let Some(index) = view.active {
            if let Some((position, color)) = view.entries.get(index) {
                draw_angle_arc(ctx, view, *position, *color);
                let z = view.transform.to_complex(*position);
                ctx.print(position.x, position.y + 8.0, z.to_string());
            }
        }
    }
}

fn draw_axes(ctx: &mut Context, transform: &PlaneTransform) {
    let origin = transform.origin;

    ctx.draw(&CanvasLine {
        x1: 0.0,
        y1: origin.y,
        x2: PLANE_SIZE,
        y2: origin.y,
        color: Color::White,
    });
    ctx.draw(&CanvasLine {
        x1: origin.x,
        y1: 0.0,
        x2: origin.x,
        y2: PLANE_SIZE,
        color: Color::White,
    });

    // Arrowheads at the positive ends.
    for dy in [-3.0, 3.0] {
        ctx.draw(&CanvasLine {
            x1: PLANE_SIZE,
            y1: origin.y,
            x2: PLANE_SIZE - 6.0,
            y2: origin.y + dy,
            color: Color::White,
        });
    }
    for dx in [-3.0, 3.0] {
        ctx.draw(&CanvasLine {
            x1: origin.x,
            y1: PLANE_SIZE,
            x2: origin.x + dx,
            y2: PLANE_SIZE - 6.0,
            color: Color::White,
        });
    }

    ctx.print(PLANE_SIZE - 10.0, origin.y + 8.0, "Re");
    ctx.print(origin.x + 6.0, PLANE_SIZE - 4.0, "Im");
}

fn draw_grid(ctx: &mut Context, transform: &PlaneTransform) {
    let origin = transform.origin;
    let scale = transform.scale;
    if scale <= 0.0 {
        return;
    }

    let mut unit = 1i32;
    loop {
        let offset = unit as f64 * scale;
        let right = origin.x + offset;
        let left = origin.x - offset;
        let up = origin.y + offset;
        let down = origin.y - offset;
        if right > PLANE_SIZE && up > PLANE_SIZE && left < 0.0 && down < 0.0 {
            break;
        }

        for x in [right, left] {
            if (0.0..=PLANE_SIZE).contains(&x) {
                draw_dashed(
                    ctx,
                    PlanePoint::new(x, 0.0),
                    PlanePoint::new(x, PLANE_SIZE),
                    Color::DarkGray,
                );
                // Tick and label on the real axis.
                ctx.draw(&CanvasLine {
                    x1: x,
                    y1: origin.y - 2.0,
                    x2: x,
                    y2: origin.y + 2.0,
                    color: Color::White,
                });
            }
        }
        if (0.0..=PLANE_SIZE).contains(&right) {
            ctx.print(right, origin.y - 8.0, format!("{}", unit));
        }
        if (0.0..=PLANE_SIZE).contains(&left) {
            ctx.print(left, origin.y - 8.0, format!("{}", -unit));
        }

        for y in [up, down] {
            if (0.0..=PLANE_SIZE).contains(&y) {
                draw_dashed(
                    ctx,
                    PlanePoint::new(0.0, y),
                    PlanePoint::new(PLANE_SIZE, y),
                    Color::DarkGray,
                );
                ctx.draw(&CanvasLine {
                    x1: origin.x - 2.0,
                    y1: y,
                    x2: origin.x + 2.0,
                    y2: y,
                    color: Color::White,
                });
            }
        }
        if (0.0..=PLANE_SIZE).contains(&up) {
            ctx.print(origin.x + 5.0, up, format!("{}", unit));
        }
        if (0.0..=PLANE_SIZE).contains(&down) {
            ctx.print(origin.x + 5.0, down, format!("{}", -unit));
        }

        unit += 1;
    }
}

fn draw_vector(ctx: &mut Context, from: PlanePoint, to: PlanePoint, color: Color) {
    ctx.draw(&CanvasLine {
        x1: from.x,
        y1: from.y,
        x2: to.x,
        y2: to.y,
        color,
    });
}

fn draw_marker(ctx: &mut Context, position: PlanePoint, color: Color, active: bool) {
    for radius in [POINT_RADIUS, POINT_RADIUS * 0.5] {
        ctx.draw(&Circle {
            x: position.x,
            y: position.y,
            radius,
            color,
        });
    }
    if active {
        ctx.draw(&Circle {
            x: position.x,
            y: position.y,
            radius: POINT_RADIUS * 2.0,
            color,
        });
    }
}

fn draw_sum(ctx: &mut Context, view: &PlaneView) {
    let Some(marker) = view.sum.marker() else {
        return;
    };

    draw_vector(ctx, view.transform.origin, marker, Color::White);

    if view.show_details {
        if let Some(aux) = view.sum.aux_vectors() {
            for vector in aux {
                draw_dashed(ctx, vector.from, vector.to, Color::White);
            }
        }
    }

    for radius in [POINT_RADIUS * 1.2, POINT_RADIUS * 0.6] {
        ctx.draw(&Circle {
            x: marker.x,
            y: marker.y,
            radius,
            color: Color::White,
        });
    }
}

fn draw_angle_arc(ctx: &mut Context, view: &PlaneView, position: PlanePoint, color: Rgb) {
    let z = view.transform.to_complex(position);
    let theta = z.theta_radians();
    let radius = z.modulus() * view.transform.scale * 0.5;
    if !theta.is_finite() || radius < 1.0 {
        return;
    }

    let origin = view.transform.origin;
    let steps = ((radius * theta / 3.0) as usize).max(8);
    for i in 0..steps {
        // Alternate drawn and skipped runs to keep the arc dashed.
        if (i / 3) % 2 == 1 {
            continue;
        }
        let a0 = theta * i as f64 / steps as f64;
        let a1 = theta * (i + 1) as f64 / steps as f64;
        ctx.draw(&CanvasLine {
            x1: origin.x + radius * a0.cos(),
            y1: origin.y + radius * a0.sin(),
            x2: origin.x + radius * a1.cos(),
            y2: origin.y + radius * a1.sin(),
            color: Theme::node_color(color),
        });
    }

    ctx.print(
        origin.x + (radius + 6.0) * theta.cos(),
        origin.y + (radius + 6.0) * theta.sin(),
        z.angle_description(view.angle_unit),
    );
}

fn draw_dashed(ctx: &mut Context, from: PlanePoint, to: PlanePoint, color: Color) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length <= f64::EPSILON {
        return;
    }

    let mut offset = 0.0;
    while offset < length {
        let end = (offset + DASH_ON).min(length);
        let (t0, t1) = (offset / length, end / length);
        ctx.draw(&CanvasLine {
            x1: from.x + dx * t0,
            y1: from.y + dy * t0,
            x2: from.x + dx * t1,
            y2: from.y + dy * t1,
            color,
        });
        offset = end + DASH_OFF;
    }
}
