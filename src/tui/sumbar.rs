use ratatui::text::{Line, Span};

use crate::numeric::{AngleUnit, ComplexNumber};
use crate::scene::Rgb;
use crate::tui::theme::Theme;

/// Build the sum bar: each point's real and imaginary contribution in its
/// marker color, followed by the sum in cartesian and polar form. Blank
/// below two points.
pub fn sum_line(
    entries: &[(ComplexNumber, Rgb)],
    sum: &ComplexNumber,
    unit: AngleUnit,
) -> Line<'static> {
    if entries.len() < 2 {
        return Line::from(" ");
    }

    let mut spans: Vec<Span<'static>> = vec![Span::styled(" Sum: ", Theme::label())];

    spans.push(Span::styled("Re: ", Theme::text()));
    push_parts(&mut spans, entries, |z| z.re_or_zero());

    spans.push(Span::styled("   Im: ", Theme::text()));
    push_parts(&mut spans, entries, |z| z.im_or_zero());

    spans.push(Span::styled(
        format!(
            "   = {}, {}, {}",
            sum,
            sum.modulus_description(),
            sum.angle_description(unit)
        ),
        Theme::sum(),
    ));

    Line::from(spans)
}

fn push_parts<F>(spans: &mut Vec<Span<'static>>, entries: &[(ComplexNumber, Rgb)], part: F)
where
    F: Fn(&ComplexNumber) -> f64,
{
    for (i, (z, color)) in entries.iter().enumerate() {
        let value = part(z);
        if i == 0 {
            spans.push(Span::styled(part_text(value), Theme::node(*color)));
        } else {
            let sign = if value < 0.0 { '-' } else { '+' };
            spans.push(Span::styled(format!(" {} ", sign), Theme::text()));
            spans.push(Span::styled(part_text(value.abs()), Theme::node(*color)));
        }
    }
}

fn part_text(value: f64) -> String {
    ComplexNumber::Real(value).to_string()
}
