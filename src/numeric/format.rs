use std::fmt;

use crate::numeric::complex::ComplexNumber;

/// Decimal places used for the cartesian parts.
pub const PART_DECIMALS: i32 = 2;
/// Decimal places used for derived modulus/angle values.
pub const DERIVED_DECIMALS: i32 = 3;

/// Round half away from zero at the given number of decimal places.
pub fn rounded(value: f64, places: i32) -> f64 {
    let power = 10f64.powi(places);
    (value * power).round() / power
}

/// Render a float without trailing noise: whole values keep one decimal,
/// everything else prints its shortest form.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Display mode for arguments. Threaded through every formatting call
/// rather than held as process state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    PiRadians,
    Radians,
}

impl AngleUnit {
    pub fn label(&self) -> &'static str {
        match self {
            AngleUnit::Degrees => "\u{00b0}",
            AngleUnit::PiRadians => "\u{03c0} rad",
            AngleUnit::Radians => "rad",
        }
    }

    pub fn next(&self) -> AngleUnit {
        match self {
            AngleUnit::Degrees => AngleUnit::PiRadians,
            AngleUnit::PiRadians => AngleUnit::Radians,
            AngleUnit::Radians => AngleUnit::Degrees,
        }
    }
}

impl fmt::Display for ComplexNumber {
    /// Cartesian form with parts rounded to two decimals. The imaginary
    /// sign is rendered as `+`/`-` with the magnitude unsigned; a fully
    /// absent number renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ComplexNumber::Zero => Ok(()),
            ComplexNumber::Real(re) => {
                write!(f, "{}", format_number(rounded(re, PART_DECIMALS)))
            }
            ComplexNumber::Imaginary(im) => {
                write!(f, "{}i", format_number(rounded(im, PART_DECIMALS)))
            }
            ComplexNumber::Full(re, im) => {
                let sign = if im < 0.0 { '-' } else { '+' };
                write!(
                    f,
                    "{} {} {}i",
                    format_number(rounded(re, PART_DECIMALS)),
                    sign,
                    format_number(rounded(im, PART_DECIMALS).abs()),
                )
            }
        }
    }
}

impl ComplexNumber {
    /// `|z| = ...` with three decimals.
    pub fn modulus_description(&self) -> String {
        format!("|z| = {}", format_number(rounded(self.modulus(), DERIVED_DECIMALS)))
    }

    /// `θ = ...` in the requested unit, three decimals.
    pub fn angle_description(&self, unit: AngleUnit) -> String {
        match unit {
            AngleUnit::Degrees => format!(
                "\u{03b8} = {}\u{00b0}",
                format_number(rounded(self.theta_degrees(), DERIVED_DECIMALS))
            ),
            AngleUnit::PiRadians => format!(
                "\u{03b8} = {}\u{03c0} rad",
                format_number(rounded(self.theta_pi_radians(), DERIVED_DECIMALS))
            ),
            AngleUnit::Radians => format!(
                "\u{03b8} = {} rad",
                format_number(rounded(self.theta_radians(), DERIVED_DECIMALS))
            ),
        }
    }

    /// Cartesian plus polar form on one line.
    pub fn full_description(&self, unit: AngleUnit) -> String {
        format!(
            "{}, {}, {}",
            self,
            self.modulus_description(),
            self.angle_description(unit)
        )
    }

    /// Utterance text for the speech narrator: punctuation spelled out,
    /// with modulus and angle appended on their own lines.
    pub fn spoken_description(&self, unit: AngleUnit, is_sum: bool) -> String {
        let mut text = String::new();
        if is_sum {
            text.push_str("sum of complex numbers: ");
        }
        text.push_str(&spell_out(&self.to_string()));

        text.push_str("\nmodulus: ");
        text.push_str(&spell_out(&format_number(rounded(
            self.modulus(),
            DERIVED_DECIMALS,
        ))));

        text.push_str("\nangle: ");
        let angle = match unit {
            AngleUnit::Degrees => format!(
                "{} degrees",
                format_number(rounded(self.theta_degrees(), DERIVED_DECIMALS))
            ),
            AngleUnit::PiRadians => format!(
                "{} pi radians",
                format_number(rounded(self.theta_pi_radians(), DERIVED_DECIMALS))
            ),
            AngleUnit::Radians => format!(
                "{} radians",
                format_number(rounded(self.theta_radians(), DERIVED_DECIMALS))
            ),
        };
        text.push_str(&spell_out(&angle));
        text
    }
}

fn spell_out(text: &str) -> String {
    text.replace('.', " point ")
        .replace('-', " minus ")
        .replace('+', " plus ")
}
