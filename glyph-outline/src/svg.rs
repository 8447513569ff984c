//! Serialization of outlines as SVG path data.
//!
//! Path data uses absolute `M`, `L`, `Q`, `C` and `Z` commands in a compact
//! encoding:
//!
//! * a value that is a whole number is printed without a decimal point;
//!   any other value is printed with a fixed number of decimal places;
//! * values of a single command are separated by a space, except that no
//!   space is written before a negative value since the sign already
//!   separates it from its predecessor;
//! * commands follow each other without separators.
//!
//! Fractional values exactly halfway between two printable values round
//! away from zero (`0.125` prints as `0.13` with two decimal places).
//!
//! For example, a triangle with a curved side serializes as
//! `M0 0L10 0Q5-5.50 0 0Z`.

use core::fmt::{self, Write};

use crate::{path::PathStyle, settings::DEFAULT_DECIMAL_PLACES, Color, Pen};

/// Pen that generates compact SVG path data.
#[derive(Clone, Debug)]
pub struct PathDataPen {
    data: String,
    decimal_places: usize,
}

impl PathDataPen {
    /// Creates a new pen that prints fractional values with two digits after
    /// the decimal point.
    pub fn new() -> Self {
        Self::with_precision(DEFAULT_DECIMAL_PLACES)
    }

    /// Creates a new pen with the given precision (the number of digits
    /// that will be printed after the decimal point for fractional values).
    pub fn with_precision(decimal_places: usize) -> Self {
        Self {
            data: String::new(),
            decimal_places,
        }
    }

    /// Clears the content of the internal string.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the pen, returning the generated path data.
    pub fn into_string(self) -> String {
        self.data
    }

    fn push_command(&mut self, letter: char, values: &[f64]) {
        self.data.push(letter);
        for (i, value) in values.iter().copied().enumerate() {
            if value >= 0.0 && i > 0 {
                self.data.push(' ');
            }
            push_number(&mut self.data, value, self.decimal_places);
        }
    }
}

impl Default for PathDataPen {
    fn default() -> Self {
        Self::new()
    }
}

impl Pen for PathDataPen {
    fn move_to(&mut self, x: f64, y: f64) {
        self.push_command('M', &[x, y]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push_command('L', &[x, y]);
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        self.push_command('Q', &[cx0, cy0, x, y]);
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.push_command('C', &[cx0, cy0, cx1, cy1, x, y]);
    }

    fn close(&mut self) {
        self.data.push('Z');
    }
}

impl core::ops::Deref for PathDataPen {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.data.as_str()
    }
}

impl AsRef<str> for PathDataPen {
    fn as_ref(&self) -> &str {
        self.data.as_ref()
    }
}

impl From<PathDataPen> for String {
    fn from(value: PathDataPen) -> Self {
        value.data
    }
}

impl fmt::Display for PathDataPen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

/// Formats a single coordinate.
///
/// Whole numbers are written without a decimal point; anything else is
/// written with exactly `decimal_places` digits after the point.
pub fn format_number(value: f64, decimal_places: usize) -> String {
    let mut out = String::new();
    push_number(&mut out, value, decimal_places);
    out
}

fn push_number(out: &mut String, value: f64, decimal_places: usize) {
    if value.round() == value {
        // avoid printing negative zero as "-0"
        if value == 0.0 {
            out.push('0');
        } else {
            let _ = write!(out, "{value:.0}");
        }
    } else if is_exact_tie(value, decimal_places) {
        push_tie_rounded_away(out, value, decimal_places);
    } else {
        let _ = write!(out, "{value:.decimal_places$}");
    }
}

/// Enough fractional digits to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1075;

/// Returns true if `value` lies exactly halfway between two numbers with
/// `decimal_places` fractional digits.
fn is_exact_tie(value: f64, decimal_places: usize) -> bool {
    let value = value.abs();
    // a tie has exactly one more fractional digit, so this is exact for ties
    let candidate = format!("{:.1$}", value, decimal_places + 1);
    if !candidate.ends_with('5') || decimal_places + 1 > EXACT_FRACTION_DIGITS {
        return false;
    }
    let exact = format!("{:.1$}", value, EXACT_FRACTION_DIGITS);
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };
    fraction[decimal_places + 1..].bytes().all(|b| b == b'0')
}

/// Ties round away from zero, where the standard formatter rounds them to
/// even.
fn push_tie_rounded_away(out: &mut String, value: f64, decimal_places: usize) {
    let exact = format!("{:.1$}", value.abs(), decimal_places + 1);
    let mut digits = exact.into_bytes();
    // drop the trailing 5, and the decimal point if no digits remain after it
    digits.pop();
    if digits.last() == Some(&b'.') {
        digits.pop();
    }
    let mut ix = digits.len();
    loop {
        if ix == 0 {
            digits.insert(0, b'1');
            break;
        }
        ix -= 1;
        match digits[ix] {
            b'.' => continue,
            b'9' => digits[ix] = b'0',
            digit => {
                digits[ix] = digit + 1;
                break;
            }
        }
    }
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(digits.into_iter().map(char::from));
}

/// Builds a self-contained `<path/>` element from path data and a style.
///
/// The `fill` attribute is omitted for the default black fill and written as
/// `none` when the path has no fill. `stroke` and `stroke-width` are only
/// written when the path has a stroke.
pub fn path_element(path_data: &str, style: &PathStyle) -> String {
    let mut svg = String::from("<path d=\"");
    svg.push_str(path_data);
    svg.push('"');
    match &style.fill {
        None => svg.push_str(" fill=\"none\""),
        Some(fill) if *fill != Color::BLACK => {
            let _ = write!(svg, " fill=\"{}\"", escape_attribute(fill.as_str()));
        }
        Some(_) => (),
    }
    if let Some(stroke) = &style.stroke {
        let _ = write!(
            svg,
            " stroke=\"{}\" stroke-width=\"{}\"",
            escape_attribute(stroke.as_str()),
            style.stroke_width
        );
    }
    svg.push_str("/>");
    svg
}

fn escape_attribute(value: &str) -> std::borrow::Cow<'_, str> {
    if !value.contains(['"', '&', '<']) {
        return value.into();
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("&quot;"),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            _ => escaped.push(ch),
        }
    }
    escaped.into()
}
