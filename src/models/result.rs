//! Computed path results and their textual form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the numeric value of a [`ResultLine`] measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueLabel {
    /// Raw accumulated path distance.
    Weight,
    /// Projected shipping cost.
    Cost,
}

impl fmt::Display for ValueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueLabel::Weight => f.write_str("Weight"),
            ValueLabel::Cost => f.write_str("Cost"),
        }
    }
}

/// One discovered path with its labelled value.
///
/// # Examples
///
/// ```
/// use hard_route::models::{ResultLine, ValueLabel};
///
/// let line = ResultLine::new(vec!["ME".into(), "Lisa".into()], 33.0, ValueLabel::Weight);
/// assert_eq!(line.to_string(), "[ME -> Lisa] - [Weight: 33.0]");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultLine {
    path: Vec<String>,
    value: f64,
    label: ValueLabel,
}

impl ResultLine {
    /// Creates a new result line.
    pub fn new(path: Vec<String>, value: f64, label: ValueLabel) -> Self {
        Self { path, value, label }
    }

    /// Vertices from source to target.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// What the value measures.
    pub fn label(&self) -> ValueLabel {
        self.label
    }
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - [{}: {}]",
            pretty_path(&self.path),
            self.label,
            format_value(self.value)
        )
    }
}

/// Joins vertex names as `[a -> b -> c]`.
pub fn pretty_path<S: AsRef<str>>(vertices: &[S]) -> String {
    let joined = vertices
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" -> ");
    format!("[{joined}]")
}

/// Magnitudes in `[1e-3, 1e7)` print as plain decimals; others in
/// scientific notation.
const PLAIN_RANGE: std::ops::Range<f64> = 1e-3..1e7;

/// Formats a value with at least one fractional digit (`33.0`, `6.89`).
///
/// Magnitudes outside `[0.001, 10^7)` switch to scientific notation with an
/// upper-case exponent (`1.0E7`, `1.0E-4`). Infinite values print as
/// `Infinity`.
pub fn format_value(value: f64) -> String {
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value != 0.0 && !PLAIN_RANGE.contains(&value.abs()) {
        return scientific(value);
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn scientific(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => text,
    }
}
