//! Single-line grammar for data and assertion lines.

use crate::cost::parse_profile;
use crate::error::LineError;
use crate::models::{AssertionRecord, ExpectedCost, Hard, InputElement, InputLine};

/// Prefix that marks an assertion line.
pub const ASSERTION_MARKER: &str = "@";

/// Expected-cost literal meaning "no path exists".
pub const UNREACHABLE_MARKER: &str = "~";

/// Returns `true` for non-blank lines that are not assertions.
pub fn is_data_line(line: &str) -> bool {
    !line.trim().is_empty() && !line.starts_with(ASSERTION_MARKER)
}

/// Returns `true` for non-blank lines starting with the assertion marker.
pub fn is_assertion_line(line: &str) -> bool {
    !line.trim().is_empty() && line.starts_with(ASSERTION_MARKER)
}

/// Splits a line on commas, trimming whitespace around each token.
///
/// Trailing empty tokens are dropped, so `"ME,"` yields a single token.
///
/// # Examples
///
/// ```
/// use hard_route::parse::split_tokens;
///
/// assert_eq!(split_tokens("ME , Lisa:33,John:55"), vec!["ME", "Lisa:33", "John:55"]);
/// assert_eq!(split_tokens("ME,,"), vec!["ME"]);
/// ```
pub fn split_tokens(line: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = line.split(',').map(str::trim).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Parses `NAME` (a head) or `NAME:DISTANCE` (a target).
///
/// # Examples
///
/// ```
/// use hard_route::parse::parse_element;
///
/// assert!(parse_element("Adam").unwrap().is_head());
/// assert_eq!(parse_element("Amir:1042").unwrap().hard().value(), 1042.0);
/// assert!(parse_element("Amir:1:2").is_err());
/// ```
pub fn parse_element(token: &str) -> Result<InputElement, LineError> {
    let parts: Vec<&str> = token.split(':').collect();
    match parts.as_slice() {
        [name] => InputElement::head(*name),
        [name, distance] => InputElement::target(*name, parse_distance(distance)?),
        _ => Err(LineError::Grammar(token.to_string())),
    }
}

fn parse_distance(raw: &str) -> Result<Hard, LineError> {
    let raw = raw.trim();
    let value: i64 = raw
        .parse()
        .map_err(|_| LineError::InvalidDistance(raw.to_string()))?;
    Hard::new(value as f64)
}

/// Parses the tokens of a data line into a validated [`InputLine`].
pub fn parse_data_line(tokens: &[&str]) -> Result<InputLine, LineError> {
    let elements = tokens
        .iter()
        .map(|t| parse_element(t))
        .collect::<Result<Vec<_>, _>>()?;
    InputLine::new(elements)
}

/// Parses an expected cost: a decimal number or `~`.
///
/// # Examples
///
/// ```
/// use hard_route::models::ExpectedCost;
/// use hard_route::parse::parse_expected_cost;
///
/// assert_eq!(parse_expected_cost("6.89").unwrap(), ExpectedCost::Cost(6.89));
/// assert_eq!(parse_expected_cost("~").unwrap(), ExpectedCost::Unreachable);
/// ```
pub fn parse_expected_cost(raw: &str) -> Result<ExpectedCost, LineError> {
    let raw = raw.trim();
    if raw == UNREACHABLE_MARKER {
        return Ok(ExpectedCost::Unreachable);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(ExpectedCost::Cost(v)),
        _ => Err(LineError::InvalidCost(raw.to_string())),
    }
}

/// Parses the three data fields of an assertion line (marker removed):
/// target, `WxLxHxGrams`, and expected cost.
pub fn parse_assertion_line(fields: &[&str]) -> Result<AssertionRecord, LineError> {
    let [target, profile, cost] = fields else {
        return Err(LineError::AssertionArity(fields.len()));
    };
    if target.is_empty() {
        return Err(LineError::EmptyName);
    }
    let profile = parse_profile(profile)?;
    let expected = parse_expected_cost(cost)?;
    Ok(AssertionRecord::new(*target, profile, expected))
}
