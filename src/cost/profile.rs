//! `WxLxHxGrams` package description parsing.

use crate::error::FormatError;
use crate::models::{Dimensions, PackageProfile};

const FIELDS: [&str; 4] = ["width", "length", "height", "weight"];

/// Parses `WxLxHxGrams` into a [`PackageProfile`].
///
/// The weight field is given in grams and converted to kilograms.
///
/// # Examples
///
/// ```
/// use hard_route::cost::parse_profile;
///
/// let p = parse_profile("2x3x4x1200").unwrap();
/// assert_eq!(p.dimensions().width(), 2.0);
/// assert_eq!(p.weight_kg(), 1.2);
///
/// assert!(parse_profile("2x3x4").is_err());
/// assert!(parse_profile("").is_err());
/// ```
pub fn parse_profile(input: &str) -> Result<PackageProfile, FormatError> {
    let parts: Vec<&str> = input.trim().split('x').collect();
    if parts.len() != FIELDS.len() {
        return Err(FormatError::FieldCount {
            found: parts.len(),
            input: input.to_string(),
        });
    }

    let mut values = [0.0; 4];
    for ((slot, raw), field) in values.iter_mut().zip(&parts).zip(FIELDS) {
        *slot = parse_field(field, raw)?;
    }
    let [width, length, height, grams] = values;
    Ok(PackageProfile::from_grams(
        Dimensions::new(width, length, height),
        grams,
    ))
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, FormatError> {
    let invalid = || FormatError::InvalidNumber {
        field,
        value: raw.to_string(),
    };
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok(value)
}
