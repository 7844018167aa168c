//! Package dimensions and weight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// The physical size of a package in centimetres.
///
/// # Examples
///
/// ```
/// use hard_route::models::Dimensions;
///
/// let d = Dimensions::new(26.0, 10.0, 11.0);
/// assert_eq!(d.width(), 26.0);
/// assert_eq!(d.volume(), 2860.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    width: f64,
    length: f64,
    height: f64,
}

impl Dimensions {
    /// Creates a new set of dimensions.
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    /// Width in cm.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Length in cm.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Height in cm.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Volume in cubic cm.
    pub fn volume(&self) -> f64 {
        self.width * self.length * self.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}cm", self.width, self.length, self.height)
    }
}

/// A package: its dimensions plus its actual weight in kilograms.
///
/// Weights enter the system in grams and are converted on construction.
///
/// # Examples
///
/// ```
/// use hard_route::models::{Dimensions, PackageProfile};
///
/// let p = PackageProfile::from_grams(Dimensions::new(10.0, 9.0, 5.0), 1200.0);
/// assert_eq!(p.weight_kg(), 1.2);
///
/// let parsed: PackageProfile = "2x3x4x1200".parse().unwrap();
/// assert_eq!(parsed.dimensions().height(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageProfile {
    dimensions: Dimensions,
    weight_kg: f64,
}

impl PackageProfile {
    /// Creates a profile from a weight expressed in grams.
    pub fn from_grams(dimensions: Dimensions, grams: f64) -> Self {
        Self {
            dimensions,
            weight_kg: grams / 1000.0,
        }
    }

    /// The package dimensions.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Actual weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

impl FromStr for PackageProfile {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::cost::parse_profile(s)
    }
}

impl fmt::Display for PackageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}kg", self.dimensions, self.weight_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_accessors() {
        let d = Dimensions::new(2.0, 3.0, 4.0);
        assert_eq!(d.width(), 2.0);
        assert_eq!(d.length(), 3.0);
        assert_eq!(d.height(), 4.0);
        assert_eq!(d.volume(), 24.0);
    }

    #[test]
    fn test_profile_converts_grams() {
        let p = PackageProfile::from_grams(Dimensions::new(1.0, 1.0, 1.0), 500.0);
        assert!((p.weight_kg() - 0.5).abs() < 1e-10);
        let zero = PackageProfile::from_grams(Dimensions::new(1.0, 1.0, 1.0), 0.0);
        assert_eq!(zero.weight_kg(), 0.0);
    }

    #[test]
    fn test_profile_display() {
        let p = PackageProfile::from_grams(Dimensions::new(10.0, 9.0, 5.0), 1200.0);
        assert_eq!(p.to_string(), "10x9x5cm @ 1.2kg");
    }

    #[test]
    fn test_profile_from_str_rejects_short_input() {
        assert!("2x3x4".parse::<PackageProfile>().is_err());
    }
}
