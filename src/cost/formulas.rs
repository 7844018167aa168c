//! Volumetric weight, normalized weight, and shipping cost.

use crate::models::{Dimensions, PackageProfile};

/// Cubic centimetres per chargeable kilogram.
pub const VOLUMETRIC_DIVISOR: f64 = 5000.0;

/// Rounds up to the nearest multiple of 0.5.
///
/// # Examples
///
/// ```
/// use hard_route::cost::round_up_to_half;
///
/// assert_eq!(round_up_to_half(12.4), 12.5);
/// assert_eq!(round_up_to_half(15.5), 15.5);
/// assert_eq!(round_up_to_half(33.7), 34.0);
/// ```
pub fn round_up_to_half(value: f64) -> f64 {
    (value * 2.0).ceil() / 2.0
}

/// Rounds half-up to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Volumetric weight in kg: `W·L·H / 5000`, rounded up to the nearest 0.5 kg.
///
/// A package of 26×10×11 cm has a volume of 2860 cm³, i.e. 0.572 kg, which
/// rounds up to 1 kg.
///
/// # Examples
///
/// ```
/// use hard_route::cost::volumetric_weight;
/// use hard_route::models::Dimensions;
///
/// assert_eq!(volumetric_weight(&Dimensions::new(26.0, 10.0, 11.0)), 1.0);
/// ```
pub fn volumetric_weight(dimensions: &Dimensions) -> f64 {
    round_up_to_half(dimensions.volume() / VOLUMETRIC_DIVISOR)
}

/// The chargeable weight: the greater of actual and volumetric weight.
pub fn normalized_weight(profile: &PackageProfile) -> f64 {
    profile.weight_kg().max(volumetric_weight(profile.dimensions()))
}

/// Shipping cost of a package over a path of the given accumulated distance.
///
/// `round2(sqrt(distance) · normalized_weight)`.
///
/// # Examples
///
/// ```
/// use hard_route::cost::shipping_cost;
/// use hard_route::models::{Dimensions, PackageProfile};
///
/// let p = PackageProfile::from_grams(Dimensions::new(10.0, 9.0, 5.0), 1200.0);
/// assert_eq!(shipping_cost(33.0, &p), 6.89);
/// ```
pub fn shipping_cost(distance: f64, profile: &PackageProfile) -> f64 {
    round2(distance.sqrt() * normalized_weight(profile))
}
