//! Shipping cost projection.
//!
//! Pure functions that turn an accumulated path distance and a package into a
//! monetary cost, plus the parser for `WxLxHxGrams` package descriptions.

mod formulas;
mod profile;

pub use formulas::{
    normalized_weight, round2, round_up_to_half, shipping_cost, volumetric_weight,
    VOLUMETRIC_DIVISOR,
};
pub use profile::parse_profile;
