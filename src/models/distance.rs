//! The `Hard` distance unit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LineError;

/// A non-negative distance between two parties of the network.
///
/// # Examples
///
/// ```
/// use hard_route::models::Hard;
///
/// assert_eq!(Hard::new(33.0).unwrap().value(), 33.0);
/// assert!(Hard::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Hard(f64);

impl Hard {
    /// Zero distance.
    pub const ZERO: Hard = Hard(0.0);

    /// Creates a new distance, rejecting negative and NaN values.
    pub fn new(value: f64) -> Result<Self, LineError> {
        if value.is_nan() || value < 0.0 {
            return Err(LineError::NegativeDistance(value));
        }
        Ok(Self(value))
    }

    /// The raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Hard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} HARD", self.0)
    }
}

/// The optional distance attached to a line element.
///
/// Heads carry no distance; every target carries one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Distance {
    /// A distance was given.
    Present(Hard),
    /// No distance was given (the element is a head).
    #[default]
    Absent,
}

impl Distance {
    /// Returns the distance, or [`Hard::ZERO`] when absent.
    pub fn hard(&self) -> Hard {
        match self {
            Distance::Present(h) => *h,
            Distance::Absent => Hard::ZERO,
        }
    }

    /// Returns `true` if a distance was given.
    pub fn is_present(&self) -> bool {
        matches!(self, Distance::Present(_))
    }
}
