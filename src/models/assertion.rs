//! Embedded assertion records.

use serde::{Deserialize, Serialize};

use super::PackageProfile;

/// The cost an assertion expects for a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ExpectedCost {
    /// A finite cost in currency units.
    Cost(f64),
    /// No path exists (written `~` in the input).
    Unreachable,
}

/// One `@,TARGET,WxLxHxGrams,COST` line.
///
/// # Examples
///
/// ```
/// use hard_route::models::{AssertionRecord, ExpectedCost};
///
/// let record = AssertionRecord::new("Lisa", "10x9x5x1200".parse().unwrap(), ExpectedCost::Cost(6.89));
/// assert_eq!(record.target(), "Lisa");
/// assert_eq!(record.expected(), ExpectedCost::Cost(6.89));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssertionRecord {
    target: String,
    profile: PackageProfile,
    expected: ExpectedCost,
}

impl AssertionRecord {
    /// Creates a new assertion record.
    pub fn new(target: impl Into<String>, profile: PackageProfile, expected: ExpectedCost) -> Self {
        Self {
            target: target.into(),
            profile,
            expected,
        }
    }

    /// The party the shipment goes to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The package being shipped.
    pub fn profile(&self) -> &PackageProfile {
        &self.profile
    }

    /// The expected outcome.
    pub fn expected(&self) -> ExpectedCost {
        self.expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_record() {
        let record = AssertionRecord::new(
            "Diana",
            "6x10x8x1233".parse().expect("valid"),
            ExpectedCost::Unreachable,
        );
        assert_eq!(record.expected(), ExpectedCost::Unreachable);
        assert_eq!(record.profile().weight_kg(), 1.233);
    }
}
