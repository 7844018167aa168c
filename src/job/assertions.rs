//! Replays embedded assertions against the network.

use tracing::info;

use crate::cost::{round2, shipping_cost};
use crate::error::AssertionFailure;
use crate::graph::{Digraph, Network};
use crate::models::{
    format_value, pretty_path, AssertionRecord, ExpectedCost, ResultLine, ValueLabel,
};

/// The network owner; every assertion is a shipment from this party.
pub const OPERATOR: &str = "ME";

/// Checks each assertion in order, stopping at the first failure.
///
/// Returns the number of assertions verified.
pub fn validate_assertions(
    network: &Network,
    assertions: &[AssertionRecord],
) -> Result<usize, AssertionFailure> {
    info!(
        "Validating {} assertions from {}",
        assertions.len(),
        OPERATOR
    );
    let paths = network.shortest_paths_from(OPERATOR);

    for record in assertions {
        let target = record.target();
        match (paths.path_to(target), record.expected()) {
            (None, ExpectedCost::Unreachable) => {
                info!(
                    "{} - [Cost: {}]",
                    pretty_path(&[OPERATOR, target]),
                    format_value(f64::INFINITY)
                );
                info!(
                    "Shipping cost for path from {} -> {} is correctly asserted to Infinity (doesn't exist)",
                    OPERATOR, target
                );
            }
            (None, ExpectedCost::Cost(expected)) => {
                return Err(AssertionFailure::Unreachable {
                    origin: OPERATOR.to_string(),
                    target: target.to_string(),
                    expected,
                });
            }
            (Some(path), expected) => {
                let cost = shipping_cost(path.total_weight, record.profile());
                let line = ResultLine::new(path.to_owned_vertices(), cost, ValueLabel::Cost);
                info!("{}", line);
                match expected {
                    ExpectedCost::Unreachable => {
                        return Err(AssertionFailure::UnexpectedPath {
                            origin: OPERATOR.to_string(),
                            target: target.to_string(),
                            computed: cost,
                        });
                    }
                    ExpectedCost::Cost(expected) if round2(cost) != round2(expected) => {
                        return Err(AssertionFailure::Mismatch {
                            origin: OPERATOR.to_string(),
                            target: target.to_string(),
                            computed: cost,
                            expected,
                        });
                    }
                    ExpectedCost::Cost(_) => info!(
                        "Shipping cost for path from {} -> {} is correctly asserted to {}",
                        OPERATOR,
                        target,
                        format_value(cost)
                    ),
                }
            }
        }
    }

    Ok(assertions.len())
}
