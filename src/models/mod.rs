//! Domain model types for relationship networks and shipments.
//!
//! Provides the value types that flow through the pipeline: package
//! dimensions and weights, the `Hard` distance unit, the parsed elements of a
//! data line, embedded assertion records, and computed result lines.

mod assertion;
mod dimensions;
mod distance;
mod element;
mod result;

pub use assertion::{AssertionRecord, ExpectedCost};
pub use dimensions::{Dimensions, PackageProfile};
pub use distance::{Distance, Hard};
pub use element::{InputElement, InputLine};
pub use result::{format_value, pretty_path, ResultLine, ValueLabel};
