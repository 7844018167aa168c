//! Input file parsing.
//!
//! A network file mixes two kinds of records:
//!
//! ```text
//! ME,Lisa:33,Peter:123,John:55
//! Lisa,John:3
//! @,Lisa,10x9x5x1200,6.89
//! @,Diana,6x10x8x1233,~
//! ```
//!
//! Data lines name a head party followed by `TARGET:DISTANCE` pairs.
//! Assertion lines start with `@` and state the expected shipping cost to a
//! target for a given package. Both kinds are parsed line by line, and a
//! malformed line is logged and skipped without aborting the file.

mod line;
mod reader;

pub use line::{
    is_assertion_line, is_data_line, parse_assertion_line, parse_data_line, parse_element,
    parse_expected_cost, split_tokens, ASSERTION_MARKER, UNREACHABLE_MARKER,
};
pub use reader::{read_assertions, read_data_lines, read_input, ParsedInput};
