//! Data-line elements and validated lines.

use crate::error::LineError;

use super::{Distance, Hard};

/// A single token of a data line: a party name with an optional distance.
///
/// An element without a distance is the head (source) of its line.
///
/// # Examples
///
/// ```
/// use hard_route::models::{Hard, InputElement};
///
/// let head = InputElement::head("ME").unwrap();
/// assert!(head.is_head());
///
/// let lisa = InputElement::target("Lisa", Hard::new(33.0).unwrap()).unwrap();
/// assert!(!lisa.is_head());
/// assert_eq!(lisa.hard().value(), 33.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InputElement {
    name: String,
    distance: Distance,
}

impl InputElement {
    /// Creates a head element.
    pub fn head(name: impl Into<String>) -> Result<Self, LineError> {
        Ok(Self {
            name: validate_name(name.into())?,
            distance: Distance::Absent,
        })
    }

    /// Creates a target element reached at the given distance.
    pub fn target(name: impl Into<String>, hard: Hard) -> Result<Self, LineError> {
        Ok(Self {
            name: validate_name(name.into())?,
            distance: Distance::Present(hard),
        })
    }

    /// Party name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The distance, [`Hard::ZERO`] for heads.
    pub fn hard(&self) -> Hard {
        self.distance.hard()
    }

    /// Returns `true` if this element carries no distance.
    pub fn is_head(&self) -> bool {
        !self.distance.is_present()
    }
}

fn validate_name(name: String) -> Result<String, LineError> {
    if name.is_empty() {
        return Err(LineError::EmptyName);
    }
    Ok(name)
}

/// A validated data line: exactly one head, in first position, followed by
/// zero or more targets.
#[derive(Debug, Clone, PartialEq)]
pub struct InputLine {
    elements: Vec<InputElement>,
}

impl InputLine {
    /// Validates and wraps an ordered element list.
    pub fn new(elements: Vec<InputElement>) -> Result<Self, LineError> {
        if elements.is_empty() {
            return Err(LineError::Empty);
        }
        let heads = elements.iter().filter(|e| e.is_head()).count();
        match heads {
            0 => return Err(LineError::NoHead),
            1 => {}
            n => return Err(LineError::MultipleHeads(n)),
        }
        if !elements[0].is_head() {
            return Err(LineError::HeadNotFirst);
        }
        Ok(Self { elements })
    }

    /// The head element.
    pub fn head(&self) -> &InputElement {
        &self.elements[0]
    }

    /// The target elements in line order, duplicates retained.
    pub fn targets(&self) -> &[InputElement] {
        &self.elements[1..]
    }

    /// Number of elements including the head.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always `false`; a valid line has at least its head.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(name: &str, d: f64) -> InputElement {
        InputElement::target(name, Hard::new(d).expect("valid")).expect("valid")
    }

    #[test]
    fn test_element_rejects_empty_name() {
        assert_eq!(InputElement::head(""), Err(LineError::EmptyName));
        assert_eq!(
            InputElement::target("", Hard::ZERO),
            Err(LineError::EmptyName)
        );
    }

    #[test]
    fn test_line_valid() {
        let line = InputLine::new(vec![
            InputElement::head("ME").expect("valid"),
            target("Lisa", 33.0),
            target("Peter", 123.0),
        ])
        .expect("valid");
        assert_eq!(line.head().name(), "ME");
        assert_eq!(line.targets().len(), 2);
        assert_eq!(line.targets()[1].name(), "Peter");
        assert_eq!(line.len(), 3);
    }

    #[test]
    fn test_line_keeps_duplicate_targets() {
        let line = InputLine::new(vec![
            InputElement::head("ME").expect("valid"),
            target("Lisa", 3.0),
            target("Lisa", 3.0),
        ])
        .expect("valid");
        assert_eq!(line.targets().len(), 2);
    }

    #[test]
    fn test_line_empty() {
        assert_eq!(InputLine::new(vec![]), Err(LineError::Empty));
    }

    #[test]
    fn test_line_without_head() {
        let result = InputLine::new(vec![target("Lisa", 1.0), target("John", 2.0)]);
        assert_eq!(result, Err(LineError::NoHead));
    }

    #[test]
    fn test_line_with_two_heads() {
        let result = InputLine::new(vec![
            InputElement::head("ME").expect("valid"),
            InputElement::head("Lisa").expect("valid"),
        ]);
        assert_eq!(result, Err(LineError::MultipleHeads(2)));
    }

    #[test]
    fn test_line_head_not_first() {
        let result = InputLine::new(vec![
            target("Lisa", 1.0),
            InputElement::head("ME").expect("valid"),
        ]);
        assert_eq!(result, Err(LineError::HeadNotFirst));
    }
}
