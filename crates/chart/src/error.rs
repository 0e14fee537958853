//! Defines the error types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// The result type that uses [ChartError] as the error type.
pub type Result<T> = std::result::Result<T, ChartError>;

/// The error type for computing chart geometry.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// The data points cannot be mapped onto the chart.
    InvalidInput(InvalidInput),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let chart_error = "chart error:";

        match self {
            ChartError::InvalidInput(error) => write!(f, "{chart_error} invalid input: {error}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChartError::InvalidInput(error) => Some(error),
        }
    }
}

impl From<InvalidInput> for ChartError {
    fn from(error: InvalidInput) -> Self {
        ChartError::InvalidInput(error)
    }
}

/// The reasons why a sequence of data points was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// The sequence holds no data points.
    Empty,

    /// The chart needs more data points than were supplied.
    TooFewPoints { required: usize, actual: usize },

    /// The value at the given index is NaN or infinite.
    NonFiniteValue { index: usize },

    /// The value at the given index is below zero, which has no share of a whole.
    NegativeValue { index: usize },

    /// The values add up to zero, so no share can be computed.
    NonPositiveTotal,
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            InvalidInput::Empty => write!(f, "no data points"),
            InvalidInput::TooFewPoints { required, actual } => write!(
                f,
                "at least {required} data points are required, but {actual} were given"
            ),
            InvalidInput::NonFiniteValue { index } => {
                write!(f, "the value at index {index} is not a finite number")
            }
            InvalidInput::NegativeValue { index } => {
                write!(f, "the value at index {index} is negative")
            }
            InvalidInput::NonPositiveTotal => write!(f, "the values must add up to more than zero"),
        }
    }
}

impl Error for InvalidInput {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_layer() {
        let error = ChartError::from(InvalidInput::TooFewPoints {
            required: 2,
            actual: 1,
        });

        assert_eq!(
            "chart error: invalid input: at least 2 data points are required, but 1 were given",
            error.to_string()
        );
    }
}
