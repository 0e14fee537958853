use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::error::InvalidInput;

/// A labelled value that drives one chart element: a point of a line
/// chart or a wedge of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(alias = "name")]
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> DataPoint {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A CSS color, e.g. `#2563eb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(color: impl Into<String>) -> Color {
        Self(color.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(color: &str) -> Self {
        Color::new(color)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn check_finite(points: &[DataPoint]) -> Result<(), InvalidInput> {
    match points.iter().position(|p| !p.value.is_finite()) {
        Some(index) => Err(InvalidInput::NonFiniteValue { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_accepts_name_alias() -> Result<(), serde_json::Error> {
        let points: Vec<DataPoint> =
            serde_json::from_str(r#"[{"label":"Jan","value":1},{"name":"Feb","value":2.5}]"#)?;

        assert_eq!(
            vec![DataPoint::new("Jan", 1.0), DataPoint::new("Feb", 2.5)],
            points
        );

        Ok(())
    }

    #[test]
    fn check_finite_reports_first_offending_index() {
        let points = [
            DataPoint::new("a", 1.0),
            DataPoint::new("b", f64::INFINITY),
            DataPoint::new("c", f64::NAN),
        ];

        assert_eq!(
            Err(InvalidInput::NonFiniteValue { index: 1 }),
            check_finite(&points)
        );
    }
}
