use serde::Serialize;

use crate::layout::Chart;
use crate::layout::ElementKind;

#[derive(Debug, Serialize)]
pub struct View {
    pub title: String,
    pub elements: Vec<ElementKind>,
}

impl View {
    pub fn new(title: impl Into<String>) -> View {
        View {
            title: title.into(),
            elements: Vec::new(),
        }
    }

    pub fn add(mut self, element: impl Into<ElementKind>) -> View {
        self.elements.push(element.into());
        self
    }

    /// Returns every chart on the page in document order.
    pub fn charts(&self) -> Vec<&Chart> {
        let mut charts = Vec::new();
        crate::layout::charts(&self.elements, &mut charts);
        charts
    }
}
