use serde::Serialize;

use crate::id::Id;
use crate::layout::Element;
use crate::layout::ElementKind;

#[derive(Debug, Serialize)]
pub struct Section {
    id: Id,
    pub title: Option<String>,
    pub elements: Vec<ElementKind>,
}

impl Section {
    pub fn new() -> Section {
        Self {
            id: Id::next(),
            title: None,
            elements: Vec::new(),
        }
    }

    pub fn titled(title: impl Into<String>) -> Section {
        Self {
            title: Some(title.into()),
            ..Self::new()
        }
    }

    pub fn add(mut self, element: impl Into<ElementKind>) -> Section {
        self.elements.push(element.into());
        self
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Section {
    fn id(&self) -> &Id {
        &self.id
    }
}
