use web_sys::{Document, Element};

use crate::application::ports::TimelineContainer;
use crate::domain::{
    errors::{AppError, AppResult},
    timeline::TimelineNodeContent,
};
use crate::infrastructure::dom::{
    DESCRIPTION_CLASS, NODE_CLASS, TITLE_CLASS, YEAR_CLASS, element_by_id,
};

/// Appends timeline nodes to a container element:
///
/// ```html
/// <div class="timeline-item">
///   <div class="timeline-year">2014</div>
///   <h3 class="timeline-title">…</h3>
///   <p class="timeline-description">…</p>
/// </div>
/// ```
pub struct DomTimelineContainer {
    document: Document,
    container: Element,
}

impl DomTimelineContainer {
    pub fn new(document: Document, container: Element) -> Self {
        Self { document, container }
    }

    /// Fails with `MissingAnchor` when `container_id` is not in the document.
    pub fn from_id(document: Document, container_id: &str) -> AppResult<Self> {
        let container = element_by_id(&document, container_id)?;
        Ok(Self::new(document, container))
    }

    fn child(&self, tag: &str, class: &str, text: &str) -> AppResult<Element> {
        let element = self
            .document
            .create_element(tag)
            .map_err(|e| AppError::browser("create_element", e))?;
        element.set_class_name(class);
        element.set_text_content(Some(text));
        Ok(element)
    }
}

impl TimelineContainer for DomTimelineContainer {
    type Node = Element;

    fn append(&mut self, content: &TimelineNodeContent) -> AppResult<Element> {
        let node = self.child("div", NODE_CLASS, "")?;

        for (tag, class, text) in [
            ("div", YEAR_CLASS, content.year.as_str()),
            ("h3", TITLE_CLASS, content.title.as_str()),
            ("p", DESCRIPTION_CLASS, content.description.as_str()),
        ] {
            let part = self.child(tag, class, text)?;
            node.append_child(&part).map_err(|e| AppError::browser("append_child", e))?;
        }

        self.container
            .append_child(&node)
            .map_err(|e| AppError::browser("append_child", e))?;
        Ok(node)
    }
}
