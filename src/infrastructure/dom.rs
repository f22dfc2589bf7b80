use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement};

use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;

pub const NODE_CLASS: &str = "timeline-item";
pub const YEAR_CLASS: &str = "timeline-year";
pub const TITLE_CLASS: &str = "timeline-title";
pub const DESCRIPTION_CLASS: &str = "timeline-description";
/// Added once a node has been revealed; never removed.
pub const VISIBLE_CLASS: &str = "visible";
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

const STYLE_TAG_SELECTOR: &str = "style[data-dashboard-reveal]";

/// Hidden-until-revealed styling for timeline nodes.
pub const REVEAL_STYLES: &str = r#"
.timeline-item {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}

.timeline-item.visible {
  opacity: 1;
  transform: translateY(0);
}

.timeline-year {
  font-weight: 700;
  color: #26a17b;
  letter-spacing: 0.04em;
}

.timeline-title {
  margin: 6px 0 4px 0;
}

.timeline-description {
  margin: 0;
  color: #94a3b8;
}

@media (prefers-reduced-motion: reduce) {
  .timeline-item {
    transition: none;
  }
}
"#;

pub fn window() -> AppResult<web_sys::Window> {
    web_sys::window().ok_or_else(|| AppError::Browser("Window not available".to_string()))
}

pub fn document() -> AppResult<Document> {
    window()?
        .document()
        .ok_or_else(|| AppError::Browser("Document not available".to_string()))
}

/// Look up an anchor the page is expected to provide.
pub fn element_by_id(document: &Document, id: &str) -> AppResult<Element> {
    document.get_element_by_id(id).ok_or_else(|| AppError::MissingAnchor(id.to_string()))
}

pub fn canvas_by_id(document: &Document, id: &str) -> AppResult<HtmlCanvasElement> {
    element_by_id(document, id)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|element| AppError::WrongElement(format!("#{} is <{}>, expected <canvas>", id, element.tag_name().to_lowercase())))
}

/// Install `REVEAL_STYLES` into `<head>` once. Returns whether a tag was added.
pub fn ensure_reveal_styles(document: &Document) -> AppResult<bool> {
    let existing = document
        .query_selector(STYLE_TAG_SELECTOR)
        .map_err(|e| AppError::browser("query_selector", e))?;
    if existing.is_some() {
        return Ok(false);
    }

    let head = document
        .head()
        .ok_or_else(|| AppError::Browser("Document has no <head>".to_string()))?;
    let style = document
        .create_element("style")
        .map_err(|e| AppError::browser("create_element(style)", e))?;
    style
        .set_attribute("data-dashboard-reveal", "v1")
        .map_err(|e| AppError::browser("set_attribute", e))?;
    style.set_text_content(Some(REVEAL_STYLES));
    head.append_child(&style).map_err(|e| AppError::browser("append_child(style)", e))?;

    log_debug!(LogComponent::Infrastructure("Dom"), "reveal styles installed");
    Ok(true)
}
