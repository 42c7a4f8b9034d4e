use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use crate::error::UiError;

/// Find the single element matching a CSS selector
pub fn query_element(document: &Document, selector: &str) -> Result<Element, UiError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| UiError::MissingElement {
            selector: selector.to_string(),
        })
}

/// Find a form element by selector
pub fn query_form(document: &Document, selector: &str) -> Result<HtmlFormElement, UiError> {
    let element = query_element(document, selector)?;
    element
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| UiError::WrongElementType {
            selector: selector.to_string(),
            expected: "HtmlFormElement",
        })
}

/// Find an input element by selector
pub fn query_input(document: &Document, selector: &str) -> Result<HtmlInputElement, UiError> {
    let element = query_element(document, selector)?;
    element
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| UiError::WrongElementType {
            selector: selector.to_string(),
            expected: "HtmlInputElement",
        })
}

/// Find a button element nested inside another element
pub fn query_button_in(parent: &Element, selector: &str) -> Result<HtmlButtonElement, UiError> {
    let element = parent
        .query_selector(selector)?
        .ok_or_else(|| UiError::MissingElement {
            selector: selector.to_string(),
        })?;
    element
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| UiError::WrongElementType {
            selector: selector.to_string(),
            expected: "HtmlButtonElement",
        })
}

/// Scroll element to bottom
pub fn scroll_to_bottom(element: &Element) {
    element.set_scroll_top(element.scroll_height());
}
