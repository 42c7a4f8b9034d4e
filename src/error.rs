use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while binding or driving the chat page UI.
///
/// Binding fails fast: a page that does not provide the expected
/// collaborators gets a named error instead of an unchecked dereference
/// somewhere down the line.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("no window object")]
    NoWindow,

    #[error("no document object")]
    NoDocument,

    #[error("element not found: {selector}")]
    MissingElement { selector: String },

    #[error("element {selector} is not a {expected}")]
    WrongElementType {
        selector: String,
        expected: &'static str,
    },

    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Dom(format!("{:?}", value))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_selector() {
        let err = UiError::MissingElement {
            selector: ".chat-form".to_string(),
        };
        assert_eq!(err.to_string(), "element not found: .chat-form");
    }

    #[test]
    fn wrong_element_type_names_both_sides() {
        let err = UiError::WrongElementType {
            selector: ".send-button".to_string(),
            expected: "HtmlButtonElement",
        };
        assert_eq!(
            err.to_string(),
            "element .send-button is not a HtmlButtonElement"
        );
    }
}
