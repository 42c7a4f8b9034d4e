use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod chat_ui;
mod dom;
mod error;
mod hooks;
mod utils;

pub use chat_ui::ChatUi;
pub use error::UiError;
pub use hooks::{SubmitNotifier, TypingObserver};

/// Initialize the WASM module
/// This sets up panic hooks and logging
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("RagChat UI initialized");
}

/// Wire the chat page enhancements to the current document
#[wasm_bindgen]
pub fn init_chat_page() -> Result<(), JsValue> {
    log::info!("Initializing chat page");
    ChatUi::new()?.start()?;
    Ok(())
}

/// Get the window object
pub(crate) fn window() -> Result<Window, error::UiError> {
    web_sys::window().ok_or(error::UiError::NoWindow)
}

/// Get the document object
pub(crate) fn document() -> Result<Document, error::UiError> {
    window()?.document().ok_or(error::UiError::NoDocument)
}
