use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use crate::dom;
use crate::error::UiError;
use crate::hooks::{SubmitNotifier, TypingMonitor, TypingObserver};
use crate::utils;

/// Selectors the page template is expected to provide
pub const FORM_SELECTOR: &str = ".chat-form";
pub const INPUT_SELECTOR: &str = ".chat-input";
pub const MESSAGES_SELECTOR: &str = "#chat-messages";
pub const SEND_BUTTON_SELECTOR: &str = ".send-button";

/// Query-string key the server sets when redirecting after a delivered message
const SENT_QUERY_KEY: &str = "sent";

/// Markup swapped into the send button while a submission is in flight
const SPINNER_HTML: &str = r#"<i class="fas fa-spinner fa-spin"></i>"#;

/// Delay before the post-submit scroll to the newest message
const SCROLL_DELAY_MS: u32 = 100;

/// Input idle time before typing observers fire
const TYPING_IDLE_MS: u32 = 1_000;

/// Controller for the chat page enhancements.
///
/// Binds once per page load against the four collaborators the page
/// template supplies (form, input, message container, send button) and
/// wires the event listeners for focus, loading state, Enter-to-submit
/// and scroll-to-bottom. Message delivery itself stays with the native
/// form submission; nothing here intercepts it.
pub struct ChatUi {
    form: HtmlFormElement,
    input: HtmlInputElement,
    messages: Element,
    send_button: HtmlButtonElement,
    state: Rc<RefCell<UiState>>,
}

struct UiState {
    typing: TypingMonitor,
    saved_button_html: Option<String>,
    notifiers: Vec<Rc<dyn SubmitNotifier>>,
}

impl ChatUi {
    /// Bind against the current page's document
    pub fn new() -> Result<Self, UiError> {
        let document = crate::document()?;
        Self::bind(&document)
    }

    /// Bind against an explicit document, failing fast on a page that is
    /// missing any of the expected collaborators
    pub fn bind(document: &Document) -> Result<Self, UiError> {
        let form = dom::query_form(document, FORM_SELECTOR)?;
        let input = dom::query_input(document, INPUT_SELECTOR)?;
        let messages = dom::query_element(document, MESSAGES_SELECTOR)?;
        let send_button = dom::query_button_in(&form, SEND_BUTTON_SELECTOR)?;

        let state = UiState {
            typing: TypingMonitor::new(TYPING_IDLE_MS),
            saved_button_html: None,
            notifiers: Vec::new(),
        };

        Ok(Self {
            form,
            input,
            messages,
            send_button,
            state: Rc::new(RefCell::new(state)),
        })
    }

    /// Register an observer for typing-pause events
    pub fn add_typing_observer(&self, observer: Rc<dyn TypingObserver>) {
        self.state.borrow_mut().typing.add_observer(observer);
    }

    /// Register a notifier for the post-submit confirmation flag
    pub fn add_submit_notifier(&self, notifier: Rc<dyn SubmitNotifier>) {
        self.state.borrow_mut().notifiers.push(notifier);
    }

    /// Run initialization: focus the input, surface the newest message,
    /// attach the event listeners and check the confirmation flag
    pub fn start(&self) -> Result<(), UiError> {
        self.input.focus()?;

        // An empty container is left untouched
        if self.messages.child_element_count() > 0 {
            dom::scroll_to_bottom(&self.messages);
        }

        self.setup_submit_handler()?;
        self.setup_enter_to_submit()?;
        self.setup_typing_monitor()?;

        self.check_sent_flag()?;

        Ok(())
    }

    /// Swap the send button into its loading state and schedule the
    /// deferred scroll. The native submission proceeds untouched.
    fn setup_submit_handler(&self) -> Result<(), UiError> {
        let button = self.send_button.clone();
        let messages = self.messages.clone();
        let state = self.state.clone();

        let closure = Closure::wrap(Box::new(move |_event: Event| {
            {
                let mut s = state.borrow_mut();
                // First submission wins: a re-entrant submit must not
                // capture the spinner as the original markup
                if s.saved_button_html.is_none() {
                    s.saved_button_html = Some(button.inner_html());
                }
            }
            button.set_inner_html(SPINNER_HTML);
            button.set_disabled(true);

            // Each submission schedules its own deferred scroll; they are
            // never coalesced
            let messages = messages.clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(SCROLL_DELAY_MS).await;
                dom::scroll_to_bottom(&messages);
            });
        }) as Box<dyn FnMut(_)>);

        self.form
            .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(())
    }

    /// Enter submits, Shift+Enter keeps the default behavior
    fn setup_enter_to_submit(&self) -> Result<(), UiError> {
        let form = self.form.clone();

        let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == "Enter" && !event.shift_key() {
                event.prevent_default();
                match Event::new("submit") {
                    Ok(submit) => {
                        let _ = form.dispatch_event(&submit);
                    }
                    Err(e) => log::error!("Failed to create submit event: {:?}", e),
                }
            }
        }) as Box<dyn FnMut(_)>);

        self.input
            .add_event_listener_with_callback("keypress", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(())
    }

    /// Every input change restarts the shared typing debounce
    fn setup_typing_monitor(&self) -> Result<(), UiError> {
        let state = self.state.clone();

        let closure = Closure::wrap(Box::new(move |_event: Event| {
            state.borrow_mut().typing.note_activity();
        }) as Box<dyn FnMut(_)>);

        self.input
            .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(())
    }

    /// Emit one diagnostic trace and run the registered notifiers when
    /// the server redirected back with the `sent` flag
    fn check_sent_flag(&self) -> Result<(), UiError> {
        let search = utils::current_query()?;
        if utils::query_has_key(&search, SENT_QUERY_KEY) {
            log::info!("Message sent successfully");
            for notifier in self.state.borrow().notifiers.iter() {
                notifier.message_sent();
            }
        }
        Ok(())
    }

    /// Undo the loading state: restore the saved button markup and
    /// re-enable the button.
    ///
    /// No internal path calls this today; a submission ends in a full
    /// page reload. A future non-navigating submission flow is expected
    /// to call it on resolution, success or failure alike.
    pub fn restore_send_button(&self) {
        if let Some(html) = self.state.borrow_mut().saved_button_html.take() {
            self.send_button.set_inner_html(&html);
        }
        self.send_button.set_disabled(false);
    }

    /// Whether a typing debounce is currently pending
    pub fn typing_armed(&self) -> bool {
        self.state.borrow().typing.is_armed()
    }
}
